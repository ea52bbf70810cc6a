use std::collections::HashSet;

use chrono::{DateTime, Utc};
use conduit_core_comment_contracts::list::CommentListQueryService;
use conduit_di::Build;
use conduit_models::{
    article::ArticleId,
    comment::{CommentComposite, CommentView},
    pagination::{CursorPage, CursorPageRequest},
    user::{ProfileView, UserId},
};
use conduit_persistence_contracts::{comment::CommentRepository, follow::FollowRepository};
use conduit_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
pub struct CommentListQueryServiceImpl<CommentRepo, FollowRepo> {
    comment_repo: CommentRepo,
    follow_repo: FollowRepo,
}

impl<Txn, CommentRepo, FollowRepo> CommentListQueryService<Txn>
    for CommentListQueryServiceImpl<CommentRepo, FollowRepo>
where
    Txn: Send + Sync + 'static,
    CommentRepo: CommentRepository<Txn>,
    FollowRepo: FollowRepository<Txn>,
{
    #[trace_instrument(skip(self, txn))]
    async fn invoke(
        &self,
        txn: &mut Txn,
        viewer: Option<UserId>,
        article_id: ArticleId,
        pagination: CursorPageRequest<DateTime<Utc>>,
    ) -> anyhow::Result<CursorPage<CommentView>> {
        let raw = self
            .comment_repo
            .list_composites(txn, article_id, &pagination)
            .await?;
        let (composites, info) = CursorPage::from_slice(raw, &pagination).into_parts();

        let mut author_ids = composites
            .iter()
            .map(|c| c.author.id)
            .collect::<HashSet<_>>();
        if let Some(viewer) = viewer {
            author_ids.remove(&viewer);
        }

        let following = match viewer {
            Some(viewer) if !author_ids.is_empty() => {
                self.follow_repo
                    .following_state_for(txn, viewer, &author_ids)
                    .await?
            }
            _ => HashSet::new(),
        };

        let views = composites
            .into_iter()
            .map(|CommentComposite { comment, author }| {
                let following = following.contains(&author.id);
                CommentView {
                    comment,
                    author: ProfileView::new(author, following),
                }
            })
            .collect();

        Ok(CursorPage::from_parts(views, info))
    }
}
