use std::collections::HashSet;

use conduit_core_article_contracts::view::ArticleViewService;
use conduit_di::Build;
use conduit_models::{
    article::{ArticleComposite, ArticleId, ArticleView},
    user::{ProfileView, UserId},
};
use conduit_persistence_contracts::{favorite::FavoriteRepository, follow::FollowRepository};
use conduit_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
pub struct ArticleViewServiceImpl<FavoriteRepo, FollowRepo> {
    favorite_repo: FavoriteRepo,
    follow_repo: FollowRepo,
}

impl<Txn, FavoriteRepo, FollowRepo> ArticleViewService<Txn>
    for ArticleViewServiceImpl<FavoriteRepo, FollowRepo>
where
    Txn: Send + Sync + 'static,
    FavoriteRepo: FavoriteRepository<Txn>,
    FollowRepo: FollowRepository<Txn>,
{
    #[trace_instrument(skip(self, txn))]
    async fn annotate(
        &self,
        txn: &mut Txn,
        viewer: Option<UserId>,
        composites: Vec<ArticleComposite>,
    ) -> anyhow::Result<Vec<ArticleView>> {
        let Some(viewer) = viewer.filter(|_| !composites.is_empty()) else {
            return Ok(composites
                .into_iter()
                .map(|composite| view(composite, 0, false, false))
                .collect());
        };

        let article_ids = composites
            .iter()
            .map(|c| c.article.id)
            .collect::<HashSet<ArticleId>>();
        let mut author_ids = composites
            .iter()
            .map(|c| c.author.id)
            .collect::<HashSet<UserId>>();
        author_ids.remove(&viewer);

        let counts = self.favorite_repo.counts_for(txn, &article_ids).await?;
        let favorited = self
            .favorite_repo
            .favorited_by(txn, viewer, &article_ids)
            .await?;
        let following = if author_ids.is_empty() {
            HashSet::new()
        } else {
            self.follow_repo
                .following_state_for(txn, viewer, &author_ids)
                .await?
        };

        Ok(composites
            .into_iter()
            .map(|composite| {
                let article_id = composite.article.id;
                let author_id = composite.author.id;
                view(
                    composite,
                    counts.get(&article_id).copied().unwrap_or(0),
                    favorited.contains(&article_id),
                    author_id != viewer && following.contains(&author_id),
                )
            })
            .collect())
    }
}

fn view(
    ArticleComposite { article, author }: ArticleComposite,
    favorites_count: u64,
    favorited: bool,
    following: bool,
) -> ArticleView {
    ArticleView {
        article,
        author: ProfileView::new(author, following),
        favorites_count,
        favorited,
    }
}
