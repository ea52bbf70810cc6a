use chrono::{DateTime, Utc};
use conduit_di::Build;
use conduit_models::{
    article::ArticleId,
    comment::{Comment, CommentComposite},
    pagination::CursorPageRequest,
};
use conduit_persistence_contracts::comment::CommentRepository;
use conduit_utils::trace_instrument;

use crate::{select_page, MemoryTransaction};

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct MemoryCommentRepository;

impl CommentRepository<MemoryTransaction> for MemoryCommentRepository {
    #[trace_instrument(skip(self, txn))]
    async fn list_composites(
        &self,
        txn: &mut MemoryTransaction,
        article_id: ArticleId,
        request: &CursorPageRequest<DateTime<Utc>>,
    ) -> anyhow::Result<Vec<CommentComposite>> {
        let store = txn.store();
        select_page(
            store
                .comments
                .values()
                .filter(|c| c.article_id == article_id),
            |c| (c.created_at, c.id),
            request,
        )
        .into_iter()
        .map(|comment| {
            Ok(CommentComposite {
                comment: comment.clone(),
                author: store.user(comment.author_id)?.clone(),
            })
        })
        .collect()
    }

    #[trace_instrument(skip(self, txn))]
    async fn create(&self, txn: &mut MemoryTransaction, comment: &Comment) -> anyhow::Result<()> {
        let store = txn.store_mut();
        store.user(comment.author_id)?;
        anyhow::ensure!(
            store.articles.contains_key(&comment.article_id),
            "The article {:?} does not exist",
            comment.article_id
        );
        store.comments.insert(comment.id, comment.clone());
        Ok(())
    }
}
