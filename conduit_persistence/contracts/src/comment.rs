use std::future::Future;

use chrono::{DateTime, Utc};
use conduit_models::{
    article::ArticleId,
    comment::{Comment, CommentComposite},
    pagination::CursorPageRequest,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait CommentRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Returns up to `request.query_limit()` comment composites of the given
    /// article, keyed and ordered like
    /// [`ArticleRepository::list_composites`](crate::article::ArticleRepository::list_composites).
    fn list_composites(
        &self,
        txn: &mut Txn,
        article_id: ArticleId,
        request: &CursorPageRequest<DateTime<Utc>>,
    ) -> impl Future<Output = anyhow::Result<Vec<CommentComposite>>> + Send;

    /// Creates a new comment.
    fn create(
        &self,
        txn: &mut Txn,
        comment: &Comment,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockCommentRepository<Txn> {
    pub fn with_list_composites(
        mut self,
        article_id: ArticleId,
        request: CursorPageRequest<DateTime<Utc>>,
        result: Vec<CommentComposite>,
    ) -> Self {
        self.expect_list_composites()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(article_id),
                mockall::predicate::eq(request),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_create(mut self, comment: Comment) -> Self {
        self.expect_create()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(comment))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(()))));
        self
    }
}
