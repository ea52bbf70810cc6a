use std::future::Future;

use chrono::{DateTime, Utc};
use conduit_models::{
    article::ArticleId,
    comment::CommentView,
    pagination::{CursorPage, CursorPageRequest},
    user::UserId,
};

/// Returns one annotated page of the comments on an article.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait CommentListQueryService<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    fn invoke(
        &self,
        txn: &mut Txn,
        viewer: Option<UserId>,
        article_id: ArticleId,
        pagination: CursorPageRequest<DateTime<Utc>>,
    ) -> impl Future<Output = anyhow::Result<CursorPage<CommentView>>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockCommentListQueryService<Txn> {
    pub fn with_invoke(
        mut self,
        viewer: Option<UserId>,
        article_id: ArticleId,
        pagination: CursorPageRequest<DateTime<Utc>>,
        result: CursorPage<CommentView>,
    ) -> Self {
        self.expect_invoke()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(viewer),
                mockall::predicate::eq(article_id),
                mockall::predicate::eq(pagination),
            )
            .return_once(|_, _, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
