use std::future::Future;

use chrono::{DateTime, Utc};
use conduit_models::{
    article::ArticleView,
    pagination::{CursorPage, CursorPageRequest},
    user::UserId,
};

/// Returns one annotated page of the articles written by the users the
/// viewer follows.
///
/// If the viewer does not follow anybody, the result is an empty page and no
/// articles are read.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ArticleFeedQueryService<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    fn invoke(
        &self,
        txn: &mut Txn,
        viewer: UserId,
        pagination: CursorPageRequest<DateTime<Utc>>,
    ) -> impl Future<Output = anyhow::Result<CursorPage<ArticleView>>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockArticleFeedQueryService<Txn> {
    pub fn with_invoke(
        mut self,
        viewer: UserId,
        pagination: CursorPageRequest<DateTime<Utc>>,
        result: CursorPage<ArticleView>,
    ) -> Self {
        self.expect_invoke()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(viewer),
                mockall::predicate::eq(pagination),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
