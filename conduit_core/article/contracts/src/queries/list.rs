use std::future::Future;

use chrono::{DateTime, Utc};
use conduit_models::{
    article::{ArticleFilter, ArticleView},
    pagination::{CursorPage, CursorPageRequest},
    user::UserId,
};

/// Returns one annotated page of the articles matching the query.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ArticleListQueryService<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    fn invoke(
        &self,
        txn: &mut Txn,
        viewer: Option<UserId>,
        query: ArticleListQuery,
    ) -> impl Future<Output = anyhow::Result<CursorPage<ArticleView>>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleListQuery {
    pub filter: ArticleFilter,
    pub pagination: CursorPageRequest<DateTime<Utc>>,
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockArticleListQueryService<Txn> {
    pub fn with_invoke(
        mut self,
        viewer: Option<UserId>,
        query: ArticleListQuery,
        result: CursorPage<ArticleView>,
    ) -> Self {
        self.expect_invoke()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(viewer),
                mockall::predicate::eq(query),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
