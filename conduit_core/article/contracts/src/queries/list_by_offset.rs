use std::future::Future;

use conduit_models::{
    article::{ArticleFilter, ArticleView},
    pagination::{Page, PageRequest},
    user::UserId,
};

/// Returns one annotated page of the articles matching the query, newest
/// first, together with the number of all matching articles.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ArticleListByOffsetQueryService<Txn: Send + Sync + 'static>:
    Send + Sync + 'static
{
    fn invoke(
        &self,
        txn: &mut Txn,
        viewer: Option<UserId>,
        query: ArticleListByOffsetQuery,
    ) -> impl Future<Output = anyhow::Result<Page<ArticleView>>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleListByOffsetQuery {
    pub filter: ArticleFilter,
    pub pagination: PageRequest,
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockArticleListByOffsetQueryService<Txn> {
    pub fn with_invoke(
        mut self,
        viewer: Option<UserId>,
        query: ArticleListByOffsetQuery,
        result: Page<ArticleView>,
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
