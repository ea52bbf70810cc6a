use std::future::Future;

use conduit_models::{article::Article, user::UserId};
use thiserror::Error;

use crate::ArticleCreateRequest;

/// Persists a new article written by the given author.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ArticleCreateCommandService<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    fn invoke(
        &self,
        txn: &mut Txn,
        author_id: UserId,
        request: ArticleCreateRequest,
    ) -> impl Future<Output = Result<Article, ArticleCreateCommandError>> + Send;
}

#[derive(Debug, Error)]
pub enum ArticleCreateCommandError {
    #[error("An article with the same slug already exists.")]
    SlugConflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockArticleCreateCommandService<Txn> {
    pub fn with_invoke(
        mut self,
        author_id: UserId,
        request: ArticleCreateRequest,
        result: Result<Article, ArticleCreateCommandError>,
    ) -> Self {
        self.expect_invoke()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(author_id),
                mockall::predicate::eq(request),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(result)));
        self
    }
}
