use std::future::Future;

use chrono::{DateTime, Utc};
use conduit_models::{
    article::{Article, ArticleComposite, ArticleFilter, ArticleSlug},
    pagination::{CursorPageRequest, PageRequest},
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ArticleRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Returns up to `request.query_limit()` article composites matching the
    /// given filter, keyed by their creation time.
    ///
    /// Only articles strictly after the request's cursor (forward requests)
    /// or strictly before it (all other requests) are considered. Forward
    /// requests are ordered oldest first, all others newest first.
    fn list_composites(
        &self,
        txn: &mut Txn,
        filter: &ArticleFilter,
        request: &CursorPageRequest<DateTime<Utc>>,
    ) -> impl Future<Output = anyhow::Result<Vec<ArticleComposite>>> + Send;

    /// Returns the article composites matching the given filter within the
    /// given page, newest first.
    fn list_composites_by_offset(
        &self,
        txn: &mut Txn,
        filter: &ArticleFilter,
        pagination: PageRequest,
    ) -> impl Future<Output = anyhow::Result<Vec<ArticleComposite>>> + Send;

    /// Returns the number of articles matching the given filter.
    fn count(
        &self,
        txn: &mut Txn,
        filter: &ArticleFilter,
    ) -> impl Future<Output = anyhow::Result<u64>> + Send;

    /// Returns the article composite with the given slug.
    fn get_composite_by_slug(
        &self,
        txn: &mut Txn,
        slug: &ArticleSlug,
    ) -> impl Future<Output = anyhow::Result<Option<ArticleComposite>>> + Send;

    /// Creates a new article.
    ///
    /// Returns an error if an article with the same slug already exists.
    fn create(
        &self,
        txn: &mut Txn,
        article: &Article,
    ) -> impl Future<Output = Result<(), ArticleRepoError>> + Send;
}

#[derive(Debug, Error)]
pub enum ArticleRepoError {
    #[error("An article with the same slug already exists.")]
    SlugConflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockArticleRepository<Txn> {
    pub fn with_list_composites(
        mut self,
        filter: ArticleFilter,
        request: CursorPageRequest<DateTime<Utc>>,
        result: Vec<ArticleComposite>,
    ) -> Self {
        self.expect_list_composites()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(filter),
                mockall::predicate::eq(request),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_composites_by_offset(
        mut self,
        filter: ArticleFilter,
        pagination: PageRequest,
        result: Vec<ArticleComposite>,
    ) -> Self {
        self.expect_list_composites_by_offset()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(filter),
                mockall::predicate::eq(pagination),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_count(mut self, filter: ArticleFilter, result: u64) -> Self {
        self.expect_count()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(filter))
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get_composite_by_slug(
        mut self,
        slug: ArticleSlug,
        result: Option<ArticleComposite>,
    ) -> Self {
        self.expect_get_composite_by_slug()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(slug))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_create(mut self, article: Article, result: Result<(), ArticleRepoError>) -> Self {
        self.expect_create()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(article))
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
