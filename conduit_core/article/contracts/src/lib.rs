use std::future::Future;

use chrono::{DateTime, Utc};
use conduit_models::{
    article::{ArticleBody, ArticleDescription, ArticleSlug, ArticleTitle, ArticleView, TagList},
    pagination::{CursorPage, CursorPageRequest, Page},
    user::UserId,
};
use queries::{list::ArticleListQuery, list_by_offset::ArticleListByOffsetQuery};
use thiserror::Error;

pub mod commands;
pub mod queries;
pub mod view;

/// Article use cases. `viewer` is the id of the current user, or `None` for
/// anonymous access.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ArticleFeatureService: Send + Sync + 'static {
    /// Returns one page of the articles matching the query, annotated for
    /// the viewer.
    fn list_articles(
        &self,
        viewer: Option<UserId>,
        query: ArticleListQuery,
    ) -> impl Future<Output = Result<CursorPage<ArticleView>, ArticleListError>> + Send;

    /// Offset paginated variant of [`list_articles`](Self::list_articles),
    /// newest first, including the total number of matching articles.
    fn list_articles_by_offset(
        &self,
        viewer: Option<UserId>,
        query: ArticleListByOffsetQuery,
    ) -> impl Future<Output = Result<Page<ArticleView>, ArticleListError>> + Send;

    /// Returns one page of the articles written by the users the viewer
    /// follows.
    ///
    /// Requires a viewer.
    fn feed(
        &self,
        viewer: Option<UserId>,
        pagination: CursorPageRequest<DateTime<Utc>>,
    ) -> impl Future<Output = Result<CursorPage<ArticleView>, ArticleFeedError>> + Send;

    fn get_article(
        &self,
        viewer: Option<UserId>,
        slug: ArticleSlug,
    ) -> impl Future<Output = Result<ArticleView, ArticleGetError>> + Send;

    /// Publishes a new article written by the viewer. The slug is derived
    /// from the title.
    ///
    /// Requires a viewer.
    fn create_article(
        &self,
        viewer: Option<UserId>,
        request: ArticleCreateRequest,
    ) -> impl Future<Output = Result<ArticleView, ArticleCreateError>> + Send;

    /// Adds the article to the viewer's favorites. Favoriting an article
    /// twice has no effect.
    ///
    /// Requires a viewer.
    fn favorite_article(
        &self,
        viewer: Option<UserId>,
        slug: ArticleSlug,
    ) -> impl Future<Output = Result<ArticleView, ArticleFavoriteError>> + Send;

    /// Removes the article from the viewer's favorites.
    ///
    /// Requires a viewer.
    fn unfavorite_article(
        &self,
        viewer: Option<UserId>,
        slug: ArticleSlug,
    ) -> impl Future<Output = Result<ArticleView, ArticleFavoriteError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCreateRequest {
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub tags: TagList,
}

#[derive(Debug, Error)]
pub enum ArticleListError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ArticleFeedError {
    #[error("A viewer is required.")]
    InvalidArgument,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ArticleGetError {
    #[error("The article does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ArticleCreateError {
    #[error("A known viewer is required.")]
    InvalidArgument,
    #[error("An article with the same slug already exists.")]
    SlugConflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ArticleFavoriteError {
    #[error("A known viewer is required.")]
    InvalidArgument,
    #[error("The article does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockArticleFeatureService {
    pub fn with_list_articles(
        mut self,
        viewer: Option<UserId>,
        query: ArticleListQuery,
        result: Result<CursorPage<ArticleView>, ArticleListError>,
    ) -> Self {
        self.expect_list_articles()
            .once()
            .with(
                mockall::predicate::eq(viewer),
                mockall::predicate::eq(query),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_articles_by_offset(
        mut self,
        viewer: Option<UserId>,
        query: ArticleListByOffsetQuery,
        result: Result<Page<ArticleView>, ArticleListError>,
    ) -> Self {
        self.expect_list_articles_by_offset()
            .once()
            .with(
                mockall::predicate::eq(viewer),
                mockall::predicate::eq(query),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_feed(
        mut self,
        viewer: Option<UserId>,
        pagination: CursorPageRequest<DateTime<Utc>>,
        result: Result<CursorPage<ArticleView>, ArticleFeedError>,
    ) -> Self {
        self.expect_feed()
            .once()
            .with(
                mockall::predicate::eq(viewer),
                mockall::predicate::eq(pagination),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_get_article(
        mut self,
        viewer: Option<UserId>,
        slug: ArticleSlug,
        result: Result<ArticleView, ArticleGetError>,
    ) -> Self {
        self.expect_get_article()
            .once()
            .with(mockall::predicate::eq(viewer), mockall::predicate::eq(slug))
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_create_article(
        mut self,
        viewer: Option<UserId>,
        request: ArticleCreateRequest,
        result: Result<ArticleView, ArticleCreateError>,
    ) -> Self {
        self.expect_create_article()
            .once()
            .with(
                mockall::predicate::eq(viewer),
                mockall::predicate::eq(request),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_favorite_article(
        mut self,
        viewer: Option<UserId>,
        slug: ArticleSlug,
        result: Result<ArticleView, ArticleFavoriteError>,
    ) -> Self {
        self.expect_favorite_article()
            .once()
            .with(mockall::predicate::eq(viewer), mockall::predicate::eq(slug))
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_unfavorite_article(
        mut self,
        viewer: Option<UserId>,
        slug: ArticleSlug,
        result: Result<ArticleView, ArticleFavoriteError>,
    ) -> Self {
        self.expect_unfavorite_article()
            .once()
            .with(mockall::predicate::eq(viewer), mockall::predicate::eq(slug))
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
