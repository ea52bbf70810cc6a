use std::future::Future;

use chrono::{DateTime, Utc};
use conduit_models::{
    article::ArticleSlug,
    comment::{CommentBody, CommentView},
    pagination::{CursorPage, CursorPageRequest},
    user::UserId,
};
use thiserror::Error;

pub mod list;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait CommentFeatureService: Send + Sync + 'static {
    /// Returns one page of the comments on an article, annotated with
    /// whether the viewer follows their authors.
    fn list_comments(
        &self,
        viewer: Option<UserId>,
        slug: ArticleSlug,
        pagination: CursorPageRequest<DateTime<Utc>>,
    ) -> impl Future<Output = Result<CursorPage<CommentView>, CommentListError>> + Send;

    /// Adds a comment written by the viewer to an article.
    ///
    /// Requires a viewer.
    fn add_comment(
        &self,
        viewer: Option<UserId>,
        slug: ArticleSlug,
        body: CommentBody,
    ) -> impl Future<Output = Result<CommentView, CommentAddError>> + Send;
}

#[derive(Debug, Error)]
pub enum CommentListError {
    #[error("The article does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum CommentAddError {
    #[error("A known viewer is required.")]
    InvalidArgument,
    #[error("The article does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockCommentFeatureService {
    pub fn with_list_comments(
        mut self,
        viewer: Option<UserId>,
        slug: ArticleSlug,
        pagination: CursorPageRequest<DateTime<Utc>>,
        result: Result<CursorPage<CommentView>, CommentListError>,
    ) -> Self {
        self.expect_list_comments()
            .once()
            .with(
                mockall::predicate::eq(viewer),
                mockall::predicate::eq(slug),
                mockall::predicate::eq(pagination),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_add_comment(
        mut self,
        viewer: Option<UserId>,
        slug: ArticleSlug,
        body: CommentBody,
        result: Result<CommentView, CommentAddError>,
    ) -> Self {
        self.expect_add_comment()
            .once()
            .with(
                mockall::predicate::eq(viewer),
                mockall::predicate::eq(slug),
                mockall::predicate::eq(body),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(result)));
        self
    }
}
