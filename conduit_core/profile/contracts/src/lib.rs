use std::future::Future;

use conduit_models::user::{ProfileView, UserId, UserName};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ProfileFeatureService: Send + Sync + 'static {
    /// Returns the profile of the user with the given name as seen by the
    /// viewer.
    fn get_profile(
        &self,
        viewer: Option<UserId>,
        name: UserName,
    ) -> impl Future<Output = Result<ProfileView, ProfileGetError>> + Send;

    /// Makes the viewer follow the user with the given name. Following a
    /// user twice has no effect.
    ///
    /// Requires a viewer.
    fn follow(
        &self,
        viewer: Option<UserId>,
        name: UserName,
    ) -> impl Future<Output = Result<ProfileView, ProfileFollowError>> + Send;

    /// Makes the viewer stop following the user with the given name.
    ///
    /// Requires a viewer.
    fn unfollow(
        &self,
        viewer: Option<UserId>,
        name: UserName,
    ) -> impl Future<Output = Result<ProfileView, ProfileFollowError>> + Send;
}

#[derive(Debug, Error)]
pub enum ProfileGetError {
    #[error("The user does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ProfileFollowError {
    #[error("A known viewer is required.")]
    InvalidArgument,
    #[error("The user does not exist.")]
    NotFound,
    #[error("Users cannot follow themselves.")]
    FollowSelf,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockProfileFeatureService {
    pub fn with_get_profile(
        mut self,
        viewer: Option<UserId>,
        name: UserName,
        result: Result<ProfileView, ProfileGetError>,
    ) -> Self {
        self.expect_get_profile()
            .once()
            .with(mockall::predicate::eq(viewer), mockall::predicate::eq(name))
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_follow(
        mut self,
        viewer: Option<UserId>,
        name: UserName,
        result: Result<ProfileView, ProfileFollowError>,
    ) -> Self {
        self.expect_follow()
            .once()
            .with(mockall::predicate::eq(viewer), mockall::predicate::eq(name))
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_unfollow(
        mut self,
        viewer: Option<UserId>,
        name: UserName,
        result: Result<ProfileView, ProfileFollowError>,
    ) -> Self {
        self.expect_unfollow()
            .once()
            .with(mockall::predicate::eq(viewer), mockall::predicate::eq(name))
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
