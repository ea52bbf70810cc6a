use std::future::Future;

use conduit_models::user::{User, UserId, UserName};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait UserRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Returns the user with the given id.
    fn get(
        &self,
        txn: &mut Txn,
        user_id: UserId,
    ) -> impl Future<Output = anyhow::Result<Option<User>>> + Send;

    /// Returns the user with the given name.
    fn get_by_name(
        &self,
        txn: &mut Txn,
        name: &UserName,
    ) -> impl Future<Output = anyhow::Result<Option<User>>> + Send;

    /// Creates a new user.
    ///
    /// Returns an error if a user with the same name already exists (case
    /// insensitive).
    fn create(
        &self,
        txn: &mut Txn,
        user: &User,
    ) -> impl Future<Output = Result<(), UserRepoError>> + Send;
}

#[derive(Debug, Error)]
pub enum UserRepoError {
    #[error("A user with the same name already exists.")]
    NameConflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockUserRepository<Txn> {
    pub fn with_get(mut self, user_id: UserId, result: Option<User>) -> Self {
        self.expect_get()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(user_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get_by_name(mut self, name: UserName, result: Option<User>) -> Self {
        self.expect_get_by_name()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(name))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
