use std::{collections::HashSet, future::Future};

use conduit_models::user::UserId;

/// Read and write access to the social graph.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FollowRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Returns the ids of all users the given user follows.
    fn followed_ids(
        &self,
        txn: &mut Txn,
        follower_id: UserId,
    ) -> impl Future<Output = anyhow::Result<HashSet<UserId>>> + Send;

    /// Returns the subset of the given users the follower follows.
    fn following_state_for(
        &self,
        txn: &mut Txn,
        follower_id: UserId,
        user_ids: &HashSet<UserId>,
    ) -> impl Future<Output = anyhow::Result<HashSet<UserId>>> + Send;

    /// Returns `false` if the follower already followed the user.
    fn follow(
        &self,
        txn: &mut Txn,
        follower_id: UserId,
        user_id: UserId,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Returns `false` if the follower did not follow the user.
    fn unfollow(
        &self,
        txn: &mut Txn,
        follower_id: UserId,
        user_id: UserId,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockFollowRepository<Txn> {
    pub fn with_followed_ids(mut self, follower_id: UserId, result: HashSet<UserId>) -> Self {
        self.expect_followed_ids()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(follower_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_following_state_for(
        mut self,
        follower_id: UserId,
        user_ids: HashSet<UserId>,
        result: HashSet<UserId>,
    ) -> Self {
        self.expect_following_state_for()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(follower_id),
                mockall::predicate::eq(user_ids),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_follow(mut self, follower_id: UserId, user_id: UserId, result: bool) -> Self {
        self.expect_follow()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(follower_id),
                mockall::predicate::eq(user_id),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_unfollow(mut self, follower_id: UserId, user_id: UserId, result: bool) -> Self {
        self.expect_unfollow()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(follower_id),
                mockall::predicate::eq(user_id),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
