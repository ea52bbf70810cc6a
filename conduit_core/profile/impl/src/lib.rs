use std::collections::HashSet;

use conduit_core_profile_contracts::{ProfileFeatureService, ProfileFollowError, ProfileGetError};
use conduit_di::Build;
use conduit_models::user::{ProfileView, User, UserId, UserName};
use conduit_persistence_contracts::{
    follow::FollowRepository, user::UserRepository, Database, Transaction,
};
use conduit_utils::trace_instrument;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, Build)]
pub struct ProfileFeatureServiceImpl<Db, UserRepo, FollowRepo> {
    db: Db,
    user_repo: UserRepo,
    follow_repo: FollowRepo,
}

impl<Db, UserRepo, FollowRepo> ProfileFeatureService
    for ProfileFeatureServiceImpl<Db, UserRepo, FollowRepo>
where
    Db: Database,
    UserRepo: UserRepository<Db::Transaction>,
    FollowRepo: FollowRepository<Db::Transaction>,
{
    #[trace_instrument(skip(self))]
    async fn get_profile(
        &self,
        viewer: Option<UserId>,
        name: UserName,
    ) -> Result<ProfileView, ProfileGetError> {
        let mut txn = self.db.begin_transaction().await?;

        let user = self
            .user_repo
            .get_by_name(&mut txn, &name)
            .await?
            .ok_or(ProfileGetError::NotFound)?;

        let following = match viewer {
            Some(viewer) if viewer != user.id => {
                self.follow_repo
                    .following_state_for(&mut txn, viewer, &HashSet::from([user.id]))
                    .await?
                    .contains(&user.id)
            }
            _ => false,
        };

        Ok(ProfileView::new(user, following))
    }

    #[trace_instrument(skip(self))]
    async fn follow(
        &self,
        viewer: Option<UserId>,
        name: UserName,
    ) -> Result<ProfileView, ProfileFollowError> {
        let (mut txn, viewer, user) = self.resolve_follow_target(viewer, &name).await?;

        self.follow_repo.follow(&mut txn, viewer, user.id).await?;
        txn.commit().await?;

        Ok(ProfileView::new(user, true))
    }

    #[trace_instrument(skip(self))]
    async fn unfollow(
        &self,
        viewer: Option<UserId>,
        name: UserName,
    ) -> Result<ProfileView, ProfileFollowError> {
        let (mut txn, viewer, user) = self.resolve_follow_target(viewer, &name).await?;

        self.follow_repo.unfollow(&mut txn, viewer, user.id).await?;
        txn.commit().await?;

        Ok(ProfileView::new(user, false))
    }
}

impl<Db, UserRepo, FollowRepo> ProfileFeatureServiceImpl<Db, UserRepo, FollowRepo>
where
    Db: Database,
    UserRepo: UserRepository<Db::Transaction>,
{
    /// Opens a transaction, checks that the viewer exists and looks up the user
    /// the viewer wants to (un)follow.
    async fn resolve_follow_target(
        &self,
        viewer: Option<UserId>,
        name: &UserName,
    ) -> Result<(Db::Transaction, UserId, User), ProfileFollowError> {
        let viewer = viewer.ok_or(ProfileFollowError::InvalidArgument)?;

        let mut txn = self.db.begin_transaction().await?;

        self.user_repo
            .get(&mut txn, viewer)
            .await?
            .ok_or(ProfileFollowError::InvalidArgument)?;

        let user = self
            .user_repo
            .get_by_name(&mut txn, name)
            .await?
            .ok_or(ProfileFollowError::NotFound)?;

        if user.id == viewer {
            return Err(ProfileFollowError::FollowSelf);
        }

        Ok((txn, viewer, user))
    }
}
