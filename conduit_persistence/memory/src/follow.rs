use std::collections::HashSet;

use conduit_di::Build;
use conduit_models::user::UserId;
use conduit_persistence_contracts::follow::FollowRepository;
use conduit_utils::trace_instrument;

use crate::MemoryTransaction;

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct MemoryFollowRepository;

impl FollowRepository<MemoryTransaction> for MemoryFollowRepository {
    #[trace_instrument(skip(self, txn))]
    async fn followed_ids(
        &self,
        txn: &mut MemoryTransaction,
        follower_id: UserId,
    ) -> anyhow::Result<HashSet<UserId>> {
        Ok(txn
            .store()
            .follows
            .iter()
            .filter(|(follower, _)| *follower == follower_id)
            .map(|&(_, followed)| followed)
            .collect())
    }

    #[trace_instrument(skip(self, txn))]
    async fn following_state_for(
        &self,
        txn: &mut MemoryTransaction,
        follower_id: UserId,
        user_ids: &HashSet<UserId>,
    ) -> anyhow::Result<HashSet<UserId>> {
        Ok(user_ids
            .iter()
            .filter(|&&user_id| txn.store().follows.contains(&(follower_id, user_id)))
            .copied()
            .collect())
    }

    #[trace_instrument(skip(self, txn))]
    async fn follow(
        &self,
        txn: &mut MemoryTransaction,
        follower_id: UserId,
        user_id: UserId,
    ) -> anyhow::Result<bool> {
        Ok(txn.store_mut().follows.insert((follower_id, user_id)))
    }

    #[trace_instrument(skip(self, txn))]
    async fn unfollow(
        &self,
        txn: &mut MemoryTransaction,
        follower_id: UserId,
        user_id: UserId,
    ) -> anyhow::Result<bool> {
        Ok(txn.store_mut().follows.remove(&(follower_id, user_id)))
    }
}
