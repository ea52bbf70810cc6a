use conduit_di::Build;
use conduit_models::user::{User, UserId, UserName};
use conduit_persistence_contracts::user::{UserRepoError, UserRepository};
use conduit_utils::trace_instrument;

use crate::MemoryTransaction;

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct MemoryUserRepository;

impl UserRepository<MemoryTransaction> for MemoryUserRepository {
    #[trace_instrument(skip(self, txn))]
    async fn get(
        &self,
        txn: &mut MemoryTransaction,
        user_id: UserId,
    ) -> anyhow::Result<Option<User>> {
        Ok(txn.store().users.get(&user_id).cloned())
    }

    #[trace_instrument(skip(self, txn))]
    async fn get_by_name(
        &self,
        txn: &mut MemoryTransaction,
        name: &UserName,
    ) -> anyhow::Result<Option<User>> {
        Ok(txn
            .store()
            .users
            .values()
            .find(|user| user.name.eq_ignore_ascii_case(name.as_str()))
            .cloned())
    }

    #[trace_instrument(skip(self, txn))]
    async fn create(&self, txn: &mut MemoryTransaction, user: &User) -> Result<(), UserRepoError> {
        let store = txn.store_mut();
        if store
            .users
            .values()
            .any(|u| u.name.eq_ignore_ascii_case(user.name.as_str()))
        {
            return Err(UserRepoError::NameConflict);
        }
        store.users.insert(user.id, user.clone());
        Ok(())
    }
}
