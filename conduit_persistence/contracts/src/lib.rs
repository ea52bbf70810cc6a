//! Storage collaborators of the core services.
//!
//! All reads and writes go through a [`Transaction`] obtained from a
//! [`Database`]. Repositories are stateless and receive the transaction
//! by mutable reference, so every lookup a service makes while assembling
//! one response observes the same snapshot.

use std::future::Future;

pub mod article;
pub mod comment;
pub mod favorite;
pub mod follow;
pub mod user;

#[cfg_attr(feature = "mock", mockall::automock(type Transaction = MockTransaction;))]
pub trait Database: Send + Sync + 'static {
    type Transaction: Transaction;

    /// Opens a transaction. Writes become visible to other transactions
    /// once it is committed.
    fn begin_transaction(&self) -> impl Future<Output = anyhow::Result<Self::Transaction>> + Send;
}

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait Transaction: Send + Sync + 'static {
    fn commit(self) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Discards all writes. Dropping a transaction without committing it
    /// has the same effect.
    fn rollback(self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockDatabase {
    /// A database expecting exactly one transaction, which must be
    /// committed iff `expect_commit` is set.
    pub fn build(expect_commit: bool) -> Self {
        let mut txn = MockTransaction::new();
        txn.expect_commit()
            .times(usize::from(expect_commit))
            .returning(|| Box::pin(std::future::ready(Ok(()))));

        let mut db = Self::new();
        db.expect_begin_transaction()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(txn))));
        db
    }
}
