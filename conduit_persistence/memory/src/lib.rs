//! In-process implementation of the persistence contracts.
//!
//! Transactions are serialized: [`MemoryDatabase::begin_transaction`] waits
//! until no other transaction is open, then works on a private copy of the
//! store which replaces the shared state on commit. A task must therefore
//! never hold two transactions of the same database at once.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

use chrono::{DateTime, Utc};
use conduit_models::{
    article::{Article, ArticleId},
    comment::{Comment, CommentId},
    pagination::CursorPageRequest,
    user::{User, UserId},
};
use conduit_persistence_contracts::{Database, Transaction};
use conduit_utils::trace_instrument;
use tokio::sync::{Mutex, OwnedMutexGuard};

pub mod article;
pub mod comment;
pub mod favorite;
pub mod follow;
pub mod user;

#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    store: Arc<Mutex<MemoryStore>>,
}

#[derive(Debug)]
pub struct MemoryTransaction {
    guard: OwnedMutexGuard<MemoryStore>,
    store: MemoryStore,
}

#[derive(Debug, Clone, Default)]
struct MemoryStore {
    users: BTreeMap<UserId, User>,
    articles: BTreeMap<ArticleId, Article>,
    comments: BTreeMap<CommentId, Comment>,
    /// (user, favorited article)
    favorites: BTreeSet<(UserId, ArticleId)>,
    /// (follower, followed user)
    follows: BTreeSet<(UserId, UserId)>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Database for MemoryDatabase {
    type Transaction = MemoryTransaction;

    #[trace_instrument(skip(self))]
    async fn begin_transaction(&self) -> anyhow::Result<Self::Transaction> {
        let guard = Arc::clone(&self.store).lock_owned().await;
        let store = guard.clone();
        Ok(MemoryTransaction { guard, store })
    }
}

impl Transaction for MemoryTransaction {
    #[trace_instrument(skip(self))]
    async fn commit(mut self) -> anyhow::Result<()> {
        *self.guard = self.store;
        Ok(())
    }

    #[trace_instrument(skip(self))]
    async fn rollback(self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl MemoryTransaction {
    fn store(&self) -> &MemoryStore {
        &self.store
    }

    fn store_mut(&mut self) -> &mut MemoryStore {
        &mut self.store
    }
}

impl MemoryStore {
    fn user(&self, id: UserId) -> anyhow::Result<&User> {
        self.users
            .get(&id)
            .ok_or_else(|| anyhow::anyhow!("The user {id:?} does not exist"))
    }
}

/// Selects up to `request.query_limit()` items strictly beyond the request's
/// cursor, ordered ascending by key for forward requests and descending
/// otherwise.
///
/// Only the timestamp is compared with the cursor, so items that share the
/// cursor's millisecond are skipped even though `I` breaks ties when sorting.
fn select_page<'a, T, I: Ord>(
    items: impl Iterator<Item = &'a T>,
    key: impl Fn(&T) -> (DateTime<Utc>, I),
    request: &CursorPageRequest<DateTime<Utc>>,
) -> Vec<&'a T> {
    let forward = request.is_forward();
    let mut items = items
        .filter(|item| match request.cursor() {
            None => true,
            Some(cursor) if forward => key(*item).0 > *cursor,
            Some(cursor) => key(*item).0 < *cursor,
        })
        .collect::<Vec<_>>();

    items.sort_by_key(|item| key(*item));
    if !forward {
        items.reverse();
    }
    items.truncate(to_usize(request.query_limit()));
    items
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
