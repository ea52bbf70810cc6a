use std::collections::{HashMap, HashSet};

use conduit_di::Build;
use conduit_models::{article::ArticleId, user::UserId};
use conduit_persistence_contracts::favorite::FavoriteRepository;
use conduit_utils::trace_instrument;

use crate::MemoryTransaction;

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct MemoryFavoriteRepository;

impl FavoriteRepository<MemoryTransaction> for MemoryFavoriteRepository {
    #[trace_instrument(skip(self, txn))]
    async fn counts_for(
        &self,
        txn: &mut MemoryTransaction,
        article_ids: &HashSet<ArticleId>,
    ) -> anyhow::Result<HashMap<ArticleId, u64>> {
        let mut counts = HashMap::new();
        for (_, article_id) in &txn.store().favorites {
            if article_ids.contains(article_id) {
                *counts.entry(*article_id).or_default() += 1;
            }
        }
        Ok(counts)
    }

    #[trace_instrument(skip(self, txn))]
    async fn favorited_by(
        &self,
        txn: &mut MemoryTransaction,
        user_id: UserId,
        article_ids: &HashSet<ArticleId>,
    ) -> anyhow::Result<HashSet<ArticleId>> {
        Ok(article_ids
            .iter()
            .filter(|&&article_id| txn.store().favorites.contains(&(user_id, article_id)))
            .copied()
            .collect())
    }

    #[trace_instrument(skip(self, txn))]
    async fn add(
        &self,
        txn: &mut MemoryTransaction,
        user_id: UserId,
        article_id: ArticleId,
    ) -> anyhow::Result<bool> {
        Ok(txn.store_mut().favorites.insert((user_id, article_id)))
    }

    #[trace_instrument(skip(self, txn))]
    async fn remove(
        &self,
        txn: &mut MemoryTransaction,
        user_id: UserId,
        article_id: ArticleId,
    ) -> anyhow::Result<bool> {
        Ok(txn.store_mut().favorites.remove(&(user_id, article_id)))
    }
}
