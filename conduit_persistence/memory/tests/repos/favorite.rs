use std::collections::{HashMap, HashSet};

use conduit_demo::{
    article::{ALL_ARTICLES, BAR_SOURDOUGH, BAR_TOKIO, BAZ_SERDE, FOO_OWNERSHIP},
    user::{BAR, FOO},
};
use conduit_models::article::ArticleId;
use conduit_persistence_contracts::{favorite::FavoriteRepository, Database};
use conduit_persistence_memory::favorite::MemoryFavoriteRepository;
use pretty_assertions::assert_eq;

use crate::common::setup;

const REPO: MemoryFavoriteRepository = MemoryFavoriteRepository;

fn all_ids() -> HashSet<ArticleId> {
    ALL_ARTICLES.iter().map(|a| a.id).collect()
}

#[tokio::test]
async fn counts_for() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO
        .counts_for(
            &mut txn,
            &[BAR_TOKIO.id, FOO_OWNERSHIP.id, BAR_SOURDOUGH.id].into(),
        )
        .await
        .unwrap();

    assert_eq!(
        result,
        HashMap::from([(BAR_TOKIO.id, 2), (FOO_OWNERSHIP.id, 1)])
    );
}

#[tokio::test]
async fn counts_for_nothing() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.counts_for(&mut txn, &HashSet::new()).await.unwrap();

    assert_eq!(result, HashMap::new());
}

#[tokio::test]
async fn favorited_by() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.favorited_by(&mut txn, FOO.id, &all_ids()).await.unwrap();
    assert_eq!(result, HashSet::from([BAR_TOKIO.id, BAZ_SERDE.id]));

    let result = REPO
        .favorited_by(&mut txn, BAR.id, &[BAR_TOKIO.id].into())
        .await
        .unwrap();
    assert_eq!(result, HashSet::new());
}

#[tokio::test]
async fn add_and_remove() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    assert!(!REPO.add(&mut txn, FOO.id, BAR_TOKIO.id).await.unwrap());
    assert!(REPO.add(&mut txn, BAR.id, BAR_TOKIO.id).await.unwrap());

    let counts = REPO
        .counts_for(&mut txn, &[BAR_TOKIO.id].into())
        .await
        .unwrap();
    assert_eq!(counts, HashMap::from([(BAR_TOKIO.id, 3)]));

    assert!(REPO.remove(&mut txn, FOO.id, BAR_TOKIO.id).await.unwrap());
    assert!(!REPO.remove(&mut txn, FOO.id, BAR_TOKIO.id).await.unwrap());

    let favorites = REPO.favorited_by(&mut txn, FOO.id, &all_ids()).await.unwrap();
    assert_eq!(favorites, HashSet::from([BAZ_SERDE.id]));
}
