use std::collections::HashSet;

use conduit_demo::user::{BAR, BAZ, FOO};
use conduit_persistence_contracts::{follow::FollowRepository, Database};
use conduit_persistence_memory::follow::MemoryFollowRepository;
use pretty_assertions::assert_eq;

use crate::common::setup;

const REPO: MemoryFollowRepository = MemoryFollowRepository;

#[tokio::test]
async fn followed_ids() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    for (follower, expected) in [
        (FOO.id, HashSet::from([BAR.id])),
        (BAR.id, HashSet::new()),
        (BAZ.id, HashSet::from([FOO.id, BAR.id])),
    ] {
        let result = REPO.followed_ids(&mut txn, follower).await.unwrap();
        assert_eq!(result, expected);
    }
}

#[tokio::test]
async fn following_state_for() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO
        .following_state_for(&mut txn, FOO.id, &[BAR.id, BAZ.id].into())
        .await
        .unwrap();
    assert_eq!(result, HashSet::from([BAR.id]));

    let result = REPO
        .following_state_for(&mut txn, FOO.id, &HashSet::new())
        .await
        .unwrap();
    assert_eq!(result, HashSet::new());
}

#[tokio::test]
async fn follow_and_unfollow() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    assert!(!REPO.follow(&mut txn, FOO.id, BAR.id).await.unwrap());
    assert!(REPO.follow(&mut txn, BAR.id, FOO.id).await.unwrap());
    assert_eq!(
        REPO.followed_ids(&mut txn, BAR.id).await.unwrap(),
        HashSet::from([FOO.id])
    );

    assert!(REPO.unfollow(&mut txn, FOO.id, BAR.id).await.unwrap());
    assert!(!REPO.unfollow(&mut txn, FOO.id, BAR.id).await.unwrap());
    assert_eq!(
        REPO.followed_ids(&mut txn, FOO.id).await.unwrap(),
        HashSet::new()
    );
}
