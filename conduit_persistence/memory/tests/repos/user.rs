use chrono::Utc;
use conduit_demo::{
    user::{ALL_USERS, FOO},
    UNKNOWN_USER_NAME, UUID1,
};
use conduit_models::user::User;
use conduit_persistence_contracts::{
    user::{UserRepoError, UserRepository},
    Database, Transaction,
};
use conduit_persistence_memory::user::MemoryUserRepository;
use conduit_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::common::setup;

const REPO: MemoryUserRepository = MemoryUserRepository;

#[tokio::test]
async fn get() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    for &user in &*ALL_USERS {
        let result = REPO.get(&mut txn, user.id).await.unwrap();
        assert_eq!(result.as_ref(), Some(user));
    }

    let result = REPO.get(&mut txn, UUID1.into()).await.unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn get_by_name() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO
        .get_by_name(&mut txn, &"Foo".try_into().unwrap())
        .await
        .unwrap();
    assert_eq!(result.as_ref(), Some(&*FOO));

    let result = REPO
        .get_by_name(&mut txn, &UNKNOWN_USER_NAME)
        .await
        .unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn create() {
    let db = setup().await;
    let user = User {
        id: UUID1.into(),
        name: "qux".try_into().unwrap(),
        bio: Default::default(),
        created_at: Utc::now(),
    };

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &user).await.unwrap();
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.get(&mut txn, user.id).await.unwrap();
    assert_eq!(result, Some(user));
}

#[tokio::test]
async fn create_name_conflict() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();
    let user = User {
        id: UUID1.into(),
        name: "FOO".try_into().unwrap(),
        ..FOO.clone()
    };

    let result = REPO.create(&mut txn, &user).await;

    assert_matches!(result, Err(UserRepoError::NameConflict));
}
