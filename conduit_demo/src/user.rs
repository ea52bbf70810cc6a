use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use conduit_models::user::User;
use conduit_persistence_contracts::user::UserRepository;
use uuid::uuid;

pub static ALL_USERS: LazyLock<Vec<&User>> = LazyLock::new(|| vec![&FOO, &BAR, &BAZ]);

pub static FOO: LazyLock<User> = LazyLock::new(|| User {
    id: uuid!("a8d95e0f-71ae-4c49-995e-695b7c93848c").into(),
    name: "foo".try_into().unwrap(),
    bio: "Writes about Rust.".try_into().unwrap(),
    created_at: Utc.with_ymd_and_hms(2024, 1, 3, 8, 0, 0).unwrap(),
});

pub static BAR: LazyLock<User> = LazyLock::new(|| User {
    id: uuid!("4e7a1b9c-2d3f-4a5b-8c6d-7e8f9a0b1c2d").into(),
    name: "bar".try_into().unwrap(),
    bio: Default::default(),
    created_at: Utc.with_ymd_and_hms(2024, 1, 7, 17, 45, 0).unwrap(),
});

pub static BAZ: LazyLock<User> = LazyLock::new(|| User {
    id: uuid!("d1c2b3a4-9f8e-4d7c-b6a5-0e1f2a3b4c5d").into(),
    name: "baz".try_into().unwrap(),
    bio: "Lurker.".try_into().unwrap(),
    created_at: Utc.with_ymd_and_hms(2024, 1, 12, 22, 10, 0).unwrap(),
});

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl UserRepository<Txn>,
) -> anyhow::Result<()> {
    for &user in &*ALL_USERS {
        repo.create(txn, user).await?;
    }
    Ok(())
}
