use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};
use conduit_models::article::{Article, TagList, TagName};
use conduit_persistence_contracts::article::ArticleRepository;
use uuid::uuid;

use crate::user::{BAR, BAZ, FOO};

/// All demo articles, oldest first.
pub static ALL_ARTICLES: LazyLock<Vec<&Article>> = LazyLock::new(|| {
    vec![
        &FOO_OWNERSHIP,
        &FOO_ASYNC,
        &BAR_TOKIO,
        &BAZ_SERDE,
        &BAR_SOURDOUGH,
    ]
});

pub static FOO_OWNERSHIP: LazyLock<Article> = LazyLock::new(|| Article {
    id: uuid!("f1a2b3c4-d5e6-4f70-8192-a3b4c5d6e7f8").into(),
    slug: "understanding-ownership".try_into().unwrap(),
    title: "Understanding Ownership".try_into().unwrap(),
    description: "Moves, borrows and lifetimes.".try_into().unwrap(),
    body: "Every value has exactly one owner.".try_into().unwrap(),
    tags: tags(&["rust", "beginners"]),
    author_id: FOO.id,
    created_at: at(2024, 2, 1),
    updated_at: at(2024, 2, 1),
});

pub static FOO_ASYNC: LazyLock<Article> = LazyLock::new(|| Article {
    id: uuid!("0c9d8e7f-6a5b-4c3d-9e2f-1a0b9c8d7e6f").into(),
    slug: "async-in-practice".try_into().unwrap(),
    title: "Async in Practice".try_into().unwrap(),
    description: "Futures without the hype.".try_into().unwrap(),
    body: "A future does nothing until it is polled.".try_into().unwrap(),
    tags: tags(&["rust", "async"]),
    author_id: FOO.id,
    created_at: at(2024, 2, 5),
    updated_at: at(2024, 2, 6),
});

pub static BAR_TOKIO: LazyLock<Article> = LazyLock::new(|| Article {
    id: uuid!("7b6a5948-3726-4150-9f8e-7d6c5b4a3928").into(),
    slug: "a-tour-of-tokio".try_into().unwrap(),
    title: "A Tour of Tokio".try_into().unwrap(),
    description: "".try_into().unwrap(),
    body: "Runtimes, tasks and channels.".try_into().unwrap(),
    tags: tags(&["async"]),
    author_id: BAR.id,
    created_at: at(2024, 2, 10),
    updated_at: at(2024, 2, 10),
});

pub static BAZ_SERDE: LazyLock<Article> = LazyLock::new(|| Article {
    id: uuid!("9e8d7c6b-5a49-4837-a261-50f4e3d2c1b0").into(),
    slug: "serde-by-example".try_into().unwrap(),
    title: "Serde by Example".try_into().unwrap(),
    description: "Deriving all the things.".try_into().unwrap(),
    body: "Serialize, Deserialize, done.".try_into().unwrap(),
    tags: tags(&["rust", "serde"]),
    author_id: BAZ.id,
    created_at: at(2024, 2, 15),
    updated_at: at(2024, 2, 15),
});

pub static BAR_SOURDOUGH: LazyLock<Article> = LazyLock::new(|| Article {
    id: uuid!("2a3b4c5d-6e7f-4a8b-9c0d-1e2f3a4b5c6d").into(),
    slug: "sourdough-basics".try_into().unwrap(),
    title: "Sourdough Basics".try_into().unwrap(),
    description: "Flour, water, patience.".try_into().unwrap(),
    body: "Feed the starter twice a day.".try_into().unwrap(),
    tags: tags(&["cooking"]),
    author_id: BAR.id,
    created_at: at(2024, 2, 20),
    updated_at: at(2024, 2, 20),
});

fn tags(tags: &[&str]) -> TagList {
    TagList::try_new(
        tags.iter()
            .map(|&tag| TagName::try_new(tag).unwrap())
            .collect(),
    )
    .unwrap()
}

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl ArticleRepository<Txn>,
) -> anyhow::Result<()> {
    for &article in &*ALL_ARTICLES {
        repo.create(txn, article).await?;
    }
    Ok(())
}
