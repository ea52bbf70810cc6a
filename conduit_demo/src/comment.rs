use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use conduit_models::comment::Comment;
use conduit_persistence_contracts::comment::CommentRepository;
use uuid::uuid;

use crate::{
    article::{BAR_TOKIO, FOO_OWNERSHIP},
    user::{BAR, BAZ, FOO},
};

/// All demo comments, oldest first.
pub static ALL_COMMENTS: LazyLock<Vec<&Comment>> =
    LazyLock::new(|| vec![&OWNERSHIP_BAR, &OWNERSHIP_BAZ, &OWNERSHIP_FOO, &TOKIO_FOO]);

pub static OWNERSHIP_BAR: LazyLock<Comment> = LazyLock::new(|| Comment {
    id: uuid!("c0000001-1111-4aaa-8bbb-000000000001").into(),
    article_id: FOO_OWNERSHIP.id,
    author_id: BAR.id,
    body: "Great write-up!".try_into().unwrap(),
    created_at: Utc.with_ymd_and_hms(2024, 2, 2, 9, 0, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 2, 2, 9, 0, 0).unwrap(),
});

pub static OWNERSHIP_BAZ: LazyLock<Comment> = LazyLock::new(|| Comment {
    id: uuid!("c0000002-2222-4aaa-8bbb-000000000002").into(),
    article_id: FOO_OWNERSHIP.id,
    author_id: BAZ.id,
    body: "What about Rc?".try_into().unwrap(),
    created_at: Utc.with_ymd_and_hms(2024, 2, 3, 14, 30, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 2, 3, 14, 30, 0).unwrap(),
});

pub static OWNERSHIP_FOO: LazyLock<Comment> = LazyLock::new(|| Comment {
    id: uuid!("c0000003-3333-4aaa-8bbb-000000000003").into(),
    article_id: FOO_OWNERSHIP.id,
    author_id: FOO.id,
    body: "Shared ownership is next week.".try_into().unwrap(),
    created_at: Utc.with_ymd_and_hms(2024, 2, 4, 8, 15, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 2, 4, 8, 15, 0).unwrap(),
});

pub static TOKIO_FOO: LazyLock<Comment> = LazyLock::new(|| Comment {
    id: uuid!("c0000004-4444-4aaa-8bbb-000000000004").into(),
    article_id: BAR_TOKIO.id,
    author_id: FOO.id,
    body: "select! deserves its own post.".try_into().unwrap(),
    created_at: Utc.with_ymd_and_hms(2024, 2, 11, 19, 0, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 2, 11, 19, 0, 0).unwrap(),
});

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl CommentRepository<Txn>,
) -> anyhow::Result<()> {
    for &comment in &*ALL_COMMENTS {
        repo.create(txn, comment).await?;
    }
    Ok(())
}
