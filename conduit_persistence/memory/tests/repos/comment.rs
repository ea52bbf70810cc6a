use chrono::Utc;
use conduit_demo::{
    article::{BAR_TOKIO, BAZ_SERDE, FOO_OWNERSHIP},
    comment::{OWNERSHIP_BAR, OWNERSHIP_BAZ, OWNERSHIP_FOO, TOKIO_FOO},
    user::BAZ,
    UUID1,
};
use conduit_models::{
    comment::Comment,
    pagination::{CursorPageRequest, Direction},
};
use conduit_persistence_contracts::{comment::CommentRepository, Database, Transaction};
use conduit_persistence_memory::comment::MemoryCommentRepository;
use pretty_assertions::assert_eq;

use crate::common::{comment_composite, setup};

const REPO: MemoryCommentRepository = MemoryCommentRepository;

#[tokio::test]
async fn list_newest_first() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO
        .list_composites(&mut txn, FOO_OWNERSHIP.id, &Default::default())
        .await
        .unwrap();

    assert_eq!(
        result,
        [&*OWNERSHIP_FOO, &*OWNERSHIP_BAZ, &*OWNERSHIP_BAR]
            .map(comment_composite)
            .to_vec()
    );
}

#[tokio::test]
async fn list_forward_after_cursor() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();
    let request = CursorPageRequest::new(
        Some(OWNERSHIP_BAR.created_at),
        Some(1),
        Some(Direction::Next),
    );

    let result = REPO
        .list_composites(&mut txn, FOO_OWNERSHIP.id, &request)
        .await
        .unwrap();

    assert_eq!(
        result,
        [&*OWNERSHIP_BAZ, &*OWNERSHIP_FOO]
            .map(comment_composite)
            .to_vec()
    );
}

#[tokio::test]
async fn list_other_articles() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let tokio = REPO
        .list_composites(&mut txn, BAR_TOKIO.id, &Default::default())
        .await
        .unwrap();
    assert_eq!(tokio, vec![comment_composite(&TOKIO_FOO)]);

    let serde = REPO
        .list_composites(&mut txn, BAZ_SERDE.id, &Default::default())
        .await
        .unwrap();
    assert_eq!(serde, vec![]);
}

#[tokio::test]
async fn create() {
    let db = setup().await;
    let comment = Comment {
        id: UUID1.into(),
        article_id: BAZ_SERDE.id,
        author_id: BAZ.id,
        body: "Thanks for reading.".try_into().unwrap(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &comment).await.unwrap();
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO
        .list_composites(&mut txn, BAZ_SERDE.id, &Default::default())
        .await
        .unwrap();
    assert_eq!(result, vec![comment_composite(&comment)]);
}

#[tokio::test]
async fn create_for_unknown_article() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();
    let comment = Comment {
        id: UUID1.into(),
        article_id: UUID1.into(),
        ..OWNERSHIP_BAR.clone()
    };

    let result = REPO.create(&mut txn, &comment).await;

    assert!(result.is_err());
}
