use chrono::{TimeDelta, Utc};
use conduit_demo::{
    article::{ALL_ARTICLES, BAR_SOURDOUGH, BAR_TOKIO, BAZ_SERDE, FOO_ASYNC, FOO_OWNERSHIP},
    user::{BAR, FOO},
    UNKNOWN_SLUG, UNKNOWN_USER_NAME, UUID1,
};
use conduit_models::{
    article::{Article, ArticleFilter},
    pagination::{CursorPageRequest, Direction, PageRequest},
};
use conduit_persistence_contracts::{
    article::{ArticleRepoError, ArticleRepository},
    Database, Transaction,
};
use conduit_persistence_memory::article::MemoryArticleRepository;
use conduit_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::common::{article_composite, setup};

const REPO: MemoryArticleRepository = MemoryArticleRepository;

fn composites(articles: &[&Article]) -> Vec<conduit_models::article::ArticleComposite> {
    articles.iter().map(|&a| article_composite(a)).collect()
}

#[tokio::test]
async fn list_forward_from_start() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();
    let request = CursorPageRequest::new(None, Some(2), Some(Direction::Next));

    let result = REPO
        .list_composites(&mut txn, &ArticleFilter::default(), &request)
        .await
        .unwrap();

    // one extra record to detect further data
    assert_eq!(
        result,
        composites(&[&*FOO_OWNERSHIP, &*FOO_ASYNC, &*BAR_TOKIO])
    );
}

#[tokio::test]
async fn list_forward_cursor_is_exclusive() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();
    let request = CursorPageRequest::new(
        Some(FOO_ASYNC.created_at),
        Some(10),
        Some(Direction::Next),
    );

    let result = REPO
        .list_composites(&mut txn, &ArticleFilter::default(), &request)
        .await
        .unwrap();

    assert_eq!(result, composites(&[&*BAR_TOKIO, &*BAZ_SERDE, &*BAR_SOURDOUGH]));
}

#[tokio::test]
async fn list_backward() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();
    let request = CursorPageRequest::new(
        Some(BAZ_SERDE.created_at),
        Some(10),
        Some(Direction::Prev),
    );

    let result = REPO
        .list_composites(&mut txn, &ArticleFilter::default(), &request)
        .await
        .unwrap();

    assert_eq!(result, composites(&[&*BAR_TOKIO, &*FOO_ASYNC, &*FOO_OWNERSHIP]));
}

#[tokio::test]
async fn list_without_direction_is_newest_first() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO
        .list_composites(&mut txn, &ArticleFilter::default(), &Default::default())
        .await
        .unwrap();

    let mut expected = ALL_ARTICLES.clone();
    expected.reverse();
    assert_eq!(result, composites(&expected));
}

#[tokio::test]
async fn list_filtered() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    for (filter, expected) in [
        (
            ArticleFilter {
                tag: Some("async".try_into().unwrap()),
                ..Default::default()
            },
            vec![&*BAR_TOKIO, &*FOO_ASYNC],
        ),
        (
            ArticleFilter {
                author: Some("FOO".try_into().unwrap()),
                ..Default::default()
            },
            vec![&*FOO_ASYNC, &*FOO_OWNERSHIP],
        ),
        (
            ArticleFilter {
                favorited_by: Some(FOO.name.clone()),
                ..Default::default()
            },
            vec![&*BAZ_SERDE, &*BAR_TOKIO],
        ),
        (
            ArticleFilter {
                author_ids: Some([BAR.id].into()),
                tag: Some("cooking".try_into().unwrap()),
                ..Default::default()
            },
            vec![&*BAR_SOURDOUGH],
        ),
        (
            ArticleFilter {
                author: Some(UNKNOWN_USER_NAME.clone()),
                ..Default::default()
            },
            vec![],
        ),
        (
            ArticleFilter {
                author_ids: Some(Default::default()),
                ..Default::default()
            },
            vec![],
        ),
    ] {
        let result = REPO
            .list_composites(&mut txn, &filter, &Default::default())
            .await
            .unwrap();
        assert_eq!(result, composites(&expected), "{filter:?}");
    }
}

#[tokio::test]
async fn list_by_offset() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO
        .list_composites_by_offset(
            &mut txn,
            &ArticleFilter::default(),
            PageRequest::new(Some(1), Some(2)),
        )
        .await
        .unwrap();
    assert_eq!(result, composites(&[&*BAZ_SERDE, &*BAR_TOKIO]));

    let result = REPO
        .list_composites_by_offset(
            &mut txn,
            &ArticleFilter::default(),
            PageRequest::new(Some(10), None),
        )
        .await
        .unwrap();
    assert_eq!(result, vec![]);
}

#[tokio::test]
async fn count() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let all = REPO
        .count(&mut txn, &ArticleFilter::default())
        .await
        .unwrap();
    assert_eq!(all, ALL_ARTICLES.len() as u64);

    let rust = REPO
        .count(
            &mut txn,
            &ArticleFilter {
                tag: Some("rust".try_into().unwrap()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(rust, 3);
}

#[tokio::test]
async fn get_composite_by_slug() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    for &article in &*ALL_ARTICLES {
        let result = REPO
            .get_composite_by_slug(&mut txn, &article.slug)
            .await
            .unwrap();
        assert_eq!(result, Some(article_composite(article)));
    }

    let result = REPO
        .get_composite_by_slug(&mut txn, &UNKNOWN_SLUG)
        .await
        .unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn create() {
    let db = setup().await;
    let article = Article {
        id: UUID1.into(),
        slug: "fresh".try_into().unwrap(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
        ..FOO_OWNERSHIP.clone()
    };

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &article).await.unwrap();
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO
        .get_composite_by_slug(&mut txn, &article.slug)
        .await
        .unwrap();
    assert_eq!(result, Some(article_composite(&article)));
}

#[tokio::test]
async fn create_slug_conflict() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();
    let article = Article {
        id: UUID1.into(),
        created_at: FOO_OWNERSHIP.created_at + TimeDelta::days(1),
        ..FOO_OWNERSHIP.clone()
    };

    let result = REPO.create(&mut txn, &article).await;

    assert_matches!(result, Err(ArticleRepoError::SlugConflict));
}

#[tokio::test]
async fn rollback_discards_changes() {
    let db = setup().await;
    let article = Article {
        id: UUID1.into(),
        slug: "discarded".try_into().unwrap(),
        ..BAR_TOKIO.clone()
    };

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &article).await.unwrap();
    txn.rollback().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO
        .get_composite_by_slug(&mut txn, &article.slug)
        .await
        .unwrap();
    assert_eq!(result, None);
}
