use conduit_core_comment_contracts::{CommentAddError, CommentFeatureService};
use conduit_demo::{
    article::BAZ_SERDE,
    user::{BAR, BAZ},
    UNKNOWN_SLUG, UUID1,
};
use conduit_models::{
    article::ArticleComposite,
    comment::{Comment, CommentId, CommentView},
    user::ProfileView,
};
use conduit_persistence_contracts::{
    article::MockArticleRepository, comment::MockCommentRepository, user::MockUserRepository,
    MockDatabase,
};
use conduit_shared_contracts::{id::MockIdService, time::MockTimeService};
use conduit_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{tests::Sut, CommentFeatureServiceImpl};

#[tokio::test]
async fn ok() {
    // Arrange
    let comment = Comment {
        id: UUID1.into(),
        article_id: BAZ_SERDE.id,
        author_id: BAR.id,
        body: "Nice one.".try_into().unwrap(),
        created_at: BAZ_SERDE.created_at,
        updated_at: BAZ_SERDE.created_at,
    };

    let db = MockDatabase::build(true);
    let id = MockIdService::new().with_generate(CommentId::from(UUID1));
    let time = MockTimeService::new().with_now(BAZ_SERDE.created_at);
    let user_repo = MockUserRepository::new().with_get(BAR.id, Some(BAR.clone()));
    let article_repo = MockArticleRepository::new().with_get_composite_by_slug(
        BAZ_SERDE.slug.clone(),
        Some(ArticleComposite {
            article: BAZ_SERDE.clone(),
            author: BAZ.clone(),
        }),
    );
    let comment_repo = MockCommentRepository::new().with_create(comment.clone());

    let sut = CommentFeatureServiceImpl {
        db,
        id,
        time,
        user_repo,
        article_repo,
        comment_repo,
        ..Sut::default()
    };

    // Act
    let result = sut
        .add_comment(Some(BAR.id), BAZ_SERDE.slug.clone(), comment.body.clone())
        .await;

    // Assert
    assert_eq!(
        result.unwrap(),
        CommentView {
            comment,
            author: ProfileView::new(BAR.clone(), false),
        }
    );
}

#[tokio::test]
async fn anonymous() {
    // Arrange
    let sut = Sut::default();

    // Act
    let result = sut
        .add_comment(None, BAZ_SERDE.slug.clone(), "Hi".try_into().unwrap())
        .await;

    // Assert
    assert_matches!(result, Err(CommentAddError::InvalidArgument));
}

#[tokio::test]
async fn unknown_viewer() {
    // Arrange
    let db = MockDatabase::build(false);
    let user_repo = MockUserRepository::new().with_get(UUID1.into(), None);

    let sut = CommentFeatureServiceImpl {
        db,
        user_repo,
        ..Sut::default()
    };

    // Act
    let result = sut
        .add_comment(Some(UUID1.into()), BAZ_SERDE.slug.clone(), "Hi".try_into().unwrap())
        .await;

    // Assert
    assert_matches!(result, Err(CommentAddError::InvalidArgument));
}

#[tokio::test]
async fn article_not_found() {
    // Arrange
    let db = MockDatabase::build(false);
    let user_repo = MockUserRepository::new().with_get(BAR.id, Some(BAR.clone()));
    let article_repo =
        MockArticleRepository::new().with_get_composite_by_slug(UNKNOWN_SLUG.clone(), None);

    let sut = CommentFeatureServiceImpl {
        db,
        user_repo,
        article_repo,
        ..Sut::default()
    };

    // Act
    let result = sut
        .add_comment(Some(BAR.id), UNKNOWN_SLUG.clone(), "Hi".try_into().unwrap())
        .await;

    // Assert
    assert_matches!(result, Err(CommentAddError::NotFound));
}
