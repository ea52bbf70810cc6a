use conduit_core_article_contracts::{
    queries::{
        list::{ArticleListQuery, MockArticleListQueryService},
        list_by_offset::{ArticleListByOffsetQuery, MockArticleListByOffsetQueryService},
    },
    ArticleFeatureService,
};
use conduit_demo::{
    article::{BAR_TOKIO, FOO_ASYNC},
    user::{BAR, BAZ, FOO},
};
use conduit_models::{
    article::ArticleFilter,
    pagination::{CursorPage, CursorPageRequest, Direction, Page, PageRequest},
};
use conduit_persistence_contracts::MockDatabase;
use pretty_assertions::assert_eq;

use crate::{
    tests::{composite, view, Sut},
    ArticleFeatureServiceImpl,
};

#[tokio::test]
async fn list() {
    // Arrange
    let query = ArticleListQuery {
        filter: ArticleFilter {
            tag: Some("async".try_into().unwrap()),
            ..Default::default()
        },
        pagination: CursorPageRequest::new(None, Some(1), Some(Direction::Next)),
    };
    let expected = CursorPage::new(
        vec![view(composite(&FOO_ASYNC, &FOO), 0, false)],
        Some(Direction::Next),
        true,
    );

    let db = MockDatabase::build(false);
    let article_list =
        MockArticleListQueryService::new().with_invoke(Some(BAZ.id), query.clone(), expected.clone());

    let sut = ArticleFeatureServiceImpl {
        db,
        article_list,
        ..Sut::default()
    };

    // Act
    let result = sut.list_articles(Some(BAZ.id), query).await;

    // Assert
    let result = result.unwrap();
    assert_eq!(result, expected);
    assert!(result.has_next());
}

#[tokio::test]
async fn list_by_offset() {
    // Arrange
    let query = ArticleListByOffsetQuery {
        filter: ArticleFilter::default(),
        pagination: PageRequest::new(Some(0), Some(1)),
    };
    let expected = Page::new(vec![view(composite(&BAR_TOKIO, &BAR), 2, false)], 5);

    let db = MockDatabase::build(false);
    let article_list_by_offset = MockArticleListByOffsetQueryService::new().with_invoke(
        None,
        query.clone(),
        expected.clone(),
    );

    let sut = ArticleFeatureServiceImpl {
        db,
        article_list_by_offset,
        ..Sut::default()
    };

    // Act
    let result = sut.list_articles_by_offset(None, query).await;

    // Assert
    assert_eq!(result.unwrap(), expected);
}
