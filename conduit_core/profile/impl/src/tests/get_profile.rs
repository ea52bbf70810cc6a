use std::collections::HashSet;

use conduit_core_profile_contracts::{ProfileFeatureService, ProfileGetError};
use conduit_demo::{
    user::{BAR, FOO},
    UNKNOWN_USER_NAME,
};
use conduit_models::user::ProfileView;
use conduit_persistence_contracts::{
    follow::MockFollowRepository, user::MockUserRepository, MockDatabase,
};
use conduit_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{tests::Sut, ProfileFeatureServiceImpl};

#[tokio::test]
async fn following() {
    // Arrange
    let db = MockDatabase::build(false);
    let user_repo = MockUserRepository::new().with_get_by_name(BAR.name.clone(), Some(BAR.clone()));
    let follow_repo = MockFollowRepository::new().with_following_state_for(
        FOO.id,
        HashSet::from([BAR.id]),
        HashSet::from([BAR.id]),
    );

    let sut = ProfileFeatureServiceImpl {
        db,
        user_repo,
        follow_repo,
    };

    // Act
    let result = sut.get_profile(Some(FOO.id), BAR.name.clone()).await;

    // Assert
    assert_eq!(result.unwrap(), ProfileView::new(BAR.clone(), true));
}

#[tokio::test]
async fn anonymous() {
    // Arrange
    let db = MockDatabase::build(false);
    let user_repo = MockUserRepository::new().with_get_by_name(BAR.name.clone(), Some(BAR.clone()));

    let sut = ProfileFeatureServiceImpl {
        db,
        user_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.get_profile(None, BAR.name.clone()).await;

    // Assert
    assert_eq!(result.unwrap(), ProfileView::new(BAR.clone(), false));
}

#[tokio::test]
async fn own_profile() {
    // Arrange
    let db = MockDatabase::build(false);
    let user_repo = MockUserRepository::new().with_get_by_name(FOO.name.clone(), Some(FOO.clone()));

    let sut = ProfileFeatureServiceImpl {
        db,
        user_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.get_profile(Some(FOO.id), FOO.name.clone()).await;

    // Assert
    assert_eq!(result.unwrap(), ProfileView::new(FOO.clone(), false));
}

#[tokio::test]
async fn not_found() {
    // Arrange
    let db = MockDatabase::build(false);
    let user_repo = MockUserRepository::new().with_get_by_name(UNKNOWN_USER_NAME.clone(), None);

    let sut = ProfileFeatureServiceImpl {
        db,
        user_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.get_profile(None, UNKNOWN_USER_NAME.clone()).await;

    // Assert
    assert_matches!(result, Err(ProfileGetError::NotFound));
}
