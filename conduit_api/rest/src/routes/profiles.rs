use std::sync::Arc;

use aide::{
    axum::{routing, ApiRouter},
    transform::TransformOperation,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use conduit_core_profile_contracts::{ProfileFeatureService, ProfileFollowError, ProfileGetError};
use conduit_models::user::ProfileView;

use super::PathName;
use crate::{
    docs::TransformOperationExt,
    error_code,
    errors::{internal_server_error, internal_server_error_docs, ViewerRequiredError},
    extractors::viewer::Viewer,
    models::profile::ApiProfile,
};

pub const TAG: &str = "Profile";

pub fn router(service: Arc<impl ProfileFeatureService>) -> ApiRouter<()> {
    ApiRouter::new()
        .api_route("/profiles/:name", routing::get_with(get, get_docs))
        .api_route(
            "/profiles/:name/follow",
            routing::post_with(follow, follow_docs).delete_with(unfollow, unfollow_docs),
        )
        .with_state(service)
        .with_path_items(|op| op.tag(TAG))
}

async fn get(
    service: State<Arc<impl ProfileFeatureService>>,
    viewer: Viewer,
    Path(PathName { name }): Path<PathName>,
) -> Response {
    match service.get_profile(viewer.0, name).await {
        Ok(profile) => Json(ApiProfile::from(profile)).into_response(),
        Err(ProfileGetError::NotFound) => UserNotFoundError.into_response(),
        Err(ProfileGetError::Other(err)) => internal_server_error(err),
    }
}

fn get_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Return the profile of the user with the given name.")
        .add_response::<ApiProfile>(StatusCode::OK, None)
        .add_error::<UserNotFoundError>()
        .with(internal_server_error_docs)
}

async fn follow(
    service: State<Arc<impl ProfileFeatureService>>,
    viewer: Viewer,
    Path(PathName { name }): Path<PathName>,
) -> Response {
    follow_response(service.follow(viewer.0, name).await)
}

fn follow_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Follow the user with the given name.")
        .with(follow_response_docs)
}

async fn unfollow(
    service: State<Arc<impl ProfileFeatureService>>,
    viewer: Viewer,
    Path(PathName { name }): Path<PathName>,
) -> Response {
    follow_response(service.unfollow(viewer.0, name).await)
}

fn unfollow_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Stop following the user with the given name.")
        .with(follow_response_docs)
}

fn follow_response(result: Result<ProfileView, ProfileFollowError>) -> Response {
    match result {
        Ok(profile) => Json(ApiProfile::from(profile)).into_response(),
        Err(ProfileFollowError::InvalidArgument) => ViewerRequiredError.into_response(),
        Err(ProfileFollowError::NotFound) => UserNotFoundError.into_response(),
        Err(ProfileFollowError::FollowSelf) => CannotFollowSelfError.into_response(),
        Err(ProfileFollowError::Other(err)) => internal_server_error(err),
    }
}

fn follow_response_docs(op: TransformOperation) -> TransformOperation {
    op.add_response::<ApiProfile>(StatusCode::OK, None)
        .add_error::<ViewerRequiredError>()
        .add_error::<UserNotFoundError>()
        .add_error::<CannotFollowSelfError>()
        .with(internal_server_error_docs)
}

error_code! {
    /// The user does not exist.
    pub UserNotFoundError(NOT_FOUND, "User not found");
    /// Users cannot follow or unfollow themselves.
    pub CannotFollowSelfError(UNPROCESSABLE_ENTITY, "Cannot follow yourself");
}
