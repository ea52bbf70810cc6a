use std::sync::Arc;

use aide::{
    axum::{routing, ApiRouter},
    transform::TransformOperation,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use conduit_core_comment_contracts::{CommentAddError, CommentFeatureService, CommentListError};
use conduit_models::comment::CommentBody;
use schemars::JsonSchema;
use serde::Deserialize;

use super::{articles::ArticleNotFoundError, PathSlug};
use crate::{
    docs::TransformOperationExt,
    errors::{
        internal_server_error, internal_server_error_docs, InvalidCursorError,
        ViewerRequiredError,
    },
    extractors::viewer::Viewer,
    models::{comment::ApiComment, ApiCursorPage, ApiCursorQuery},
};

pub const TAG: &str = "Comment";

pub fn router(service: Arc<impl CommentFeatureService>) -> ApiRouter<()> {
    ApiRouter::new()
        .api_route(
            "/articles/:slug/comments",
            routing::get_with(list, list_docs).post_with(add, add_docs),
        )
        .with_state(service)
        .with_path_items(|op| op.tag(TAG))
}

async fn list(
    service: State<Arc<impl CommentFeatureService>>,
    viewer: Viewer,
    Path(PathSlug { slug }): Path<PathSlug>,
    Query(pagination): Query<ApiCursorQuery>,
) -> Response {
    let Ok(pagination) = pagination.into_request() else {
        return InvalidCursorError.into_response();
    };

    match service.list_comments(viewer.0, slug, pagination).await {
        Ok(page) => match ApiCursorPage::try_from_page(page, ApiComment::from) {
            Ok(page) => Json(page).into_response(),
            Err(err) => internal_server_error(err),
        },
        Err(CommentListError::NotFound) => ArticleNotFoundError.into_response(),
        Err(CommentListError::Other(err)) => internal_server_error(err),
    }
}

fn list_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Return one page of the comments on the article.")
        .add_response::<ApiCursorPage<ApiComment>>(StatusCode::OK, None)
        .add_error::<InvalidCursorError>()
        .add_error::<ArticleNotFoundError>()
        .with(internal_server_error_docs)
}

#[derive(Deserialize, JsonSchema)]
struct AddRequest {
    body: CommentBody,
}

async fn add(
    service: State<Arc<impl CommentFeatureService>>,
    viewer: Viewer,
    Path(PathSlug { slug }): Path<PathSlug>,
    Json(AddRequest { body }): Json<AddRequest>,
) -> Response {
    match service.add_comment(viewer.0, slug, body).await {
        Ok(comment) => (StatusCode::CREATED, Json(ApiComment::from(comment))).into_response(),
        Err(CommentAddError::InvalidArgument) => ViewerRequiredError.into_response(),
        Err(CommentAddError::NotFound) => ArticleNotFoundError.into_response(),
        Err(CommentAddError::Other(err)) => internal_server_error(err),
    }
}

fn add_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Comment on the article as the viewer.")
        .add_response::<ApiComment>(StatusCode::CREATED, None)
        .add_error::<ViewerRequiredError>()
        .add_error::<ArticleNotFoundError>()
        .with(internal_server_error_docs)
}
