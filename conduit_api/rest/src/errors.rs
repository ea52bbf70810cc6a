use aide::transform::TransformOperation;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::Serialize;

use crate::{docs::TransformOperationExt, error_code};

pub trait ApiErrorCode: Serialize + JsonSchema {
    const DESCRIPTION: &str;
    const STATUS_CODE: StatusCode;
}

#[derive(Serialize, JsonSchema)]
pub struct ApiError<D> {
    pub detail: D,
}

pub fn error_response<C: ApiErrorCode>(code: C) -> Response {
    (C::STATUS_CODE, Json(ApiError { detail: code })).into_response()
}

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    InternalServerError.into_response()
}

pub fn internal_server_error_docs(op: TransformOperation) -> TransformOperation {
    op.add_error::<InternalServerError>()
}

error_code! {
    /// An unexpected error occurred.
    pub InternalServerError(INTERNAL_SERVER_ERROR, "Internal server error");
    /// The cursor is not one previously returned by the API.
    pub InvalidCursorError(BAD_REQUEST, "Invalid cursor");
    /// The `X-Viewer-Id` header is not a valid uuid.
    pub InvalidViewerError(BAD_REQUEST, "Invalid viewer id");
    /// This operation requires an identified viewer.
    pub ViewerRequiredError(UNAUTHORIZED, "Viewer required");
}
