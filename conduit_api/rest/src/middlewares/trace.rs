use std::time::Duration;

use axum::{extract::Request, response::Response};
use tower_http::request_id::RequestId;
use tracing::{debug, Span};

pub(super) fn make_span(request: &Request) -> Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or_default();

    tracing::debug_span!(
        "http-request",
        method = %request.method(),
        uri = %request.uri(),
        version = ?request.version(),
        request_id,
    )
}

pub(super) fn on_request(_request: &Request, _span: &Span) {
    debug!("started processing request");
}

pub(super) fn on_response(response: &Response, latency: Duration, _span: &Span) {
    debug!(?latency, status = %response.status(), "finished processing request");
}
