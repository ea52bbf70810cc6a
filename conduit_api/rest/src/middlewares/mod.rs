use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub mod request_id;
mod trace;

/// Wraps the router in the request id and tracing middlewares.
///
/// The request id is assigned first so the tracing span can record it.
pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(request_id::MakeRequestUuid))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(trace::make_span)
                    .on_request(trace::on_request)
                    .on_response(trace::on_response)
                    .on_body_chunk(())
                    .on_eos(())
                    .on_failure(()),
            ),
    )
}
