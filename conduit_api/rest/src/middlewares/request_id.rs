use axum::http::{HeaderValue, Request};
use base64::{display::Base64Display, engine::general_purpose::URL_SAFE_NO_PAD};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Assigns every request a time ordered UUIDv7, base64 encoded to keep
/// the header short. Ids sent by the client are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7();
        let encoded = Base64Display::new(id.as_bytes(), &URL_SAFE_NO_PAD).to_string();
        HeaderValue::from_str(&encoded).ok().map(RequestId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_header_safe() {
        let request = Request::new(());
        let mut make = MakeRequestUuid;

        let first = make.make_request_id(&request).unwrap();
        let second = make.make_request_id(&request).unwrap();

        assert_ne!(first.header_value(), second.header_value());
        assert_eq!(first.header_value().len(), 22);
    }
}
