use std::sync::LazyLock;

use aide::{
    gen::in_context,
    openapi::{ReferenceOr, Response as OpenApiResponse},
    redoc::Redoc,
    transform::TransformOperation,
    OperationOutput,
};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing, Json, Router,
};
use schemars::{
    schema::{SchemaObject, SubschemaValidation},
    JsonSchema,
};

use crate::errors::{ApiError, ApiErrorCode};

static REDOC_HTML: LazyLock<String> =
    LazyLock::new(|| Redoc::new("/openapi.json").with_title("Conduit").html());

pub fn router() -> Router<()> {
    Router::new().route("/redoc", routing::get(serve_redoc))
}

async fn serve_redoc() -> Response {
    Html(REDOC_HTML.as_str()).into_response()
}

/// Extension trait for [`TransformOperation`]
pub trait TransformOperationExt {
    /// Add a [`Json`] response to the operation.
    ///
    /// Responses sharing a status code are combined into one `anyOf` schema.
    fn add_response<R: JsonSchema>(self, code: StatusCode, description: Option<&str>) -> Self;

    /// Add an [`ApiError`] response by its [`ApiErrorCode`].
    fn add_error<C: ApiErrorCode>(self) -> Self
    where
        Self: Sized,
    {
        self.add_response::<ApiError<C>>(
            C::STATUS_CODE,
            Some(C::DESCRIPTION.trim()).filter(|d| !d.is_empty()),
        )
    }
}

impl TransformOperationExt for TransformOperation<'_> {
    fn add_response<R: JsonSchema>(mut self, code: StatusCode, description: Option<&str>) -> Self {
        let mut response = in_context(|ctx| {
            Json::<R>::operation_response(ctx, &mut Default::default()).unwrap_or_default()
        });
        if let Some(description) = description {
            response.description = description.into();
        }

        let operation = self.inner_mut();
        let responses = operation.responses.get_or_insert_with(Default::default);
        let code = aide::openapi::StatusCode::Code(code.as_u16());

        match responses.responses.get_mut(&code) {
            Some(ReferenceOr::Item(existing)) => merge_response(existing, response),
            _ => {
                responses.responses.insert(code, ReferenceOr::Item(response));
            }
        }

        self
    }
}

const MULTIPLE_RESPONSES: &str = "There are multiple possible responses with this status code:";

/// Merges the schema and description of `src` into `dst`.
fn merge_response(dst: &mut OpenApiResponse, src: OpenApiResponse) {
    if !dst.description.starts_with(MULTIPLE_RESPONSES) {
        dst.description = format!("{MULTIPLE_RESPONSES}\n- {}", dst.description);
    }
    dst.description.push_str("\n- ");
    dst.description.push_str(&src.description);

    for (media_type_name, src_media_type) in src.content {
        let dst_media_type = dst.content.entry(media_type_name).or_default();
        let Some(src_schema) = src_media_type.schema else {
            continue;
        };
        let Some(dst_schema) = dst_media_type.schema.take() else {
            dst_media_type.schema = Some(src_schema);
            continue;
        };

        let schema = dst_schema.json_schema.into_object();
        let mut schemas = match schema.subschemas.as_ref().and_then(|s| s.any_of.clone()) {
            Some(any_of) => any_of,
            None => vec![schema.into()],
        };
        schemas.push(src_schema.json_schema);

        dst_media_type.schema = Some(aide::openapi::SchemaObject {
            json_schema: SchemaObject {
                subschemas: Some(
                    SubschemaValidation {
                        any_of: Some(schemas),
                        ..Default::default()
                    }
                    .into(),
                ),
                ..Default::default()
            }
            .into(),
            external_docs: None,
            example: None,
        });
    }
}
