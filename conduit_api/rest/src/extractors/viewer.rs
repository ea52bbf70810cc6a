use aide::{
    gen::GenContext,
    openapi::{
        HeaderStyle, Operation, Parameter, ParameterData, ParameterSchemaOrContent, ReferenceOr,
        SchemaObject,
    },
    OperationInput,
};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use conduit_models::user::UserId;
use uuid::Uuid;

use crate::errors::InvalidViewerError;

pub const VIEWER_HEADER: &str = "X-Viewer-Id";

/// The id of the user on whose behalf the request is made, as established
/// by the authentication layer in front of this service. `None` for
/// anonymous requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer(pub Option<UserId>);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Viewer {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(VIEWER_HEADER) else {
            return Ok(Self(None));
        };

        value
            .to_str()
            .ok()
            .and_then(|x| x.trim().parse::<Uuid>().ok())
            .map(|id| Self(Some(id.into())))
            .ok_or_else(|| InvalidViewerError.into_response())
    }
}

impl OperationInput for Viewer {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        let schema = ctx.schema.subschema_for::<Uuid>();
        operation
            .parameters
            .push(ReferenceOr::Item(Parameter::Header {
                parameter_data: ParameterData {
                    name: VIEWER_HEADER.into(),
                    description: Some("The id of the current user.".into()),
                    required: false,
                    deprecated: None,
                    format: ParameterSchemaOrContent::Schema(SchemaObject {
                        json_schema: schema,
                        external_docs: None,
                        example: None,
                    }),
                    example: None,
                    examples: Default::default(),
                    explode: None,
                    extensions: Default::default(),
                },
                style: HeaderStyle::Simple,
            }));
    }
}
