/// Declares unit structs for error responses.
///
/// Each type serializes to its fixed detail message, documents itself as a
/// string constant in the OpenAPI schema and responds with its status code
/// wrapped in an [`ApiError`](crate::errors::ApiError). Doc comments become
/// the response description.
#[macro_export]
macro_rules! error_code {
    ($($(#[doc = $doc:literal])* $vis:vis $ident:ident($status:ident, $detail:literal);)*) => { $(
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $ident;

        impl $ident {
            pub const DETAIL: &str = $detail;
        }

        impl ::serde::Serialize for $ident {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(Self::DETAIL)
            }
        }

        impl ::schemars::JsonSchema for $ident {
            fn schema_name() -> ::std::string::String {
                ::core::stringify!($ident).into()
            }

            fn is_referenceable() -> bool {
                false
            }

            fn json_schema(_gen: &mut ::schemars::gen::SchemaGenerator) -> ::schemars::schema::Schema {
                ::schemars::schema::SchemaObject {
                    instance_type: ::core::option::Option::Some(::schemars::schema::InstanceType::String.into()),
                    const_value: ::core::option::Option::Some(Self::DETAIL.into()),
                    ..::core::default::Default::default()
                }
                .into()
            }
        }

        impl $crate::errors::ApiErrorCode for $ident {
            const DESCRIPTION: &str = ::core::concat!($($doc),*);
            const STATUS_CODE: ::axum::http::StatusCode = ::axum::http::StatusCode::$status;
        }

        impl ::axum::response::IntoResponse for $ident {
            fn into_response(self) -> ::axum::response::Response {
                $crate::errors::error_response(self)
            }
        }
    )* };
}
