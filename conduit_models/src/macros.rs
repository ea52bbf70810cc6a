macro_rules! id {
    ($ident:ident) => {
        #[::nutype::nutype(derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Deref,
            From,
            Serialize,
            Deserialize,
        ))]
        pub struct $ident(::uuid::Uuid);

        impl ::schemars::JsonSchema for $ident {
            fn schema_name() -> ::std::string::String {
                <::uuid::Uuid as ::schemars::JsonSchema>::schema_name()
            }

            fn schema_id() -> ::std::borrow::Cow<'static, str> {
                <::uuid::Uuid as ::schemars::JsonSchema>::schema_id()
            }

            fn json_schema(gen: &mut ::schemars::gen::SchemaGenerator) -> ::schemars::schema::Schema {
                <::uuid::Uuid as ::schemars::JsonSchema>::json_schema(gen)
            }
        }
    };
}

macro_rules! nutype_string {
    ($ident:ident(validate($($validate:tt)*) $(, derive($($derive:ident),* $(,)?))? $(, default = $default:expr)? $(,)?)) => {
        #[::nutype::nutype(
            validate($($validate)*),
            derive(
                Debug,
                Clone,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                Hash,
                Deref,
                TryFrom,
                Serialize,
                Deserialize,
                JsonSchema,
                $($($derive),*)?
            ),
            $(default = $default,)?
        )]
        pub struct $ident(String);
    };
}

pub(crate) use id;
pub(crate) use nutype_string;
