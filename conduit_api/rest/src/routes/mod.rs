use schemars::JsonSchema;
use serde::Deserialize;

use conduit_models::{article::ArticleSlug, user::UserName};

pub mod articles;
pub mod comments;
pub mod profiles;

#[derive(Deserialize, JsonSchema)]
struct PathSlug {
    slug: ArticleSlug,
}

#[derive(Deserialize, JsonSchema)]
struct PathName {
    name: UserName,
}
