use chrono::{DateTime, Utc};
use conduit_models::comment::{CommentBody, CommentId, CommentView};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::profile::ApiProfile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ApiComment {
    pub id: CommentId,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: ApiProfile,
}

impl From<CommentView> for ApiComment {
    fn from(value: CommentView) -> Self {
        Self {
            id: value.comment.id,
            body: value.comment.body,
            created_at: value.comment.created_at,
            updated_at: value.comment.updated_at,
            author: value.author.into(),
        }
    }
}
