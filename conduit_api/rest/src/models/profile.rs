use conduit_models::user::{ProfileView, UserBio, UserName};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ApiProfile {
    pub name: UserName,
    pub bio: UserBio,
    /// Whether the viewer follows this user
    pub following: bool,
}

impl From<ProfileView> for ApiProfile {
    fn from(value: ProfileView) -> Self {
        Self {
            name: value.user.name,
            bio: value.user.bio,
            following: value.following,
        }
    }
}
