use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::macros::{id, nutype_string};

pub static USER_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z0-9_-]{1,32}$").unwrap());

id!(UserId);

nutype_string!(UserName(validate(regex = USER_NAME_REGEX)));
nutype_string!(UserBio(
    validate(len_char_max = 1024),
    derive(Default),
    default = ""
));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub bio: UserBio,
    pub created_at: DateTime<Utc>,
}

/// A user as seen by a (possibly anonymous) viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub user: User,
    /// Whether the viewer follows this user. Always `false` for anonymous
    /// viewers and for the viewer's own profile.
    pub following: bool,
}

impl ProfileView {
    pub fn new(user: User, following: bool) -> Self {
        Self { user, following }
    }
}
