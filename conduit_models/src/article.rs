use std::{collections::HashSet, sync::LazyLock};

use chrono::{DateTime, Utc};
use nutype::nutype;
use regex::Regex;

use crate::{
    cursor::Cursor,
    macros::{id, nutype_string},
    pagination::Cursored,
    user::{ProfileView, User, UserId, UserName},
};

pub static ARTICLE_SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

id!(ArticleId);

nutype_string!(ArticleSlug(validate(
    len_char_max = ArticleSlug::MAX_LENGTH,
    regex = ARTICLE_SLUG_REGEX
)));
nutype_string!(ArticleTitle(validate(
    len_char_min = 1,
    len_char_max = 256
)));
nutype_string!(ArticleDescription(validate(len_char_max = 1024)));
nutype_string!(ArticleBody(validate(len_char_min = 1, len_char_max = 65536)));
nutype_string!(TagName(validate(len_char_min = 1, len_char_max = 64)));

#[nutype(
    validate(predicate = |x| x.len() <= 16),
    derive(Debug, Clone, PartialEq, Eq, Deref, Default, TryFrom, Serialize, Deserialize),
    default = Vec::new(),
)]
pub struct TagList(Vec<TagName>);

impl ArticleSlug {
    pub const MAX_LENGTH: usize = 96;

    /// Derives a slug from an article title, e.g. `"How to train: Part 2"`
    /// becomes `"how-to-train-part-2"`.
    pub fn from_title(title: &ArticleTitle) -> Self {
        let mut slug = String::with_capacity(title.len());
        for c in title.chars().flat_map(char::to_lowercase) {
            if c.is_ascii_alphanumeric() {
                slug.push(c);
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        slug.truncate(Self::MAX_LENGTH);
        let slug = slug.trim_end_matches('-');

        match Self::try_new(slug) {
            Ok(slug) => slug,
            Err(_) => Self::try_new("article").unwrap(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub tags: TagList,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An article joined with its author, as returned by the read side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleComposite {
    pub article: Article,
    pub author: User,
}

/// An article annotated for a specific (possibly anonymous) viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    pub article: Article,
    pub author: ProfileView,
    pub favorites_count: u64,
    pub favorited: bool,
}

impl Cursored for ArticleComposite {
    type Key = DateTime<Utc>;

    fn cursor(&self) -> Cursor<Self::Key> {
        Cursor::new(self.article.created_at)
    }
}

impl Cursored for ArticleView {
    type Key = DateTime<Utc>;

    fn cursor(&self) -> Cursor<Self::Key> {
        Cursor::new(self.article.created_at)
    }
}

/// Narrows the set of articles a page is drawn from. All present criteria
/// must match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleFilter {
    pub tag: Option<TagName>,
    pub author: Option<UserName>,
    pub favorited_by: Option<UserName>,
    /// Restricts the result to articles written by one of these users.
    pub author_ids: Option<HashSet<UserId>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_from_title() {
        for (title, expected) in [
            ("Hello World", "hello-world"),
            ("How to train: Part 2", "how-to-train-part-2"),
            ("  --Rust!!  ", "rust"),
            ("Über Ärger", "ber-rger"),
            ("???", "article"),
        ] {
            let title = ArticleTitle::try_new(title).unwrap();
            assert_eq!(ArticleSlug::from_title(&title).as_str(), expected);
        }
    }

    #[test]
    fn slug_is_truncated() {
        let title = ArticleTitle::try_new("ab ".repeat(60)).unwrap();
        let slug = ArticleSlug::from_title(&title);
        assert_eq!(slug.len(), ArticleSlug::MAX_LENGTH - 1);
        assert!(slug.starts_with("ab-ab-"));
        assert!(slug.ends_with("-ab"));
    }

    #[test]
    fn tag_list_limit() {
        let tags = (0..17)
            .map(|i| TagName::try_new(format!("tag{i}")).unwrap())
            .collect::<Vec<_>>();
        assert!(TagList::try_new(tags[..16].to_vec()).is_ok());
        assert!(TagList::try_new(tags).is_err());
    }
}
