use chrono::{DateTime, Utc};
use conduit_models::{
    article::{
        ArticleBody, ArticleDescription, ArticleFilter, ArticleSlug, ArticleTitle, ArticleView,
        TagName,
    },
    user::UserName,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::profile::ApiProfile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ApiArticle {
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub tags: Vec<TagName>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: ApiProfile,
    /// Whether the viewer has favorited this article
    pub favorited: bool,
    pub favorites_count: u64,
}

impl From<ArticleView> for ApiArticle {
    fn from(value: ArticleView) -> Self {
        let article = value.article;
        Self {
            slug: article.slug,
            title: article.title,
            description: article.description,
            body: article.body,
            tags: article.tags.into_inner(),
            created_at: article.created_at,
            updated_at: article.updated_at,
            author: value.author.into(),
            favorited: value.favorited,
            favorites_count: value.favorites_count,
        }
    }
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ApiArticleFilter {
    /// Only return articles with this tag
    pub tag: Option<TagName>,
    /// Only return articles written by this user
    pub author: Option<UserName>,
    /// Only return articles favorited by this user
    pub favorited: Option<UserName>,
}

impl From<ApiArticleFilter> for ArticleFilter {
    fn from(value: ApiArticleFilter) -> Self {
        Self {
            tag: value.tag,
            author: value.author,
            favorited_by: value.favorited,
            author_ids: None,
        }
    }
}
