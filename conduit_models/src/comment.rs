use chrono::{DateTime, Utc};

use crate::{
    article::ArticleId,
    cursor::Cursor,
    macros::{id, nutype_string},
    pagination::Cursored,
    user::{ProfileView, User, UserId},
};

id!(CommentId);

nutype_string!(CommentBody(validate(len_char_min = 1, len_char_max = 4096)));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentComposite {
    pub comment: Comment,
    pub author: User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub comment: Comment,
    pub author: ProfileView,
}

impl Cursored for CommentComposite {
    type Key = DateTime<Utc>;

    fn cursor(&self) -> Cursor<Self::Key> {
        Cursor::new(self.comment.created_at)
    }
}

impl Cursored for CommentView {
    type Key = DateTime<Utc>;

    fn cursor(&self) -> Cursor<Self::Key> {
        Cursor::new(self.comment.created_at)
    }
}
