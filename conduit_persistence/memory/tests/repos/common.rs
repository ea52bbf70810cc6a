use conduit_demo::user::ALL_USERS;
use conduit_models::{
    article::{Article, ArticleComposite},
    comment::{Comment, CommentComposite},
    user::{User, UserId},
};
use conduit_persistence_contracts::{Database, Transaction};
use conduit_persistence_memory::{
    article::MemoryArticleRepository, comment::MemoryCommentRepository,
    favorite::MemoryFavoriteRepository, follow::MemoryFollowRepository,
    user::MemoryUserRepository, MemoryDatabase,
};

pub type Db = MemoryDatabase;

pub async fn setup() -> Db {
    let db = Db::new();
    let mut txn = db.begin_transaction().await.unwrap();

    conduit_demo::create(
        &mut txn,
        MemoryUserRepository,
        MemoryArticleRepository,
        MemoryCommentRepository,
        MemoryFavoriteRepository,
        MemoryFollowRepository,
    )
    .await
    .unwrap();

    txn.commit().await.unwrap();

    db
}

fn user(id: UserId) -> User {
    ALL_USERS
        .iter()
        .find(|u| u.id == id)
        .copied()
        .cloned()
        .unwrap()
}

pub fn article_composite(article: &Article) -> ArticleComposite {
    ArticleComposite {
        article: article.clone(),
        author: user(article.author_id),
    }
}

pub fn comment_composite(comment: &Comment) -> CommentComposite {
    CommentComposite {
        comment: comment.clone(),
        author: user(comment.author_id),
    }
}
