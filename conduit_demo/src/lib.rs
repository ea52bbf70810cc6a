use std::sync::LazyLock;

use conduit_models::{article::ArticleSlug, user::UserName};
use conduit_persistence_contracts::{
    article::ArticleRepository, comment::CommentRepository, favorite::FavoriteRepository,
    follow::FollowRepository, user::UserRepository,
};
use uuid::{uuid, Uuid};

pub mod article;
pub mod comment;
pub mod social;
pub mod user;

/// An id which is not used by any of the demo records.
pub const UUID1: Uuid = uuid!("0b6c3f2e-8f0a-4b7e-9d41-3c5e2a7d9f10");

pub static UNKNOWN_USER_NAME: LazyLock<UserName> =
    LazyLock::new(|| "nobody".try_into().unwrap());
pub static UNKNOWN_SLUG: LazyLock<ArticleSlug> =
    LazyLock::new(|| "does-not-exist".try_into().unwrap());

/// Inserts all demo records.
pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    user: impl UserRepository<Txn>,
    article: impl ArticleRepository<Txn>,
    comment: impl CommentRepository<Txn>,
    favorite: impl FavoriteRepository<Txn>,
    follow: impl FollowRepository<Txn>,
) -> anyhow::Result<()> {
    user::create(txn, user).await?;
    article::create(txn, article).await?;
    comment::create(txn, comment).await?;
    social::create(txn, favorite, follow).await?;
    Ok(())
}
