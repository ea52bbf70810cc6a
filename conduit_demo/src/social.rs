//! Favorites and follows between the demo records.

use std::sync::LazyLock;

use conduit_models::{article::ArticleId, user::UserId};
use conduit_persistence_contracts::{favorite::FavoriteRepository, follow::FollowRepository};

use crate::{
    article::{BAR_TOKIO, BAZ_SERDE, FOO_OWNERSHIP},
    user::{BAR, BAZ, FOO},
};

/// (user, favorited article)
pub static FAVORITES: LazyLock<Vec<(UserId, ArticleId)>> = LazyLock::new(|| {
    vec![
        (FOO.id, BAR_TOKIO.id),
        (BAZ.id, BAR_TOKIO.id),
        (BAR.id, FOO_OWNERSHIP.id),
        (FOO.id, BAZ_SERDE.id),
    ]
});

/// (follower, followed user)
pub static FOLLOWS: LazyLock<Vec<(UserId, UserId)>> = LazyLock::new(|| {
    vec![
        (FOO.id, BAR.id),
        (BAZ.id, FOO.id),
        (BAZ.id, BAR.id),
    ]
});

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    favorite: impl FavoriteRepository<Txn>,
    follow: impl FollowRepository<Txn>,
) -> anyhow::Result<()> {
    for &(user_id, article_id) in &*FAVORITES {
        favorite.add(txn, user_id, article_id).await?;
    }
    for &(follower_id, user_id) in &*FOLLOWS {
        follow.follow(txn, follower_id, user_id).await?;
    }
    Ok(())
}
