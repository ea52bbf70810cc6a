use std::{
    collections::{HashMap, HashSet},
    future::Future,
};

use conduit_models::{article::ArticleId, user::UserId};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FavoriteRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Returns the number of favorites of each of the given articles.
    ///
    /// Articles without any favorites may be missing from the result.
    fn counts_for(
        &self,
        txn: &mut Txn,
        article_ids: &HashSet<ArticleId>,
    ) -> impl Future<Output = anyhow::Result<HashMap<ArticleId, u64>>> + Send;

    /// Returns the subset of the given articles the user has favorited.
    fn favorited_by(
        &self,
        txn: &mut Txn,
        user_id: UserId,
        article_ids: &HashSet<ArticleId>,
    ) -> impl Future<Output = anyhow::Result<HashSet<ArticleId>>> + Send;

    /// Marks the article as favorited by the user.
    ///
    /// Returns `false` if the article already was a favorite of the user.
    fn add(
        &self,
        txn: &mut Txn,
        user_id: UserId,
        article_id: ArticleId,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Removes the article from the user's favorites.
    ///
    /// Returns `false` if the article was not a favorite of the user.
    fn remove(
        &self,
        txn: &mut Txn,
        user_id: UserId,
        article_id: ArticleId,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockFavoriteRepository<Txn> {
    pub fn with_counts_for(
        mut self,
        article_ids: HashSet<ArticleId>,
        result: HashMap<ArticleId, u64>,
    ) -> Self {
        self.expect_counts_for()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(article_ids),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_favorited_by(
        mut self,
        user_id: UserId,
        article_ids: HashSet<ArticleId>,
        result: HashSet<ArticleId>,
    ) -> Self {
        self.expect_favorited_by()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(user_id),
                mockall::predicate::eq(article_ids),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_add(mut self, user_id: UserId, article_id: ArticleId, result: bool) -> Self {
        self.expect_add()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(user_id),
                mockall::predicate::eq(article_id),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_remove(mut self, user_id: UserId, article_id: ArticleId, result: bool) -> Self {
        self.expect_remove()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(user_id),
                mockall::predicate::eq(article_id),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
