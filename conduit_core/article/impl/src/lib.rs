use anyhow::anyhow;
use chrono::{DateTime, Utc};
use conduit_core_article_contracts::{
    commands::create::{ArticleCreateCommandError, ArticleCreateCommandService},
    queries::{
        feed::ArticleFeedQueryService,
        list::{ArticleListQuery, ArticleListQueryService},
        list_by_offset::{ArticleListByOffsetQuery, ArticleListByOffsetQueryService},
    },
    view::ArticleViewService,
    ArticleCreateError, ArticleCreateRequest, ArticleFavoriteError, ArticleFeatureService,
    ArticleFeedError, ArticleGetError, ArticleListError,
};
use conduit_di::Build;
use conduit_models::{
    article::{ArticleComposite, ArticleSlug, ArticleView},
    pagination::{CursorPage, CursorPageRequest, Page},
    user::UserId,
};
use conduit_persistence_contracts::{
    article::ArticleRepository, favorite::FavoriteRepository, user::UserRepository, Database,
    Transaction,
};
use conduit_utils::trace_instrument;

pub mod commands;
pub mod queries;
pub mod view;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, Build)]
pub struct ArticleFeatureServiceImpl<
    Db,
    ArticleList,
    ArticleListByOffset,
    ArticleFeed,
    ArticleAnnotator,
    ArticleCreate,
    ArticleRepo,
    FavoriteRepo,
    UserRepo,
> {
    db: Db,
    article_list: ArticleList,
    article_list_by_offset: ArticleListByOffset,
    article_feed: ArticleFeed,
    article_view: ArticleAnnotator,
    article_create: ArticleCreate,
    article_repo: ArticleRepo,
    favorite_repo: FavoriteRepo,
    user_repo: UserRepo,
}

impl<
        Db,
        ArticleList,
        ArticleListByOffset,
        ArticleFeed,
        ArticleAnnotator,
        ArticleCreate,
        ArticleRepo,
        FavoriteRepo,
        UserRepo,
    > ArticleFeatureService
    for ArticleFeatureServiceImpl<
        Db,
        ArticleList,
        ArticleListByOffset,
        ArticleFeed,
        ArticleAnnotator,
        ArticleCreate,
        ArticleRepo,
        FavoriteRepo,
        UserRepo,
    >
where
    Db: Database,
    ArticleList: ArticleListQueryService<Db::Transaction>,
    ArticleListByOffset: ArticleListByOffsetQueryService<Db::Transaction>,
    ArticleFeed: ArticleFeedQueryService<Db::Transaction>,
    ArticleAnnotator: ArticleViewService<Db::Transaction>,
    ArticleCreate: ArticleCreateCommandService<Db::Transaction>,
    ArticleRepo: ArticleRepository<Db::Transaction>,
    FavoriteRepo: FavoriteRepository<Db::Transaction>,
    UserRepo: UserRepository<Db::Transaction>,
{
    #[trace_instrument(skip(self))]
    async fn list_articles(
        &self,
        viewer: Option<UserId>,
        query: ArticleListQuery,
    ) -> Result<CursorPage<ArticleView>, ArticleListError> {
        let mut txn = self.db.begin_transaction().await?;

        self.article_list
            .invoke(&mut txn, viewer, query)
            .await
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self))]
    async fn list_articles_by_offset(
        &self,
        viewer: Option<UserId>,
        query: ArticleListByOffsetQuery,
    ) -> Result<Page<ArticleView>, ArticleListError> {
        let mut txn = self.db.begin_transaction().await?;

        self.article_list_by_offset
            .invoke(&mut txn, viewer, query)
            .await
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self))]
    async fn feed(
        &self,
        viewer: Option<UserId>,
        pagination: CursorPageRequest<DateTime<Utc>>,
    ) -> Result<CursorPage<ArticleView>, ArticleFeedError> {
        let viewer = viewer.ok_or(ArticleFeedError::InvalidArgument)?;

        let mut txn = self.db.begin_transaction().await?;

        self.article_feed
            .invoke(&mut txn, viewer, pagination)
            .await
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self))]
    async fn get_article(
        &self,
        viewer: Option<UserId>,
        slug: ArticleSlug,
    ) -> Result<ArticleView, ArticleGetError> {
        let mut txn = self.db.begin_transaction().await?;

        let composite = self
            .article_repo
            .get_composite_by_slug(&mut txn, &slug)
            .await?
            .ok_or(ArticleGetError::NotFound)?;

        self.annotate_one(&mut txn, viewer, composite)
            .await
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self))]
    async fn create_article(
        &self,
        viewer: Option<UserId>,
        request: ArticleCreateRequest,
    ) -> Result<ArticleView, ArticleCreateError> {
        let viewer = viewer.ok_or(ArticleCreateError::InvalidArgument)?;

        let mut txn = self.db.begin_transaction().await?;

        self.user_repo
            .get(&mut txn, viewer)
            .await?
            .ok_or(ArticleCreateError::InvalidArgument)?;

        let article = self
            .article_create
            .invoke(&mut txn, viewer, request)
            .await
            .map_err(|err| match err {
                ArticleCreateCommandError::SlugConflict => ArticleCreateError::SlugConflict,
                ArticleCreateCommandError::Other(err) => err.into(),
            })?;

        let composite = self
            .article_repo
            .get_composite_by_slug(&mut txn, &article.slug)
            .await?
            .ok_or_else(|| anyhow!("Failed to read back article {:?}", article.id))?;

        let view = self.annotate_one(&mut txn, Some(viewer), composite).await?;

        txn.commit().await?;

        Ok(view)
    }

    #[trace_instrument(skip(self))]
    async fn favorite_article(
        &self,
        viewer: Option<UserId>,
        slug: ArticleSlug,
    ) -> Result<ArticleView, ArticleFavoriteError> {
        let viewer = viewer.ok_or(ArticleFavoriteError::InvalidArgument)?;

        let mut txn = self.db.begin_transaction().await?;

        self.user_repo
            .get(&mut txn, viewer)
            .await?
            .ok_or(ArticleFavoriteError::InvalidArgument)?;

        let composite = self
            .article_repo
            .get_composite_by_slug(&mut txn, &slug)
            .await?
            .ok_or(ArticleFavoriteError::NotFound)?;

        self.favorite_repo
            .add(&mut txn, viewer, composite.article.id)
            .await?;

        let view = self.annotate_one(&mut txn, Some(viewer), composite).await?;

        txn.commit().await?;

        Ok(view)
    }

    #[trace_instrument(skip(self))]
    async fn unfavorite_article(
        &self,
        viewer: Option<UserId>,
        slug: ArticleSlug,
    ) -> Result<ArticleView, ArticleFavoriteError> {
        let viewer = viewer.ok_or(ArticleFavoriteError::InvalidArgument)?;

        let mut txn = self.db.begin_transaction().await?;

        self.user_repo
            .get(&mut txn, viewer)
            .await?
            .ok_or(ArticleFavoriteError::InvalidArgument)?;

        let composite = self
            .article_repo
            .get_composite_by_slug(&mut txn, &slug)
            .await?
            .ok_or(ArticleFavoriteError::NotFound)?;

        self.favorite_repo
            .remove(&mut txn, viewer, composite.article.id)
            .await?;

        let view = self.annotate_one(&mut txn, Some(viewer), composite).await?;

        txn.commit().await?;

        Ok(view)
    }
}

impl<
        Db,
        ArticleList,
        ArticleListByOffset,
        ArticleFeed,
        ArticleAnnotator,
        ArticleCreate,
        ArticleRepo,
        FavoriteRepo,
        UserRepo,
    >
    ArticleFeatureServiceImpl<
        Db,
        ArticleList,
        ArticleListByOffset,
        ArticleFeed,
        ArticleAnnotator,
        ArticleCreate,
        ArticleRepo,
        FavoriteRepo,
        UserRepo,
    >
where
    Db: Database,
    ArticleAnnotator: ArticleViewService<Db::Transaction>,
{
    async fn annotate_one(
        &self,
        txn: &mut Db::Transaction,
        viewer: Option<UserId>,
        composite: ArticleComposite,
    ) -> anyhow::Result<ArticleView> {
        let article_id = composite.article.id;
        self.article_view
            .annotate(txn, viewer, vec![composite])
            .await?
            .pop()
            .ok_or_else(|| anyhow!("No view has been returned for article {article_id:?}"))
    }
}
