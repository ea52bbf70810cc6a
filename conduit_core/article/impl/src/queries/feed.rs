use chrono::{DateTime, Utc};
use conduit_core_article_contracts::queries::{
    feed::ArticleFeedQueryService,
    list::{ArticleListQuery, ArticleListQueryService},
};
use conduit_di::Build;
use conduit_models::{
    article::{ArticleFilter, ArticleView},
    pagination::{CursorPage, CursorPageRequest},
    user::UserId,
};
use conduit_persistence_contracts::follow::FollowRepository;
use conduit_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
pub struct ArticleFeedQueryServiceImpl<FollowRepo, ArticleList> {
    follow_repo: FollowRepo,
    article_list: ArticleList,
}

impl<Txn, FollowRepo, ArticleList> ArticleFeedQueryService<Txn>
    for ArticleFeedQueryServiceImpl<FollowRepo, ArticleList>
where
    Txn: Send + Sync + 'static,
    FollowRepo: FollowRepository<Txn>,
    ArticleList: ArticleListQueryService<Txn>,
{
    #[trace_instrument(skip(self, txn))]
    async fn invoke(
        &self,
        txn: &mut Txn,
        viewer: UserId,
        pagination: CursorPageRequest<DateTime<Utc>>,
    ) -> anyhow::Result<CursorPage<ArticleView>> {
        let followed = self.follow_repo.followed_ids(txn, viewer).await?;
        if followed.is_empty() {
            return Ok(CursorPage::empty(pagination.direction()));
        }

        let query = ArticleListQuery {
            filter: ArticleFilter {
                author_ids: Some(followed),
                ..Default::default()
            },
            pagination,
        };

        self.article_list.invoke(txn, Some(viewer), query).await
    }
}
