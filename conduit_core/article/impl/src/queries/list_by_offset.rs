use conduit_core_article_contracts::{
    queries::list_by_offset::{ArticleListByOffsetQuery, ArticleListByOffsetQueryService},
    view::ArticleViewService,
};
use conduit_di::Build;
use conduit_models::{article::ArticleView, pagination::Page, user::UserId};
use conduit_persistence_contracts::article::ArticleRepository;
use conduit_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
pub struct ArticleListByOffsetQueryServiceImpl<ArticleRepo, ArticleAnnotator> {
    article_repo: ArticleRepo,
    article_view: ArticleAnnotator,
}

impl<Txn, ArticleRepo, ArticleAnnotator> ArticleListByOffsetQueryService<Txn>
    for ArticleListByOffsetQueryServiceImpl<ArticleRepo, ArticleAnnotator>
where
    Txn: Send + Sync + 'static,
    ArticleRepo: ArticleRepository<Txn>,
    ArticleAnnotator: ArticleViewService<Txn>,
{
    #[trace_instrument(skip(self, txn))]
    async fn invoke(
        &self,
        txn: &mut Txn,
        viewer: Option<UserId>,
        query: ArticleListByOffsetQuery,
    ) -> anyhow::Result<Page<ArticleView>> {
        let total_count = self.article_repo.count(txn, &query.filter).await?;
        let composites = self
            .article_repo
            .list_composites_by_offset(txn, &query.filter, query.pagination)
            .await?;
        let views = self.article_view.annotate(txn, viewer, composites).await?;

        Ok(Page::new(views, total_count))
    }
}
