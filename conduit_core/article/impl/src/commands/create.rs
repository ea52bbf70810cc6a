use conduit_core_article_contracts::{
    commands::create::{ArticleCreateCommandError, ArticleCreateCommandService},
    ArticleCreateRequest,
};
use conduit_di::Build;
use conduit_models::{
    article::{Article, ArticleSlug},
    user::UserId,
};
use conduit_persistence_contracts::article::{ArticleRepoError, ArticleRepository};
use conduit_shared_contracts::{id::IdService, time::TimeService};
use conduit_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
pub struct ArticleCreateCommandServiceImpl<Id, Time, ArticleRepo> {
    id: Id,
    time: Time,
    article_repo: ArticleRepo,
}

impl<Txn, Id, Time, ArticleRepo> ArticleCreateCommandService<Txn>
    for ArticleCreateCommandServiceImpl<Id, Time, ArticleRepo>
where
    Txn: Send + Sync + 'static,
    Id: IdService,
    Time: TimeService,
    ArticleRepo: ArticleRepository<Txn>,
{
    #[trace_instrument(skip(self, txn))]
    async fn invoke(
        &self,
        txn: &mut Txn,
        author_id: UserId,
        request: ArticleCreateRequest,
    ) -> Result<Article, ArticleCreateCommandError> {
        let now = self.time.now();

        let ArticleCreateRequest {
            title,
            description,
            body,
            tags,
        } = request;

        let article = Article {
            id: self.id.generate(),
            slug: ArticleSlug::from_title(&title),
            title,
            description,
            body,
            tags,
            author_id,
            created_at: now,
            updated_at: now,
        };

        self.article_repo
            .create(txn, &article)
            .await
            .map_err(|err| match err {
                ArticleRepoError::SlugConflict => ArticleCreateCommandError::SlugConflict,
                ArticleRepoError::Other(err) => err.into(),
            })?;

        Ok(article)
    }
}
