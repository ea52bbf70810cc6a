use chrono::{DateTime, Utc};
use conduit_core_comment_contracts::{
    list::CommentListQueryService, CommentAddError, CommentFeatureService, CommentListError,
};
use conduit_di::Build;
use conduit_models::{
    article::ArticleSlug,
    comment::{Comment, CommentBody, CommentView},
    pagination::{CursorPage, CursorPageRequest},
    user::{ProfileView, UserId},
};
use conduit_persistence_contracts::{
    article::ArticleRepository, comment::CommentRepository, user::UserRepository, Database,
    Transaction,
};
use conduit_shared_contracts::{id::IdService, time::TimeService};
use conduit_utils::trace_instrument;

pub mod list;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, Build)]
pub struct CommentFeatureServiceImpl<Db, Id, Time, CommentList, ArticleRepo, CommentRepo, UserRepo>
{
    db: Db,
    id: Id,
    time: Time,
    comment_list: CommentList,
    article_repo: ArticleRepo,
    comment_repo: CommentRepo,
    user_repo: UserRepo,
}

impl<Db, Id, Time, CommentList, ArticleRepo, CommentRepo, UserRepo> CommentFeatureService
    for CommentFeatureServiceImpl<Db, Id, Time, CommentList, ArticleRepo, CommentRepo, UserRepo>
where
    Db: Database,
    Id: IdService,
    Time: TimeService,
    CommentList: CommentListQueryService<Db::Transaction>,
    ArticleRepo: ArticleRepository<Db::Transaction>,
    CommentRepo: CommentRepository<Db::Transaction>,
    UserRepo: UserRepository<Db::Transaction>,
{
    #[trace_instrument(skip(self))]
    async fn list_comments(
        &self,
        viewer: Option<UserId>,
        slug: ArticleSlug,
        pagination: CursorPageRequest<DateTime<Utc>>,
    ) -> Result<CursorPage<CommentView>, CommentListError> {
        let mut txn = self.db.begin_transaction().await?;

        let article = self
            .article_repo
            .get_composite_by_slug(&mut txn, &slug)
            .await?
            .ok_or(CommentListError::NotFound)?
            .article;

        self.comment_list
            .invoke(&mut txn, viewer, article.id, pagination)
            .await
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self))]
    async fn add_comment(
        &self,
        viewer: Option<UserId>,
        slug: ArticleSlug,
        body: CommentBody,
    ) -> Result<CommentView, CommentAddError> {
        let viewer = viewer.ok_or(CommentAddError::InvalidArgument)?;

        let mut txn = self.db.begin_transaction().await?;

        let author = self
            .user_repo
            .get(&mut txn, viewer)
            .await?
            .ok_or(CommentAddError::InvalidArgument)?;

        let article = self
            .article_repo
            .get_composite_by_slug(&mut txn, &slug)
            .await?
            .ok_or(CommentAddError::NotFound)?
            .article;

        let now = self.time.now();
        let comment = Comment {
            id: self.id.generate(),
            article_id: article.id,
            author_id: author.id,
            body,
            created_at: now,
            updated_at: now,
        };
        self.comment_repo.create(&mut txn, &comment).await?;

        txn.commit().await?;

        Ok(CommentView {
            comment,
            author: ProfileView::new(author, false),
        })
    }
}
