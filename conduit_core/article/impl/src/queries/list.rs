use conduit_core_article_contracts::{
    queries::list::{ArticleListQuery, ArticleListQueryService},
    view::ArticleViewService,
};
use conduit_di::Build;
use conduit_models::{article::ArticleView, pagination::CursorPage, user::UserId};
use conduit_persistence_contracts::article::ArticleRepository;
use conduit_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
pub struct ArticleListQueryServiceImpl<ArticleRepo, ArticleAnnotator> {
    article_repo: ArticleRepo,
    article_view: ArticleAnnotator,
}

impl<Txn, ArticleRepo, ArticleAnnotator> ArticleListQueryService<Txn>
    for ArticleListQueryServiceImpl<ArticleRepo, ArticleAnnotator>
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
        query: ArticleListQuery,
    ) -> anyhow::Result<CursorPage<ArticleView>> {
        let raw = self
            .article_repo
            .list_composites(txn, &query.filter, &query.pagination)
            .await?;

        let (composites, info) = CursorPage::from_slice(raw, &query.pagination).into_parts();
        let views = self.article_view.annotate(txn, viewer, composites).await?;

        Ok(CursorPage::from_parts(views, info))
    }
}

#[cfg(test)]
mod tests {
    use conduit_core_article_contracts::view::MockArticleViewService;
    use conduit_demo::{
        article::{BAR_TOKIO, FOO_ASYNC, FOO_OWNERSHIP},
        user::{BAR, FOO},
    };
    use conduit_models::{
        article::{Article, ArticleComposite, ArticleFilter},
        pagination::{CursorPageRequest, Direction},
        user::{ProfileView, User},
    };
    use conduit_persistence_contracts::article::MockArticleRepository;
    use pretty_assertions::assert_eq;

    use super::*;

    fn composite(article: &Article, author: &User) -> ArticleComposite {
        ArticleComposite {
            article: article.clone(),
            author: author.clone(),
        }
    }

    fn anonymous_view(composite: ArticleComposite) -> ArticleView {
        ArticleView {
            article: composite.article,
            author: ProfileView::new(composite.author, false),
            favorites_count: 0,
            favorited: false,
        }
    }

    #[tokio::test]
    async fn next_page_with_more_data() {
        // Arrange
        let query = ArticleListQuery {
            filter: ArticleFilter::default(),
            pagination: CursorPageRequest::new(None, Some(2), Some(Direction::Next)),
        };
        let raw = vec![
            composite(&FOO_OWNERSHIP, &FOO),
            composite(&FOO_ASYNC, &FOO),
            composite(&BAR_TOKIO, &BAR),
        ];
        let trimmed = raw[..2].to_vec();
        let views = trimmed.iter().cloned().map(anonymous_view).collect::<Vec<_>>();

        let article_repo = MockArticleRepository::new().with_list_composites(
            query.filter.clone(),
            query.pagination.clone(),
            raw,
        );
        let article_view = MockArticleViewService::new().with_annotate(None, trimmed, views.clone());

        let sut = ArticleListQueryServiceImpl {
            article_repo,
            article_view,
        };

        // Act
        let result = sut.invoke(&mut (), None, query).await;

        // Assert
        let result = result.unwrap();
        assert_eq!(result.items(), views);
        assert!(result.has_next());
        assert!(!result.has_previous());
        assert_eq!(
            result.start_cursor().unwrap().encode().unwrap(),
            FOO_OWNERSHIP.created_at.timestamp_millis().to_string()
        );
        assert_eq!(
            result.end_cursor().unwrap().value(),
            Some(&FOO_ASYNC.created_at)
        );
    }

    #[tokio::test]
    async fn previous_page_is_reversed() {
        // Arrange
        let query = ArticleListQuery {
            filter: ArticleFilter {
                author: Some(FOO.name.clone()),
                ..Default::default()
            },
            pagination: CursorPageRequest::new(
                Some(BAR_TOKIO.created_at),
                Some(5),
                Some(Direction::Prev),
            ),
        };
        let raw = vec![composite(&FOO_ASYNC, &FOO), composite(&FOO_OWNERSHIP, &FOO)];
        let reversed = vec![composite(&FOO_OWNERSHIP, &FOO), composite(&FOO_ASYNC, &FOO)];
        let views = reversed
            .iter()
            .cloned()
            .map(anonymous_view)
            .collect::<Vec<_>>();

        let article_repo = MockArticleRepository::new().with_list_composites(
            query.filter.clone(),
            query.pagination.clone(),
            raw,
        );
        let article_view =
            MockArticleViewService::new().with_annotate(Some(BAR.id), reversed, views.clone());

        let sut = ArticleListQueryServiceImpl {
            article_repo,
            article_view,
        };

        // Act
        let result = sut.invoke(&mut (), Some(BAR.id), query).await;

        // Assert
        let result = result.unwrap();
        assert_eq!(result.items(), views);
        assert!(!result.has_next());
        assert!(!result.has_previous());
    }
}
