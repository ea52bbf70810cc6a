use conduit_core_article_contracts::{
    commands::create::MockArticleCreateCommandService,
    queries::{
        feed::MockArticleFeedQueryService, list::MockArticleListQueryService,
        list_by_offset::MockArticleListByOffsetQueryService,
    },
    view::MockArticleViewService,
};
use conduit_models::{
    article::{Article, ArticleComposite, ArticleView},
    user::{ProfileView, User},
};
use conduit_persistence_contracts::{
    article::MockArticleRepository, favorite::MockFavoriteRepository, user::MockUserRepository,
    MockDatabase, MockTransaction,
};

use crate::ArticleFeatureServiceImpl;

mod list_articles;

type Sut = ArticleFeatureServiceImpl<
    MockDatabase,
    MockArticleListQueryService<MockTransaction>,
    MockArticleListByOffsetQueryService<MockTransaction>,
    MockArticleFeedQueryService<MockTransaction>,
    MockArticleViewService<MockTransaction>,
    MockArticleCreateCommandService<MockTransaction>,
    MockArticleRepository<MockTransaction>,
    MockFavoriteRepository<MockTransaction>,
    MockUserRepository<MockTransaction>,
>;

fn composite(article: &Article, author: &User) -> ArticleComposite {
    ArticleComposite {
        article: article.clone(),
        author: author.clone(),
    }
}

fn view(composite: ArticleComposite, favorites_count: u64, favorited: bool) -> ArticleView {
    ArticleView {
        article: composite.article,
        author: ProfileView::new(composite.author, false),
        favorites_count,
        favorited,
    }
}
