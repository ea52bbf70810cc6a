use conduit_core_article_impl::{
    commands::create::ArticleCreateCommandServiceImpl,
    queries::{
        feed::ArticleFeedQueryServiceImpl, list::ArticleListQueryServiceImpl,
        list_by_offset::ArticleListByOffsetQueryServiceImpl,
    },
    view::ArticleViewServiceImpl,
    ArticleFeatureServiceImpl,
};
use conduit_core_comment_impl::{list::CommentListQueryServiceImpl, CommentFeatureServiceImpl};
use conduit_core_profile_impl::ProfileFeatureServiceImpl;
use conduit_persistence_memory::{
    article::MemoryArticleRepository, comment::MemoryCommentRepository,
    favorite::MemoryFavoriteRepository, follow::MemoryFollowRepository,
    user::MemoryUserRepository, MemoryDatabase,
};
use conduit_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};

// API
pub type RestServer = conduit_api_rest::RestServer<ArticleFeature, CommentFeature, ProfileFeature>;

// Persistence
pub type Database = MemoryDatabase;
pub type ArticleRepo = MemoryArticleRepository;
pub type CommentRepo = MemoryCommentRepository;
pub type FavoriteRepo = MemoryFavoriteRepository;
pub type FollowRepo = MemoryFollowRepository;
pub type UserRepo = MemoryUserRepository;

// Shared
pub type Id = IdServiceImpl;
pub type Time = TimeServiceImpl;

// Core
pub type ArticleFeature = ArticleFeatureServiceImpl<
    Database,
    ArticleList,
    ArticleListByOffset,
    ArticleFeed,
    ArticleView,
    ArticleCreate,
    ArticleRepo,
    FavoriteRepo,
    UserRepo,
>;
pub type ArticleView = ArticleViewServiceImpl<FavoriteRepo, FollowRepo>;
pub type ArticleList = ArticleListQueryServiceImpl<ArticleRepo, ArticleView>;
pub type ArticleListByOffset = ArticleListByOffsetQueryServiceImpl<ArticleRepo, ArticleView>;
pub type ArticleFeed = ArticleFeedQueryServiceImpl<FollowRepo, ArticleList>;
pub type ArticleCreate = ArticleCreateCommandServiceImpl<Id, Time, ArticleRepo>;

pub type CommentFeature =
    CommentFeatureServiceImpl<Database, Id, Time, CommentList, ArticleRepo, CommentRepo, UserRepo>;
pub type CommentList = CommentListQueryServiceImpl<CommentRepo, FollowRepo>;

pub type ProfileFeature = ProfileFeatureServiceImpl<Database, UserRepo, FollowRepo>;
