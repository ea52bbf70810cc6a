use std::sync::Arc;

use aide::{
    axum::{routing, ApiRouter},
    transform::TransformOperation,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use conduit_core_article_contracts::{
    queries::{list::ArticleListQuery, list_by_offset::ArticleListByOffsetQuery},
    ArticleCreateError, ArticleCreateRequest, ArticleFavoriteError, ArticleFeatureService,
    ArticleFeedError, ArticleGetError, ArticleListError,
};
use conduit_models::{
    article::{
        ArticleBody, ArticleDescription, ArticleTitle, ArticleView, TagList, TagName,
    },
    pagination::CursorPage,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::PathSlug;
use crate::{
    docs::TransformOperationExt,
    error_code,
    errors::{
        internal_server_error, internal_server_error_docs, InvalidCursorError,
        ViewerRequiredError,
    },
    extractors::viewer::Viewer,
    models::{
        article::{ApiArticle, ApiArticleFilter},
        ApiCursorPage, ApiCursorQuery, ApiPage, ApiPageQuery,
    },
};

pub const TAG: &str = "Article";

pub fn router(service: Arc<impl ArticleFeatureService>) -> ApiRouter<()> {
    ApiRouter::new()
        .api_route(
            "/articles",
            routing::get_with(list, list_docs).post_with(create, create_docs),
        )
        .api_route("/articles/paged", routing::get_with(list_paged, list_paged_docs))
        .api_route("/articles/feed", routing::get_with(feed, feed_docs))
        .api_route("/articles/:slug", routing::get_with(get, get_docs))
        .api_route(
            "/articles/:slug/favorite",
            routing::post_with(favorite, favorite_docs).delete_with(unfavorite, unfavorite_docs),
        )
        .with_state(service)
        .with_path_items(|op| op.tag(TAG))
}

fn article_page_response(page: CursorPage<ArticleView>) -> Response {
    match ApiCursorPage::try_from_page(page, ApiArticle::from) {
        Ok(page) => Json(page).into_response(),
        Err(err) => internal_server_error(err),
    }
}

async fn list(
    service: State<Arc<impl ArticleFeatureService>>,
    viewer: Viewer,
    Query(pagination): Query<ApiCursorQuery>,
    Query(filter): Query<ApiArticleFilter>,
) -> Response {
    let Ok(pagination) = pagination.into_request() else {
        return InvalidCursorError.into_response();
    };

    match service
        .list_articles(
            viewer.0,
            ArticleListQuery {
                filter: filter.into(),
                pagination,
            },
        )
        .await
    {
        Ok(page) => article_page_response(page),
        Err(ArticleListError::Other(err)) => internal_server_error(err),
    }
}

fn list_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Return one page of the articles matching the given filter.")
        .add_response::<ApiCursorPage<ApiArticle>>(StatusCode::OK, None)
        .add_error::<InvalidCursorError>()
        .with(internal_server_error_docs)
}

async fn list_paged(
    service: State<Arc<impl ArticleFeatureService>>,
    viewer: Viewer,
    Query(pagination): Query<ApiPageQuery>,
    Query(filter): Query<ApiArticleFilter>,
) -> Response {
    match service
        .list_articles_by_offset(
            viewer.0,
            ArticleListByOffsetQuery {
                filter: filter.into(),
                pagination: pagination.into(),
            },
        )
        .await
    {
        Ok(page) => Json(ApiPage::from_page(page, ApiArticle::from)).into_response(),
        Err(ArticleListError::Other(err)) => internal_server_error(err),
    }
}

fn list_paged_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Return the articles matching the given filter using offset based pagination.")
        .description("Articles are ordered newest first.")
        .add_response::<ApiPage<ApiArticle>>(StatusCode::OK, None)
        .with(internal_server_error_docs)
}

async fn feed(
    service: State<Arc<impl ArticleFeatureService>>,
    viewer: Viewer,
    Query(pagination): Query<ApiCursorQuery>,
) -> Response {
    let Ok(pagination) = pagination.into_request() else {
        return InvalidCursorError.into_response();
    };

    match service.feed(viewer.0, pagination).await {
        Ok(page) => article_page_response(page),
        Err(ArticleFeedError::InvalidArgument) => ViewerRequiredError.into_response(),
        Err(ArticleFeedError::Other(err)) => internal_server_error(err),
    }
}

fn feed_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Return one page of the articles written by users the viewer follows.")
        .add_response::<ApiCursorPage<ApiArticle>>(StatusCode::OK, None)
        .add_error::<InvalidCursorError>()
        .add_error::<ViewerRequiredError>()
        .with(internal_server_error_docs)
}

async fn get(
    service: State<Arc<impl ArticleFeatureService>>,
    viewer: Viewer,
    Path(PathSlug { slug }): Path<PathSlug>,
) -> Response {
    match service.get_article(viewer.0, slug).await {
        Ok(article) => Json(ApiArticle::from(article)).into_response(),
        Err(ArticleGetError::NotFound) => ArticleNotFoundError.into_response(),
        Err(ArticleGetError::Other(err)) => internal_server_error(err),
    }
}

fn get_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Return the article with the given slug.")
        .add_response::<ApiArticle>(StatusCode::OK, None)
        .add_error::<ArticleNotFoundError>()
        .with(internal_server_error_docs)
}

#[derive(Deserialize, JsonSchema)]
struct CreateRequest {
    title: ArticleTitle,
    description: ArticleDescription,
    body: ArticleBody,
    #[serde(default)]
    tags: Vec<TagName>,
}

async fn create(
    service: State<Arc<impl ArticleFeatureService>>,
    viewer: Viewer,
    Json(CreateRequest {
        title,
        description,
        body,
        tags,
    }): Json<CreateRequest>,
) -> Response {
    let Ok(tags) = TagList::try_new(tags) else {
        return TooManyTagsError.into_response();
    };

    match service
        .create_article(
            viewer.0,
            ArticleCreateRequest {
                title,
                description,
                body,
                tags,
            },
        )
        .await
    {
        Ok(article) => (StatusCode::CREATED, Json(ApiArticle::from(article))).into_response(),
        Err(ArticleCreateError::InvalidArgument) => ViewerRequiredError.into_response(),
        Err(ArticleCreateError::SlugConflict) => ArticleAlreadyExistsError.into_response(),
        Err(ArticleCreateError::Other(err)) => internal_server_error(err),
    }
}

fn create_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Publish a new article written by the viewer.")
        .description("The slug of the article is derived from its title.")
        .add_response::<ApiArticle>(StatusCode::CREATED, None)
        .add_error::<TooManyTagsError>()
        .add_error::<ViewerRequiredError>()
        .add_error::<ArticleAlreadyExistsError>()
        .with(internal_server_error_docs)
}

async fn favorite(
    service: State<Arc<impl ArticleFeatureService>>,
    viewer: Viewer,
    Path(PathSlug { slug }): Path<PathSlug>,
) -> Response {
    favorite_response(service.favorite_article(viewer.0, slug).await)
}

fn favorite_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Add the article to the viewer's favorites.")
        .with(favorite_response_docs)
}

async fn unfavorite(
    service: State<Arc<impl ArticleFeatureService>>,
    viewer: Viewer,
    Path(PathSlug { slug }): Path<PathSlug>,
) -> Response {
    favorite_response(service.unfavorite_article(viewer.0, slug).await)
}

fn unfavorite_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Remove the article from the viewer's favorites.")
        .with(favorite_response_docs)
}

fn favorite_response(
    result: Result<ArticleView, ArticleFavoriteError>,
) -> Response {
    match result {
        Ok(article) => Json(ApiArticle::from(article)).into_response(),
        Err(ArticleFavoriteError::InvalidArgument) => ViewerRequiredError.into_response(),
        Err(ArticleFavoriteError::NotFound) => ArticleNotFoundError.into_response(),
        Err(ArticleFavoriteError::Other(err)) => internal_server_error(err),
    }
}

fn favorite_response_docs(op: TransformOperation) -> TransformOperation {
    op.add_response::<ApiArticle>(StatusCode::OK, None)
        .add_error::<ViewerRequiredError>()
        .add_error::<ArticleNotFoundError>()
        .with(internal_server_error_docs)
}

error_code! {
    /// The article does not exist.
    pub ArticleNotFoundError(NOT_FOUND, "Article not found");
    /// An article with the same slug already exists.
    pub ArticleAlreadyExistsError(CONFLICT, "Article already exists");
    /// An article can have at most 16 tags.
    pub TooManyTagsError(UNPROCESSABLE_ENTITY, "Too many tags");
}
