use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use conduit_core_article_contracts::MockArticleFeatureService;
use conduit_core_comment_contracts::MockCommentFeatureService;
use conduit_core_profile_contracts::MockProfileFeatureService;
use conduit_models::{
    article::{Article, ArticleView},
    user::{ProfileView, User, UserId},
};
use serde_json::Value;
use tower::ServiceExt;

use crate::{extractors::viewer::VIEWER_HEADER, RestServer};


#[derive(Default)]
struct Services {
    article: Option<MockArticleFeatureService>,
    comment: Option<MockCommentFeatureService>,
    profile: Option<MockProfileFeatureService>,
}

impl Services {
    fn router(self) -> Router {
        RestServer {
            article: self.article.unwrap_or_default(),
            comment: self.comment.unwrap_or_default(),
            profile: self.profile.unwrap_or_default(),
        }
        .router()
    }
}

fn request(method: &str, uri: &str, viewer: Option<UserId>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(viewer) = viewer {
        builder = builder.header(VIEWER_HEADER, viewer.to_string());
    }
    match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, body)
}

fn article_view(article: &Article, author: &User, favorites_count: u64) -> ArticleView {
    ArticleView {
        article: article.clone(),
        author: ProfileView::new(author.clone(), false),
        favorites_count,
        favorited: false,
    }
}
