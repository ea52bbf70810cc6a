use std::{net::IpAddr, sync::Arc};

use aide::{
    axum::ApiRouter,
    openapi::{Info, OpenApi},
};
use axum::{
    response::{IntoResponse, Response},
    routing, Extension, Json, Router,
};
use conduit_core_article_contracts::ArticleFeatureService;
use conduit_core_comment_contracts::CommentFeatureService;
use conduit_core_profile_contracts::ProfileFeatureService;
use conduit_di::Build;
use tokio::net::TcpListener;
use tracing::info;

mod docs;
mod errors;
mod extractors;
mod macros;
mod middlewares;
mod models;
mod routes;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Article, Comment, Profile> {
    article: Article,
    comment: Comment,
    profile: Profile,
}

impl<Article, Comment, Profile> RestServer<Article, Comment, Profile>
where
    Article: ArticleFeatureService,
    Comment: CommentFeatureService,
    Profile: ProfileFeatureService,
{
    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        info!("listening on {}", listener.local_addr()?);
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let mut api = OpenApi {
            info: Info {
                title: "Conduit".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            ..Default::default()
        };

        let router = ApiRouter::new()
            .merge(routes::articles::router(self.article.into()))
            .merge(routes::comments::router(self.comment.into()))
            .merge(routes::profiles::router(self.profile.into()))
            .finish_api(&mut api)
            .route("/openapi.json", routing::get(serve_openapi))
            .merge(docs::router())
            .layer(Extension(Arc::new(api)));

        middlewares::add(router)
    }
}

async fn serve_openapi(Extension(api): Extension<Arc<OpenApi>>) -> Response {
    Json(api.as_ref()).into_response()
}
