use conduit_config::Config;
use conduit_di::Provide;
use conduit_persistence_contracts::{Database, Transaction};
use conduit_persistence_memory::{
    article::MemoryArticleRepository, comment::MemoryCommentRepository,
    favorite::MemoryFavoriteRepository, follow::MemoryFollowRepository,
    user::MemoryUserRepository, MemoryDatabase,
};
use tracing::info;

use crate::environment::{types::RestServer, Provider};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let database = MemoryDatabase::new();

    if config.demo.seed {
        info!("Seeding demo data");
        seed(&database).await?;
    }

    let mut provider = Provider::new(database);
    let server: RestServer = provider.provide();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}

async fn seed(database: &MemoryDatabase) -> anyhow::Result<()> {
    let mut txn = database.begin_transaction().await?;
    conduit_demo::create(
        &mut txn,
        MemoryUserRepository,
        MemoryArticleRepository,
        MemoryCommentRepository,
        MemoryFavoriteRepository,
        MemoryFollowRepository,
    )
    .await?;
    txn.commit().await
}
