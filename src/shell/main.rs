use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use activities::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use activities::modules::activities::core::seed::{default_activities, load_activities_file};
use activities::shell::config::AppConfig;
use activities::shell::http;
use activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let activities = match &config.seed_file {
        Some(path) => {
            tracing::info!("Loading activities from {}", path.display());
            load_activities_file(path)?
        }
        None => default_activities(),
    };
    tracing::info!("Seeded {} activities", activities.len());

    let store = Arc::new(InMemoryActivityStore::with_activities(activities));
    let app = http::app(AppState::in_memory(store), &config.static_dir);

    let addr = config.socket_addr();
    tracing::info!("Activities endpoint: http://{}/activities", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {error}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
