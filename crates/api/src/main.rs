use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app::build_router;
use api::gql::build_schema;
use api::{AppConfig, AppState};
use infra::{seed, Db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let db = Db::new();
    match &config.seed_file {
        Some(path) => {
            let count = seed::load_from_path(&db, path)
                .with_context(|| format!("Failed to seed store from {}", path.display()))?;
            tracing::info!("Seeded store with {} users from {}", count, path.display());
        }
        None => tracing::info!("No SEED_FILE set, starting with an empty store"),
    }

    let state = AppState::new(db);
    let schema = build_schema(state.clone(), config.introspection);
    let app = build_router(state, schema, &config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
