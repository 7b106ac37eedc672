use std::sync::Arc;

use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bookly::store::MySqlBookStore;
use bookly::{configure, AppState, Config};

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_state(config: &Config) -> anyhow::Result<AppState> {
    match &config.database_url {
        Some(database_url) => {
            info!("Using MySQL book store");
            let store = MySqlBookStore::connect(database_url)
                .context("failed to create MySQL connection pool")?;
            store
                .init_schema()
                .context("failed to create books table")?;
            Ok(AppState::new(Arc::new(store)))
        }
        None => {
            info!("DATABASE_URL not set, using in-memory book store");
            Ok(AppState::in_memory())
        }
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::from_env()?;
    init_tracing(&config);

    let state = web::Data::new(build_state(&config)?);

    let addr = config.socket_addr();
    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .configure(configure)
    })
    .bind(addr.as_str())
    .with_context(|| format!("failed to bind {}", addr))?
    .run()
    .await?;

    Ok(())
}
