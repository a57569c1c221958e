use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use quotable_core::quotes::{QuoteService, QuoteServiceTrait};
use quotable_quote_source::{QuoteSourceTrait, RestQuoteSource};
use quotable_storage_sqlite::{db, quotes::QuoteRepository};

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait + Send + Sync>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("QUOTABLE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Build the application state with the real external quote source.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let quote_source: Arc<dyn QuoteSourceTrait> =
        Arc::new(RestQuoteSource::new(&config.source_url));
    build_state_with_source(config, quote_source).await
}

/// Build the application state with an injected quote source. Tests use this
/// to swap the external collaborator for a mock.
pub async fn build_state_with_source(
    config: &Config,
    quote_source: Arc<dyn QuoteSourceTrait>,
) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer(pool.clone());

    let quote_repo = Arc::new(QuoteRepository::new(pool, writer));
    let quote_service: Arc<dyn QuoteServiceTrait + Send + Sync> =
        Arc::new(QuoteService::new(quote_repo, quote_source));

    Ok(Arc::new(AppState {
        quote_service,
        db_path,
    }))
}
