use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_ats::ats::{Analyzer, KeywordCatalog};
use resume_ats::config::Config;
use resume_ats::routes::build_router;
use resume_ats::state::AppState;
use resume_ats::store::{AnalysisStore, MemoryStore, RedisStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume-ats v{}", env!("CARGO_PKG_VERSION"));

    // Keyword catalog is loaded once and never mutated afterwards
    let catalog = match &config.keyword_catalog_path {
        Some(path) => KeywordCatalog::load(path)
            .with_context(|| format!("Failed to load keyword catalog from {}", path.display()))?,
        None => KeywordCatalog::builtin(),
    };
    info!(
        groups = catalog.groups().len(),
        keywords = catalog.keywords().count(),
        "Keyword catalog loaded"
    );
    let analyzer = Arc::new(Analyzer::new(Arc::new(catalog)));

    let store: Arc<dyn AnalysisStore> = match &config.redis_url {
        Some(url) => Arc::new(RedisStore::connect(url).await?),
        None => {
            info!("REDIS_URL not set, caching analyses in memory");
            Arc::new(MemoryStore::new())
        }
    };

    let state = AppState {
        config: config.clone(),
        analyzer,
        store,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
