//! Spellbook Engine - Main entry point.

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spellbook_engine::{
    api,
    infrastructure::{
        clock::SystemClock,
        content_sources::{FixtureSpellSource, JsonFileSpellSource},
        ports::{ClockPort, SpellSource, StoragePort},
        storage::FileStorage,
    },
    use_cases::{MockAuth, SpellCatalog},
    App, AppConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spellbook_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Spellbook Engine");

    let config = AppConfig::from_env();

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());

    let source: Arc<dyn SpellSource> = match &config.spells_path {
        Some(path) => {
            let source = JsonFileSpellSource::new(path);
            tracing::info!(
                path = %source.path().display(),
                "SPELLBOOK_SPELLS_PATH configured, loading spells from file"
            );
            Arc::new(source)
        }
        None => Arc::new(FixtureSpellSource::new()),
    };

    let storage = match &config.storage_path {
        Some(path) => FileStorage::new(path),
        None => FileStorage::at_default_location(),
    };
    tracing::info!(path = %storage.path().display(), "Session storage");
    let storage: Arc<dyn StoragePort> = Arc::new(storage);

    let catalog = Arc::new(SpellCatalog::new(source, clock));
    catalog.load().await?;

    let auth = Arc::new(MockAuth::with_delay(storage, config.auth_delay));
    if let Err(e) = auth.restore().await {
        tracing::warn!(error = %e, "Failed to restore session, starting signed out");
    }

    let app = Arc::new(App::new(catalog, auth));

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(config.cors_allowed_origins.as_deref()) {
        router = router.layer(cors);
    }

    let addr = config.bind_address();
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins?;

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        // JSON bodies on POST /api/spells trigger preflights.
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
