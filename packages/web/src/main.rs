use anyhow::Context as _;
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use web::settings::Settings;
use web::{router, session_layer, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::new().context("Failed to load settings")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log)),
        )
        .init();

    // SQLite will not create missing parent directories
    if let Some(path) = settings.database.file_path() {
        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
    }

    // Initialize database pool
    let pool = api::db::connect(&settings.database.url, settings.database.connections)
        .await
        .context("Failed to connect to database")?;

    // Run migrations
    api::db::migrate(&pool)
        .await
        .context("Failed to run migrations")?;

    // Create session store
    let session_store = SqliteStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .context("Failed to migrate session store")?;

    let app = router(
        AppState::new(pool),
        session_layer(session_store, &settings.session),
    );

    let addr = settings.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}
