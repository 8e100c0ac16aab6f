mod careers;
mod config;
mod db;
mod errors;
mod matching;
mod models;
mod quiz;
mod render;
mod resumes;
mod routes;
mod state;
#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::matching::jobs::init_job_index;
use crate::matching::skills::SkillMatcher;
use crate::quiz::store::PgQuizStore;
use crate::resumes::store::PgResumeStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerBot v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and bring the schema up to date
    let db = create_pool(&config.database_url, config.database_max_connections).await?;
    run_migrations(&db).await?;

    // Uploaded resumes are written here before extraction
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| format!("Failed to create upload dir {}", config.upload_dir.display()))?;
    info!("Upload directory: {}", config.upload_dir.display());

    // Skill vocabulary is built once and shared read-only for the process lifetime
    let skills = Arc::new(SkillMatcher::new());
    info!(
        "Skill matcher initialized ({} vocabulary entries)",
        skills.vocabulary_len()
    );

    info!("Job map initialized ({} skills)", init_job_index());

    info!(
        "Resume store failure policy: {:?}",
        config.store_failure_policy
    );

    let state = AppState {
        resumes: Arc::new(PgResumeStore::new(db.clone())),
        quiz: Arc::new(PgQuizStore::new(db)),
        skills,
        config: config.clone(),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
