//! Définition et implémentation des commandes CLI
//!
//! - `serve`: API HTTP (défaut)
//! - `export`: PostGIS → fichiers GeoJSON statiques
//! - `init-schema`: création des tables manquantes

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use sprachkarte::api::{create_router, AppState};
use sprachkarte::export::{self, DEFAULT_OUTPUT_DIR};
use sprachkarte::store::pool::{create_pool, test_connection};
use sprachkarte::store::schema::create_schema;
use sprachkarte::{AppConfig, LanguageAreaCache, PgStore};

#[derive(Subcommand)]
pub enum Commands {
    /// Démarrer l'API HTTP
    Serve,

    /// Exporter PostGIS vers les fichiers GeoJSON statiques (sans serveur HTTP)
    Export {
        /// Répertoire de sortie des fichiers GeoJSON
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,
    },

    /// Créer l'extension PostGIS et les tables manquantes, puis quitter
    InitSchema,
}

fn connect(config: &AppConfig) -> Result<PgStore> {
    println!("Database: {}", config.database.redacted_url());
    let pool = create_pool(&config.database)?;
    Ok(PgStore::new(pool))
}

/// Exécute la commande serve
pub async fn cmd_serve(config: &AppConfig) -> Result<()> {
    let store = connect(config)?;

    if config.create_schema {
        create_schema(store.pool()).await?;
    } else {
        info!("Managed deployment, skipping schema creation");
    }

    // Le cache est rempli avant d'accepter des connexions
    let cache = Arc::new(LanguageAreaCache::new());
    cache.warm_up(&store).await;

    let state = AppState::new(store, cache);
    let router = create_router(state, &config.cors_origins)?;

    let listener = config.bind().await?;
    let addr = listener.local_addr().context("Failed to read listen address")?;
    info!(%addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

/// Exécute la commande export
pub async fn cmd_export(config: &AppConfig, output: &Path) -> Result<()> {
    let store = connect(config)?;
    test_connection(store.pool()).await?;
    println!("Connected to PostgreSQL");

    let started_at = std::time::Instant::now();
    let summary = export::export_static(&store, output).await?;

    println!("\n=== Summary ===");
    println!("Files: {}", summary.files.len());
    println!("Features: {}", summary.total_features());
    println!("Duration: {:.2?}", started_at.elapsed());
    Ok(())
}

/// Exécute la commande init-schema
pub async fn cmd_init_schema(config: &AppConfig) -> Result<()> {
    let store = connect(config)?;
    create_schema(store.pool()).await?;
    println!("Schema ready");
    Ok(())
}
