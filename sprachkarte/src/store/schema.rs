//! Création des tables (développement local)
//!
//! Idempotent : `CREATE ... IF NOT EXISTS` uniquement, aucune migration.

use anyhow::{Context, Result};
use deadpool_postgres::Pool;
use tracing::{info, warn};

use sprachkarte_geojson::SRID;

/// Ordre de création : parents avant enfants (clés étrangères)
pub const TABLES: &[&str] = &[
    "sprachfamilien",
    "sprachen",
    "dialekte",
    "sprachgebiete",
    "dialektgebiete",
    "audio_punkte",
];

fn table_ddl(table: &str) -> Option<String> {
    let columns = match table {
        "sprachfamilien" => "id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL UNIQUE,
            beschreibung TEXT"
            .to_string(),
        "sprachen" => "id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL UNIQUE,
            familie_id INTEGER REFERENCES sprachfamilien(id),
            iso_code VARCHAR(10),
            beschreibung TEXT"
            .to_string(),
        "dialekte" => "id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            sprache_id INTEGER REFERENCES sprachen(id),
            beschreibung TEXT,
            darstellungstyp VARCHAR(20) DEFAULT 'standard',
            zone_code VARCHAR(20)"
            .to_string(),
        "sprachgebiete" => format!(
            "id SERIAL PRIMARY KEY,
            sprache_id INTEGER REFERENCES sprachen(id),
            geom geometry(MULTIPOLYGON, {SRID})"
        ),
        "dialektgebiete" => format!(
            "id SERIAL PRIMARY KEY,
            dialekt_id INTEGER REFERENCES dialekte(id),
            geom geometry(MULTIPOLYGON, {SRID})"
        ),
        "audio_punkte" => format!(
            "id SERIAL PRIMARY KEY,
            dialekt_id INTEGER REFERENCES dialekte(id),
            name VARCHAR(100),
            audio_url TEXT,
            geom geometry(POINT, {SRID})"
        ),
        _ => return None,
    };

    Some(format!("CREATE TABLE IF NOT EXISTS {} ({})", table, columns))
}

/// Crée l'extension PostGIS et les tables manquantes
pub async fn create_schema(pool: &Pool) -> Result<()> {
    let client = pool.get().await?;

    // Activer PostGIS si nécessaire (peut nécessiter des droits superuser).
    // Si l'extension existe déjà mais que l'utilisateur ne peut pas la (re)créer,
    // on dégrade gracieusement.
    match client
        .execute("CREATE EXTENSION IF NOT EXISTS postgis", &[])
        .await
    {
        Ok(_) => {}
        Err(e) => {
            warn!("CREATE EXTENSION postgis failed (will check if already installed): {e}");
            let exists = client
                .query_opt("SELECT 1 FROM pg_extension WHERE extname = 'postgis'", &[])
                .await
                .context("Failed to check pg_extension")?
                .is_some();
            if !exists {
                return Err(anyhow::anyhow!(
                    "PostGIS extension is not installed and could not be created: {e}"
                ));
            }
        }
    }

    for table in TABLES {
        let Some(sql) = table_ddl(table) else {
            continue;
        };
        client
            .execute(&sql, &[])
            .await
            .with_context(|| format!("Failed to create table {}", table))?;
    }

    info!(tables = TABLES.len(), "Schema ready");
    Ok(())
}
