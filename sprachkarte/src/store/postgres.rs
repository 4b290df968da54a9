//! Lecture des tables PostGIS
//!
//! Les géométries sont lues en WKB (`ST_AsBinary`) puis décodées avec geozero.

use anyhow::{Context, Result};
use deadpool_postgres::{Object, Pool};
use geo::Geometry;
use geozero::wkb::Wkb;
use geozero::ToGeo;
use tokio_postgres::types::ToSql;
use tokio_postgres::Row;
use tracing::debug;

use sprachkarte_geojson::{
    AudioPoint, Dialect, DialectArea, Language, LanguageArea, LanguageFamily,
};

use super::{Session, Store};

const FAMILY_COLUMNS: &str = "id, name, beschreibung";
const LANGUAGE_COLUMNS: &str = "id, name, familie_id, iso_code, beschreibung";
const DIALECT_COLUMNS: &str = "id, name, sprache_id, beschreibung, darstellungstyp, zone_code";
const AUDIO_COLUMNS: &str = "id, dialekt_id, name, audio_url, ST_AsBinary(geom) AS geom";

/// Store adossé à un pool deadpool-postgres
#[derive(Clone)]
pub struct PgStore {
    pool: Pool,
}

impl PgStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }
}

impl Store for PgStore {
    type Session = PgSession;

    async fn session(&self) -> Result<PgSession> {
        let client = self
            .pool
            .get()
            .await
            .context("Failed to get connection from pool")?;
        Ok(PgSession { client })
    }
}

/// Connexion empruntée au pool, rendue au drop
pub struct PgSession {
    client: Object,
}

impl PgSession {
    async fn fetch<T>(
        &self,
        what: &str,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
        map: fn(&Row) -> Result<T>,
    ) -> Result<Vec<T>> {
        let rows = self
            .client
            .query(sql, params)
            .await
            .with_context(|| format!("Failed to query {}", what))?;

        debug!(table = what, rows = rows.len(), "Query done");

        rows.iter()
            .map(map)
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("Failed to read {} row", what))
    }
}

impl Session for PgSession {
    async fn families(&self) -> Result<Vec<LanguageFamily>> {
        let sql = format!("SELECT {} FROM sprachfamilien ORDER BY id", FAMILY_COLUMNS);
        self.fetch("sprachfamilien", &sql, &[], family_from_row).await
    }

    async fn languages(&self) -> Result<Vec<Language>> {
        let sql = format!("SELECT {} FROM sprachen ORDER BY id", LANGUAGE_COLUMNS);
        self.fetch("sprachen", &sql, &[], language_from_row).await
    }

    async fn languages_by_family(&self, familie_id: i32) -> Result<Vec<Language>> {
        let sql = format!(
            "SELECT {} FROM sprachen WHERE familie_id = $1 ORDER BY id",
            LANGUAGE_COLUMNS
        );
        self.fetch("sprachen", &sql, &[&familie_id], language_from_row)
            .await
    }

    async fn language(&self, id: i32) -> Result<Option<Language>> {
        let sql = format!("SELECT {} FROM sprachen WHERE id = $1", LANGUAGE_COLUMNS);
        let row = self
            .client
            .query_opt(sql.as_str(), &[&id])
            .await
            .context("Failed to query sprachen")?;

        row.as_ref().map(language_from_row).transpose()
    }

    async fn dialects(&self) -> Result<Vec<Dialect>> {
        let sql = format!("SELECT {} FROM dialekte ORDER BY id", DIALECT_COLUMNS);
        self.fetch("dialekte", &sql, &[], dialect_from_row).await
    }

    async fn dialects_by_language(&self, sprache_id: i32) -> Result<Vec<Dialect>> {
        let sql = format!(
            "SELECT {} FROM dialekte WHERE sprache_id = $1 ORDER BY id",
            DIALECT_COLUMNS
        );
        self.fetch("dialekte", &sql, &[&sprache_id], dialect_from_row)
            .await
    }

    async fn language_areas(&self) -> Result<Vec<LanguageArea>> {
        self.fetch(
            "sprachgebiete",
            "SELECT id, sprache_id, ST_AsBinary(geom) AS geom FROM sprachgebiete ORDER BY id",
            &[],
            language_area_from_row,
        )
        .await
    }

    async fn dialect_areas(&self) -> Result<Vec<DialectArea>> {
        self.fetch(
            "dialektgebiete",
            "SELECT id, dialekt_id, ST_AsBinary(geom) AS geom FROM dialektgebiete ORDER BY id",
            &[],
            dialect_area_from_row,
        )
        .await
    }

    async fn dialect_areas_by_dialect(&self, dialekt_id: i32) -> Result<Vec<DialectArea>> {
        self.fetch(
            "dialektgebiete",
            "SELECT id, dialekt_id, ST_AsBinary(geom) AS geom FROM dialektgebiete \
             WHERE dialekt_id = $1 ORDER BY id",
            &[&dialekt_id],
            dialect_area_from_row,
        )
        .await
    }

    async fn audio_points(&self) -> Result<Vec<AudioPoint>> {
        let sql = format!("SELECT {} FROM audio_punkte ORDER BY id", AUDIO_COLUMNS);
        self.fetch("audio_punkte", &sql, &[], audio_point_from_row)
            .await
    }

    async fn audio_points_by_dialect(&self, dialekt_id: i32) -> Result<Vec<AudioPoint>> {
        let sql = format!(
            "SELECT {} FROM audio_punkte WHERE dialekt_id = $1 ORDER BY id",
            AUDIO_COLUMNS
        );
        self.fetch("audio_punkte", &sql, &[&dialekt_id], audio_point_from_row)
            .await
    }
}

/// Décode une géométrie WKB (ISO/OGC, sans SRID)
pub fn decode_geometry(wkb: Vec<u8>) -> Result<Geometry> {
    Wkb(wkb).to_geo().context("Failed to decode WKB geometry")
}

fn geometry_from_row(row: &Row) -> Result<Geometry> {
    let wkb: Option<Vec<u8>> = row.try_get("geom")?;
    let wkb = wkb.context("Geometry column is NULL")?;
    decode_geometry(wkb)
}

fn family_from_row(row: &Row) -> Result<LanguageFamily> {
    Ok(LanguageFamily {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        beschreibung: row.try_get("beschreibung")?,
    })
}

fn language_from_row(row: &Row) -> Result<Language> {
    Ok(Language {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        familie_id: row.try_get("familie_id")?,
        iso_code: row.try_get("iso_code")?,
        beschreibung: row.try_get("beschreibung")?,
    })
}

fn dialect_from_row(row: &Row) -> Result<Dialect> {
    Ok(Dialect {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        sprache_id: row.try_get("sprache_id")?,
        beschreibung: row.try_get("beschreibung")?,
        darstellungstyp: row.try_get("darstellungstyp")?,
        zone_code: row.try_get("zone_code")?,
    })
}

fn language_area_from_row(row: &Row) -> Result<LanguageArea> {
    Ok(LanguageArea {
        id: row.try_get("id")?,
        sprache_id: row.try_get("sprache_id")?,
        geometry: geometry_from_row(row)?,
    })
}

fn dialect_area_from_row(row: &Row) -> Result<DialectArea> {
    Ok(DialectArea {
        id: row.try_get("id")?,
        dialekt_id: row.try_get("dialekt_id")?,
        geometry: geometry_from_row(row)?,
    })
}

fn audio_point_from_row(row: &Row) -> Result<AudioPoint> {
    Ok(AudioPoint {
        id: row.try_get("id")?,
        dialekt_id: row.try_get("dialekt_id")?,
        name: row.try_get("name")?,
        audio_url: row.try_get("audio_url")?,
        geometry: geometry_from_row(row)?,
    })
}
