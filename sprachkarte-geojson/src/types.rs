//! Types de données pour le crate sprachkarte-geojson
//!
//! Les entités sont des copies en lecture seule des lignes de la base.
//! Les références parentes sont optionnelles : la clé étrangère peut être
//! nulle ou pointer vers une ligne supprimée.

use geo::Geometry;
use serde::Serialize;

/// Une famille de langues (`sprachfamilien`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageFamily {
    pub id: i32,
    pub name: String,
    pub beschreibung: Option<String>,
}

/// Une langue (`sprachen`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Language {
    pub id: i32,
    pub name: String,
    pub familie_id: Option<i32>,
    pub iso_code: Option<String>,
    pub beschreibung: Option<String>,
}

/// Un dialecte (`dialekte`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dialect {
    pub id: i32,
    pub name: String,
    pub sprache_id: Option<i32>,
    pub beschreibung: Option<String>,
    /// Type d'affichage côté carte ("standard" par défaut en base)
    pub darstellungstyp: Option<String>,
    pub zone_code: Option<String>,
}

/// Zone d'une langue (`sprachgebiete`), polygone ou multipolygone
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageArea {
    pub id: i32,
    pub sprache_id: Option<i32>,
    pub geometry: Geometry,
}

/// Zone d'un dialecte (`dialektgebiete`), polygone ou multipolygone
#[derive(Debug, Clone, PartialEq)]
pub struct DialectArea {
    pub id: i32,
    pub dialekt_id: Option<i32>,
    pub geometry: Geometry,
}

/// Point d'enregistrement audio (`audio_punkte`)
#[derive(Debug, Clone, PartialEq)]
pub struct AudioPoint {
    pub id: i32,
    pub dialekt_id: Option<i32>,
    pub name: Option<String>,
    pub audio_url: Option<String>,
    pub geometry: Geometry,
}
