//! # sprachkarte-geojson
//!
//! Projection des entités de la carte des langues (familles, langues,
//! dialectes, zones, points audio) vers des Features GeoJSON.
//!
//! ## Features
//!
//! - Types d'entités en lecture seule, sérialisables tels quels
//! - Projection pure ligne → `geojson::Feature`, un schéma de propriétés par producteur
//! - Résolution explicite des parents par identifiant (pas de navigation implicite)
//! - Substitution `"Unbekannt"`/`null` côté API, erreur fatale côté export
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sprachkarte_geojson::collection;
//!
//! let fc = collection::language_areas(&areas, &languages, &families);
//! println!("{} features", fc.features.len());
//! ```

pub mod collection;
pub mod error;
pub mod projector;
pub mod types;

pub use error::ProjectionError;
pub use types::{AudioPoint, Dialect, DialectArea, Language, LanguageArea, LanguageFamily};

/// Valeur de substitution quand une entité parente est introuvable
pub const UNBEKANNT: &str = "Unbekannt";

/// SRID de toutes les géométries stockées (WGS84)
pub const SRID: u32 = 4326;
