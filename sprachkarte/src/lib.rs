//! # sprachkarte
//!
//! API REST et export GeoJSON statique pour la carte des langues
//! (familles, langues, dialectes, zones, points audio) stockée dans PostGIS.
//!
//! ## Features
//!
//! - API axum en lecture seule (`/familien`, `/sprachen`, `/gebiete`, `/dialekte`)
//! - Cache à emplacement unique pour `/gebiete`, rempli au démarrage
//! - Export des trois fichiers GeoJSON du frontend sans passer par HTTP
//! - Pool de connexions deadpool-postgres, TLS optionnel
//!
//! ## Usage CLI
//!
//! ```bash
//! # Serveur HTTP (défaut)
//! sprachkarte serve
//!
//! # Export GeoJSON statique
//! sprachkarte export --output frontend/geojson
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod export;
pub mod service;
pub mod store;

pub use cache::LanguageAreaCache;
pub use config::AppConfig;
pub use store::pool::{create_pool, DatabaseConfig};
pub use store::{PgStore, Session, Store};
