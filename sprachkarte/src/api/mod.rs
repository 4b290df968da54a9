//! API REST (axum)
//!
//! ```text
//! GET /                       {"ok": true}
//! GET /familien               familles de langues
//! GET /sprachen/{familie_id}  langues d'une famille
//! GET /gebiete                FeatureCollection des zones de langue (cache)
//! GET /dialekte/{sprache_id}  polygones + points audio des dialectes
//! ```

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
