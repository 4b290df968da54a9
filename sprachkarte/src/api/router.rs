//! Routes et couches HTTP

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;
use crate::store::Store;

/// CORS : liste d'origines explicite, credentials autorisés,
/// méthodes et en-têtes renvoyés tels que demandés
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|o| HeaderValue::from_str(o).context(format!("Invalid CORS origin: {}", o)))
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Construit le routeur complet
pub fn create_router<S: Store>(state: AppState<S>, cors_origins: &[String]) -> Result<Router> {
    let router = Router::new()
        .route("/", get(handlers::root))
        .route("/familien", get(handlers::familien::<S>))
        .route("/sprachen/:familie_id", get(handlers::sprachen::<S>))
        .route("/gebiete", get(handlers::gebiete::<S>))
        .route("/dialekte/:sprache_id", get(handlers::dialekte::<S>))
        .with_state(state)
        .layer(cors_layer(cors_origins)?)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
