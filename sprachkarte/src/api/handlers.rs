//! Handlers HTTP
//!
//! Chaque handler ouvre sa propre session, rendue au pool à la fin de la
//! requête quel que soit le résultat. Un identifiant inconnu donne une
//! collection vide, jamais un 404.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use geojson::FeatureCollection;
use serde_json::{json, Value};
use tracing::debug;

use sprachkarte_geojson::{Language, LanguageFamily};

use super::error::ApiResult;
use super::state::AppState;
use crate::service;
use crate::store::{Session, Store};

/// `GET /`
pub async fn root() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// `GET /familien`
pub async fn familien<S: Store>(
    State(state): State<AppState<S>>,
) -> ApiResult<Json<Vec<LanguageFamily>>> {
    let session = state.store.session().await?;
    let families = session.families().await?;
    Ok(Json(families))
}

/// `GET /sprachen/{familie_id}`
pub async fn sprachen<S: Store>(
    State(state): State<AppState<S>>,
    Path(familie_id): Path<i32>,
) -> ApiResult<Json<Vec<Language>>> {
    let session = state.store.session().await?;
    let languages = session.languages_by_family(familie_id).await?;
    debug!(familie_id, count = languages.len(), "Languages by family");
    Ok(Json(languages))
}

/// `GET /gebiete`, servi depuis le cache
pub async fn gebiete<S: Store>(State(state): State<AppState<S>>) -> ApiResult<impl IntoResponse> {
    let payload = state.cache.get_or_populate(&state.store).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], payload))
}

/// `GET /dialekte/{sprache_id}`
pub async fn dialekte<S: Store>(
    State(state): State<AppState<S>>,
    Path(sprache_id): Path<i32>,
) -> ApiResult<Json<FeatureCollection>> {
    let session = state.store.session().await?;
    let collection = service::dialect_features(&session, sprache_id).await?;
    debug!(sprache_id, features = collection.features.len(), "Dialect features");
    Ok(Json(collection))
}
