//! Projection des lignes vers des Features GeoJSON
//!
//! Chaque producteur (endpoint ou fichier d'export) a son propre schéma de
//! propriétés. Les projections API ne peuvent pas échouer : un parent
//! manquant est remplacé par [`UNBEKANNT`] (noms) ou `null` (identifiants).
//! Les projections d'export renvoient [`ProjectionError::MissingParent`].
//!
//! La géométrie est transmise telle quelle : pas de reprojection, de
//! simplification ni de réparation.

use geo::Geometry;
use geojson::{Feature, JsonObject};
use serde_json::{json, Value};

use crate::{
    AudioPoint, Dialect, DialectArea, Language, LanguageArea, LanguageFamily, ProjectionError,
    UNBEKANNT,
};

/// Convertit une géométrie `geo` en géométrie GeoJSON
pub fn to_geojson_geometry(geometry: &Geometry) -> geojson::Geometry {
    geojson::Geometry::new(geojson::Value::from(geometry))
}

fn feature(geometry: &Geometry, properties: Value) -> Feature {
    let properties: JsonObject = match properties {
        Value::Object(map) => map,
        _ => JsonObject::new(),
    };

    Feature {
        bbox: None,
        geometry: Some(to_geojson_geometry(geometry)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Zone de langue pour `GET /gebiete`
///
/// `familie` n'est consultée que si la langue existe.
pub fn language_area(
    area: &LanguageArea,
    sprache: Option<&Language>,
    familie: Option<&LanguageFamily>,
) -> Feature {
    let familie_name = sprache
        .and(familie)
        .map_or(UNBEKANNT, |f| f.name.as_str());

    feature(
        &area.geometry,
        json!({
            "id": area.id,
            "sprache_id": sprache.map(|s| s.id),
            "sprache_name": sprache.map_or(UNBEKANNT, |s| s.name.as_str()),
            "familie": familie_name,
        }),
    )
}

/// Zone de langue pour `sprachgebiete.geojson`
///
/// Pas d'`id` ; `familie` vaut `null` si la famille manque.
pub fn language_area_export(
    area: &LanguageArea,
    sprache: Option<&Language>,
    familie: Option<&LanguageFamily>,
) -> Result<Feature, ProjectionError> {
    let sprache =
        sprache.ok_or_else(|| ProjectionError::missing_parent("Sprachgebiet", area.id, "Sprache"))?;

    Ok(feature(
        &area.geometry,
        json!({
            "sprache_id": sprache.id,
            "sprache_name": sprache.name,
            "familie": familie.map(|f| f.name.as_str()),
        }),
    ))
}

/// Polygone d'un dialecte pour `GET /dialekte/{sprache_id}`
pub fn dialect_polygon(area: &DialectArea, dialekt: &Dialect, sprache_id: i32) -> Feature {
    feature(
        &area.geometry,
        json!({
            "dialekt_id": dialekt.id,
            "dialekt_name": dialekt.name,
            "sprache_id": sprache_id,
            "type": "polygon",
        }),
    )
}

/// Point audio pour `GET /dialekte/{sprache_id}`
pub fn audio_point(point: &AudioPoint, dialekt: &Dialect, sprache: Option<&Language>) -> Feature {
    feature(
        &point.geometry,
        json!({
            "name": point.name,
            "audio_url": point.audio_url,
            "dialekt_id": dialekt.id,
            "dialekt_name": dialekt.name,
            "sprache_id": sprache.map(|s| s.id),
            "sprache_name": sprache.map_or(UNBEKANNT, |s| s.name.as_str()),
            "type": "audio",
        }),
    )
}

/// Zone de dialecte pour `dialektgebiete.geojson`
pub fn dialect_area_export(
    area: &DialectArea,
    dialekt: Option<&Dialect>,
    sprache: Option<&Language>,
) -> Result<Feature, ProjectionError> {
    let dialekt = dialekt
        .ok_or_else(|| ProjectionError::missing_parent("Dialektgebiet", area.id, "Dialekt"))?;
    let sprache =
        sprache.ok_or_else(|| ProjectionError::missing_parent("Dialekt", dialekt.id, "Sprache"))?;

    Ok(feature(
        &area.geometry,
        json!({
            "dialekt_id": dialekt.id,
            "dialekt_name": dialekt.name,
            "sprache_id": sprache.id,
            "sprache_name": sprache.name,
            "darstellungstyp": dialekt.darstellungstyp,
            "zone_code": dialekt.zone_code,
        }),
    ))
}

/// Point audio pour `audio_punkte.geojson` (sans `type`)
pub fn audio_point_export(
    point: &AudioPoint,
    dialekt: Option<&Dialect>,
    sprache: Option<&Language>,
) -> Result<Feature, ProjectionError> {
    let dialekt = dialekt
        .ok_or_else(|| ProjectionError::missing_parent("AudioPunkt", point.id, "Dialekt"))?;
    let sprache =
        sprache.ok_or_else(|| ProjectionError::missing_parent("Dialekt", dialekt.id, "Sprache"))?;

    Ok(feature(
        &point.geometry,
        json!({
            "name": point.name,
            "audio_url": point.audio_url,
            "dialekt_id": dialekt.id,
            "dialekt_name": dialekt.name,
            "sprache_id": sprache.id,
            "sprache_name": sprache.name,
        }),
    ))
}
