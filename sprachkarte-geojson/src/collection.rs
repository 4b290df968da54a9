//! Assemblage des FeatureCollections
//!
//! Les parents sont résolus explicitement : chaque table parente est indexée
//! par identifiant, puis chaque clé étrangère est recherchée dans l'index.
//! L'ordre des features suit l'ordre des lignes enfants fournies.

use std::collections::HashMap;

use geojson::{Feature, FeatureCollection};
use tracing::debug;

use crate::projector;
use crate::{
    AudioPoint, Dialect, DialectArea, Language, LanguageArea, LanguageFamily, ProjectionError,
};

/// Un dialecte avec ses zones et ses points audio, dans l'ordre du store
#[derive(Debug, Clone)]
pub struct DialectGroup {
    pub dialect: Dialect,
    pub areas: Vec<DialectArea>,
    pub audio_points: Vec<AudioPoint>,
}

/// Construit une FeatureCollection sans bbox ni membres étrangers
pub fn feature_collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn index_by_id<T>(items: &[T], id: impl Fn(&T) -> i32) -> HashMap<i32, &T> {
    items.iter().map(|item| (id(item), item)).collect()
}

fn lookup<'a, T>(index: &HashMap<i32, &'a T>, id: Option<i32>) -> Option<&'a T> {
    id.and_then(|id| index.get(&id).copied())
}

/// Toutes les zones de langue, schéma API (`GET /gebiete`)
pub fn language_areas(
    areas: &[LanguageArea],
    languages: &[Language],
    families: &[LanguageFamily],
) -> FeatureCollection {
    let languages = index_by_id(languages, |l| l.id);
    let families = index_by_id(families, |f| f.id);

    let features = areas
        .iter()
        .map(|area| {
            let sprache = lookup(&languages, area.sprache_id);
            let familie = sprache.and_then(|s| lookup(&families, s.familie_id));
            if sprache.is_none() {
                debug!(area_id = area.id, sprache_id = ?area.sprache_id, "Language area without language");
            }
            projector::language_area(area, sprache, familie)
        })
        .collect();

    feature_collection(features)
}

/// Toutes les zones de langue, schéma export (`sprachgebiete.geojson`)
pub fn language_areas_export(
    areas: &[LanguageArea],
    languages: &[Language],
    families: &[LanguageFamily],
) -> Result<FeatureCollection, ProjectionError> {
    let languages = index_by_id(languages, |l| l.id);
    let families = index_by_id(families, |f| f.id);

    let features = areas
        .iter()
        .map(|area| {
            let sprache = lookup(&languages, area.sprache_id);
            let familie = sprache.and_then(|s| lookup(&families, s.familie_id));
            projector::language_area_export(area, sprache, familie)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(feature_collection(features))
}

/// Toutes les zones de dialecte, schéma export (`dialektgebiete.geojson`)
pub fn dialect_areas_export(
    areas: &[DialectArea],
    dialects: &[Dialect],
    languages: &[Language],
) -> Result<FeatureCollection, ProjectionError> {
    let dialects = index_by_id(dialects, |d| d.id);
    let languages = index_by_id(languages, |l| l.id);

    let features = areas
        .iter()
        .map(|area| {
            let dialekt = lookup(&dialects, area.dialekt_id);
            let sprache = dialekt.and_then(|d| lookup(&languages, d.sprache_id));
            projector::dialect_area_export(area, dialekt, sprache)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(feature_collection(features))
}

/// Tous les points audio, schéma export (`audio_punkte.geojson`)
pub fn audio_points_export(
    points: &[AudioPoint],
    dialects: &[Dialect],
    languages: &[Language],
) -> Result<FeatureCollection, ProjectionError> {
    let dialects = index_by_id(dialects, |d| d.id);
    let languages = index_by_id(languages, |l| l.id);

    let features = points
        .iter()
        .map(|point| {
            let dialekt = lookup(&dialects, point.dialekt_id);
            let sprache = dialekt.and_then(|d| lookup(&languages, d.sprache_id));
            projector::audio_point_export(point, dialekt, sprache)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(feature_collection(features))
}

/// Features d'une langue pour `GET /dialekte/{sprache_id}`
///
/// Pour chaque dialecte, dans l'ordre donné : tous ses polygones puis tous
/// ses points audio. `sprache` est la langue demandée si elle existe.
pub fn dialect_features(
    sprache_id: i32,
    sprache: Option<&Language>,
    groups: &[DialectGroup],
) -> FeatureCollection {
    let mut features = Vec::new();

    for group in groups {
        features.extend(
            group
                .areas
                .iter()
                .map(|area| projector::dialect_polygon(area, &group.dialect, sprache_id)),
        );
        features.extend(
            group
                .audio_points
                .iter()
                .map(|point| projector::audio_point(point, &group.dialect, sprache)),
        );
    }

    feature_collection(features)
}
