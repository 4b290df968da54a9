//! Lectures composées : requêtes store + projection
//!
//! Utilisé par les handlers HTTP et par le remplissage du cache.

use anyhow::{Context, Result};
use futures::try_join;
use geojson::FeatureCollection;
use tracing::debug;

use sprachkarte_geojson::collection::{self, DialectGroup};

use crate::store::Session;

/// Toutes les zones de langue avec langue et famille résolues
pub async fn language_areas<S: Session>(session: &S) -> Result<FeatureCollection> {
    let (areas, languages, families) = try_join!(
        session.language_areas(),
        session.languages(),
        session.families()
    )
    .context("Failed to load language areas")?;

    debug!(areas = areas.len(), "Projecting language areas");
    Ok(collection::language_areas(&areas, &languages, &families))
}

/// Polygones et points audio de tous les dialectes d'une langue
///
/// Une langue sans dialecte donne une collection vide.
pub async fn dialect_features<S: Session>(
    session: &S,
    sprache_id: i32,
) -> Result<FeatureCollection> {
    let dialects = session
        .dialects_by_language(sprache_id)
        .await
        .context("Failed to load dialects")?;

    if dialects.is_empty() {
        return Ok(collection::feature_collection(Vec::new()));
    }

    let sprache = session
        .language(sprache_id)
        .await
        .context("Failed to load language")?;

    let mut groups = Vec::with_capacity(dialects.len());
    for dialect in dialects {
        let (areas, audio_points) = try_join!(
            session.dialect_areas_by_dialect(dialect.id),
            session.audio_points_by_dialect(dialect.id)
        )
        .with_context(|| format!("Failed to load features of dialect {}", dialect.id))?;

        groups.push(DialectGroup {
            dialect,
            areas,
            audio_points,
        });
    }

    Ok(collection::dialect_features(
        sprache_id,
        sprache.as_ref(),
        &groups,
    ))
}
