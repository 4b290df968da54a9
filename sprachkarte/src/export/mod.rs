//! Export statique des GeoJSON pour le frontend
//!
//! Exécution séquentielle, dans cet ordre : zones de langue, zones de
//! dialecte, points audio. Toute erreur (store ou parent manquant) arrête
//! l'export ; les fichiers déjà écrits restent en place.

pub mod geojson;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use sprachkarte_geojson::collection;

use crate::store::{Session, Store};

pub use self::geojson::write_feature_collection;

/// Répertoire de sortie par défaut (relatif au dépôt)
pub const DEFAULT_OUTPUT_DIR: &str = "frontend/geojson";

pub const LANGUAGE_AREAS_FILE: &str = "sprachgebiete.geojson";
pub const DIALECT_AREAS_FILE: &str = "dialektgebiete.geojson";
pub const AUDIO_POINTS_FILE: &str = "audio_punkte.geojson";

/// Un fichier écrit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub features: usize,
}

/// Résultat d'un export complet
#[derive(Debug, Default)]
pub struct ExportSummary {
    pub files: Vec<ExportedFile>,
}

impl ExportSummary {
    pub fn total_features(&self) -> usize {
        self.files.iter().map(|f| f.features).sum()
    }

    fn record(&mut self, path: PathBuf, features: usize) {
        println!("✔ {} written ({} features)", path.display(), features);
        info!(path = %path.display(), features, "GeoJSON written");
        self.files.push(ExportedFile { path, features });
    }
}

/// Exporte les trois fichiers GeoJSON dans `output_dir`
pub async fn export_static<S: Store>(store: &S, output_dir: &Path) -> Result<ExportSummary> {
    std::fs::create_dir_all(output_dir)
        .context(format!("Failed to create directory: {}", output_dir.display()))?;

    let session = store.session().await?;
    let mut summary = ExportSummary::default();

    let languages = session.languages().await?;

    // 1) Zones de langue
    let areas = session.language_areas().await?;
    let families = session.families().await?;
    let fc = collection::language_areas_export(&areas, &languages, &families)
        .context("Failed to project language areas")?;
    let path = output_dir.join(LANGUAGE_AREAS_FILE);
    write_feature_collection(&fc, &path)?;
    summary.record(path, fc.features.len());

    // 2) Zones de dialecte
    let dialects = session.dialects().await?;
    let areas = session.dialect_areas().await?;
    let fc = collection::dialect_areas_export(&areas, &dialects, &languages)
        .context("Failed to project dialect areas")?;
    let path = output_dir.join(DIALECT_AREAS_FILE);
    write_feature_collection(&fc, &path)?;
    summary.record(path, fc.features.len());

    // 3) Points audio
    let points = session.audio_points().await?;
    let fc = collection::audio_points_export(&points, &dialects, &languages)
        .context("Failed to project audio points")?;
    let path = output_dir.join(AUDIO_POINTS_FILE);
    write_feature_collection(&fc, &path)?;
    summary.record(path, fc.features.len());

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service;
    use crate::store::memory::fixtures;
    use ::geojson::{Feature, FeatureCollection};
    use serde_json::json;

    fn temp_output(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sprachkarte_export_{}_{}", name, std::process::id()));
        std::fs::remove_dir_all(&dir).ok();
        dir
    }

    fn read(dir: &Path, file: &str) -> FeatureCollection {
        let content = std::fs::read_to_string(dir.join(file)).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    fn props(feature: &Feature) -> &::geojson::JsonObject {
        feature.properties.as_ref().unwrap()
    }

    #[tokio::test]
    async fn test_export_writes_three_files() {
        let store = fixtures::store();
        let dir = temp_output("three_files");

        let summary = export_static(&store, &dir).await.unwrap();
        let names: Vec<_> = summary
            .files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec![LANGUAGE_AREAS_FILE, DIALECT_AREAS_FILE, AUDIO_POINTS_FILE]);
        assert_eq!(summary.total_features(), 2 + 3 + 2);

        let audio = std::fs::read_to_string(dir.join(AUDIO_POINTS_FILE)).unwrap();
        assert!(audio.contains("München"));

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_export_matches_api() {
        let store = fixtures::store();
        let dir = temp_output("matches_api");
        export_static(&store, &dir).await.unwrap();

        let session = store.session().await.unwrap();

        // Zones de langue : mêmes valeurs, sans `id` côté export
        let api = service::language_areas(&session).await.unwrap();
        let exported = read(&dir, LANGUAGE_AREAS_FILE);
        assert_eq!(api.features.len(), exported.features.len());
        for (a, e) in api.features.iter().zip(&exported.features) {
            assert_eq!(a.geometry, e.geometry);
            let mut expected = props(a).clone();
            expected.remove("id");
            assert_eq!(&expected, props(e));
        }

        // Polygones et points audio de la langue 7
        let api = service::dialect_features(&session, 7).await.unwrap();
        let areas = read(&dir, DIALECT_AREAS_FILE);
        let points = read(&dir, AUDIO_POINTS_FILE);

        for feature in &api.features {
            let p = props(feature);
            let pool = if p["type"] == json!("polygon") { &areas } else { &points };
            let twin = pool
                .features
                .iter()
                .find(|e| e.geometry == feature.geometry)
                .expect("exported twin");
            for (key, value) in p.iter().filter(|(k, _)| k.as_str() != "type") {
                assert_eq!(props(twin).get(key), Some(value), "property {key}");
            }
            assert!(!props(twin).contains_key("type"));
        }

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_export_missing_parent_is_fatal() {
        let store = fixtures::store();
        store.mutate(|t| t.dialects.retain(|d| d.id != 5));
        let dir = temp_output("missing_parent");

        let err = export_static(&store, &dir).await.unwrap_err();
        assert!(format!("{err:#}").contains("references missing Dialekt"));

        // Le premier fichier a été écrit avant l'échec
        assert!(dir.join(LANGUAGE_AREAS_FILE).exists());
        assert!(!dir.join(AUDIO_POINTS_FILE).exists());

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_export_store_failure_is_fatal() {
        let store = fixtures::store();
        store.set_offline(true);
        let dir = temp_output("offline");

        assert!(export_static(&store, &dir).await.is_err());

        std::fs::remove_dir_all(dir).ok();
    }
}
