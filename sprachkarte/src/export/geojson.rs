//! Écriture des fichiers GeoJSON
//!
//! UTF-8, indentation de 2 espaces, caractères non ASCII écrits tels quels.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use geojson::FeatureCollection;

/// Écrit une FeatureCollection dans un fichier
pub fn write_feature_collection(collection: &FeatureCollection, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, collection)
        .context(format!("Failed to write GeoJSON: {}", output_path.display()))?;
    writer.flush()?;

    Ok(())
}
