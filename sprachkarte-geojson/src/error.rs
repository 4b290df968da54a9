//! Types d'erreurs pour le crate sprachkarte-geojson

use thiserror::Error;

/// Erreurs pouvant survenir lors de la projection stricte (export)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    /// La référence parente d'une entité ne pointe vers aucune ligne
    #[error("{entity} {id} references missing {parent}")]
    MissingParent {
        entity: &'static str,
        id: i32,
        parent: &'static str,
    },
}

impl ProjectionError {
    /// Crée une erreur de parent manquant
    pub fn missing_parent(entity: &'static str, id: i32, parent: &'static str) -> Self {
        Self::MissingParent { entity, id, parent }
    }
}
