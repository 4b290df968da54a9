//! Accès au store géométrique (PostGIS)
//!
//! [`Store`] fabrique des [`Session`]s ; une session vit le temps d'une
//! unité de travail (une requête HTTP, un remplissage du cache, un export)
//! et libère sa connexion quand elle est droppée, succès ou échec.
//!
//! Toutes les lectures sont triées par `id`.

use std::future::Future;

use anyhow::Result;

use sprachkarte_geojson::{
    AudioPoint, Dialect, DialectArea, Language, LanguageArea, LanguageFamily,
};

#[cfg(test)]
pub mod memory;
pub mod pool;
pub mod postgres;
pub mod schema;

pub use postgres::PgStore;

/// Fabrique de sessions
pub trait Store: Clone + Send + Sync + 'static {
    type Session: Session;

    /// Ouvre une session dédiée
    fn session(&self) -> impl Future<Output = Result<Self::Session>> + Send;
}

/// Lectures disponibles sur une session
pub trait Session: Send + Sync {
    fn families(&self) -> impl Future<Output = Result<Vec<LanguageFamily>>> + Send;

    fn languages(&self) -> impl Future<Output = Result<Vec<Language>>> + Send;

    fn languages_by_family(
        &self,
        familie_id: i32,
    ) -> impl Future<Output = Result<Vec<Language>>> + Send;

    /// Recherche d'une langue par identifiant
    fn language(&self, id: i32) -> impl Future<Output = Result<Option<Language>>> + Send;

    fn dialects(&self) -> impl Future<Output = Result<Vec<Dialect>>> + Send;

    fn dialects_by_language(
        &self,
        sprache_id: i32,
    ) -> impl Future<Output = Result<Vec<Dialect>>> + Send;

    fn language_areas(&self) -> impl Future<Output = Result<Vec<LanguageArea>>> + Send;

    fn dialect_areas(&self) -> impl Future<Output = Result<Vec<DialectArea>>> + Send;

    fn dialect_areas_by_dialect(
        &self,
        dialekt_id: i32,
    ) -> impl Future<Output = Result<Vec<DialectArea>>> + Send;

    fn audio_points(&self) -> impl Future<Output = Result<Vec<AudioPoint>>> + Send;

    fn audio_points_by_dialect(
        &self,
        dialekt_id: i32,
    ) -> impl Future<Output = Result<Vec<AudioPoint>>> + Send;
}
