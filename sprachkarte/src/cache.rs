//! Cache des zones de langue (`GET /gebiete`)
//!
//! Un seul emplacement, rempli au démarrage avec la FeatureCollection
//! sérialisée. Aucune invalidation : une modification de la base n'est
//! visible qu'après redémarrage du processus.
//!
//! Si le remplissage au démarrage échoue, la prochaine requête retente ;
//! une fois rempli, l'emplacement ne change plus.

use anyhow::{Context, Result};
use bytes::Bytes;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::service;
use crate::store::Store;

/// Emplacement unique, écrit une fois, lu ensuite sans verrou
#[derive(Debug, Default)]
pub struct LanguageAreaCache {
    slot: OnceCell<Bytes>,
}

impl LanguageAreaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contenu actuel, `None` tant que le remplissage n'a pas réussi
    pub fn get(&self) -> Option<&Bytes> {
        self.slot.get()
    }

    pub fn is_populated(&self) -> bool {
        self.slot.initialized()
    }

    /// Remplit l'emplacement avec une session dédiée
    pub async fn populate<S: Store>(&self, store: &S) -> Result<()> {
        self.get_or_populate(store).await.map(|_| ())
    }

    /// Remplit au démarrage ; un échec est journalisé, jamais propagé
    pub async fn warm_up<S: Store>(&self, store: &S) {
        match self.populate(store).await {
            Ok(()) => info!(
                bytes = self.get().map_or(0, |b| b.len()),
                "Language area cache populated"
            ),
            Err(e) => warn!(error = %format!("{e:#}"), "Language area cache population failed"),
        }
    }

    /// Sert depuis l'emplacement, ou le remplit s'il est vide
    pub async fn get_or_populate<S: Store>(&self, store: &S) -> Result<Bytes> {
        let payload = self
            .slot
            .get_or_try_init(|| compute(store))
            .await?;
        Ok(payload.clone())
    }
}

async fn compute<S: Store>(store: &S) -> Result<Bytes> {
    let session = store.session().await?;
    let collection = service::language_areas(&session).await?;
    // La session est rendue au pool ici, avant la sérialisation
    drop(session);

    let json = serde_json::to_vec(&collection).context("Failed to serialize language areas")?;
    Ok(Bytes::from(json))
}
