//! État partagé des handlers

use std::sync::Arc;

use crate::cache::LanguageAreaCache;
use crate::store::Store;

/// Store + cache, clonés à chaque requête
#[derive(Debug)]
pub struct AppState<S> {
    pub store: S,
    pub cache: Arc<LanguageAreaCache>,
}

impl<S: Store> AppState<S> {
    pub fn new(store: S, cache: Arc<LanguageAreaCache>) -> Self {
        Self { store, cache }
    }
}

impl<S: Clone> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            cache: Arc::clone(&self.cache),
        }
    }
}
