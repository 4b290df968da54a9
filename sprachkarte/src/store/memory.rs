//! Store en mémoire pour les tests

use std::sync::{Arc, RwLock};

use anyhow::{anyhow, Result};

use sprachkarte_geojson::{
    AudioPoint, Dialect, DialectArea, Language, LanguageArea, LanguageFamily,
};

use super::{Session, Store};

/// Contenu des six tables
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub families: Vec<LanguageFamily>,
    pub languages: Vec<Language>,
    pub dialects: Vec<Dialect>,
    pub language_areas: Vec<LanguageArea>,
    pub dialect_areas: Vec<DialectArea>,
    pub audio_points: Vec<AudioPoint>,
}

#[derive(Debug, Default)]
struct Inner {
    tables: Tables,
    offline: bool,
    sessions_opened: usize,
}

/// Store partagé et mutable ; `set_offline(true)` simule une panne
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new(tables: Tables) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                tables,
                ..Default::default()
            })),
        }
    }

    /// Modifie les tables en place
    pub fn mutate(&self, f: impl FnOnce(&mut Tables)) {
        f(&mut self.inner.write().unwrap().tables);
    }

    pub fn set_offline(&self, offline: bool) {
        self.inner.write().unwrap().offline = offline;
    }

    pub fn sessions_opened(&self) -> usize {
        self.inner.read().unwrap().sessions_opened
    }
}

impl Store for MemoryStore {
    type Session = MemorySession;

    async fn session(&self) -> Result<MemorySession> {
        let mut inner = self.inner.write().unwrap();
        if inner.offline {
            return Err(anyhow!("connection refused"));
        }
        inner.sessions_opened += 1;
        Ok(MemorySession {
            store: self.clone(),
        })
    }
}

pub struct MemorySession {
    store: MemoryStore,
}

impl MemorySession {
    fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> Result<T> {
        let inner = self.store.inner.read().unwrap();
        if inner.offline {
            return Err(anyhow!("connection lost"));
        }
        Ok(f(&inner.tables))
    }
}

fn by_id<T: Clone>(items: &[T], id: impl Fn(&T) -> i32) -> Vec<T> {
    let mut items = items.to_vec();
    items.sort_by_key(|item| id(item));
    items
}

impl Session for MemorySession {
    async fn families(&self) -> Result<Vec<LanguageFamily>> {
        self.read(|t| by_id(&t.families, |f| f.id))
    }

    async fn languages(&self) -> Result<Vec<Language>> {
        self.read(|t| by_id(&t.languages, |l| l.id))
    }

    async fn languages_by_family(&self, familie_id: i32) -> Result<Vec<Language>> {
        self.read(|t| {
            by_id(&t.languages, |l| l.id)
                .into_iter()
                .filter(|l| l.familie_id == Some(familie_id))
                .collect()
        })
    }

    async fn language(&self, id: i32) -> Result<Option<Language>> {
        self.read(|t| t.languages.iter().find(|l| l.id == id).cloned())
    }

    async fn dialects(&self) -> Result<Vec<Dialect>> {
        self.read(|t| by_id(&t.dialects, |d| d.id))
    }

    async fn dialects_by_language(&self, sprache_id: i32) -> Result<Vec<Dialect>> {
        self.read(|t| {
            by_id(&t.dialects, |d| d.id)
                .into_iter()
                .filter(|d| d.sprache_id == Some(sprache_id))
                .collect()
        })
    }

    async fn language_areas(&self) -> Result<Vec<LanguageArea>> {
        self.read(|t| by_id(&t.language_areas, |a| a.id))
    }

    async fn dialect_areas(&self) -> Result<Vec<DialectArea>> {
        self.read(|t| by_id(&t.dialect_areas, |a| a.id))
    }

    async fn dialect_areas_by_dialect(&self, dialekt_id: i32) -> Result<Vec<DialectArea>> {
        self.read(|t| {
            by_id(&t.dialect_areas, |a| a.id)
                .into_iter()
                .filter(|a| a.dialekt_id == Some(dialekt_id))
                .collect()
        })
    }

    async fn audio_points(&self) -> Result<Vec<AudioPoint>> {
        self.read(|t| by_id(&t.audio_points, |p| p.id))
    }

    async fn audio_points_by_dialect(&self, dialekt_id: i32) -> Result<Vec<AudioPoint>> {
        self.read(|t| {
            by_id(&t.audio_points, |p| p.id)
                .into_iter()
                .filter(|p| p.dialekt_id == Some(dialekt_id))
                .collect()
        })
    }
}

/// Jeu de données de test partagé
pub mod fixtures {
    use geo::{Geometry, LineString, Point, Polygon};

    use super::*;

    pub fn square(x: f64, y: f64) -> Geometry {
        Geometry::Polygon(Polygon::new(
            LineString::from(vec![
                (x, y),
                (x + 1.0, y),
                (x + 1.0, y + 1.0),
                (x, y + 1.0),
                (x, y),
            ]),
            vec![],
        ))
    }

    /// Romance > French (7) > Picard (3), Normand (4) ; Germanic > Deutsch (8) > Bairisch (5)
    pub fn tables() -> Tables {
        Tables {
            families: vec![
                LanguageFamily {
                    id: 1,
                    name: "Romance".into(),
                    beschreibung: Some("Romanische Sprachen".into()),
                },
                LanguageFamily {
                    id: 2,
                    name: "Germanisch".into(),
                    beschreibung: None,
                },
            ],
            languages: vec![
                Language {
                    id: 7,
                    name: "French".into(),
                    familie_id: Some(1),
                    iso_code: Some("fr".into()),
                    beschreibung: None,
                },
                Language {
                    id: 8,
                    name: "Deutsch".into(),
                    familie_id: Some(2),
                    iso_code: Some("de".into()),
                    beschreibung: Some("Hochdeutsch und Dialekte".into()),
                },
            ],
            dialects: vec![
                Dialect {
                    id: 4,
                    name: "Normand".into(),
                    sprache_id: Some(7),
                    beschreibung: None,
                    darstellungstyp: Some("standard".into()),
                    zone_code: Some("N2".into()),
                },
                Dialect {
                    id: 3,
                    name: "Picard".into(),
                    sprache_id: Some(7),
                    beschreibung: None,
                    darstellungstyp: Some("schraffiert".into()),
                    zone_code: Some("N1".into()),
                },
                Dialect {
                    id: 5,
                    name: "Bairisch".into(),
                    sprache_id: Some(8),
                    beschreibung: None,
                    darstellungstyp: Some("standard".into()),
                    zone_code: None,
                },
            ],
            language_areas: vec![
                LanguageArea {
                    id: 1,
                    sprache_id: Some(7),
                    geometry: square(0.0, 0.0),
                },
                LanguageArea {
                    id: 2,
                    sprache_id: Some(8),
                    geometry: square(10.0, 48.0),
                },
            ],
            dialect_areas: vec![
                DialectArea {
                    id: 10,
                    dialekt_id: Some(3),
                    geometry: square(2.0, 49.0),
                },
                DialectArea {
                    id: 11,
                    dialekt_id: Some(4),
                    geometry: square(0.0, 49.0),
                },
                DialectArea {
                    id: 12,
                    dialekt_id: Some(5),
                    geometry: square(12.0, 48.0),
                },
            ],
            audio_points: vec![
                AudioPoint {
                    id: 100,
                    dialekt_id: Some(3),
                    name: Some("Amiens".into()),
                    audio_url: Some("https://audio.example/amiens.mp3".into()),
                    geometry: Geometry::Point(Point::new(2.3, 49.9)),
                },
                AudioPoint {
                    id: 101,
                    dialekt_id: Some(5),
                    name: Some("München".into()),
                    audio_url: Some("https://audio.example/münchen.mp3".into()),
                    geometry: Geometry::Point(Point::new(11.58, 48.14)),
                },
            ],
        }
    }

    pub fn store() -> MemoryStore {
        MemoryStore::new(tables())
    }
}
