//! JSON film catalog.

use crate::error::{CliError, Result};
use marquee_domain::traits::FilmSource;
use marquee_domain::Film;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Sample catalog shipped with the CLI
pub const SAMPLE_CATALOG: &str = include_str!("../resources/films.json");

/// A film catalog held in memory, read from a JSON array of films.
#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    films: Vec<Film>,
}

impl JsonCatalog {
    /// Parse a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let films: Vec<Film> = serde_json::from_str(json)?;
        Self::from_films(films)
    }

    /// Read a catalog file.
    pub fn open(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;
        tracing::info!(path = %path.display(), films = catalog.len(), "Loaded film catalog");
        Ok(catalog)
    }

    /// The bundled sample catalog.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_CATALOG)
    }

    /// Build a catalog from films, rejecting duplicate ids.
    pub fn from_films(films: Vec<Film>) -> Result<Self> {
        let mut seen = HashSet::new();
        for film in &films {
            if !seen.insert(film.id.as_str()) {
                return Err(CliError::Catalog(format!("duplicate film id '{}'", film.id)));
            }
        }
        Ok(Self { films })
    }

    /// Number of films.
    pub fn len(&self) -> usize {
        self.films.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }
}

impl FilmSource for JsonCatalog {
    type Error = CliError;

    fn all_films(&self) -> Result<Vec<Film>> {
        Ok(self.films.clone())
    }

    fn get_film(&self, id: &str) -> Result<Option<Film>> {
        Ok(self.films.iter().find(|film| film.id == id).cloned())
    }
}
