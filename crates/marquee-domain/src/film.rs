//! Film records
//!
//! A film is a plain data record populated by whatever data-access layer is in
//! use. Only its [`QualityScores`] feed the fuzzy evaluation.

use crate::person::Person;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input variable name for the direction score
pub const DIRECTION: &str = "direction";
/// Input variable name for the acting score
pub const ACTING: &str = "acting";
/// Input variable name for the screenplay score
pub const SCREENPLAY: &str = "screenplay";
/// Input variable name for the visual effects score
pub const VISUAL_EFFECTS: &str = "visualEffects";
/// Input variable name for the cultural significance score
pub const CULTURAL_SIGNIFICANCE: &str = "culturalSignificance";

/// The five crisp quality signals of a film, each on a 0-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct QualityScores {
    /// Direction score
    pub direction: f64,

    /// Acting score
    pub acting: f64,

    /// Screenplay score
    pub screenplay: f64,

    /// Visual effects score
    pub visual_effects: f64,

    /// Cultural significance score
    pub cultural_significance: f64,
}

impl QualityScores {
    /// Create a score set
    pub fn new(
        direction: f64,
        acting: f64,
        screenplay: f64,
        visual_effects: f64,
        cultural_significance: f64,
    ) -> Self {
        Self {
            direction,
            acting,
            screenplay,
            visual_effects,
            cultural_significance,
        }
    }

    /// Scores keyed by the film-quality rule base's input variable names
    pub fn inputs(&self) -> [(&'static str, f64); 5] {
        [
            (DIRECTION, self.direction),
            (ACTING, self.acting),
            (SCREENPLAY, self.screenplay),
            (VISUAL_EFFECTS, self.visual_effects),
            (CULTURAL_SIGNIFICANCE, self.cultural_significance),
        ]
    }
}

/// A film with its metadata, credits and quality scores
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Film {
    /// Identifier within the catalog
    #[serde(default)]
    pub id: String,

    /// Release title
    #[serde(default)]
    pub title: String,

    /// Title in the original language
    #[serde(default)]
    pub original_title: Option<String>,

    /// Year of release (0 = unknown)
    #[serde(default)]
    pub release_year: u16,

    /// Running time in minutes
    #[serde(default)]
    pub duration: u32,

    /// Country of production
    #[serde(default)]
    pub country: Option<String>,

    /// Original language
    #[serde(default)]
    pub language: Option<String>,

    /// Director
    #[serde(default)]
    pub director: Option<Person>,

    /// Credited actors
    #[serde(default)]
    pub actors: Vec<Person>,

    /// Credited writers
    #[serde(default)]
    pub writers: Vec<Person>,

    /// Genres
    #[serde(default)]
    pub genres: Vec<String>,

    /// Production budget
    #[serde(default)]
    pub budget: f64,

    /// Worldwide box office
    #[serde(default)]
    pub box_office: f64,

    /// IMDb rating (0 = unrated)
    #[serde(default)]
    pub imdb_rating: f64,

    /// Number of IMDb votes
    #[serde(default)]
    pub imdb_votes: u32,

    /// Crisp inputs for the quality evaluation
    pub scores: QualityScores,

    /// Plot summary
    #[serde(default)]
    pub synopsis: Option<String>,

    /// Awards won
    #[serde(default)]
    pub awards: Vec<String>,
}

impl Film {
    /// Create a film with an id, a title and a release year
    pub fn new(id: impl Into<String>, title: impl Into<String>, release_year: u16) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            release_year,
            ..Default::default()
        }
    }

    /// Set the quality scores (builder style)
    pub fn with_scores(mut self, scores: QualityScores) -> Self {
        self.scores = scores;
        self
    }

    /// Whether any genre matches, ignoring case
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g.eq_ignore_ascii_case(genre))
    }

    /// Whether the director's name contains `name`, ignoring case
    pub fn directed_by(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.director
            .as_ref()
            .is_some_and(|d| d.name.to_lowercase().contains(&needle))
    }

    /// Whether the release year lies in [start, end]
    pub fn released_between(&self, start: u16, end: u16) -> bool {
        self.release_year >= start && self.release_year <= end
    }
}

impl fmt::Display for Film {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Film: {}", self.title)?;
        if self.release_year > 0 {
            write!(f, " ({})", self.release_year)?;
        }
        if let Some(director) = &self.director {
            write!(f, "\n  Director: {}", director.name)?;
        }
        if !self.genres.is_empty() {
            write!(f, "\n  Genres: {}", self.genres.join(", "))?;
        }
        if self.imdb_rating > 0.0 {
            write!(f, "\n  IMDB Rating: {}", self.imdb_rating)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Role;

    fn shawshank() -> Film {
        let mut film = Film::new("film001", "The Shawshank Redemption", 1994);
        film.director = Some(Person::new("dir001", "Frank Darabont", Role::Director));
        film.genres = vec!["Drama".to_string(), "Crime".to_string()];
        film.imdb_rating = 9.3;
        film
    }

    #[test]
    fn test_film_creation() {
        let film = Film::new("film001", "The Shawshank Redemption", 1994);
        assert_eq!(film.id, "film001");
        assert_eq!(film.title, "The Shawshank Redemption");
        assert_eq!(film.release_year, 1994);
        assert!(film.actors.is_empty());
        assert_eq!(film.scores, QualityScores::default());
    }

    #[test]
    fn test_display() {
        let text = shawshank().to_string();
        assert!(text.contains("The Shawshank Redemption"));
        assert!(text.contains("(1994)"));
        assert!(text.contains("Frank Darabont"));
        assert!(text.contains("Drama, Crime"));
        assert!(text.contains("9.3"));
    }

    #[test]
    fn test_display_omits_unknowns() {
        let text = Film::new("x", "Untitled", 0).to_string();
        assert_eq!(text, "Film: Untitled");
    }

    #[test]
    fn test_filters() {
        let film = shawshank();
        assert!(film.has_genre("drama"));
        assert!(!film.has_genre("comedy"));
        assert!(film.directed_by("darabont"));
        assert!(!film.directed_by("nolan"));
        assert!(film.released_between(1990, 1999));
        assert!(!film.released_between(2000, 2010));
    }

    #[test]
    fn test_score_inputs_use_variable_names() {
        let scores = QualityScores::new(9.0, 9.5, 9.0, 7.0, 9.5);
        let inputs = scores.inputs();
        assert_eq!(inputs[0], ("direction", 9.0));
        assert_eq!(inputs[3], ("visualEffects", 7.0));
        assert_eq!(inputs[4], ("culturalSignificance", 9.5));
    }

    #[test]
    fn test_deserialize_partial_record() {
        let json = r#"{
            "id": "film002",
            "title": "Casablanca",
            "release_year": 1942,
            "genres": ["Romance"],
            "scores": {
                "direction": 9.0,
                "acting": 9.0,
                "screenplay": 9.5,
                "visual_effects": 5.0,
                "cultural_significance": 10.0
            }
        }"#;
        let film: Film = serde_json::from_str(json).unwrap();
        assert_eq!(film.title, "Casablanca");
        assert_eq!(film.scores.cultural_significance, 10.0);
        assert!(film.director.is_none());
        assert_eq!(film.budget, 0.0);
    }

    #[test]
    fn test_scores_are_required() {
        let json = r#"{ "id": "film404", "title": "Untitled" }"#;
        assert!(serde_json::from_str::<Film>(json).is_err());

        let partial = r#"{ "id": "film404", "title": "Untitled", "scores": { "direction": 7.0 } }"#;
        assert!(serde_json::from_str::<Film>(partial).is_err());
    }
}
