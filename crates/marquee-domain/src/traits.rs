//! Trait definitions for external interactions
//!
//! These traits define the boundary between the domain and the data-access
//! layer. Implementations live in other crates.

use crate::Film;

/// Source of film records and their crisp quality scores
///
/// Implemented by the data-access layer (e.g. the CLI's JSON catalog). The
/// evaluation engine never depends on where the scores come from.
pub trait FilmSource {
    /// Error type for source operations
    type Error;

    /// Every film in the source
    fn all_films(&self) -> Result<Vec<Film>, Self::Error>;

    /// Get a film by id
    fn get_film(&self, id: &str) -> Result<Option<Film>, Self::Error> {
        Ok(self.all_films()?.into_iter().find(|film| film.id == id))
    }

    /// Films tagged with a genre (case-insensitive)
    fn films_by_genre(&self, genre: &str) -> Result<Vec<Film>, Self::Error> {
        self.query_films(&FilmQuery {
            genre: Some(genre.to_string()),
            ..Default::default()
        })
    }

    /// Films whose director's name contains `name` (case-insensitive)
    fn films_by_director(&self, name: &str) -> Result<Vec<Film>, Self::Error> {
        self.query_films(&FilmQuery {
            director: Some(name.to_string()),
            ..Default::default()
        })
    }

    /// Films released in [start, end]
    fn films_by_year_range(&self, start: u16, end: u16) -> Result<Vec<Film>, Self::Error> {
        self.query_films(&FilmQuery {
            year_range: Some((start, end)),
            ..Default::default()
        })
    }

    /// Films matching every criterion set in `query`
    fn query_films(&self, query: &FilmQuery) -> Result<Vec<Film>, Self::Error> {
        let mut films: Vec<Film> = self
            .all_films()?
            .into_iter()
            .filter(|film| query.matches(film))
            .collect();
        if let Some(limit) = query.limit {
            films.truncate(limit);
        }
        Ok(films)
    }
}

/// Query criteria for retrieving films
#[derive(Debug, Clone, Default)]
pub struct FilmQuery {
    /// Filter by genre
    pub genre: Option<String>,

    /// Filter by director name (substring)
    pub director: Option<String>,

    /// Filter by inclusive release-year range
    pub year_range: Option<(u16, u16)>,

    /// Maximum results to return
    pub limit: Option<usize>,
}

impl FilmQuery {
    /// Whether a film satisfies every set criterion
    pub fn matches(&self, film: &Film) -> bool {
        self.genre.as_deref().is_none_or(|g| film.has_genre(g))
            && self.director.as_deref().is_none_or(|d| film.directed_by(d))
            && self
                .year_range
                .is_none_or(|(start, end)| film.released_between(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    struct Fixed(Vec<Film>);

    impl FilmSource for Fixed {
        type Error = Infallible;

        fn all_films(&self) -> Result<Vec<Film>, Infallible> {
            Ok(self.0.clone())
        }
    }

    fn source() -> Fixed {
        let mut a = Film::new("a", "Alpha", 1960);
        a.genres = vec!["Drama".to_string()];
        let mut b = Film::new("b", "Beta", 1995);
        b.genres = vec!["Drama".to_string(), "Crime".to_string()];
        let c = Film::new("c", "Gamma", 2010);
        Fixed(vec![a, b, c])
    }

    #[test]
    fn test_default_queries() {
        let src = source();
        assert_eq!(src.films_by_genre("crime").unwrap().len(), 1);
        assert_eq!(src.films_by_genre("drama").unwrap().len(), 2);
        assert_eq!(src.films_by_year_range(1990, 2020).unwrap().len(), 2);
        assert!(src.films_by_director("anyone").unwrap().is_empty());
        assert_eq!(src.get_film("c").unwrap().map(|f| f.title), Some("Gamma".to_string()));
        assert!(src.get_film("zzz").unwrap().is_none());
    }

    #[test]
    fn test_query_limit() {
        let query = FilmQuery {
            limit: Some(1),
            ..Default::default()
        };
        assert_eq!(source().query_films(&query).unwrap().len(), 1);
    }
}
