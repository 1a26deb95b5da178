//! Process-lifetime in-memory movie catalog.

use std::sync::{Arc, RwLock};

use crate::catalog::Movie;

#[derive(Clone, Default)]
pub struct CatalogRepository {
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl CatalogRepository {
    /// Create a new, empty [`CatalogRepository`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one movie. Only used during the feed import.
    pub fn save(&self, movie: Movie) {
        self.movies.write().unwrap().push(movie);
    }

    /// Defensive copy of the whole catalog, in import order.
    pub fn find_all(&self) -> Vec<Movie> {
        self.movies.read().unwrap().clone()
    }

    /// Linear scan, first match.
    pub fn find_by_id(&self, id: &str) -> Option<Movie> {
        self.movies
            .read()
            .unwrap()
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.read().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str) -> Movie {
        Movie {
            id: id.into(),
            title: "Title".into(),
            overview: "Overview".into(),
            genre: "Drama".into(),
            year: 2000,
            average_rating: 3.0,
            poster_url: "http://posters/x.jpg".into(),
        }
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let repo = CatalogRepository::new();
        assert!(repo.is_empty());

        repo.save(movie("m1"));
        repo.save(movie("m2"));

        assert!(!repo.is_empty());
        assert_eq!(repo.find_by_id("m2").unwrap().id, "m2");
        assert!(repo.find_by_id("m9").is_none());
    }

    #[test]
    fn find_all_is_a_copy() {
        let repo = CatalogRepository::new();
        repo.save(movie("m1"));

        let mut copy = repo.find_all();
        copy.clear();

        assert_eq!(repo.find_all().len(), 1);
    }
}
