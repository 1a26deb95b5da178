//! Catalog import and read operations.

use std::cmp::Ordering;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::catalog::{CatalogRepository, Movie, feed};
use crate::error::{Error, Result};

/// Catalog manager.
///
/// The import runs at most once per process; concurrent callers
/// serialize on the imported flag. Intended to be driven from a
/// background task so the import never blocks the UI thread.
#[derive(Clone)]
pub struct CatalogService {
    repo: CatalogRepository,
    feed_path: PathBuf,
    imported: Arc<Mutex<bool>>,
}

impl CatalogService {
    /// Create a new [`CatalogService`] reading from `feed_path`.
    pub fn new(feed_path: impl Into<PathBuf>) -> Self {
        Self {
            repo: CatalogRepository::new(),
            feed_path: feed_path.into(),
            imported: Arc::new(Mutex::new(false)),
        }
    }

    /// One-time import trigger.
    ///
    /// The first caller performs the import; everyone else observes the
    /// flag and returns. The flag is only set after a successful import,
    /// so a failed import is retried by the next caller.
    pub async fn ensure_movies_loaded(&self) -> Result<()> {
        let mut imported = self.imported.lock().await;
        if *imported {
            return Ok(());
        }

        self.import_from_feed().await?;
        *imported = true;
        Ok(())
    }

    /// The `limit` movies with the highest average rating, descending.
    /// Ties keep the feed's import order.
    pub async fn load_top_rated(&self, limit: usize) -> Result<Vec<Movie>> {
        self.ensure_movies_loaded().await?;

        let mut movies = self.repo.find_all();
        movies.sort_by(|a, b| {
            b.average_rating
                .partial_cmp(&a.average_rating)
                .unwrap_or(Ordering::Equal)
        });
        movies.truncate(limit);
        Ok(movies)
    }

    /// Find an imported movie by id.
    pub fn find_by_id(&self, movie_id: &str) -> Option<Movie> {
        self.repo.find_by_id(movie_id)
    }

    async fn import_from_feed(&self) -> Result<()> {
        if !self.repo.is_empty() {
            return Ok(());
        }

        let raw = tokio::fs::read_to_string(&self.feed_path)
            .await
            .map_err(|err| Error::Import {
                details: format!(
                    "cannot read feed {}",
                    self.feed_path.display()
                ),
                source: Some(Box::new(err)),
            })?;

        let mut lines = raw.lines();
        lines.next(); // header row, always discarded.

        // parse everything before committing, so a malformed row never
        // leaves a half-filled catalog behind the is_empty guard.
        let mut movies = Vec::new();
        for line in lines {
            if let Some(movie) = feed::parse_row(line)? {
                movies.push(movie);
            }
        }

        let count = movies.len();
        for movie in movies {
            self.repo.save(movie);
        }

        tracing::info!(
            count,
            path = %self.feed_path.display(),
            "catalog imported"
        );
        Ok(())
    }
}
