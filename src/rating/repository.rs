//! In-memory, read-through cache over the stored ratings.

use std::sync::{Arc, RwLock};

use crate::error::Result;
use crate::rating::Rating;
use crate::store::RecordStore;

#[derive(Clone)]
pub struct RatingRepository {
    store: RecordStore,
    cache: Arc<RwLock<Vec<Rating>>>,
}

impl RatingRepository {
    /// Create a new [`RatingRepository`], loading every stored rating once.
    pub fn new(store: RecordStore) -> Result<Self> {
        let cache = store.load_ratings()?;
        tracing::debug!(count = cache.len(), "ratings loaded");

        Ok(Self {
            store,
            cache: Arc::new(RwLock::new(cache)),
        })
    }

    /// All ratings submitted by `email`, in insertion order.
    pub fn find_by_user(&self, email: &str) -> Vec<Rating> {
        self.cache
            .read()
            .unwrap()
            .iter()
            .filter(|rating| rating.user_email.eq_ignore_ascii_case(email))
            .cloned()
            .collect()
    }

    /// Append `rating` and rewrite the whole backing file.
    ///
    /// Same staged-write, single-writer contract as the user repository:
    /// the cache is only mutated after the file write succeeds.
    pub fn save(&self, rating: Rating) -> Result<()> {
        let mut cache = self.cache.write().unwrap();
        let mut records = cache.clone();
        records.push(rating);

        self.store.save_ratings(&records)?;
        *cache = records;
        Ok(())
    }
}
