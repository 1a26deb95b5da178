//! In-memory, read-through cache over the stored users.

use std::sync::{Arc, RwLock};

use crate::error::Result;
use crate::store::RecordStore;
use crate::user::User;

#[derive(Clone)]
pub struct UserRepository {
    store: RecordStore,
    cache: Arc<RwLock<Vec<User>>>,
}

impl UserRepository {
    /// Create a new [`UserRepository`], loading every stored user once.
    pub fn new(store: RecordStore) -> Result<Self> {
        let cache = store.load_users()?;
        tracing::debug!(count = cache.len(), "users loaded");

        Ok(Self {
            store,
            cache: Arc::new(RwLock::new(cache)),
        })
    }

    /// Find a user by exact, case-insensitive email match.
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.cache
            .read()
            .unwrap()
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    /// Append `user` and rewrite the whole backing file.
    ///
    /// The record reaches the cache only after a successful write, so a
    /// failed save leaves cache and file consistent. Saves are
    /// single-writer: the whole-file rewrite requires exclusive access.
    pub fn save(&self, user: User) -> Result<()> {
        let mut cache = self.cache.write().unwrap();
        let mut records = cache.clone();
        records.push(user);

        self.store.save_users(&records)?;
        *cache = records;
        Ok(())
    }
}
