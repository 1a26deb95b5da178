//! Flicks is the data and service core of a desktop movie-streaming demo:
//! accounts, a CSV-imported catalog, star ratings and an OMDb lookup.
//!
//! The presentation layer is an external consumer of [`AppState`]; this
//! crate performs no direct output beyond tracing.

#![forbid(unsafe_code)]

mod catalog;
mod metadata;
mod rating;
mod store;
mod user;

pub mod config;
pub mod error;
pub mod telemetry;

pub use catalog::{CatalogService, Movie};
pub use metadata::{OmdbClient, OmdbMovie};
pub use rating::{Rating, RatingService};
pub use store::RecordStore;
pub use user::{AccountService, User};

use std::sync::Arc;

use crate::error::Result;

/// State sharing between the presentation layer and the core services.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Configuration>,
    pub accounts: AccountService,
    pub ratings: RatingService,
    pub catalog: CatalogService,
    pub metadata: OmdbClient,
}

/// Initialize the application state from `config.yaml`.
///
/// A storage failure while loading the persisted records is fatal: the
/// error is propagated and no degraded state is returned.
pub fn initialize_state() -> Result<AppState> {
    initialize_state_with(config::Configuration::default().read())
}

/// Initialize the application state from an already-read configuration.
pub fn initialize_state_with(
    config: Arc<config::Configuration>,
) -> Result<AppState> {
    let store = RecordStore::new(&config.storage_dir);
    store.ensure_initialized()?;

    let users = user::UserRepository::new(store.clone())?;
    let ratings = rating::RatingRepository::new(store)?;

    Ok(AppState {
        accounts: AccountService::new(users),
        ratings: RatingService::new(ratings),
        catalog: CatalogService::new(&config.catalog_feed),
        metadata: OmdbClient::new(config.metadata_api_key()),
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn state(dir: &std::path::Path) -> AppState {
        let feed = dir.join("movies.csv");
        let mut file = std::fs::File::create(&feed).unwrap();
        writeln!(file, "id,title,overview,genres,year,rating,poster").unwrap();
        writeln!(file, "m1,Arrival,First contact,Sci-Fi|Drama,2016,4.5,http://posters/m1.jpg").unwrap();
        writeln!(file, "m2,Heat,Cat and mouse,Crime|Thriller,1995,4.2,http://posters/m2.jpg").unwrap();

        let mut config = config::Configuration::default();
        config.storage_dir = dir.join("storage");
        config.catalog_feed = feed;
        initialize_state_with(Arc::new(config)).unwrap()
    }

    #[tokio::test]
    async fn register_rate_and_browse() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(dir.path());

        let user = state
            .accounts
            .register("Ana", "ana@example.com", "secret1", "12345678")
            .unwrap();

        let top = state.catalog.load_top_rated(10).await.unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, "m1");

        state
            .ratings
            .rate_movie(&top[0].id, &user.email, 5, "Loved it")
            .unwrap();
        assert_eq!(state.ratings.ratings_for_user(&user.email).len(), 1);

        let found = state.catalog.find_by_id("m2").unwrap();
        assert_eq!(found.title, "Heat");
    }

    #[test]
    fn state_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let state = state(dir.path());
            state
                .accounts
                .register("Ana", "ana@example.com", "secret1", "12345678")
                .unwrap();
        }

        let state = state(dir.path());
        let user = state.accounts.login("ana@example.com", "secret1").unwrap();
        assert_eq!(user.name, "Ana");
    }
}
