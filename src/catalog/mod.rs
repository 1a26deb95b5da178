mod feed;
mod repository;
mod service;

pub(crate) use repository::*;
pub use service::*;

/// Movie as imported from the catalog feed.
///
/// Never persisted: the catalog is rebuilt from the feed on every
/// process start. The average rating comes precomputed from the feed,
/// not from submitted ratings.
#[derive(Clone, Debug, PartialEq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub overview: String,
    /// First entry of the feed's pipe-delimited genre list.
    pub genre: String,
    pub year: i32,
    pub average_rating: f64,
    pub poster_url: String,
}
