mod repository;
mod service;

pub use repository::*;
pub use service::*;

use serde::{Deserialize, Serialize};

/// Rating as saved on the local store.
///
/// No uniqueness constraint: a user may rate the same movie several
/// times and every submission is retained.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub movie_id: String,
    pub user_email: String,
    pub score: u8,
    pub review: String,
}
