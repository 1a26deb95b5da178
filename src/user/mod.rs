mod repository;
mod service;

pub use repository::*;
pub use service::*;

use serde::{Deserialize, Serialize};

/// User as saved on the local store.
///
/// Created at registration and immutable afterwards; the email is the
/// unique identifier, stored trimmed and lower-cased.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "nationalIdNumber")]
    pub national_id: String,
}
