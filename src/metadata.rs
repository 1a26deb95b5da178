//! OMDb title lookup adapter.

use serde::Deserialize;

const OMDB_BASE_URL: &str = "https://www.omdbapi.com/";
const API_KEY_ENV: &str = "OMDB_API_KEY";

pub const DEFAULT_API_KEY: &str = "demo";

/// Result of a successful title search.
#[derive(Clone, Debug, PartialEq)]
pub struct OmdbMovie {
    pub title: String,
    pub year: String,
    pub plot: String,
}

/// Raw OMDb payload. Every field is optional on the wire.
#[derive(Debug, Default, Deserialize)]
struct Payload {
    #[serde(default, rename = "Response")]
    response: String,
    #[serde(default, rename = "Title")]
    title: String,
    #[serde(default, rename = "Year")]
    year: String,
    #[serde(default, rename = "Plot")]
    plot: String,
}

/// Thin client for the OMDb title-search endpoint.
#[derive(Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    api_key: String,
}

impl OmdbClient {
    /// Create a new [`OmdbClient`].
    ///
    /// The key comes from the `OMDB_API_KEY` variable, then the
    /// configuration, then the public demo key.
    pub fn new(config_key: Option<String>) -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .or(config_key)
            .unwrap_or_else(|| DEFAULT_API_KEY.to_owned());

        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Search a movie by title.
    ///
    /// A negative response, a transport failure and an undecodable
    /// payload all yield `None`; the caller cannot tell them apart.
    pub async fn search_by_title(&self, title: &str) -> Option<OmdbMovie> {
        let response = self
            .http
            .get(OMDB_BASE_URL)
            .query(&[("t", title), ("apikey", self.api_key.as_str())])
            .send()
            .await;

        let payload = match response {
            Ok(response) => match response.json::<Payload>().await {
                Ok(payload) => payload,
                Err(err) => {
                    tracing::debug!(error = %err, "omdb payload not decodable");
                    return None;
                },
            },
            Err(err) => {
                tracing::debug!(error = %err, "omdb request failed");
                return None;
            },
        };

        found(payload)
    }
}

fn found(payload: Payload) -> Option<OmdbMovie> {
    if !payload.response.eq_ignore_ascii_case("true") {
        return None;
    }

    Some(OmdbMovie {
        title: payload.title,
        year: payload.year,
        plot: payload.plot,
    })
}
