//! Catalog feed row parsing.
//!
//! Each feed row carries exactly seven comma-separated fields: id, title,
//! overview, pipe-delimited genre list, year, average rating, poster URL.

use crate::catalog::Movie;
use crate::error::{Error, Result};

const FIELD_COUNT: usize = 7;

/// Parse one feed row into a [`Movie`].
///
/// Rows with fewer than seven fields yield `Ok(None)` and are skipped by
/// the import; the last field keeps any remaining commas. A non-numeric
/// year or rating aborts the import.
pub fn parse_row(line: &str) -> Result<Option<Movie>> {
    let fields: Vec<&str> = line.splitn(FIELD_COUNT, ',').collect();
    if fields.len() < FIELD_COUNT {
        return Ok(None);
    }

    let genres = fields[3].trim();
    let genre = genres.split('|').next().unwrap_or(genres);

    let year = fields[4].trim();
    let year: i32 = year.parse().map_err(|err| Error::Import {
        details: format!("invalid year {year:?}"),
        source: Some(Box::new(err)),
    })?;

    let average_rating = fields[5].trim();
    let average_rating: f64 =
        average_rating.parse().map_err(|err| Error::Import {
            details: format!("invalid average rating {average_rating:?}"),
            source: Some(Box::new(err)),
        })?;

    Ok(Some(Movie {
        id: fields[0].trim().to_owned(),
        title: fields[1].trim().to_owned(),
        overview: fields[2].trim().to_owned(),
        genre: genre.to_owned(),
        year,
        average_rating,
        poster_url: fields[6].trim().to_owned(),
    }))
}
