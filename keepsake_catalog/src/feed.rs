// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alert timestamp feed.
//!
//! The feed is a JSON array of ISO-8601 strings. Entries with an offset are
//! converted to UTC; entries without one are taken to be UTC already.

use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::CatalogError;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses one feed entry.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(value) {
        return Some(t.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|t| t.and_utc())
}

/// Parses a feed document. An empty array is a valid, empty feed.
pub fn parse_feed(json: &str) -> Result<Vec<DateTime<Utc>>, CatalogError> {
    let raw: Vec<String> = serde_json::from_str(json)?;
    raw.into_iter()
        .enumerate()
        .map(|(position, value)| {
            parse_timestamp(&value).ok_or(CatalogError::BadTimestamp { position, value })
        })
        .collect()
}

/// Reads and parses a feed document.
pub fn load_feed(path: impl AsRef<Path>) -> Result<Vec<DateTime<Utc>>, CatalogError> {
    parse_feed(&crate::read(path.as_ref())?)
}
