// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading a catalog, feed, or config.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("reading {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid JSON, or not of the expected shape.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A feed entry is not an ISO-8601 timestamp.
    #[error("alert {position}: {value:?} is not an ISO-8601 timestamp")]
    BadTimestamp {
        /// Index of the entry in the feed.
        position: usize,
        /// The offending text.
        value: String,
    },
    /// An attribute record names an owner outside the roster.
    #[error("record {position}: owner {owner} is outside the roster")]
    OwnerOutOfRange {
        /// Index of the record.
        position: usize,
        /// The offending owner value.
        owner: f64,
    },
    /// A count field is negative, fractional, or too large.
    #[error("record {position}: {field} must be a whole number, got {value}")]
    NotACount {
        /// Index of the record.
        position: usize,
        /// Field name.
        field: &'static str,
        /// The offending value.
        value: f64,
    },
    /// An item would never be in the shelter.
    #[error("record {position}: duration_in_alerts is zero")]
    ZeroDuration {
        /// Index of the record.
        position: usize,
    },
    /// Two assets map to the same item name.
    #[error("asset {position}: duplicate item name {name:?}")]
    DuplicateName {
        /// Index of the second occurrence.
        position: usize,
        /// The repeated name.
        name: String,
    },
}
