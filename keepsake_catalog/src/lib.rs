// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Catalog, alert feed, and configuration loading for the keepsake shelter
//! explorer.
//!
//! - [`Catalog`] pairs asset files with attribute records by position and
//!   validates them; [`shelter_catalog`] is the collection the explorer ships
//!   with.
//! - [`parse_feed`] / [`load_feed`] read the alert timestamp feed.
//! - [`parse_config`] / [`load_config`] read an
//!   [`ExplorerConfig`](keepsake_core::config::ExplorerConfig).
//!
//! A typical host:
//!
//! ```no_run
//! use keepsake_catalog::{Catalog, load_config, load_feed};
//! use keepsake_core::explorer::Explorer;
//! use kurbo::Size;
//!
//! # fn main() -> Result<(), keepsake_catalog::CatalogError> {
//! let catalog = Catalog::load("shelter.json")?;
//! let alerts = load_feed("tel_aviv_timestamps.json")?;
//! let config = load_config("keepsake.json")?;
//! let specs = catalog.into_specs(|_| Size::new(512.0, 512.0));
//! let explorer = Explorer::new(specs, alerts, Size::new(1280.0, 800.0), config, 7);
//! # let _ = explorer;
//! # Ok(())
//! # }
//! ```

mod builtin;
mod catalog;
mod config;
mod error;
mod feed;
mod record;

use std::path::Path;

pub use builtin::{SHELTER_ASSETS, SHELTER_ROWS, shelter_catalog};
pub use catalog::{Catalog, CatalogEntry};
pub use config::{load_config, parse_config};
pub use error::CatalogError;
pub use feed::{load_feed, parse_feed, parse_timestamp};
pub use record::{AttributeRecord, NamedRecord};

fn read(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
