// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explorer configuration files.

use std::path::Path;

use keepsake_core::config::ExplorerConfig;

use crate::CatalogError;

/// Parses a JSON configuration. Missing groups and fields keep their
/// defaults, so `{}` yields [`ExplorerConfig::DEFAULT`].
pub fn parse_config(json: &str) -> Result<ExplorerConfig, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a JSON configuration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<ExplorerConfig, CatalogError> {
    parse_config(&crate::read(path.as_ref())?)
}
