// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item catalogs: asset files paired with attribute records.

use std::collections::HashSet;
use std::path::Path;

use keepsake_core::item::{AssetId, ItemAttributes, ItemSpec};
use kurbo::Size;
use serde::Deserialize;

use crate::CatalogError;
use crate::record::AttributeRecord;

/// One catalog item before its image dimensions are known.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    /// Item name: the asset file name without its extension.
    pub name: String,
    /// Asset file name as listed.
    pub file: String,
    /// Position of the asset in the list.
    pub asset: AssetId,
    /// Validated attributes (defaults when the catalog had no row).
    pub attributes: ItemAttributes,
}

/// An ordered, validated item catalog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    assets: Vec<String>,
    #[serde(default)]
    records: Vec<AttributeRecord>,
}

impl Catalog {
    /// Pairs `assets` with `records` by position.
    ///
    /// Assets past the end of `records` get [`ItemAttributes::DEFAULT`];
    /// records past the end of `assets` are ignored.
    pub fn from_parts<S: AsRef<str>>(
        assets: &[S],
        records: &[AttributeRecord],
    ) -> Result<Self, CatalogError> {
        let mut attributes = Vec::with_capacity(assets.len());
        for position in 0..assets.len() {
            attributes.push(match records.get(position) {
                Some(record) => record.to_attributes(position)?,
                None => ItemAttributes::DEFAULT,
            });
        }
        let catalog = Self::assemble(assets.iter().map(AsRef::as_ref), attributes);

        let mut seen = HashSet::with_capacity(catalog.len());
        for (position, entry) in catalog.entries.iter().enumerate() {
            if !seen.insert(entry.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    position,
                    name: entry.name.clone(),
                });
            }
        }
        Ok(catalog)
    }

    pub(crate) fn assemble<'a>(
        files: impl IntoIterator<Item = &'a str>,
        attributes: impl IntoIterator<Item = ItemAttributes>,
    ) -> Self {
        let entries = files
            .into_iter()
            .zip(attributes)
            .zip(0_u32..)
            .map(|((file, attributes), index)| CatalogEntry {
                name: item_name(file).into(),
                file: file.into(),
                asset: AssetId(index),
                attributes,
            })
            .collect();
        Self { entries }
    }

    /// Parses a catalog document:
    ///
    /// ```json
    /// { "assets": ["advil.png", "arak.png"], "records": [[10, 5, 12, 7, 10, 150, 90, 1, 57]] }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::from_parts(&doc.assets, &doc.records)
    }

    /// Reads and parses a catalog document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::from_json(&crate::read(path.as_ref())?)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Looks an entry up by item name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Converts to explorer input, asking `pixel_size` for each image's
    /// dimensions. A zero size stands for "unknown" and yields a square.
    pub fn into_specs(self, mut pixel_size: impl FnMut(&CatalogEntry) -> Size) -> Vec<ItemSpec> {
        self.entries
            .into_iter()
            .map(|entry| ItemSpec {
                pixel_size: pixel_size(&entry),
                name: entry.name,
                asset: entry.asset,
                attributes: entry.attributes,
            })
            .collect()
    }
}

fn item_name(file: &str) -> &str {
    Path::new(file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_drop_the_extension() {
        assert_eq!(item_name("baby_bottle.png"), "baby_bottle");
        assert_eq!(item_name("images/arak.png"), "arak");
        assert_eq!(item_name("plain"), "plain");
    }

    #[test]
    fn missing_rows_default() {
        let json = r#"{"assets": ["a.png", "b.png", "c.png"], "records": [[1, 2, 3, 4, 5, 6, 7, 8, 9]]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.entries()[0].attributes.owner.get(), 4);
        assert_eq!(catalog.entries()[1].attributes, ItemAttributes::DEFAULT);
        assert_eq!(catalog.entries()[2].asset, AssetId(2), "asset ids are positions");
        assert_eq!(catalog.get("c").map(|e| e.file.as_str()), Some("c.png"));
    }

    #[test]
    fn extra_rows_ignored() {
        let json = r#"{"assets": ["a.png"], "records": [{}, {"owner": 99}]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1, "second row has no asset and is not checked");
    }

    #[test]
    fn duplicate_names_rejected() {
        let err = Catalog::from_parts(&["x.png", "y.png", "x.jpg"], &[]).unwrap_err();
        match err {
            CatalogError::DuplicateName { position, name } => {
                assert_eq!(position, 2);
                assert_eq!(name, "x");
            }
            other => panic!("expected DuplicateName, got {other}"),
        }
    }

    #[test]
    fn bad_record_reports_position() {
        let json = r#"{"assets": ["a.png", "b.png"], "records": [{}, {"owner": 8}]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(
            matches!(err, CatalogError::OwnerOutOfRange { position: 1, .. }),
            "{err}"
        );
    }

    #[test]
    fn malformed_document() {
        let err = Catalog::from_json(r#"{"records": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)), "assets are required");
    }

    #[test]
    fn specs_carry_pixel_sizes() {
        let catalog = Catalog::from_parts(&["wide.png", "tall.png"], &[]).unwrap();
        let specs = catalog.into_specs(|e| {
            if e.name == "wide" {
                Size::new(800.0, 400.0)
            } else {
                Size::new(300.0, 900.0)
            }
        });
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, "wide");
        assert_eq!(specs[0].pixel_size, Size::new(800.0, 400.0));
        assert_eq!(specs[1].asset, AssetId(1));
    }
}
