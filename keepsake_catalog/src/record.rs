// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute records as they appear in catalog documents.

use keepsake_core::item::{ItemAttributes, OwnerIndex};
use serde::Deserialize;

use crate::CatalogError;

/// One item's attributes before validation.
///
/// Accepts either the compact positional row
/// `[size, sentiment, price, owner, entertainment, location_x, location_y,
/// enter_alert_index, duration_in_alerts]` or an object with those field
/// names, where missing fields take their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttributeRecord {
    /// Nine numbers in fixed order.
    Positional([f64; 9]),
    /// Named fields.
    Named(NamedRecord),
}

/// Named form of an [`AttributeRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[expect(missing_docs, reason = "field names mirror ItemAttributes")]
pub struct NamedRecord {
    pub size: f64,
    #[serde(alias = "sentiment")]
    pub sentimentality: f64,
    pub price: f64,
    pub owner: f64,
    pub entertainment: f64,
    pub location_x: f64,
    pub location_y: f64,
    pub enter_alert_index: f64,
    pub duration_in_alerts: f64,
}

impl Default for NamedRecord {
    fn default() -> Self {
        let d = ItemAttributes::DEFAULT;
        Self {
            size: d.size,
            sentimentality: d.sentimentality,
            price: d.price,
            owner: f64::from(d.owner.get()),
            entertainment: d.entertainment,
            location_x: d.location_x,
            location_y: d.location_y,
            enter_alert_index: f64::from(d.enter_alert_index),
            duration_in_alerts: f64::from(d.duration_in_alerts),
        }
    }
}

impl AttributeRecord {
    fn named(self) -> NamedRecord {
        match self {
            Self::Named(named) => named,
            Self::Positional([s, m, p, o, e, x, y, enter, duration]) => NamedRecord {
                size: s,
                sentimentality: m,
                price: p,
                owner: o,
                entertainment: e,
                location_x: x,
                location_y: y,
                enter_alert_index: enter,
                duration_in_alerts: duration,
            },
        }
    }

    /// Checks the record and converts it. `position` is only used in errors.
    pub fn to_attributes(self, position: usize) -> Result<ItemAttributes, CatalogError> {
        let r = self.named();
        let owner = whole(r.owner)
            .and_then(|o| u8::try_from(o).ok())
            .and_then(OwnerIndex::new)
            .ok_or(CatalogError::OwnerOutOfRange {
                position,
                owner: r.owner,
            })?;
        let enter_alert_index = count(r.enter_alert_index, "enter_alert_index", position)?;
        let duration_in_alerts = count(r.duration_in_alerts, "duration_in_alerts", position)?;
        if duration_in_alerts == 0 {
            return Err(CatalogError::ZeroDuration { position });
        }
        Ok(ItemAttributes {
            size: r.size,
            sentimentality: r.sentimentality,
            price: r.price,
            owner,
            entertainment: r.entertainment,
            location_x: r.location_x,
            location_y: r.location_y,
            enter_alert_index,
            duration_in_alerts,
        })
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "range checked against u32::MAX before the cast"
)]
fn whole(v: f64) -> Option<u32> {
    (v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&v)).then_some(v as u32)
}

fn count(v: f64, field: &'static str, position: usize) -> Result<u32, CatalogError> {
    whole(v).ok_or(CatalogError::NotACount {
        position,
        field,
        value: v,
    })
}
