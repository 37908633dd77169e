// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item identity, static attributes, and the owner roster.

use alloc::string::String;
use core::fmt;

use kurbo::Size;

/// A handle to an item in an [`ItemStore`](crate::store::ItemStore).
///
/// Items are created once from the catalog and never removed, so a plain
/// slot index is enough; there is no generation counter.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub(crate) u32);

impl ItemId {
    /// A handle for slot `index`, e.g. when decoding a recorded trace.
    ///
    /// Store accessors panic if the slot does not exist.
    #[inline]
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

/// An opaque reference to an item's image asset.
///
/// Assets are loaded by the host; the core only carries the identifier
/// through to the draw list.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetId(pub u32);

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId({})", self.0)
    }
}

// ---------------------------------------------------------------------------
// Owners
// ---------------------------------------------------------------------------

/// Number of people in the owner roster.
pub const OWNER_COUNT: usize = 8;

/// Index into the [owner roster](OWNERS).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct OwnerIndex(u8);

impl OwnerIndex {
    /// Creates an owner index, or `None` if `index` is outside the roster.
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < OWNER_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Raw roster index.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The roster entry for this owner.
    #[inline]
    #[must_use]
    pub const fn profile(self) -> &'static OwnerProfile {
        &OWNERS[self.0 as usize]
    }

    /// Iterates over every owner in roster order.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "OWNER_COUNT is 8 and fits in u8"
    )]
    pub fn all() -> impl Iterator<Item = Self> {
        (0..OWNER_COUNT as u8).map(Self)
    }
}

/// Returned when converting an out-of-roster number into an [`OwnerIndex`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OwnerOutOfRange(pub u8);

impl fmt::Display for OwnerOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "owner index {} is outside the roster (0..{OWNER_COUNT})",
            self.0
        )
    }
}

impl core::error::Error for OwnerOutOfRange {}

impl TryFrom<u8> for OwnerIndex {
    type Error = OwnerOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(OwnerOutOfRange(value))
    }
}

impl From<OwnerIndex> for u8 {
    fn from(value: OwnerIndex) -> Self {
        value.0
    }
}

/// Self-described gender of an owner, shown on owner labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Female.
    Female,
    /// Male.
    Male,
}

impl Gender {
    /// Display text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }
}

/// One person in the shelter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OwnerProfile {
    /// First name.
    pub name: &'static str,
    /// Age in years.
    pub age: u8,
    /// Gender.
    pub gender: Gender,
    /// Occupation or role in the family.
    pub profession: &'static str,
}

/// The eight people whose belongings make up the collection.
pub const OWNERS: [OwnerProfile; OWNER_COUNT] = [
    OwnerProfile {
        name: "Yael",
        age: 35,
        gender: Gender::Female,
        profession: "Doctor",
    },
    OwnerProfile {
        name: "Yaron",
        age: 42,
        gender: Gender::Male,
        profession: "Teacher",
    },
    OwnerProfile {
        name: "Yoni",
        age: 8,
        gender: Gender::Male,
        profession: "Child",
    },
    OwnerProfile {
        name: "Noa",
        age: 28,
        gender: Gender::Female,
        profession: "Engineer",
    },
    OwnerProfile {
        name: "Esti",
        age: 65,
        gender: Gender::Female,
        profession: "Retired Grandmother",
    },
    OwnerProfile {
        name: "Omer",
        age: 31,
        gender: Gender::Male,
        profession: "Chef",
    },
    OwnerProfile {
        name: "Zohar",
        age: 22,
        gender: Gender::Female,
        profession: "Student",
    },
    OwnerProfile {
        name: "Yoav",
        age: 45,
        gender: Gender::Male,
        profession: "Electrician",
    },
];

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

/// Static, catalog-supplied attributes of one item.
///
/// Scores (`size`, `sentimentality`, `price`, `entertainment`) live on a 1–100
/// scale. The location pair is in an arbitrary plane that the location layout
/// normalizes against the collection's own extent.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemAttributes {
    /// Physical size score.
    pub size: f64,
    /// Sentimental value score.
    pub sentimentality: f64,
    /// Monetary value score.
    pub price: f64,
    /// Who the item belongs to.
    pub owner: OwnerIndex,
    /// Entertainment value score (carried for completeness; no layout uses it).
    pub entertainment: f64,
    /// Horizontal location coordinate.
    pub location_x: f64,
    /// Vertical location coordinate.
    pub location_y: f64,
    /// First alert index at which the item is in the shelter.
    pub enter_alert_index: u32,
    /// Number of consecutive alerts the item stays.
    pub duration_in_alerts: u32,
}

impl ItemAttributes {
    /// Attributes used for items the catalog has no row for.
    pub const DEFAULT: Self = Self {
        size: 50.0,
        sentimentality: 50.0,
        price: 50.0,
        owner: OwnerIndex(0),
        entertainment: 50.0,
        location_x: 250.0,
        location_y: 150.0,
        enter_alert_index: 0,
        duration_in_alerts: 24,
    };

    /// First alert index at which the item is gone again.
    #[inline]
    #[must_use]
    pub const fn exit_alert_index(&self) -> u64 {
        self.enter_alert_index as u64 + self.duration_in_alerts as u64
    }

    /// Whether the item is in the shelter at `alert_index`.
    #[inline]
    #[must_use]
    pub const fn is_present_at(&self, alert_index: usize) -> bool {
        let i = alert_index as u64;
        self.enter_alert_index as u64 <= i && i < self.exit_alert_index()
    }
}

impl Default for ItemAttributes {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything needed to create one item in the store.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemSpec {
    /// Unique name (usually the asset's file stem).
    pub name: String,
    /// Image to draw.
    pub asset: AssetId,
    /// Pixel dimensions of the image; sets the aspect ratio.
    pub pixel_size: Size,
    /// Static attributes.
    pub attributes: ItemAttributes,
}
