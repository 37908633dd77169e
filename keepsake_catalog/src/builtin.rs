// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shelter collection shipped with the explorer.
//!
//! Fifty-two objects kept in one family's shelter over a season of alerts.
//! Rows are paired with files by position; the last four files have no row
//! and take the default attributes.

use keepsake_core::item::{ItemAttributes, OwnerIndex};

use crate::catalog::Catalog;

/// Asset file names, in catalog order.
pub const SHELTER_ASSETS: [&str; 52] = [
    "advil.png",
    "arak.png",
    "baby_bottle.png",
    "baby_toy.png",
    "backpack.png",
    "baloon.png",
    "bamba.png",
    "batteries.png",
    "blanket.png",
    "catan.png",
    "choclate_coockies.png",
    "clothes_2.png",
    "clothes.png",
    "color_papers.png",
    "corn_can.png",
    "cow_radio.png",
    "dog_collar_leash.png",
    "dog_food.png",
    "emergancy_lamp.png",
    "english_cake.png",
    "folding_chair.png",
    "fork.png",
    "grandma_jewelry.png",
    "haaretz_paper.png",
    "hanger_game_book.png",
    "keys.png",
    "kindle.png",
    "lool.png",
    "mini_generator.png",
    "mobile_charger.png",
    "motzetz.png",
    "nine_stories_book.png",
    "parenting_book.png",
    "passport.png",
    "phone_charger.png",
    "pillow.png",
    "plastecine.png",
    "plastic_bucket.png",
    "plastic_chair.png",
    "rabit_doll.png",
    "router.png",
    "serenada_pills.png",
    "smartphone.png",
    "sneakers.png",
    "soft_football.png",
    "standing_fan.png",
    "tape.png",
    "tiles.png",
    "toilet_paper.png",
    "water.png",
    "wine_glass.png",
    "wipes.png",
];

const fn row(
    size: u16,
    sentimentality: u16,
    price: u16,
    owner: u8,
    entertainment: u16,
    location_x: u16,
    location_y: u16,
    enter_alert_index: u32,
    duration_in_alerts: u32,
) -> ItemAttributes {
    let owner = match OwnerIndex::new(owner) {
        Some(owner) => owner,
        None => panic!("owner outside the roster"),
    };
    ItemAttributes {
        size: size as f64,
        sentimentality: sentimentality as f64,
        price: price as f64,
        owner,
        entertainment: entertainment as f64,
        location_x: location_x as f64,
        location_y: location_y as f64,
        enter_alert_index,
        duration_in_alerts,
    }
}

/// Attribute rows, paired with [`SHELTER_ASSETS`] by position.
pub const SHELTER_ROWS: [ItemAttributes; 48] = [
    // Grabbed in the first alerts.
    row(10, 5, 12, 7, 10, 150, 90, 1, 57),
    row(75, 80, 45, 4, 30, 180, 250, 0, 35),
    row(30, 30, 60, 3, 20, 400, 140, 1, 40),
    row(50, 85, 25, 4, 45, 350, 180, 0, 30),
    // Early preparations.
    row(12, 30, 4, 2, 40, 200, 180, 3, 6),
    row(15, 20, 6, 2, 65, 280, 160, 4, 4),
    row(30, 35, 85, 3, 25, 420, 120, 5, 15),
    row(18, 8, 15, 7, 20, 380, 200, 0, 57),
    row(12, 15, 8, 1, 35, 320, 240, 0, 57),
    row(8, 5, 4, 5, 25, 200, 300, 0, 57),
    // Settling in.
    row(25, 90, 12, 4, 75, 90, 220, 10, 15),
    row(30, 45, 25, 5, 40, 180, 320, 12, 10),
    row(25, 25, 20, 5, 30, 240, 280, 13, 8),
    row(35, 15, 45, 6, 50, 250, 200, 0, 57),
    row(20, 5, 35, 7, 15, 300, 150, 18, 10),
    // Heavy bombardment.
    row(12, 30, 4, 2, 40, 200, 180, 23, 2),
    row(30, 25, 35, 1, 30, 250, 150, 28, 8),
    // The long middle.
    row(45, 60, 55, 6, 85, 350, 200, 32, 15),
    row(35, 75, 40, 1, 70, 280, 220, 34, 12),
    row(40, 60, 120, 6, 80, 400, 250, 36, 10),
    row(55, 40, 80, 1, 65, 320, 180, 38, 8),
    row(25, 20, 30, 5, 45, 220, 200, 40, 6),
    row(15, 10, 25, 7, 35, 350, 280, 0, 57),
    row(20, 25, 60, 6, 55, 300, 320, 0, 57),
    // Winding down.
    row(35, 15, 3, 2, 60, 300, 300, 50, 3),
    row(12, 5, 8, 1, 20, 280, 140, 52, 4),
    row(20, 30, 40, 4, 50, 380, 160, 54, 3),
    row(25, 35, 25, 6, 40, 260, 240, 55, 2),
    // Everything else.
    row(20, 15, 8, 2, 30, 240, 160, 5, 8),
    row(45, 25, 120, 6, 55, 320, 280, 19, 18),
    row(25, 70, 45, 4, 35, 200, 240, 9, 18),
    row(20, 60, 35, 4, 40, 220, 260, 10, 15),
    row(8, 5, 12, 5, 15, 180, 140, 6, 6),
    row(15, 40, 8, 1, 50, 280, 180, 24, 6),
    row(25, 30, 15, 2, 65, 320, 200, 17, 8),
    row(80, 15, 300, 7, 25, 450, 120, 0, 57),
    row(20, 5, 25, 3, 20, 300, 160, 7, 10),
    row(35, 20, 8, 2, 40, 260, 220, 13, 6),
    row(60, 70, 80, 4, 60, 280, 300, 2, 28),
    row(40, 10, 25, 6, 30, 380, 240, 14, 12),
    row(30, 5, 40, 6, 25, 340, 200, 16, 15),
    row(75, 85, 35, 4, 85, 400, 280, 3, 32),
    row(65, 20, 180, 7, 35, 450, 200, 0, 57),
    row(40, 25, 80, 6, 45, 320, 240, 29, 10),
    row(10, 5, 8, 7, 10, 200, 120, 9, 5),
    // Late returns.
    row(12, 30, 4, 2, 40, 200, 180, 14, 3),
    row(15, 20, 6, 2, 65, 280, 160, 31, 4),
    row(12, 5, 8, 1, 20, 280, 140, 53, 4),
];

/// The built-in shelter collection.
#[must_use]
pub fn shelter_catalog() -> Catalog {
    let defaults = std::iter::repeat(ItemAttributes::DEFAULT);
    Catalog::assemble(SHELTER_ASSETS, SHELTER_ROWS.into_iter().chain(defaults))
}
