// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The explore grid: the initial placement every item returns to.

use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::config::LayoutConfig;
use crate::transform::ItemTransform;

/// Places items row-major on a roughly square grid centered on the canvas.
///
/// Cell centers are `grid_spacing` apart; each item keeps its natural size
/// and is centered on its cell.
#[expect(
    clippy::cast_possible_truncation,
    reason = "column count is ceil(sqrt(n)) for an in-memory item count"
)]
pub(crate) fn arrange_grid(natural: &[Size], config: &LayoutConfig) -> Vec<ItemTransform> {
    let n = natural.len();
    if n == 0 {
        return Vec::new();
    }
    let cols = (libm::ceil(libm::sqrt(n as f64)) as usize).max(1);
    let rows = n.div_ceil(cols);
    let spacing = config.grid_spacing;
    let start_x = (config.canvas_size - (cols - 1) as f64 * spacing) / 2.0;
    let start_y = (config.canvas_size - (rows - 1) as f64 * spacing) / 2.0;

    natural
        .iter()
        .enumerate()
        .map(|(i, size)| {
            let col = (i % cols) as f64;
            let row = (i / cols) as f64;
            let center = Point::new(start_x + col * spacing, start_y + row * spacing);
            ItemTransform::from_center(center, *size)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_square_and_centered() {
        let cfg = LayoutConfig::DEFAULT;
        let sizes = [Size::new(200.0, 100.0); 9];
        let cells = arrange_grid(&sizes, &cfg);
        assert_eq!(cells.len(), 9);
        // 3 x 3 with the middle cell on the canvas center.
        assert_eq!(cells[4].center(), Point::new(1500.0, 1500.0));
        assert_eq!(cells[0].center(), Point::new(1310.0, 1310.0));
        assert_eq!(cells[8].center(), Point::new(1690.0, 1690.0));
        assert_eq!(cells[3].size(), Size::new(200.0, 100.0), "natural size kept");
    }

    #[test]
    fn partial_last_row() {
        let cfg = LayoutConfig::DEFAULT;
        let cells = arrange_grid(&[Size::new(10.0, 10.0); 5], &cfg);
        // ceil(sqrt(5)) = 3 columns, 2 rows.
        assert_eq!(cells[3].center().x, cells[0].center().x, "wraps to column 0");
        assert_eq!(cells[3].center().y - cells[0].center().y, 190.0, "next row");
        assert_eq!(cells[0].center().y, 1500.0 - 95.0, "two rows centered");
    }

    #[test]
    fn single_item_on_canvas_center() {
        let cells = arrange_grid(&[Size::new(50.0, 80.0)], &LayoutConfig::DEFAULT);
        assert_eq!(cells[0].center(), Point::new(1500.0, 1500.0));
    }
}
