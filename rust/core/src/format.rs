// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room report formatting: parallel description and quantity blocks.
//!
//! The description attribute wraps inside its rendered field; the
//! quantity attribute is rendered in a narrower field that does not
//! wrap. For every mark the formatter estimates how many rendered lines
//! the description will occupy and pads the quantity entry with that
//! many blank lines, so the two columns stay aligned line-by-line when
//! rendered side by side.

use serde::{Deserialize, Serialize};

use crate::aggregate::RoomFinishes;
use crate::units::{self, AREA_UNIT};

/// Default characters-per-rendered-line estimate for the description
/// field of the target display surface.
pub const DEFAULT_DIVIDER: f64 = 34.5;

/// The two parallel attribute values for one room and one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomReport {
    /// Concatenated `"{mark}.\n{description}\n"` blocks.
    pub descriptions: String,
    /// Quantity lines, padded to track the description block.
    pub quantities: String,
}

/// Estimated number of rendered lines a description block occupies.
///
/// `divider` must be positive; the engine's settings validation enforces
/// that before a configured value reaches the formatter.
#[inline]
pub fn row_count(text_len: usize, divider: f64) -> usize {
    (text_len as f64 / divider).round() as usize
}

/// Renders one room's marks into the two parallel blocks.
///
/// Marks are visited in first-insertion order. Each contributes
/// `"{mark}.\n{description}\n"` to the description block, and a
/// `"{value} {unit}"` line plus the estimated wrapped-line count of
/// blank lines to the quantity block. The displayed value is the area
/// sum when the mark's unit is the area unit, the length sum otherwise.
///
/// Output is deterministic: the same finishes and divider always produce
/// byte-identical strings.
pub fn format_room(finishes: &RoomFinishes, divider: f64) -> RoomReport {
    let mut descriptions = String::new();
    let mut quantities = String::new();

    for totals in finishes.marks() {
        let block = format!("{}.\n{}\n", totals.mark, totals.description);
        let rows = row_count(block.chars().count(), divider);
        descriptions.push_str(&block);

        // Units other than the area unit all take the length branch.
        let value = if totals.unit == AREA_UNIT {
            units::round1(totals.area_sum)
        } else {
            units::round1(totals.length_sum)
        };
        quantities.push_str(&format!("{:.1} {}", value, totals.unit));
        for _ in 0..rows {
            quantities.push('\n');
        }
        quantities.push('\n');
    }

    RoomReport {
        descriptions,
        quantities,
    }
}
