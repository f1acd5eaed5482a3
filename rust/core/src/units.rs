// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unit conversion and rounding for host model quantities.
//!
//! Host models store measurements in their internal units (areas in
//! square feet, lengths in millimetres). Everything downstream of the
//! extractor works in metric: square metres and metres.

/// Display unit for area quantities, as it appears in the model's unit
/// attribute and in rendered quantity blocks.
pub const AREA_UNIT: &str = "м2";

/// Square feet (host-internal area unit) to square metres.
pub const SQUARE_FEET_TO_SQUARE_METRES: f64 = 0.092903;

/// Millimetres (host-internal length unit) per metre.
pub const MILLIMETRES_PER_METRE: f64 = 1000.0;

/// Floor value for a measurement whose source attribute is absent.
/// Never zero, so a missing attribute cannot read as "no finish"
/// downstream.
pub const MIN_QUANTITY: f64 = 0.01;

/// Converts a host-internal area to square metres, rounded to 2 decimals.
#[inline]
pub fn area_to_square_metres(raw: f64) -> f64 {
    round2(raw * SQUARE_FEET_TO_SQUARE_METRES)
}

/// Converts a host-internal length to metres, rounded to 2 decimals.
#[inline]
pub fn length_to_metres(raw: f64) -> f64 {
    round2(raw / MILLIMETRES_PER_METRE)
}

/// Rounds to 2 decimal places.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to 1 decimal place.
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_area_conversion() {
        // 53.82 sq ft is 5.00 m² after rounding
        assert_relative_eq!(area_to_square_metres(53.82), 5.0);
        assert_relative_eq!(area_to_square_metres(0.0), 0.0);
    }

    #[test]
    fn test_length_conversion() {
        assert_relative_eq!(length_to_metres(2500.0), 2.5);
        assert_relative_eq!(length_to_metres(1234.0), 1.23);
    }

    #[test]
    fn test_rounding() {
        assert_relative_eq!(round2(1.006), 1.01);
        assert_relative_eq!(round2(1.004), 1.0);
        assert_relative_eq!(round1(8.04), 8.0);
        assert_relative_eq!(round1(8.06), 8.1);
    }
}
