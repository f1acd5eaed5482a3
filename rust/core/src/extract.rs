// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parameter extraction: raw model elements to flat finish records.
//!
//! Each field is read independently through [`ModelReader`]; a missing
//! attribute on one field never blocks extraction of the others. Missing
//! text attributes fall back to sentinels, missing measurements to
//! [`MIN_QUANTITY`](crate::units::MIN_QUANTITY). A measurement that is
//! present but zero stays zero.

use serde::{Deserialize, Serialize};

use crate::model::{ElementId, ModelReader};
use crate::units;

/// Sentinel for an element without an owning room number.
pub const NO_NUMBER: &str = "no number";
/// Sentinel for an element type without a material mark.
pub const NO_MARK: &str = "no mark";
/// Sentinel for an element type without a description.
pub const NO_DESCRIPTION: &str = "no description";

/// Attribute names the classifier and extractor read.
///
/// Hosts override these to match their parameter set. Room number, unit
/// and both measurements live on the instance; mark, description and the
/// grouping label live on the element's type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSchema {
    /// Instance attribute holding the owning room's number.
    pub room_number: String,
    /// Type attribute holding the material mark.
    pub mark: String,
    /// Type attribute holding the material description.
    pub description: String,
    /// Instance attribute holding the display unit for the mark.
    pub unit: String,
    /// Instance attribute holding the measured area.
    pub area: String,
    /// Instance attribute holding the measured length.
    pub length: String,
    /// Type attribute carrying the grouping label the classifier matches.
    pub model_group: String,
}

impl Default for ElementSchema {
    fn default() -> Self {
        Self {
            room_number: "Room Number".to_string(),
            mark: "Mark".to_string(),
            description: "Description".to_string(),
            unit: "Unit".to_string(),
            area: "Area".to_string(),
            length: "Length".to_string(),
            model_group: "Model Group".to_string(),
        }
    }
}

/// One classified element, flattened to the fields the aggregator needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishElement {
    pub room_number: String,
    pub mark: String,
    /// Area in square metres, rounded to 2 decimals.
    pub area: f64,
    /// Length in metres, rounded to 2 decimals.
    pub length: f64,
    pub description: String,
    pub unit: String,
}

/// Reads one element into a [`FinishElement`], normalizing missing
/// attributes to their defaults.
pub fn extract(model: &impl ModelReader, element: ElementId, schema: &ElementSchema) -> FinishElement {
    let instance_text = |name: &str, fallback: &str| {
        model
            .attribute(element, name)
            .and_then(|v| v.into_text())
            .unwrap_or_else(|| fallback.to_string())
    };
    let type_text = |name: &str, fallback: &str| {
        model
            .type_attribute(element, name)
            .and_then(|v| v.into_text())
            .unwrap_or_else(|| fallback.to_string())
    };

    FinishElement {
        room_number: instance_text(&schema.room_number, NO_NUMBER),
        mark: type_text(&schema.mark, NO_MARK),
        description: type_text(&schema.description, NO_DESCRIPTION),
        unit: instance_text(&schema.unit, units::AREA_UNIT),
        area: model
            .attribute(element, &schema.area)
            .and_then(|v| v.as_number())
            .map(units::area_to_square_metres)
            .unwrap_or(units::MIN_QUANTITY),
        length: model
            .attribute(element, &schema.length)
            .and_then(|v| v.as_number())
            .map(units::length_to_metres)
            .unwrap_or(units::MIN_QUANTITY),
    }
}
