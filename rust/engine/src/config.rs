// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pipeline configuration: formatting settings and category bindings.

use serde::{Deserialize, Serialize};

use takeoff_lite_core::{Category, ElementSchema, DEFAULT_DIVIDER};

/// User-adjustable formatting settings.
///
/// The divider is the approximate number of characters that fit on one
/// rendered line of the room's description field; the formatter derives
/// its padding estimate from it. The pipeline reads the current value at
/// formatting time, so adjusting it between triggers takes effect on the
/// next recompute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    divider: f64,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            divider: DEFAULT_DIVIDER,
        }
    }

    /// Load settings from environment variables.
    pub fn from_env() -> Self {
        let divider: f64 = std::env::var("TAKEOFF_DIVIDER")
            .unwrap_or_else(|_| DEFAULT_DIVIDER.to_string())
            .parse()
            .unwrap_or(DEFAULT_DIVIDER);
        let mut settings = Self::new();
        settings.set_divider(divider);
        settings
    }

    pub fn divider(&self) -> f64 {
        self.divider
    }

    /// Sets the divider. Non-positive values are rejected and the prior
    /// value is kept; returns whether the value was accepted.
    pub fn set_divider(&mut self, divider: f64) -> bool {
        if divider > 0.0 {
            self.divider = divider;
            true
        } else {
            false
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Where one category's report lands on the room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBinding {
    pub category: Category,
    /// Substring matched against the type-level grouping label.
    pub keyword: String,
    /// Room attribute receiving the description block.
    pub description_attribute: String,
    /// Room attribute receiving the quantity block.
    pub quantity_attribute: String,
}

/// Full pipeline configuration: which attributes to read off elements,
/// and which category reports to write where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub schema: ElementSchema,
    pub bindings: Vec<CategoryBinding>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            schema: ElementSchema::default(),
            bindings: vec![
                CategoryBinding {
                    category: Category::Floor,
                    keyword: "Floor Finish".to_string(),
                    description_attribute: "Floor Finishes".to_string(),
                    quantity_attribute: "Floor Finish Quantities".to_string(),
                },
                CategoryBinding {
                    category: Category::Wall,
                    keyword: "Wall Finish".to_string(),
                    description_attribute: "Wall Finishes".to_string(),
                    quantity_attribute: "Wall Finish Quantities".to_string(),
                },
                CategoryBinding {
                    category: Category::Ceiling,
                    keyword: "Ceiling Finish".to_string(),
                    description_attribute: "Ceiling Finishes".to_string(),
                    quantity_attribute: "Ceiling Finish Quantities".to_string(),
                },
            ],
        }
    }
}
