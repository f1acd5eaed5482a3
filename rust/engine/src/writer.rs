// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Write planning and application for room report attributes.
//!
//! The writer first builds the complete plan for every room and
//! category, then applies it. A room missing its identifying attribute
//! aborts the plan before the first write lands; rooms absent from a
//! category's aggregate receive no writes for that category, leaving
//! their existing attribute values untouched.

use takeoff_lite_core::{
    format_room, CategoryAggregate, ElementId, ElementSchema, ModelReader, ModelWriter,
};

use crate::config::CategoryBinding;
use crate::error::{Error, Result};

/// One pending attribute write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeWrite {
    pub room: ElementId,
    pub attribute: String,
    pub value: String,
}

/// Builds the full write plan across all rooms and category aggregates.
pub fn plan_writes(
    model: &impl ModelReader,
    rooms: &[ElementId],
    aggregates: &[(&CategoryBinding, CategoryAggregate)],
    schema: &ElementSchema,
    divider: f64,
) -> Result<Vec<AttributeWrite>> {
    let mut writes = Vec::new();

    for &room in rooms {
        let number = model
            .attribute(room, &schema.room_number)
            .and_then(|v| v.into_text())
            .ok_or_else(|| Error::MissingRoomIdentifier {
                room,
                attribute: schema.room_number.clone(),
            })?;

        for (binding, aggregate) in aggregates {
            if let Some(finishes) = aggregate.room(&number) {
                let report = format_room(finishes, divider);
                writes.push(AttributeWrite {
                    room,
                    attribute: binding.description_attribute.clone(),
                    value: report.descriptions,
                });
                writes.push(AttributeWrite {
                    room,
                    attribute: binding.quantity_attribute.clone(),
                    value: report.quantities,
                });
            }
        }
    }

    Ok(writes)
}

/// Applies a plan in order. The caller's transaction makes this
/// all-or-nothing; a failed write surfaces as a fatal error.
pub fn apply_writes(model: &mut impl ModelWriter, writes: &[AttributeWrite]) -> Result<()> {
    for write in writes {
        model.set_attribute(write.room, &write.attribute, &write.value)?;
    }
    Ok(())
}
