// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The recompute pipeline: classify → extract → aggregate → format → write.
//!
//! One invocation runs synchronously to completion. All aggregates are
//! rebuilt from scratch; nothing persists between invocations. The
//! caller wraps the call in its transaction boundary so a failure
//! leaves the model exactly as it was.

use serde::{Deserialize, Serialize};

use takeoff_lite_core::{aggregate, classify, extract, ModelReader, ModelWriter};

use crate::config::{PipelineConfig, Settings};
use crate::error::{Error, Result};
use crate::writer::{apply_writes, plan_writes};

/// Counts reported by one successful recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecomputeSummary {
    /// Rooms visited by the writer.
    pub rooms: usize,
    /// Finishing elements classified across all categories.
    pub elements: usize,
    /// Attribute writes applied.
    pub writes: usize,
}

/// Runs one full recompute against the model.
///
/// Aborts with [`Error::NoRoomsFound`] on an empty room set and
/// [`Error::NoFinishElementsFound`] when every category classifies to an
/// empty set; in both cases nothing is written. The divider is read from
/// `settings` at formatting time.
pub fn recompute<M>(
    model: &mut M,
    config: &PipelineConfig,
    settings: &Settings,
) -> Result<RecomputeSummary>
where
    M: ModelReader + ModelWriter,
{
    let rooms = model.rooms();
    if rooms.is_empty() {
        return Err(Error::NoRoomsFound);
    }

    let mut aggregates = Vec::with_capacity(config.bindings.len());
    let mut elements_total = 0;
    for binding in &config.bindings {
        let elements = classify(model, binding.category, &binding.keyword, &config.schema);
        tracing::debug!(
            category = %binding.category,
            keyword = %binding.keyword,
            elements = elements.len(),
            "classified finishing elements"
        );
        elements_total += elements.len();

        let records = elements.iter().map(|&e| extract(model, e, &config.schema));
        aggregates.push((binding, aggregate(records)));
    }

    if elements_total == 0 {
        return Err(Error::NoFinishElementsFound);
    }

    let writes = plan_writes(model, &rooms, &aggregates, &config.schema, settings.divider())?;
    apply_writes(model, &writes)?;

    let summary = RecomputeSummary {
        rooms: rooms.len(),
        elements: elements_total,
        writes: writes.len(),
    };
    tracing::info!(
        rooms = summary.rooms,
        elements = summary.elements,
        writes = summary.writes,
        divider = settings.divider(),
        "finishing takeoff recomputed"
    );
    Ok(summary)
}
