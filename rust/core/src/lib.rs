// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Takeoff-Lite Core
//!
//! Finishing quantity aggregation and report formatting for building
//! model data.
//!
//! ## Overview
//!
//! This crate provides the pure engine behind the takeoff pipeline:
//!
//! - **Classification**: select finishing elements by type-level grouping label
//! - **Extraction**: flatten raw elements to [`FinishElement`] records with default normalization
//! - **Aggregation**: fold records into per-room, per-mark totals
//! - **Formatting**: render line-aligned description and quantity blocks
//!
//! Host models plug in behind the [`ModelReader`] and [`ModelWriter`]
//! traits; [`MemoryModel`] is the in-memory reference implementation.
//! Orchestration, configuration and logging live in the engine crate.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use takeoff_lite_core::{aggregate, classify, extract, format_room};
//! use takeoff_lite_core::{Category, ElementSchema, DEFAULT_DIVIDER};
//!
//! let schema = ElementSchema::default();
//! let elements = classify(&model, Category::Floor, "Floor Finish", &schema);
//! let agg = aggregate(elements.iter().map(|&e| extract(&model, e, &schema)));
//!
//! if let Some(finishes) = agg.room("101") {
//!     let report = format_room(finishes, DEFAULT_DIVIDER);
//!     println!("{}", report.quantities);
//! }
//! ```

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod extract;
pub mod format;
pub mod memory;
pub mod model;
pub mod units;

pub use aggregate::{aggregate, CategoryAggregate, MarkTotals, RoomFinishes};
pub use classify::classify;
pub use error::{Error, Result};
pub use extract::{extract, ElementSchema, FinishElement, NO_DESCRIPTION, NO_MARK, NO_NUMBER};
pub use format::{format_room, row_count, RoomReport, DEFAULT_DIVIDER};
pub use memory::MemoryModel;
pub use model::{AttrValue, Category, ElementId, ModelReader, ModelWriter};
pub use units::AREA_UNIT;
