// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Takeoff-Lite Engine
//!
//! Stable facade over the finishing takeoff pipeline.
//!
//! The engine wires the core crate's classifier, extractor, aggregator
//! and formatter into a single synchronous [`recompute`] entry point,
//! adds configuration ([`PipelineConfig`], [`Settings`]) and exposes a
//! gated trigger surface ([`RecomputeSession`]) for embedders driven by
//! external events.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use takeoff_lite_engine::{PipelineConfig, RecomputeSession, Trigger};
//!
//! let mut session = RecomputeSession::new(PipelineConfig::default());
//! session.open();
//!
//! // The embedder starts its transaction here, rolls back on Err.
//! match session.trigger(&mut model)? {
//!     Trigger::Recomputed(summary) => println!("{} writes", summary.writes),
//!     Trigger::Discarded => {}
//! }
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod session;
pub mod writer;

pub use config::{CategoryBinding, PipelineConfig, Settings};
pub use error::{Error, Result};
pub use pipeline::{recompute, RecomputeSummary};
pub use session::{RecomputeSession, SessionState, Trigger};
pub use writer::{apply_writes, plan_writes, AttributeWrite};
