// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Recompute sessions: the trigger entry point exposed to embedders.
//!
//! A session owns the pipeline configuration and the user-adjustable
//! settings, and serializes recompute requests: triggers are honored
//! only while the session is open, and the embedder holds at most one
//! session per model, so at most one recompute is ever in flight.

use serde::{Deserialize, Serialize};

use takeoff_lite_core::{ModelReader, ModelWriter};

use crate::config::{PipelineConfig, Settings};
use crate::error::Result;
use crate::pipeline::{recompute, RecomputeSummary};

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Closed,
    Open,
}

/// Outcome of one trigger request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A recompute ran to completion.
    Recomputed(RecomputeSummary),
    /// The session was closed; the request was discarded.
    Discarded,
}

/// Owns settings and configuration, and gates the recompute trigger.
#[derive(Debug, Clone)]
pub struct RecomputeSession {
    state: SessionState,
    settings: Settings,
    config: PipelineConfig,
}

impl RecomputeSession {
    /// Creates a closed session with default settings.
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            state: SessionState::Closed,
            settings: Settings::default(),
            config,
        }
    }

    pub fn with_settings(config: PipelineConfig, settings: Settings) -> Self {
        Self {
            state: SessionState::Closed,
            settings,
            config,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn open(&mut self) {
        self.state = SessionState::Open;
    }

    pub fn close(&mut self) {
        self.state = SessionState::Closed;
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Adjusts the line-wrap divider; takes effect on the next trigger.
    /// Returns whether the value was accepted.
    pub fn set_divider(&mut self, divider: f64) -> bool {
        self.settings.set_divider(divider)
    }

    /// Runs one recompute if the session is open, discards otherwise.
    pub fn trigger<M>(&mut self, model: &mut M) -> Result<Trigger>
    where
        M: ModelReader + ModelWriter,
    {
        match self.state {
            SessionState::Closed => {
                tracing::debug!("recompute trigger discarded: session closed");
                Ok(Trigger::Discarded)
            }
            SessionState::Open => {
                recompute(model, &self.config, &self.settings).map(Trigger::Recomputed)
            }
        }
    }
}
