// Copyright 2026 the Skald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous scale dispatch.

extern crate alloc;

use alloc::vec::Vec;

use crate::{ScaleLinear, ScaleLog};

/// The kind of continuous scale a quantitative channel should use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleKind {
    /// Linear mapping.
    #[default]
    Linear,
    /// Base-10 logarithmic mapping.
    Log,
}

/// A continuous scale instance.
#[derive(Clone, Copy, Debug)]
pub enum ScaleContinuous {
    /// Linear scale.
    Linear(ScaleLinear),
    /// Log scale.
    Log(ScaleLog),
}

impl From<ScaleLinear> for ScaleContinuous {
    fn from(value: ScaleLinear) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleLog> for ScaleContinuous {
    fn from(value: ScaleLog) -> Self {
        Self::Log(value)
    }
}

impl ScaleContinuous {
    /// Creates a scale of `kind` mapping `domain` values to `range` values.
    pub fn new(kind: ScaleKind, domain: (f64, f64), range: (f64, f64)) -> Self {
        match kind {
            ScaleKind::Linear => Self::Linear(ScaleLinear::new(domain, range)),
            ScaleKind::Log => Self::Log(ScaleLog::new(domain, range)),
        }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        match self {
            Self::Linear(s) => s.map(x),
            Self::Log(s) => s.map(x),
        }
    }

    /// Maps a position in range space back into domain space.
    pub fn invert(&self, p: f64) -> f64 {
        match self {
            Self::Linear(s) => s.invert(p),
            Self::Log(s) => s.invert(p),
        }
    }

    /// Returns tick values.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            Self::Linear(s) => s.ticks(count),
            Self::Log(s) => s.ticks(count),
        }
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        match self {
            Self::Linear(s) => s.domain_min(),
            Self::Log(s) => s.domain_min(),
        }
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        match self {
            Self::Linear(s) => s.domain_max(),
            Self::Log(s) => s.domain_max(),
        }
    }

    /// Returns `true` for scales defined only over positive values.
    pub fn positive_only(&self) -> bool {
        matches!(self, Self::Log(_))
    }
}
