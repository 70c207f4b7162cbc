// Copyright 2026 the Skald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart composition.
//!
//! A chart is an ordered list of mark layers over a shared drawing
//! rectangle. Composition stays flat: layers keep their own channels and
//! axes, and the chart concatenates what they resolve to. Later layers draw
//! over earlier ones.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use log::debug;

use crate::axis::AxisMap;
use crate::mark::{AnyMark, Mark};
use crate::symbol::Symbol;

/// An ordered collection of mark layers forming one chart.
#[derive(Clone, Debug, Default)]
pub struct ChartSpec {
    marks: Vec<AnyMark>,
}

impl ChartSpec {
    /// Creates an empty chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a chart from a list of layers, first layer drawn first.
    pub fn compose(marks: Vec<AnyMark>) -> Self {
        Self { marks }
    }

    /// Appends a layer on top of the existing ones.
    pub fn push(&mut self, mark: impl Into<AnyMark>) {
        self.marks.push(mark.into());
    }

    /// Returns the layers in draw order.
    pub fn marks(&self) -> &[AnyMark] {
        &self.marks
    }

    /// Resolves every layer's symbols against `rect`, in draw order.
    pub fn symbols(&self, rect: Rect) -> Vec<Symbol> {
        debug!("resolving {} chart layers into {:?}", self.marks.len(), rect);
        let mut out = Vec::new();
        for mark in &self.marks {
            out.extend(mark.symbols_for_mark(rect));
        }
        out
    }

    /// Resolves every layer's axes against `rect` and merges them by edge.
    ///
    /// When two layers declare an axis for the same edge, the earlier
    /// layer's axis wins.
    pub fn axes(&self, rect: Rect) -> AxisMap {
        let mut out = AxisMap::new();
        for mark in &self.marks {
            for (location, axis) in mark.axis_for_mark(rect) {
                out.entry(location).or_insert(axis);
            }
        }
        out
    }
}
