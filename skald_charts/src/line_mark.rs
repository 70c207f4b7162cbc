// Copyright 2026 the Skald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line mark resolution.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect};
use log::{debug, trace};

use crate::axis::{AxisMap, AxisSpec};
use crate::channel::{QuantitativeChannel, VisualPropertyType};
use crate::mark::{AnyMark, Mark};
use crate::symbol::{LineSymbol, Symbol};

/// A line layer: one polyline through every record, in data order.
///
/// Records whose x or y value cannot be scaled contribute no vertex; the
/// polyline connects straight across the gap. A mark with no scalable
/// records resolves to no symbols at all.
#[derive(Clone)]
pub struct LineMark<R> {
    data: Vec<R>,
    x: QuantitativeChannel<R>,
    y: QuantitativeChannel<R>,
    x_axis: Option<AxisSpec>,
    y_axis: Option<AxisSpec>,
}

impl<R> LineMark<R> {
    /// Creates a line mark with no axes.
    ///
    /// Channel domains freeze here: channels without an explicit domain
    /// infer one from `data`.
    pub fn new(data: Vec<R>, x: QuantitativeChannel<R>, y: QuantitativeChannel<R>) -> Self {
        let x = x.apply_domain(&data);
        let y = y.apply_domain(&data);
        Self {
            data,
            x,
            y,
            x_axis: None,
            y_axis: None,
        }
    }

    /// Declares an axis for the x channel.
    ///
    /// # Panics
    ///
    /// Panics unless the axis sits on the top or bottom edge.
    pub fn with_x_axis(mut self, axis: AxisSpec) -> Self {
        assert!(
            axis.location.is_horizontal(),
            "x axis must sit on the top or bottom edge"
        );
        self.x_axis = Some(axis);
        self
    }

    /// Declares an axis for the y channel.
    ///
    /// # Panics
    ///
    /// Panics unless the axis sits on the left or right edge.
    pub fn with_y_axis(mut self, axis: AxisSpec) -> Self {
        assert!(
            !axis.location.is_horizontal(),
            "y axis must sit on the left or right edge"
        );
        self.y_axis = Some(axis);
        self
    }
}

impl<R> Mark for LineMark<R> {
    fn symbols_for_mark(&self, rect: Rect) -> Vec<Symbol> {
        let width = rect.width().max(0.0);
        let height = rect.height().max(0.0);
        let x = self.x.range(0.0, width);
        let y = self.y.range(0.0, height);
        debug!("resolving {} line records into {:?}", self.data.len(), rect);

        let mut vertices = Vec::with_capacity(self.data.len());
        for (row, record) in self.data.iter().enumerate() {
            let (Some(sx), Some(sy)) = (x.scaled_value(record), y.scaled_value(record)) else {
                trace!("skipping line record {row}: no scaled position");
                continue;
            };
            vertices.push(Point::new(rect.x0 + sx, rect.y0 + (height - sy)));
        }
        if vertices.is_empty() {
            return Vec::new();
        }
        alloc::vec![Symbol::Line(LineSymbol { vertices })]
    }

    fn axis_for_mark(&self, rect: Rect) -> AxisMap {
        let width = rect.width().max(0.0);
        let height = rect.height().max(0.0);
        let mut axes = AxisMap::new();
        if let Some(spec) = &self.x_axis {
            let bound = self.x.range(0.0, width);
            axes.insert(spec.location, spec.resolve_continuous(bound.scale(), rect));
        }
        if let Some(spec) = &self.y_axis {
            let bound = self.y.range(0.0, height);
            axes.insert(spec.location, spec.resolve_continuous(bound.scale(), rect));
        }
        axes
    }

    fn x_property_type(&self) -> VisualPropertyType {
        VisualPropertyType::Quantitative
    }

    fn y_property_type(&self) -> VisualPropertyType {
        VisualPropertyType::Quantitative
    }
}

impl<R> fmt::Debug for LineMark<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineMark")
            .field("data", &self.data.len())
            .field("x", &self.x)
            .field("y", &self.y)
            .field("x_axis", &self.x_axis)
            .field("y_axis", &self.y_axis)
            .finish()
    }
}

impl<R: Send + Sync + 'static> From<LineMark<R>> for AnyMark {
    fn from(mark: LineMark<R>) -> Self {
        Self::new(mark)
    }
}
