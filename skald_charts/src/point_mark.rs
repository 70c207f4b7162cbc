// Copyright 2026 the Skald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point mark resolution.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect};
use log::{debug, trace};

use crate::axis::{AxisMap, AxisSpec};
use crate::channel::{QuantitativeChannel, VisualPropertyType};
use crate::mark::{AnyMark, Mark};
use crate::symbol::{PointSymbol, Symbol, SymbolShape};

/// A scatter layer: one glyph per record, positioned by two quantitative
/// channels.
///
/// Records whose x or y value cannot be scaled produce no glyph; the
/// remaining glyphs keep data order.
#[derive(Clone)]
pub struct PointMark<R> {
    data: Vec<R>,
    x: QuantitativeChannel<R>,
    y: QuantitativeChannel<R>,
    shape: SymbolShape,
    size: f64,
    x_axis: Option<AxisSpec>,
    y_axis: Option<AxisSpec>,
}

impl<R> PointMark<R> {
    /// Creates a point mark with circle glyphs of size 5 and no axes.
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
            shape: SymbolShape::Circle,
            size: 5.0,
            x_axis: None,
            y_axis: None,
        }
    }

    /// Sets the glyph shape.
    pub fn with_shape(mut self, shape: SymbolShape) -> Self {
        self.shape = shape;
        self
    }

    /// Sets the glyph size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
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

impl<R> Mark for PointMark<R> {
    fn symbols_for_mark(&self, rect: Rect) -> Vec<Symbol> {
        let width = rect.width().max(0.0);
        let height = rect.height().max(0.0);
        let x = self.x.range(0.0, width);
        let y = self.y.range(0.0, height);
        debug!("resolving {} point records into {:?}", self.data.len(), rect);

        let mut symbols = Vec::with_capacity(self.data.len());
        for (row, record) in self.data.iter().enumerate() {
            let (Some(sx), Some(sy)) = (x.scaled_value(record), y.scaled_value(record)) else {
                trace!("skipping point record {row}: no scaled position");
                continue;
            };
            symbols.push(Symbol::Point(PointSymbol {
                at: Point::new(rect.x0 + sx, rect.y0 + (height - sy)),
                shape: self.shape,
                size: self.size,
            }));
        }
        symbols
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

impl<R> fmt::Debug for PointMark<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointMark")
            .field("data", &self.data.len())
            .field("x", &self.x)
            .field("y", &self.y)
            .field("shape", &self.shape)
            .field("size", &self.size)
            .field("x_axis", &self.x_axis)
            .field("y_axis", &self.y_axis)
            .finish()
    }
}

impl<R: Send + Sync + 'static> From<PointMark<R>> for AnyMark {
    fn from(mark: PointMark<R>) -> Self {
        Self::new(mark)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use crate::axis::AxisLocation;

    use super::*;

    struct Xy {
        x: f64,
        y: f64,
    }

    fn xy(x: f64, y: f64) -> Xy {
        Xy { x, y }
    }

    fn mark(data: Vec<Xy>) -> PointMark<Xy> {
        PointMark::new(
            data,
            QuantitativeChannel::new(|r: &Xy| r.x),
            QuantitativeChannel::new(|r: &Xy| r.y),
        )
    }

    fn positions(symbols: &[Symbol]) -> Vec<Point> {
        symbols
            .iter()
            .map(|s| match s {
                Symbol::Point(p) => p.at,
                other => panic!("expected a point symbol, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn records_land_in_rect_coordinates_with_y_up() {
        let mark = mark(alloc::vec![xy(0.0, 0.0), xy(5.0, 10.0), xy(10.0, 5.0)]);
        let symbols = mark.symbols_for_mark(Rect::new(0.0, 0.0, 100.0, 100.0));
        let positions = positions(&symbols);
        assert_eq!(
            positions,
            [
                Point::new(0.0, 100.0),
                Point::new(50.0, 0.0),
                Point::new(100.0, 50.0),
            ]
        );
    }

    #[test]
    fn zero_size_rects_collapse_to_the_origin() {
        let mark = mark(alloc::vec![xy(0.0, 0.0), xy(5.0, 10.0), xy(10.0, 5.0)]);
        let symbols = mark.symbols_for_mark(Rect::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(symbols.len(), 3);
        for at in positions(&symbols) {
            assert_eq!(at, Point::new(0.0, 0.0));
        }
    }

    #[test]
    fn negative_span_rects_behave_like_zero_size() {
        let mark = mark(alloc::vec![xy(0.0, 0.0), xy(10.0, 10.0)]);
        let symbols = mark.symbols_for_mark(Rect::new(10.0, 10.0, 0.0, 0.0));
        for at in positions(&symbols) {
            assert_eq!(at, Point::new(10.0, 10.0));
        }
    }

    #[test]
    fn unscalable_records_are_skipped_in_order() {
        let mark = mark(alloc::vec![xy(0.0, 0.0), xy(f64::NAN, 5.0), xy(10.0, 10.0)]);
        let symbols = mark.symbols_for_mark(Rect::new(0.0, 0.0, 100.0, 100.0));
        let positions = positions(&symbols);
        assert_eq!(positions, [Point::new(0.0, 100.0), Point::new(100.0, 0.0)]);
    }

    #[test]
    fn resolution_is_repeatable() {
        let mark = mark(alloc::vec![xy(0.0, 0.0), xy(5.0, 10.0), xy(10.0, 5.0)]);
        let rect = Rect::new(3.0, 4.0, 103.0, 54.0);
        assert_eq!(mark.symbols_for_mark(rect), mark.symbols_for_mark(rect));
    }

    #[test]
    fn glyph_styling_is_configurable() {
        let mark = mark(alloc::vec![xy(1.0, 1.0), xy(2.0, 2.0)])
            .with_shape(SymbolShape::Square)
            .with_size(9.0);
        let symbols = mark.symbols_for_mark(Rect::new(0.0, 0.0, 10.0, 10.0));
        let Symbol::Point(p) = &symbols[0] else {
            panic!("expected a point symbol");
        };
        assert_eq!(p.shape, SymbolShape::Square);
        assert_eq!(p.size, 9.0);
    }

    #[test]
    fn axes_resolve_only_when_declared() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let bare = mark(alloc::vec![xy(0.0, 0.0), xy(10.0, 10.0)]);
        assert!(bare.axis_for_mark(rect).is_empty());

        let with_axes = mark(alloc::vec![xy(0.0, 0.0), xy(10.0, 10.0)])
            .with_x_axis(AxisSpec::bottom())
            .with_y_axis(AxisSpec::left());
        let axes = with_axes.axis_for_mark(rect);
        assert_eq!(axes.len(), 2);
        assert_eq!(axes[&AxisLocation::Bottom].ticks.len(), 11);
        assert!(axes.contains_key(&AxisLocation::Left));
    }

    #[test]
    #[should_panic(expected = "x axis must sit on the top or bottom edge")]
    fn x_axes_reject_vertical_edges() {
        let _ = mark(alloc::vec![xy(0.0, 0.0)]).with_x_axis(AxisSpec::left());
    }
}
