// Copyright 2026 the Skald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar mark resolution.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;
use log::{debug, trace};

use crate::axis::{AxisMap, AxisSpec};
use crate::channel::{CategoricalChannel, QuantitativeChannel, VisualPropertyType};
use crate::mark::{AnyMark, Mark};
use crate::symbol::{BarSymbol, Symbol};

/// A bar layer: one rectangle per record, one band per category.
///
/// Bars span vertically between the record's value and the baseline, so
/// values below the baseline hang downward. Records whose category is not in
/// the x domain, or whose value cannot be scaled, produce no bar.
#[derive(Clone)]
pub struct BarMark<R> {
    data: Vec<R>,
    x: CategoricalChannel<R>,
    y: QuantitativeChannel<R>,
    baseline: f64,
    x_axis: Option<AxisSpec>,
    y_axis: Option<AxisSpec>,
}

impl<R> BarMark<R> {
    /// Creates a bar mark with a baseline of 0 and no axes.
    ///
    /// Channel domains freeze here: channels without an explicit domain
    /// infer one from `data`.
    pub fn new(data: Vec<R>, x: CategoricalChannel<R>, y: QuantitativeChannel<R>) -> Self {
        let x = x.apply_domain(&data);
        let y = y.apply_domain(&data);
        Self {
            data,
            x,
            y,
            baseline: 0.0,
            x_axis: None,
            y_axis: None,
        }
    }

    /// Sets the data value bars grow from.
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
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

impl<R> Mark for BarMark<R> {
    fn symbols_for_mark(&self, rect: Rect) -> Vec<Symbol> {
        let width = rect.width().max(0.0);
        let height = rect.height().max(0.0);
        let x = self.x.range(0.0, width);
        let y = self.y.range(0.0, height);
        debug!("resolving {} bar records into {:?}", self.data.len(), rect);

        let Some(scale) = y.scale().copied() else {
            return Vec::new();
        };
        let baseline_px = rect.y0 + (height - scale.map(self.baseline));

        let mut symbols = Vec::with_capacity(self.data.len());
        for (row, record) in self.data.iter().enumerate() {
            let (Some(band), Some(sy)) = (x.band(record), y.scaled_value(record)) else {
                trace!("skipping bar record {row}: no band or scaled value");
                continue;
            };
            let value_px = rect.y0 + (height - sy);
            symbols.push(Symbol::Bar(BarSymbol {
                rect: Rect::new(
                    rect.x0 + band.0,
                    value_px.min(baseline_px),
                    rect.x0 + band.1,
                    value_px.max(baseline_px),
                ),
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
            axes.insert(
                spec.location,
                spec.resolve_band(bound.categories(), bound.scale(), rect),
            );
        }
        if let Some(spec) = &self.y_axis {
            let bound = self.y.range(0.0, height);
            axes.insert(spec.location, spec.resolve_continuous(bound.scale(), rect));
        }
        axes
    }

    fn x_property_type(&self) -> VisualPropertyType {
        VisualPropertyType::Categorical
    }

    fn y_property_type(&self) -> VisualPropertyType {
        VisualPropertyType::Quantitative
    }
}

impl<R> fmt::Debug for BarMark<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarMark")
            .field("data", &self.data.len())
            .field("x", &self.x)
            .field("y", &self.y)
            .field("baseline", &self.baseline)
            .field("x_axis", &self.x_axis)
            .field("y_axis", &self.y_axis)
            .finish()
    }
}

impl<R: Send + Sync + 'static> From<BarMark<R>> for AnyMark {
    fn from(mark: BarMark<R>) -> Self {
        Self::new(mark)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;

    use crate::axis::AxisLocation;

    use super::*;

    struct Tally {
        name: &'static str,
        total: f64,
    }

    fn tally(name: &'static str, total: f64) -> Tally {
        Tally { name, total }
    }

    fn mark(data: Vec<Tally>) -> BarMark<Tally> {
        BarMark::new(
            data,
            CategoricalChannel::new(|r: &Tally| String::from(r.name)),
            QuantitativeChannel::new(|r: &Tally| r.total).with_domain(0.0, 10.0),
        )
    }

    fn rects(symbols: &[Symbol]) -> Vec<Rect> {
        symbols
            .iter()
            .map(|s| match s {
                Symbol::Bar(b) => b.rect,
                other => panic!("expected a bar symbol, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn bars_grow_up_from_the_baseline() {
        let mark = mark(alloc::vec![tally("a", 5.0), tally("b", 10.0)]);
        let symbols = mark.symbols_for_mark(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(
            rects(&symbols),
            [
                Rect::new(0.0, 50.0, 50.0, 100.0),
                Rect::new(50.0, 0.0, 100.0, 100.0),
            ]
        );
    }

    #[test]
    fn values_below_the_baseline_hang_down() {
        let data = alloc::vec![tally("a", -5.0)];
        let mark = BarMark::new(
            data,
            CategoricalChannel::new(|r: &Tally| String::from(r.name)),
            QuantitativeChannel::new(|r: &Tally| r.total).with_domain(-10.0, 10.0),
        );
        let symbols = mark.symbols_for_mark(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(rects(&symbols), [Rect::new(0.0, 50.0, 100.0, 75.0)]);
    }

    #[test]
    fn the_baseline_is_configurable() {
        let mark = mark(alloc::vec![tally("a", 5.0), tally("b", 10.0)]).with_baseline(5.0);
        let symbols = mark.symbols_for_mark(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(
            rects(&symbols),
            [
                Rect::new(0.0, 50.0, 50.0, 50.0),
                Rect::new(50.0, 0.0, 100.0, 50.0),
            ]
        );
    }

    #[test]
    fn records_outside_the_explicit_domain_are_skipped() {
        let data = alloc::vec![tally("a", 5.0), tally("b", 10.0)];
        let mark = BarMark::new(
            data,
            CategoricalChannel::new(|r: &Tally| String::from(r.name)).with_domain(["a"]),
            QuantitativeChannel::new(|r: &Tally| r.total).with_domain(0.0, 10.0),
        );
        let symbols = mark.symbols_for_mark(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(rects(&symbols), [Rect::new(0.0, 50.0, 100.0, 100.0)]);
    }

    #[test]
    fn an_unbound_value_channel_yields_no_bars() {
        let data = alloc::vec![tally("a", f64::NAN), tally("b", f64::NAN)];
        let mark = BarMark::new(
            data,
            CategoricalChannel::new(|r: &Tally| String::from(r.name)),
            QuantitativeChannel::new(|r: &Tally| r.total),
        );
        let symbols = mark.symbols_for_mark(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(symbols.is_empty());
    }

    #[test]
    fn category_axes_tick_band_centers() {
        let mark = mark(alloc::vec![tally("a", 5.0), tally("b", 10.0)])
            .with_x_axis(AxisSpec::bottom())
            .with_y_axis(AxisSpec::left());
        let axes = mark.axis_for_mark(Rect::new(0.0, 0.0, 100.0, 100.0));
        let bottom = &axes[&AxisLocation::Bottom];
        assert_eq!(bottom.ticks.len(), 2);
        assert_eq!(bottom.ticks[0].label, "a");
        assert_eq!(bottom.ticks[0].position, 25.0);
        assert!(axes.contains_key(&AxisLocation::Left));
    }

    #[test]
    fn channel_kinds_are_reported() {
        let mark = mark(alloc::vec![tally("a", 5.0)]);
        assert_eq!(mark.x_property_type(), VisualPropertyType::Categorical);
        assert_eq!(mark.y_property_type(), VisualPropertyType::Quantitative);
    }
}
