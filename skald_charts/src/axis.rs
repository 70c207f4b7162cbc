// Copyright 2026 the Skald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis templates and their per-rectangle resolution.
//!
//! An [`AxisSpec`] is declared up front on a mark and knows nothing about
//! the drawing area. Resolving it against a rectangle produces an [`Axis`]:
//! concrete tick positions and labels plus the layout metadata a renderer
//! needs to paint one chart edge. Resolved axes never outlive a rectangle
//! change; marks resolve them fresh on every draw.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;
use skald_scales::{ScaleBand, ScaleContinuous, format_tick_with_step};

/// Tolerance when deciding whether a tick value sits inside the domain.
const DOMAIN_EPS: f64 = 1.0e-9;

/// Map from chart edge to the axis resolved for it.
pub type AxisMap = hashbrown::HashMap<AxisLocation, Axis>;

/// The chart edge an axis is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisLocation {
    /// Above the plot area.
    Top,
    /// Below the plot area.
    Bottom,
    /// Left of the plot area.
    Left,
    /// Right of the plot area.
    Right,
}

impl AxisLocation {
    /// Returns `true` for the horizontal (top/bottom) edges.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Which side of the axis rule tick marks extend toward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TickOrientation {
    /// Ticks extend into the plot area.
    Inner,
    /// Ticks extend away from the plot area.
    #[default]
    Outer,
}

/// Placement of the axis label along its edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelAlignment {
    /// At the start of the edge.
    Start,
    /// Centered on the edge.
    #[default]
    Center,
    /// At the end of the edge.
    End,
}

/// A resolved tick: a label and a pixel position along the axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Human-readable tick label.
    pub label: String,
    /// Position along the axis, in absolute pixel coordinates.
    pub position: f64,
}

/// Declarative axis configuration, independent of any drawing rectangle.
#[derive(Clone)]
pub struct AxisSpec {
    /// Edge this axis is attached to.
    pub location: AxisLocation,
    /// Whether to draw the rule line along the edge.
    pub rule: bool,
    /// Approximate number of ticks when generating default ticks.
    pub tick_count: usize,
    /// Explicit tick values for quantitative channels.
    ///
    /// Values outside the channel's domain are dropped at resolution.
    pub tick_values: Option<Vec<f64>>,
    /// Explicit categories to tick for categorical channels.
    ///
    /// Categories missing from the channel's domain are dropped at
    /// resolution.
    pub tick_categories: Option<Vec<String>>,
    /// Tick mark length in pixels.
    pub tick_length: f64,
    /// Side of the rule the tick marks extend toward.
    pub tick_orientation: TickOrientation,
    /// Padding between the tick end and the tick label.
    pub tick_padding: f64,
    /// Whether to extend grid lines from the ticks across the plot area.
    pub grid: bool,
    /// Axis label text; empty for no label.
    pub label: String,
    /// Placement of the label along the edge.
    pub label_alignment: LabelAlignment,
    /// Extra label offset from the edge, in pixels.
    pub label_offset: f64,
    /// Optional tick label formatter.
    ///
    /// The second argument is the tick step (best-effort), which can be used
    /// for consistent decimal formatting.
    pub tick_formatter: Option<Arc<dyn Fn(f64, f64) -> String + Send + Sync>>,
}

impl fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisSpec")
            .field("location", &self.location)
            .field("rule", &self.rule)
            .field("tick_count", &self.tick_count)
            .field("tick_values", &self.tick_values)
            .field("tick_categories", &self.tick_categories)
            .field("tick_length", &self.tick_length)
            .field("tick_orientation", &self.tick_orientation)
            .field("tick_padding", &self.tick_padding)
            .field("grid", &self.grid)
            .field("label", &self.label)
            .field("label_alignment", &self.label_alignment)
            .field("label_offset", &self.label_offset)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

impl AxisSpec {
    /// Creates an axis for `location` with default styling.
    ///
    /// The returned axis has:
    /// - a rule line and no grid lines
    /// - `tick_count = 10`, `tick_length = 3`, `tick_padding = 5`
    /// - outer tick marks
    /// - no label.
    pub fn new(location: AxisLocation) -> Self {
        Self {
            location,
            rule: true,
            tick_count: 10,
            tick_values: None,
            tick_categories: None,
            tick_length: 3.0,
            tick_orientation: TickOrientation::Outer,
            tick_padding: 5.0,
            grid: false,
            label: String::new(),
            label_alignment: LabelAlignment::Center,
            label_offset: 0.0,
            tick_formatter: None,
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom() -> Self {
        Self::new(AxisLocation::Bottom)
    }

    /// Convenience constructor for a `top` axis.
    pub fn top() -> Self {
        Self::new(AxisLocation::Top)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left() -> Self {
        Self::new(AxisLocation::Left)
    }

    /// Convenience constructor for a `right` axis.
    pub fn right() -> Self {
        Self::new(AxisLocation::Right)
    }

    /// Enable or disable the rule line.
    pub fn with_rule(mut self, rule: bool) -> Self {
        self.rule = rule;
        self
    }

    /// Set the approximate tick count for default tick generation.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Set explicit tick values, replacing default tick generation.
    pub fn with_tick_values(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.tick_values = Some(values.into_iter().collect());
        self
    }

    /// Set explicit tick categories, replacing one-tick-per-category.
    pub fn with_tick_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tick_categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Set the tick mark length in pixels.
    pub fn with_tick_length(mut self, tick_length: f64) -> Self {
        self.tick_length = tick_length;
        self
    }

    /// Set which side of the rule tick marks extend toward.
    pub fn with_tick_orientation(mut self, orientation: TickOrientation) -> Self {
        self.tick_orientation = orientation;
        self
    }

    /// Set the padding between tick marks and labels.
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    /// Enable or disable grid lines.
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// Set the axis label text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the label placement along the edge.
    pub fn with_label_alignment(mut self, alignment: LabelAlignment) -> Self {
        self.label_alignment = alignment;
        self
    }

    /// Set an extra label offset from the edge.
    pub fn with_label_offset(mut self, label_offset: f64) -> Self {
        self.label_offset = label_offset;
        self
    }

    /// Set a custom tick label formatter.
    pub fn with_tick_formatter(
        mut self,
        f: impl Fn(f64, f64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Resolves this template against a continuous scale and rectangle.
    ///
    /// With no explicit tick values, ticks come from the scale's nice-tick
    /// generation; either way, values outside the scale's domain are
    /// dropped. A channel that never acquired a domain passes `None` and
    /// resolves to an axis with no ticks.
    pub(crate) fn resolve_continuous(&self, scale: Option<&ScaleContinuous>, rect: Rect) -> Axis {
        let ticks = match scale {
            Some(scale) => self.continuous_ticks(scale, rect),
            None => Vec::new(),
        };
        self.resolved(ticks)
    }

    fn continuous_ticks(&self, scale: &ScaleContinuous, rect: Rect) -> Vec<Tick> {
        let values = match &self.tick_values {
            Some(values) => values.clone(),
            None => scale.ticks(self.tick_count),
        };
        let step = tick_step(&values);
        let (lo, hi) = domain_bounds(scale);
        let mut ticks = Vec::with_capacity(values.len());
        for v in values {
            if !v.is_finite() || v < lo - DOMAIN_EPS || v > hi + DOMAIN_EPS {
                continue;
            }
            let label = match &self.tick_formatter {
                Some(format) => format(v, step),
                None => format_tick_with_step(v, step),
            };
            ticks.push(Tick {
                label,
                position: self.pixel_position(scale.map(v), rect),
            });
        }
        ticks
    }

    /// Resolves this template against a band channel's categories.
    ///
    /// With no explicit tick categories there is one tick per category,
    /// placed at the band center. Explicit categories missing from the
    /// channel's domain are dropped.
    pub(crate) fn resolve_band(
        &self,
        categories: &[String],
        scale: &ScaleBand,
        rect: Rect,
    ) -> Axis {
        let selected: Vec<(usize, String)> = match &self.tick_categories {
            Some(wanted) => wanted
                .iter()
                .filter_map(|category| {
                    categories
                        .iter()
                        .position(|c| c == category)
                        .map(|index| (index, category.clone()))
                })
                .collect(),
            None => categories.iter().cloned().enumerate().collect(),
        };
        let ticks = selected
            .into_iter()
            .map(|(index, label)| Tick {
                position: self.pixel_position(scale.center(index), rect),
                label,
            })
            .collect();
        self.resolved(ticks)
    }

    // Scaled positions are rectangle-local; vertical axes flip so the domain
    // minimum lands at the rectangle's bottom edge.
    fn pixel_position(&self, scaled: f64, rect: Rect) -> f64 {
        if self.location.is_horizontal() {
            rect.x0 + scaled
        } else {
            rect.y0 + (rect.height().max(0.0) - scaled)
        }
    }

    fn resolved(&self, ticks: Vec<Tick>) -> Axis {
        Axis {
            location: self.location,
            ticks,
            rule: self.rule,
            tick_length: self.tick_length,
            tick_orientation: self.tick_orientation,
            tick_padding: self.tick_padding,
            grid: self.grid,
            label: self.label.clone(),
            label_alignment: self.label_alignment,
            label_offset: self.label_offset,
        }
    }
}

/// An axis resolved against a rectangle: concrete ticks plus layout metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    /// Edge this axis is attached to.
    pub location: AxisLocation,
    /// Resolved ticks in axis order.
    pub ticks: Vec<Tick>,
    /// Whether to draw the rule line along the edge.
    pub rule: bool,
    /// Tick mark length in pixels.
    pub tick_length: f64,
    /// Side of the rule the tick marks extend toward.
    pub tick_orientation: TickOrientation,
    /// Padding between the tick end and the tick label.
    pub tick_padding: f64,
    /// Whether to extend grid lines from the ticks across the plot area.
    pub grid: bool,
    /// Axis label text; empty for no label.
    pub label: String,
    /// Placement of the label along the edge.
    pub label_alignment: LabelAlignment,
    /// Extra label offset from the edge, in pixels.
    pub label_offset: f64,
}

fn domain_bounds(scale: &ScaleContinuous) -> (f64, f64) {
    let d0 = scale.domain_min();
    let d1 = scale.domain_max();
    if d0 <= d1 { (d0, d1) } else { (d1, d0) }
}

fn tick_step(values: &[f64]) -> f64 {
    let mut step = f64::INFINITY;
    for pair in values.windows(2) {
        let d = (pair[1] - pair[0]).abs();
        if d > 0.0 && d < step {
            step = d;
        }
    }
    if step.is_finite() { step } else { 0.0 }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use skald_scales::ScaleKind;

    use super::*;

    fn linear(domain: (f64, f64), range: (f64, f64)) -> ScaleContinuous {
        ScaleContinuous::new(ScaleKind::Linear, domain, range)
    }

    #[test]
    fn default_ticks_span_the_domain() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let scale = linear((0.0, 10.0), (0.0, 100.0));
        let axis = AxisSpec::bottom().resolve_continuous(Some(&scale), rect);
        assert_eq!(axis.ticks.len(), 11);
        assert_eq!(axis.ticks[0].label, "0");
        assert_eq!(axis.ticks[0].position, 0.0);
        let last = axis.ticks.last().unwrap();
        assert_eq!(last.label, "10");
        assert!((last.position - 100.0).abs() < 1e-9);
    }

    #[test]
    fn explicit_out_of_domain_ticks_are_dropped() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let scale = linear((0.0, 10.0), (0.0, 100.0));
        let axis = AxisSpec::bottom()
            .with_tick_values([-5.0, 0.0, 5.0, 15.0, 10.0])
            .resolve_continuous(Some(&scale), rect);
        let labels: Vec<&str> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0", "5", "10"]);
    }

    #[test]
    fn vertical_axes_flip_positions() {
        let rect = Rect::new(0.0, 0.0, 50.0, 100.0);
        let scale = linear((0.0, 10.0), (0.0, 100.0));
        let axis = AxisSpec::left()
            .with_tick_values([0.0, 10.0])
            .resolve_continuous(Some(&scale), rect);
        // Domain minimum at the bottom edge, maximum at the top.
        assert_eq!(axis.ticks[0].position, 100.0);
        assert_eq!(axis.ticks[1].position, 0.0);
    }

    #[test]
    fn positions_are_offset_by_the_rect_origin() {
        let rect = Rect::new(7.0, 9.0, 107.0, 59.0);
        let scale = linear((0.0, 10.0), (0.0, 100.0));
        let axis = AxisSpec::bottom()
            .with_tick_values([5.0])
            .resolve_continuous(Some(&scale), rect);
        assert_eq!(axis.ticks[0].position, 57.0);
    }

    #[test]
    fn categorical_axes_tick_band_centers() {
        let rect = Rect::new(0.0, 0.0, 90.0, 30.0);
        let categories: Vec<String> = ["a", "b", "c"].iter().map(|s| String::from(*s)).collect();
        let scale = ScaleBand::new((0.0, 90.0), categories.len());
        let axis = AxisSpec::bottom().resolve_band(&categories, &scale, rect);
        let positions: Vec<f64> = axis.ticks.iter().map(|t| t.position).collect();
        assert_eq!(positions, [15.0, 45.0, 75.0]);
        assert_eq!(axis.ticks[1].label, "b");
    }

    #[test]
    fn unknown_explicit_categories_are_dropped() {
        let rect = Rect::new(0.0, 0.0, 90.0, 30.0);
        let categories: Vec<String> = ["a", "b", "c"].iter().map(|s| String::from(*s)).collect();
        let scale = ScaleBand::new((0.0, 90.0), categories.len());
        let axis = AxisSpec::bottom()
            .with_tick_categories(["c", "zzz", "a"])
            .resolve_band(&categories, &scale, rect);
        let labels: Vec<&str> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["c", "a"]);
    }

    #[test]
    fn unbound_scales_resolve_to_tickless_axes() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let axis = AxisSpec::bottom().resolve_continuous(None, rect);
        assert!(axis.ticks.is_empty());
        assert!(axis.rule);
    }

    #[test]
    fn zero_size_rects_collapse_positions() {
        let rect = Rect::new(0.0, 0.0, 0.0, 0.0);
        let scale = linear((0.0, 10.0), (0.0, 0.0));
        let axis = AxisSpec::left()
            .with_tick_values([0.0, 5.0, 10.0])
            .resolve_continuous(Some(&scale), rect);
        assert_eq!(axis.ticks.len(), 3);
        for tick in &axis.ticks {
            assert_eq!(tick.position, 0.0);
        }
    }

    #[test]
    fn custom_formatter_overrides_labels() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let scale = linear((0.0, 10.0), (0.0, 100.0));
        let axis = AxisSpec::bottom()
            .with_tick_values([5.0])
            .with_tick_formatter(|v, _| alloc::format!("{v}s"))
            .resolve_continuous(Some(&scale), rect);
        assert_eq!(axis.ticks[0].label, "5s");
    }

    #[test]
    fn styling_carries_through_resolution() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let axis = AxisSpec::top()
            .with_grid(true)
            .with_label("elapsed")
            .with_tick_length(6.0)
            .with_tick_orientation(TickOrientation::Inner)
            .with_rule(false)
            .resolve_continuous(None, rect);
        assert!(axis.grid);
        assert!(!axis.rule);
        assert_eq!(axis.label, "elapsed");
        assert_eq!(axis.tick_length, 6.0);
        assert_eq!(axis.tick_orientation, TickOrientation::Inner);
        assert_eq!(axis.location, AxisLocation::Top);
    }
}
