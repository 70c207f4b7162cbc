// Copyright 2026 the Skald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative chart marks over `skald_scales`.
//!
//! This crate turns records plus channel declarations into renderer-agnostic
//! geometry:
//! - **Channels** bind record accessors to scales and freeze their domains
//!   when a mark is built.
//! - **Marks** (point, bar, line) resolve data into symbols for any drawing
//!   rectangle, with y growing upward from the rectangle's bottom edge.
//! - **Axes** resolve per rectangle into concrete ticks alongside the
//!   symbols they annotate.
//!
//! Painting is out of scope; symbols carry `kurbo` geometry and axes carry
//! tick labels as plain strings, and a renderer decides how both look.

#![no_std]

extern crate alloc;

mod axis;
mod bar_mark;
mod channel;
mod chart_spec;
mod line_mark;
mod mark;
mod point_mark;
mod symbol;

pub use axis::{Axis, AxisLocation, AxisMap, AxisSpec, LabelAlignment, Tick, TickOrientation};
pub use bar_mark::BarMark;
pub use channel::{
    CategoricalChannel, QuantitativeChannel, ScaledBandChannel, ScaledChannel, VisualPropertyType,
};
pub use chart_spec::ChartSpec;
pub use line_mark::LineMark;
pub use mark::{AnyMark, Mark};
pub use point_mark::PointMark;
pub use symbol::{BarSymbol, LineSymbol, PointSymbol, Symbol, SymbolShape};
