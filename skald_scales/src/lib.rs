// Copyright 2026 the Skald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale mappings from data domains to pixel ranges.
//!
//! A scale is a pure value: a frozen domain paired with a pixel range,
//! mapping data values to positions (and back, for tick work).
//! - **Continuous** scales ([`ScaleLinear`], [`ScaleLog`]) also generate
//!   "nice" tick values spanning their domain.
//! - **Band** scales ([`ScaleBand`]) partition a range into equal-width
//!   bands for categorical data.
//! - [`format_tick_with_step`] turns tick values into human-readable labels.
//!
//! This crate is deliberately free of geometry and rendering concerns;
//! `skald_charts` layers channels, marks, and axes on top of it.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod band;
mod continuous;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod linear;
mod log;

pub use band::ScaleBand;
pub use continuous::{ScaleContinuous, ScaleKind};
pub use format::format_tick_with_step;
pub use linear::ScaleLinear;
pub use log::ScaleLog;
