// Copyright 2026 the Skald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value, using the step between neighboring ticks to pick a
/// decimal precision.
///
/// Integral steps print integers; fractional steps print just enough decimals
/// to tell neighboring ticks apart. A zero step (a lone tick, or log-scale
/// power ticks) falls back to trimmed decimal output. Values that round to
/// zero never pick up a minus sign.
pub fn format_tick_with_step(value: f64, step: f64) -> String {
    if !value.is_finite() {
        return alloc::format!("{value}");
    }
    let step = step.abs();
    if step >= 1.0 {
        return format_integer(value);
    }
    if step > 0.0 {
        let decimals = decimals_for_step(step);
        return strip_negative_zero(alloc::format!("{value:.decimals$}"));
    }
    strip_negative_zero(trimmed_decimal(value))
}

fn decimals_for_step(step: f64) -> usize {
    let mut decimals = (-step.log10().floor()).clamp(0.0, 9.0);
    // One extra digit when the step itself is not representable at this
    // precision (a step of 0.25 needs two decimals, not one).
    let scaled = step * 10_f64.powf(decimals);
    if (scaled - scaled.round()).abs() > 1.0e-9 {
        decimals += 1.0;
    }
    #[allow(clippy::cast_possible_truncation, reason = "clamped to single digits")]
    {
        decimals as usize
    }
}

fn format_integer(value: f64) -> String {
    let rounded = value.round();
    if rounded.abs() < 1.0e15 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded to the exactly-representable integer range"
        )]
        {
            return alloc::format!("{}", rounded as i64);
        }
    }
    alloc::format!("{rounded}")
}

fn trimmed_decimal(value: f64) -> String {
    let s = alloc::format!("{value:.6}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    String::from(trimmed)
}

fn strip_negative_zero(s: String) -> String {
    let is_negative_zero =
        s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') && s.len() > 1;
    if is_negative_zero {
        String::from(&s[1..])
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn integral_steps_print_integers() {
        assert_eq!(format_tick_with_step(5.0, 1.0), "5");
        assert_eq!(format_tick_with_step(1500.0, 500.0), "1500");
        assert_eq!(format_tick_with_step(-20.0, 10.0), "-20");
    }

    #[test]
    fn fractional_steps_print_matching_decimals() {
        assert_eq!(format_tick_with_step(2.5, 0.5), "2.5");
        assert_eq!(format_tick_with_step(0.3, 0.1), "0.3");
    }

    #[test]
    fn quarter_steps_keep_two_decimals() {
        assert_eq!(format_tick_with_step(0.25, 0.25), "0.25");
        assert_eq!(format_tick_with_step(0.75, 0.25), "0.75");
    }

    #[test]
    fn negative_zero_is_avoided() {
        assert_eq!(format_tick_with_step(-1.0e-13, 1.0), "0");
        assert_eq!(format_tick_with_step(-1.0e-13, 0.5), "0.0");
        assert_eq!(format_tick_with_step(-1.0e-13, 0.0), "0");
    }

    #[test]
    fn zero_step_trims_trailing_zeros() {
        assert_eq!(format_tick_with_step(1000.0, 0.0), "1000");
        assert_eq!(format_tick_with_step(0.01, 0.0), "0.01");
        assert_eq!(format_tick_with_step(2.5, 0.0), "2.5");
    }
}
