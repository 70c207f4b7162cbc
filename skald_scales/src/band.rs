// Copyright 2026 the Skald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Band scales for categorical data.

/// A discrete scale that partitions a range into equal-width bands.
///
/// Bands carry no padding, so `band_width() * count` always covers the whole
/// range span and neighboring bands share an edge.
#[derive(Clone, Copy, Debug)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self { range, count }
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        if self.count == 0 {
            return 0.0;
        }
        (r1 - r0).abs() / self.count as f64
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the start position of the band at `index`.
    ///
    /// Bands are laid out from the lower end of the range regardless of
    /// range direction.
    pub fn start(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let lo = if r1 >= r0 { r0 } else { r1 };
        lo + self.band_width() * index as f64
    }

    /// Returns the `(start, end)` interval of the band at `index`.
    pub fn band(&self, index: usize) -> (f64, f64) {
        let x0 = self.start(index);
        (x0, x0 + self.band_width())
    }

    /// Returns the center of the band at `index`.
    pub fn center(&self, index: usize) -> f64 {
        self.start(index) + self.band_width() / 2.0
    }
}
