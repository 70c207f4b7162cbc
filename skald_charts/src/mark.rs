// Copyright 2026 the Skald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mark abstraction and its type-erased wrapper.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;

use crate::axis::AxisMap;
use crate::channel::VisualPropertyType;
use crate::symbol::Symbol;

/// A chart layer that resolves its data into symbols and axes.
///
/// Marks are declarative: they hold data and channel configuration but no
/// pixel state. Resolution happens per call against the rectangle passed in,
/// so the same mark can be drawn into differently sized areas.
pub trait Mark {
    /// Resolves the mark's data into symbols positioned inside `rect`.
    fn symbols_for_mark(&self, rect: Rect) -> Vec<Symbol>;

    /// Resolves the mark's declared axes against `rect`.
    fn axis_for_mark(&self, rect: Rect) -> AxisMap;

    /// The kind of data the x channel carries.
    fn x_property_type(&self) -> VisualPropertyType;

    /// The kind of data the y channel carries.
    fn y_property_type(&self) -> VisualPropertyType;
}

/// A cheaply cloneable, type-erased [`Mark`].
///
/// Marks are generic over their record type; erasing that parameter lets a
/// chart hold layers over heterogeneous data in one collection. Clones share
/// the underlying mark.
#[derive(Clone)]
pub struct AnyMark {
    inner: Arc<dyn Mark + Send + Sync>,
}

impl AnyMark {
    /// Wraps a concrete mark.
    pub fn new(mark: impl Mark + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(mark),
        }
    }
}

impl Mark for AnyMark {
    fn symbols_for_mark(&self, rect: Rect) -> Vec<Symbol> {
        self.inner.symbols_for_mark(rect)
    }

    fn axis_for_mark(&self, rect: Rect) -> AxisMap {
        self.inner.axis_for_mark(rect)
    }

    fn x_property_type(&self) -> VisualPropertyType {
        self.inner.x_property_type()
    }

    fn y_property_type(&self) -> VisualPropertyType {
        self.inner.y_property_type()
    }
}

impl fmt::Debug for AnyMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyMark")
            .field("x_property_type", &self.inner.x_property_type())
            .field("y_property_type", &self.inner.y_property_type())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use crate::axis::AxisLocation;
    use crate::bar_mark::BarMark;
    use crate::channel::{CategoricalChannel, QuantitativeChannel};
    use crate::point_mark::PointMark;

    use super::*;

    struct Xy {
        x: f64,
        y: f64,
    }

    fn points() -> PointMark<Xy> {
        let data = alloc::vec![Xy { x: 0.0, y: 0.0 }, Xy { x: 10.0, y: 5.0 }];
        PointMark::new(
            data,
            QuantitativeChannel::new(|r: &Xy| r.x),
            QuantitativeChannel::new(|r: &Xy| r.y),
        )
    }

    #[test]
    fn erased_marks_forward_resolution() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let direct = points();
        let direct_symbols = direct.symbols_for_mark(rect);
        let direct_axes = direct.axis_for_mark(rect);

        let erased = AnyMark::new(points());
        assert_eq!(erased.symbols_for_mark(rect), direct_symbols);
        assert_eq!(erased.axis_for_mark(rect), direct_axes);
        assert_eq!(erased.x_property_type(), VisualPropertyType::Quantitative);
    }

    #[test]
    fn erasure_admits_heterogeneous_record_types() {
        struct Tally {
            name: &'static str,
            total: f64,
        }

        let tallies = alloc::vec![
            Tally {
                name: "a",
                total: 5.0,
            },
            Tally {
                name: "b",
                total: 10.0,
            },
        ];
        let bars = BarMark::new(
            tallies,
            CategoricalChannel::new(|r: &Tally| alloc::string::String::from(r.name)),
            QuantitativeChannel::new(|r: &Tally| r.total),
        );

        let layers = alloc::vec![AnyMark::new(points()), AnyMark::from(bars)];
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let symbols: Vec<Symbol> = layers
            .iter()
            .flat_map(|mark| mark.symbols_for_mark(rect))
            .collect();
        assert_eq!(symbols.len(), 4);
        assert!(matches!(symbols[0], Symbol::Point(_)));
        assert!(matches!(symbols[3], Symbol::Bar(_)));
    }

    #[test]
    fn clones_share_the_underlying_mark() {
        let erased = AnyMark::new(points().with_x_axis(crate::axis::AxisSpec::bottom()));
        let clone = erased.clone();
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let axes = clone.axis_for_mark(rect);
        assert!(axes.contains_key(&AxisLocation::Bottom));
        assert_eq!(axes.len(), erased.axis_for_mark(rect).len());
    }
}
