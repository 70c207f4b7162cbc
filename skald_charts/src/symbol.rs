// Copyright 2026 the Skald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-agnostic drawing primitives emitted by marks.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point, Rect, Shape};

/// A small set of point glyph shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolShape {
    /// A circle.
    Circle,
    /// A square (axis-aligned).
    Square,
}

impl SymbolShape {
    /// Returns a path for this shape centered at `cx, cy`, using `size` as the diameter/side.
    pub fn path(self, cx: f64, cy: f64, size: f64) -> BezPath {
        match self {
            Self::Circle => circle_path(cx, cy, size),
            Self::Square => square_path(cx, cy, size),
        }
    }
}

/// A single point glyph in absolute pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointSymbol {
    /// Center of the glyph.
    pub at: Point,
    /// Glyph shape.
    pub shape: SymbolShape,
    /// Diameter/side length in pixels.
    pub size: f64,
}

impl PointSymbol {
    /// Returns the outline path for this glyph.
    pub fn path(&self) -> BezPath {
        self.shape.path(self.at.x, self.at.y, self.size)
    }
}

/// A filled bar in absolute pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarSymbol {
    /// The bar's extent.
    pub rect: Rect,
}

/// A polyline through absolute pixel coordinates, in draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSymbol {
    /// Polyline vertices.
    pub vertices: Vec<Point>,
}

impl LineSymbol {
    /// Returns the polyline as a path; empty when there are no vertices.
    pub fn path(&self) -> BezPath {
        let mut p = BezPath::new();
        for (i, pt) in self.vertices.iter().enumerate() {
            if i == 0 {
                p.move_to(*pt);
            } else {
                p.line_to(*pt);
            }
        }
        p
    }
}

/// A drawing primitive produced by a mark.
///
/// Symbols are always expressed in absolute pixel coordinates, never in data
/// units; painting them is the renderer's business.
#[derive(Clone, Debug, PartialEq)]
pub enum Symbol {
    /// A point glyph.
    Point(PointSymbol),
    /// A bar.
    Bar(BarSymbol),
    /// A polyline.
    Line(LineSymbol),
}

impl From<PointSymbol> for Symbol {
    fn from(value: PointSymbol) -> Self {
        Self::Point(value)
    }
}

impl From<BarSymbol> for Symbol {
    fn from(value: BarSymbol) -> Self {
        Self::Bar(value)
    }
}

impl From<LineSymbol> for Symbol {
    fn from(value: LineSymbol) -> Self {
        Self::Line(value)
    }
}

fn square_path(cx: f64, cy: f64, size: f64) -> BezPath {
    let half = size * 0.5;
    let x0 = cx - half;
    let y0 = cy - half;
    let x1 = cx + half;
    let y1 = cy + half;
    let mut p = BezPath::new();
    p.move_to((x0, y0));
    p.line_to((x1, y0));
    p.line_to((x1, y1));
    p.line_to((x0, y1));
    p.close_path();
    p
}

fn circle_path(cx: f64, cy: f64, size: f64) -> BezPath {
    let r = size * 0.5;
    let circle = Circle::new((cx, cy), r);
    // Renderers that care about device pixels can rebuild the path at their
    // own tolerance; this one just needs to be visually round.
    let tolerance = 0.1;
    circle.path_elements(tolerance).collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn square_paths_are_centered() {
        let bbox = SymbolShape::Square.path(10.0, 10.0, 6.0).bounding_box();
        assert_eq!(bbox, Rect::new(7.0, 7.0, 13.0, 13.0));
    }

    #[test]
    fn circle_paths_cover_the_diameter() {
        let bbox = SymbolShape::Circle.path(10.0, 10.0, 6.0).bounding_box();
        assert!((bbox.width() - 6.0).abs() < 0.2);
        assert!((bbox.center().x - 10.0).abs() < 0.1);
        assert!((bbox.center().y - 10.0).abs() < 0.1);
    }

    #[test]
    fn line_paths_follow_the_vertices() {
        let line = LineSymbol {
            vertices: alloc::vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 5.0),
                Point::new(20.0, 0.0),
            ],
        };
        assert_eq!(line.path().elements().len(), 3);

        let empty = LineSymbol {
            vertices: Vec::new(),
        };
        assert!(empty.path().elements().is_empty());
    }

    #[test]
    fn symbols_wrap_their_primitives() {
        let bar = BarSymbol {
            rect: Rect::new(0.0, 0.0, 10.0, 20.0),
        };
        assert_eq!(Symbol::from(bar), Symbol::Bar(bar));
    }
}
