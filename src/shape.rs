// Copyright 2026 the Shapeboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Pure-data shape entities.
//!
//! A `ShapeModel` is only geometry: a kind tag, the gesture's anchor
//! point, the ordered committed points, and the live preview endpoint.
//! Drawing is a separate, stateless concern (`render::shape_primitive`),
//! so no drawable base type is mixed in.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

// ===== Shape Kind =====

/// The geometry kinds a drawing gesture can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Line,
    Rectangle,
    Polygon,
    Ellipse,
}

impl ShapeKind {
    /// Lowercase name as used in host configuration
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Ellipse => "ellipse",
        }
    }
}

/// Error for unrecognized kind names in host configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shape kind {0:?}")]
pub struct ParseShapeKindError(String);

impl FromStr for ShapeKind {
    type Err = ParseShapeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "line" => Ok(ShapeKind::Line),
            "rectangle" => Ok(ShapeKind::Rectangle),
            "polygon" => Ok(ShapeKind::Polygon),
            "ellipse" => Ok(ShapeKind::Ellipse),
            _ => Err(ParseShapeKindError(s.to_owned())),
        }
    }
}

// ===== Shape Model =====

/// One shape entity: anchor, committed points in insertion order, and
/// the uncommitted live endpoint.
///
/// For lines, rectangles and ellipses the preview endpoint *is* the
/// second defining point; committing the gesture simply stops updating
/// it. For polygons the preview is the not-yet-clicked vertex used for
/// live feedback, discarded on finalize.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeModel {
    kind: ShapeKind,
    anchor: Point,
    points: Vec<Point>,
    preview: Option<Point>,
}

impl ShapeModel {
    /// Start a shape at its anchor.
    ///
    /// The initial preview avoids zero-extent geometry: lines and
    /// polygons aim one unit above the anchor, rectangles and ellipses
    /// open as a 1×1 box.
    pub fn new(kind: ShapeKind, anchor: Point) -> Self {
        let preview = match kind {
            ShapeKind::Line | ShapeKind::Polygon => Point::new(anchor.x, anchor.y - 1.0),
            ShapeKind::Rectangle | ShapeKind::Ellipse => {
                Point::new(anchor.x + 1.0, anchor.y + 1.0)
            }
        };
        Self {
            kind,
            anchor,
            points: vec![anchor],
            preview: Some(preview),
        }
    }

    /// The kind tag
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// First point of the gesture, fixed for its duration
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Committed points in insertion order (the anchor is always first)
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The live, uncommitted endpoint; `None` once a polygon has been
    /// finalized
    pub fn preview(&self) -> Option<Point> {
        self.preview
    }

    /// Commit a new vertex (polygon gestures only append; other kinds
    /// never call this)
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Move the live endpoint.
    ///
    /// If the new endpoint exactly coincides with a committed point —
    /// the anchor for two-point kinds, any committed vertex for
    /// polygons — its y coordinate is nudged by −1 so the geometry
    /// never degenerates to zero length or area.
    pub fn update_last_point(&mut self, point: Point) {
        let mut point = point;
        let clashes = match self.kind {
            ShapeKind::Polygon => self.points.contains(&point),
            _ => point == self.anchor,
        };
        if clashes {
            point.y -= 1.0;
        }
        self.preview = Some(point);
    }

    /// Drop the live preview vertex, leaving only committed vertices.
    /// Used by the polygon finalize gesture.
    pub fn discard_preview(&mut self) {
        self.preview = None;
    }

    /// Second defining point for two-point kinds: the preview while the
    /// gesture is live, or the anchor-derived initial endpoint
    pub fn endpoint(&self) -> Point {
        self.preview.unwrap_or(self.anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_line_spans_one_unit_up() {
        let shape = ShapeModel::new(ShapeKind::Line, Point::new(2.0, 2.0));
        assert_eq!(shape.points(), &[Point::new(2.0, 2.0)]);
        assert_eq!(shape.endpoint(), Point::new(2.0, 1.0));
    }

    #[test]
    fn new_rectangle_opens_as_unit_box() {
        let shape = ShapeModel::new(ShapeKind::Rectangle, Point::new(10.0, 20.0));
        assert_eq!(shape.endpoint(), Point::new(11.0, 21.0));
    }

    #[test]
    fn update_at_anchor_nudges_vertically() {
        let mut shape = ShapeModel::new(ShapeKind::Line, Point::new(2.0, 2.0));
        shape.update_last_point(Point::new(2.0, 2.0));
        assert_eq!(shape.endpoint(), Point::new(2.0, 1.0));
    }

    #[test]
    fn update_away_from_anchor_is_verbatim() {
        let mut shape = ShapeModel::new(ShapeKind::Ellipse, Point::new(0.0, 0.0));
        shape.update_last_point(Point::new(8.0, 3.0));
        assert_eq!(shape.endpoint(), Point::new(8.0, 3.0));
    }

    #[test]
    fn polygon_nudges_against_any_committed_vertex() {
        let mut shape = ShapeModel::new(ShapeKind::Polygon, Point::new(0.0, 0.0));
        shape.add_point(Point::new(5.0, 0.0));

        // Hovering a committed vertex, not just the anchor
        shape.update_last_point(Point::new(5.0, 0.0));
        assert_eq!(shape.preview(), Some(Point::new(5.0, -1.0)));
    }

    #[test]
    fn discard_preview_keeps_committed_vertices() {
        let mut shape = ShapeModel::new(ShapeKind::Polygon, Point::new(0.0, 0.0));
        shape.add_point(Point::new(5.0, 0.0));
        shape.update_last_point(Point::new(9.0, 9.0));
        shape.discard_preview();

        assert_eq!(shape.preview(), None);
        assert_eq!(shape.points(), &[Point::new(0.0, 0.0), Point::new(5.0, 0.0)]);
    }

    #[test]
    fn kind_names_roundtrip() {
        for kind in [
            ShapeKind::Line,
            ShapeKind::Rectangle,
            ShapeKind::Polygon,
            ShapeKind::Ellipse,
        ] {
            assert_eq!(kind.name().parse::<ShapeKind>().unwrap(), kind);
        }
        assert!("Squiggle".parse::<ShapeKind>().is_err());
    }
}
