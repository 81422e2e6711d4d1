// Copyright 2026 the Shapeboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Backend-agnostic draw primitives.
//!
//! The core never talks to a GPU or a widget toolkit. A paint pass
//! produces a `Frame` of plain primitives that the hosting UI replays
//! into whatever painter it owns. Shape entities are pure data; the
//! mapping from a `ShapeModel` to its primitive lives here as a free
//! function, keeping drawing stateless.

use crate::settings;
use crate::shape::{ShapeKind, ShapeModel};
use crate::theme;
use kurbo::{Ellipse, Line, Point, Rect};
use peniko::Color;

// ===== Primitives =====

/// One draw call for the host painter
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Filled axis-aligned rectangle
    Fill { rect: Rect, color: Color },
    /// Stroked line segment
    Line { line: Line, width: f64, color: Color },
    /// Stroked rectangle outline
    Rect { rect: Rect, width: f64, color: Color },
    /// Stroked ellipse outline
    Ellipse {
        ellipse: Ellipse,
        width: f64,
        color: Color,
    },
    /// Stroked polyline, optionally closed
    Polyline {
        points: Vec<Point>,
        closed: bool,
        width: f64,
        color: Color,
    },
    /// Text anchored at a point; layout is the host's concern
    Label {
        pos: Point,
        text: String,
        color: Color,
    },
}

/// An ordered list of draw calls
pub type DrawList = Vec<DrawCmd>;

/// One painted frame, split by coordinate space.
///
/// The host replays `background`, then `scene_layer` under
/// `ViewPort::affine()`, then `overlay` — background and overlay are in
/// view space (device pixels), the scene layer in scene coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// View-space fills behind everything (canvas surround)
    pub background: DrawList,
    /// Scene-space content: scene sheet, grid, shapes
    pub scene_layer: DrawList,
    /// View-space chrome: rulers, cursor indicator
    pub overlay: DrawList,
}

// ===== Shape Rendering =====

/// Map a shape model to its outline primitive.
///
/// Polygons render their committed vertices plus the live preview
/// vertex while one exists; two-point kinds render anchor-to-endpoint
/// geometry.
pub fn shape_primitive(shape: &ShapeModel) -> DrawCmd {
    let width = settings::shape::PEN_WIDTH;
    let color = theme::shape::STROKE;
    match shape.kind() {
        ShapeKind::Line => DrawCmd::Line {
            line: Line::new(shape.anchor(), shape.endpoint()),
            width,
            color,
        },
        ShapeKind::Rectangle => DrawCmd::Rect {
            rect: Rect::from_points(shape.anchor(), shape.endpoint()),
            width,
            color,
        },
        ShapeKind::Ellipse => DrawCmd::Ellipse {
            ellipse: Ellipse::from_rect(Rect::from_points(shape.anchor(), shape.endpoint())),
            width,
            color,
        },
        ShapeKind::Polygon => {
            let mut points = shape.points().to_vec();
            if let Some(preview) = shape.preview() {
                points.push(preview);
            }
            DrawCmd::Polyline {
                points,
                closed: true,
                width,
                color,
            }
        }
    }
}
