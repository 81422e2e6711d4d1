// Copyright 2026 the Shapeboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Geometry tool: the shape-authoring state machine.
//!
//! One gesture accumulates points into a shape entity. The shape joins
//! the scene on the very first press, so it is visible while still
//! being drawn; commit merely stops the gesture.
//!
//! Transitions:
//! - Idle, left press: create a shape of the configured kind at the
//!   snapped point, add it to the scene, enter Drawing.
//! - Drawing, left press (polygon only): append a committed vertex.
//! - Drawing, pointer move: update the live endpoint.
//! - Drawing, left release (line/rectangle/ellipse): commit, back to
//!   Idle.
//! - Drawing, middle release (polygon): finalize with the committed
//!   vertices only, back to Idle.
//!
//! Detach deliberately does not reset an in-progress gesture; the
//! half-drawn shape stays in the scene and the gesture resumes if the
//! tool is re-activated.

use super::{ActiveToolId, Tool};
use crate::config::PointerButton;
use crate::scene::{Scene, ShapeId};
use crate::shape::{ShapeKind, ShapeModel};
use kurbo::Point;

// ===== Gesture State =====

/// State of the drawing gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolState {
    /// No shape in progress
    Idle,
    /// Accumulating points into the identified shape
    Drawing(ShapeId),
}

// ===== Geometry Tool =====

/// The geometry tool
#[derive(Debug, Clone)]
pub struct GeometryTool {
    kind: ShapeKind,
    state: ToolState,
}

impl Default for GeometryTool {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Line,
            state: ToolState::Idle,
        }
    }
}

impl GeometryTool {
    /// The kind used for the next gesture (an in-progress shape keeps
    /// the kind it was created with)
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Select the kind for subsequent gestures
    pub fn set_kind(&mut self, kind: ShapeKind) {
        self.kind = kind;
    }

    /// The current gesture state
    pub fn state(&self) -> ToolState {
        self.state
    }

    /// Whether a gesture is in progress
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, ToolState::Drawing(_))
    }

    /// Fetch the in-progress shape, dropping back to Idle if the host
    /// removed it from the scene out from under the gesture
    fn current<'s>(&mut self, scene: &'s mut Scene) -> Option<(&'s mut ShapeModel, ShapeId)> {
        let ToolState::Drawing(id) = self.state else {
            return None;
        };
        if scene.get(id).is_none() {
            tracing::warn!("in-progress shape {id:?} vanished from the scene, resetting gesture");
            self.state = ToolState::Idle;
            return None;
        }
        scene.get_mut(id).map(|shape| (shape, id))
    }
}

impl Tool for GeometryTool {
    fn id(&self) -> ActiveToolId {
        ActiveToolId::Geometry
    }

    fn pointer_down(&mut self, button: PointerButton, pos: Point, scene: &mut Scene) {
        if button != PointerButton::Left {
            return;
        }
        match self.state {
            ToolState::Idle => {
                let shape = ShapeModel::new(self.kind, pos);
                let id = scene.add_shape(shape);
                tracing::debug!("begin {} gesture at {:?}", self.kind.name(), pos);
                self.state = ToolState::Drawing(id);
            }
            ToolState::Drawing(_) => {
                if let Some((shape, _)) = self.current(scene) {
                    // Only polygons take more than the initial anchor
                    // plus a live endpoint
                    if shape.kind() == ShapeKind::Polygon {
                        shape.add_point(pos);
                        tracing::debug!("polygon vertex committed at {:?}", pos);
                    }
                }
            }
        }
    }

    fn pointer_moved(&mut self, pos: Point, scene: &mut Scene) {
        if let Some((shape, _)) = self.current(scene) {
            shape.update_last_point(pos);
        }
    }

    fn pointer_up(&mut self, button: PointerButton, _pos: Point, scene: &mut Scene) {
        let Some((shape, id)) = self.current(scene) else {
            return;
        };
        match shape.kind() {
            ShapeKind::Line | ShapeKind::Rectangle | ShapeKind::Ellipse => {
                if button == PointerButton::Left {
                    tracing::debug!("committed {} {id:?}", shape.kind().name());
                    self.state = ToolState::Idle;
                }
            }
            ShapeKind::Polygon => {
                if button == PointerButton::Middle {
                    if !shape.points().is_empty() {
                        shape.discard_preview();
                    }
                    tracing::debug!("finalized polygon {id:?}");
                    self.state = ToolState::Idle;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(tool: &mut GeometryTool, scene: &mut Scene, x: f64, y: f64) {
        tool.pointer_down(PointerButton::Left, Point::new(x, y), scene);
    }

    #[test]
    fn line_gesture_commits_on_left_release() {
        let mut tool = GeometryTool::default();
        let mut scene = Scene::new();

        press(&mut tool, &mut scene, 0.0, 0.0);
        assert!(tool.is_drawing());
        assert_eq!(scene.len(), 1);

        tool.pointer_moved(Point::new(10.0, 4.0), &mut scene);
        tool.pointer_up(PointerButton::Left, Point::new(10.0, 4.0), &mut scene);

        assert_eq!(tool.state(), ToolState::Idle);
        let (_, shape) = scene.iter().next().unwrap();
        assert_eq!(shape.endpoint(), Point::new(10.0, 4.0));
    }

    #[test]
    fn degenerate_line_gets_the_anchor_nudge() {
        let mut tool = GeometryTool::default();
        let mut scene = Scene::new();

        press(&mut tool, &mut scene, 2.0, 2.0);
        tool.pointer_up(PointerButton::Left, Point::new(2.0, 2.0), &mut scene);

        let (_, shape) = scene.iter().next().unwrap();
        assert_eq!(shape.anchor(), Point::new(2.0, 2.0));
        assert_eq!(shape.endpoint(), Point::new(2.0, 1.0));
    }

    #[test]
    fn polygon_gesture_keeps_committed_vertices_in_order() {
        let mut tool = GeometryTool::default();
        tool.set_kind(ShapeKind::Polygon);
        let mut scene = Scene::new();

        press(&mut tool, &mut scene, 0.0, 0.0);
        press(&mut tool, &mut scene, 5.0, 0.0);
        press(&mut tool, &mut scene, 5.0, 5.0);
        tool.pointer_up(PointerButton::Middle, Point::new(5.0, 5.0), &mut scene);

        assert_eq!(tool.state(), ToolState::Idle);
        let (_, shape) = scene.iter().next().unwrap();
        assert_eq!(
            shape.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(5.0, 0.0),
                Point::new(5.0, 5.0)
            ]
        );
        assert_eq!(shape.preview(), None);
    }

    #[test]
    fn polygon_ignores_left_release() {
        let mut tool = GeometryTool::default();
        tool.set_kind(ShapeKind::Polygon);
        let mut scene = Scene::new();

        press(&mut tool, &mut scene, 0.0, 0.0);
        tool.pointer_up(PointerButton::Left, Point::new(3.0, 3.0), &mut scene);
        assert!(tool.is_drawing());
    }

    #[test]
    fn rectangle_ignores_extra_presses() {
        let mut tool = GeometryTool::default();
        tool.set_kind(ShapeKind::Rectangle);
        let mut scene = Scene::new();

        press(&mut tool, &mut scene, 0.0, 0.0);
        press(&mut tool, &mut scene, 5.0, 5.0);
        press(&mut tool, &mut scene, 9.0, 9.0);

        let (_, shape) = scene.iter().next().unwrap();
        assert_eq!(shape.points().len(), 1);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn non_left_press_does_not_start_a_gesture() {
        let mut tool = GeometryTool::default();
        let mut scene = Scene::new();

        tool.pointer_down(PointerButton::Right, Point::ZERO, &mut scene);
        tool.pointer_down(PointerButton::Middle, Point::ZERO, &mut scene);
        assert!(scene.is_empty());
        assert_eq!(tool.state(), ToolState::Idle);
    }

    #[test]
    fn middle_release_is_ignored_by_two_point_kinds() {
        let mut tool = GeometryTool::default();
        tool.set_kind(ShapeKind::Ellipse);
        let mut scene = Scene::new();

        press(&mut tool, &mut scene, 0.0, 0.0);
        tool.pointer_up(PointerButton::Middle, Point::new(4.0, 4.0), &mut scene);
        assert!(tool.is_drawing());
    }

    #[test]
    fn vanished_shape_resets_the_gesture() {
        let mut tool = GeometryTool::default();
        let mut scene = Scene::new();

        press(&mut tool, &mut scene, 0.0, 0.0);
        let ToolState::Drawing(id) = tool.state() else {
            panic!("expected a drawing state");
        };
        scene.remove(id);

        tool.pointer_moved(Point::new(1.0, 1.0), &mut scene);
        assert_eq!(tool.state(), ToolState::Idle);
    }

    #[test]
    fn kind_change_mid_gesture_affects_only_the_next_shape() {
        let mut tool = GeometryTool::default();
        let mut scene = Scene::new();

        press(&mut tool, &mut scene, 0.0, 0.0);
        tool.set_kind(ShapeKind::Ellipse);

        let (_, shape) = scene.iter().next().unwrap();
        assert_eq!(shape.kind(), ShapeKind::Line);

        tool.pointer_up(PointerButton::Left, Point::new(1.0, 1.0), &mut scene);
        press(&mut tool, &mut scene, 10.0, 10.0);
        let shapes: Vec<ShapeKind> = scene.iter().map(|(_, s)| s.kind()).collect();
        assert_eq!(shapes, vec![ShapeKind::Line, ShapeKind::Ellipse]);
    }
}
