// Copyright 2026 the Shapeboard Authors
// SPDX-License-Identifier: Apache-2.0

//! The editor canvas facade.
//!
//! `CanvasEditor` owns one surface's worth of state: the viewport, the
//! step planner, the cursor snapper, the tool controller, and the scene.
//! Hosts feed it pointer and wheel events in view space and ask it to
//! paint; it hands back a [`Frame`] of backend-agnostic primitives.
//!
//! Event routing: presses of the configured drag button start a pan and
//! never reach the active tool. Everything else is mapped to scene space
//! through the snapper and forwarded to the tool controller.

use crate::config::{CanvasConfig, PointerButton};
use crate::grid::{self, GridStepPlanner};
use crate::render::{DrawCmd, Frame};
use crate::scene::Scene;
use crate::settings;
use crate::snap::CursorSnapper;
use crate::theme;
use crate::tools::ToolController;
use crate::viewport::ViewPort;
use kurbo::{Line, Point, Rect, Size};

/// One editing surface: state, event routing, and painting
#[derive(Debug, Clone)]
pub struct CanvasEditor {
    config: CanvasConfig,
    viewport: ViewPort,
    planner: GridStepPlanner,
    snapper: CursorSnapper,
    tools: ToolController,
    scene: Scene,
    /// Last pointer position in view space, for the cursor indicator
    cursor_view: Option<Point>,
    /// Previous drag sample while a pan is in progress
    pan_last: Option<Point>,
}

impl CanvasEditor {
    /// Editor with an empty scene, identity viewport, and the given
    /// configuration
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            viewport: ViewPort::new(),
            planner: GridStepPlanner::new(config.step_rule),
            snapper: CursorSnapper::new(config.fit_cursor_to_grid),
            tools: ToolController::new(),
            scene: Scene::new(),
            cursor_view: None,
            pan_last: None,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn viewport(&self) -> &ViewPort {
        &self.viewport
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn tools(&self) -> &ToolController {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolController {
        &mut self.tools
    }

    /// Switch the step formula at runtime, as from a settings dialog
    pub fn set_step_rule(&mut self, rule: grid::StepRule) {
        self.config.step_rule = rule;
        self.planner.set_rule(rule);
    }

    /// Toggle cursor snapping at runtime
    pub fn set_fit_cursor_to_grid(&mut self, enabled: bool) {
        self.config.fit_cursor_to_grid = enabled;
        self.snapper.enabled = enabled;
    }

    /// Toggle the background grid
    pub fn set_draw_grid(&mut self, enabled: bool) {
        self.config.draw_grid = enabled;
    }

    /// Toggle the ruler bands
    pub fn set_draw_ruler(&mut self, enabled: bool) {
        self.config.draw_ruler = enabled;
    }

    /// Change which button pans the canvas
    pub fn set_drag_button(&mut self, button: PointerButton) {
        self.config.drag_button = button;
    }

    /// Activate a tool
    pub fn set_active_tool(&mut self, id: crate::tools::ActiveToolId) {
        self.tools.set_active(id);
    }

    /// Pick the geometry kind for subsequent drawing gestures
    pub fn set_geometry_kind(&mut self, kind: crate::shape::ShapeKind) {
        self.tools.geometry_mut().set_kind(kind);
    }

    /// Map a view-space pointer position to the (possibly snapped)
    /// scene-space point tools receive
    fn tool_pos(&self, view_pos: Point) -> Point {
        self.snapper
            .snap_scene(&self.viewport, self.planner.last_steps(), view_pos)
    }

    /// Pointer button press, in view space
    pub fn on_pointer_down(&mut self, button: PointerButton, view_pos: Point) {
        self.cursor_view = Some(view_pos);
        if button == self.config.drag_button {
            self.pan_last = Some(view_pos);
            return;
        }
        let pos = self.tool_pos(view_pos);
        self.tools.pointer_down(button, pos, &mut self.scene);
    }

    /// Pointer motion, in view space
    pub fn on_pointer_moved(&mut self, view_pos: Point) {
        self.cursor_view = Some(view_pos);
        if let Some(last) = self.pan_last {
            self.viewport.pan(view_pos - last);
            self.pan_last = Some(view_pos);
            return;
        }
        let pos = self.tool_pos(view_pos);
        self.tools.pointer_moved(pos, &mut self.scene);
    }

    /// Pointer button release, in view space
    pub fn on_pointer_up(&mut self, button: PointerButton, view_pos: Point) {
        if button == self.config.drag_button {
            self.pan_last = None;
            return;
        }
        let pos = self.tool_pos(view_pos);
        self.tools.pointer_up(button, pos, &mut self.scene);
    }

    /// Wheel notches; positive zooms in
    pub fn on_wheel(&mut self, notches: i32) {
        self.viewport.zoom_notches(notches);
    }

    /// The pointer has left the canvas; the cursor indicator disappears
    pub fn on_pointer_left(&mut self) {
        self.cursor_view = None;
    }

    /// Paint one frame for the given canvas size.
    ///
    /// When the planned major step exceeds the render limit the grid and
    /// ruler are skipped for the frame; the scene sheet and shapes still
    /// draw.
    pub fn paint(&mut self, canvas_size: Size) -> Frame {
        let mut frame = Frame::default();

        frame.background.push(DrawCmd::Fill {
            rect: Rect::new(0.0, 0.0, canvas_size.width, canvas_size.height),
            color: theme::canvas::SURROUND,
        });
        frame.scene_layer.push(DrawCmd::Fill {
            rect: self.scene.rect(),
            color: theme::canvas::BACKGROUND,
        });

        let steps = self
            .viewport
            .visible_range(canvas_size)
            .map(|range| self.planner.get_steps(range));
        let drawable = steps
            .filter(|s| s.major <= settings::grid::STEP_RENDER_LIMIT);
        if drawable.is_none() {
            tracing::debug!("grid suppressed for this frame, steps {steps:?}");
        }

        if self.config.draw_grid {
            if let Some(steps) = drawable {
                let visible = self.viewport.visible_scene_rect(canvas_size);
                grid::draw_grid(&mut frame.scene_layer, visible, steps, self.viewport.zoom);
            }
        }

        for (_, shape) in self.scene.iter() {
            frame.scene_layer.push(crate::render::shape_primitive(shape));
        }

        // The indicator sits at the snapped position so the user sees
        // where a press would actually land
        let indicator = self
            .cursor_view
            .map(|view| self.snapper.snap_view(&self.viewport, drawable, view));

        if self.config.draw_ruler {
            if let Some(steps) = drawable {
                grid::draw_ruler(&mut frame.overlay, &self.viewport, canvas_size, steps, indicator);
            }
        }

        if self.snapper.enabled {
            if let Some(pos) = indicator {
                let half = settings::cursor::CROSS_HALF;
                frame.overlay.push(DrawCmd::Line {
                    line: Line::new(
                        Point::new(pos.x - half, pos.y),
                        Point::new(pos.x + half, pos.y),
                    ),
                    width: 1.0,
                    color: theme::grid::CURSOR,
                });
                frame.overlay.push(DrawCmd::Line {
                    line: Line::new(
                        Point::new(pos.x, pos.y - half),
                        Point::new(pos.x, pos.y + half),
                    ),
                    width: 1.0,
                    color: theme::grid::CURSOR,
                });
            }
        }

        frame
    }
}

impl Default for CanvasEditor {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;
    use crate::tools::ActiveToolId;
    use kurbo::Vec2;

    const CANVAS: Size = Size::new(800.0, 600.0);

    fn drawing_editor(kind: ShapeKind) -> CanvasEditor {
        let mut editor = CanvasEditor::new(CanvasConfig {
            fit_cursor_to_grid: false,
            ..CanvasConfig::default()
        });
        editor.set_active_tool(ActiveToolId::Geometry);
        editor.set_geometry_kind(kind);
        editor
    }

    #[test]
    fn drag_button_is_reconfigurable() {
        let mut editor = drawing_editor(ShapeKind::Line);
        editor.set_drag_button(PointerButton::Middle);

        editor.on_pointer_down(PointerButton::Middle, Point::new(10.0, 10.0));
        editor.on_pointer_moved(Point::new(15.0, 10.0));
        editor.on_pointer_up(PointerButton::Middle, Point::new(15.0, 10.0));

        assert_eq!(editor.viewport().offset, Vec2::new(5.0, 0.0));
        assert!(editor.scene().is_empty());
    }

    #[test]
    fn polygon_gesture_through_events() {
        let mut editor = drawing_editor(ShapeKind::Polygon);

        editor.on_pointer_down(PointerButton::Left, Point::new(0.0, 0.0));
        editor.on_pointer_moved(Point::new(5.0, 0.0));
        editor.on_pointer_down(PointerButton::Left, Point::new(5.0, 0.0));
        editor.on_pointer_moved(Point::new(5.0, 5.0));
        editor.on_pointer_down(PointerButton::Left, Point::new(5.0, 5.0));
        editor.on_pointer_up(PointerButton::Middle, Point::new(5.0, 5.0));

        assert!(!editor.tools().geometry().is_drawing());
        let (_, shape) = editor.scene().iter().next().unwrap();
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
    fn degenerate_line_through_events() {
        let mut editor = drawing_editor(ShapeKind::Line);

        editor.on_pointer_down(PointerButton::Left, Point::new(2.0, 2.0));
        editor.on_pointer_up(PointerButton::Left, Point::new(2.0, 2.0));

        let (_, shape) = editor.scene().iter().next().unwrap();
        assert_eq!(shape.endpoint(), Point::new(2.0, 1.0));
    }

    #[test]
    fn drag_button_pans_instead_of_drawing() {
        let mut editor = drawing_editor(ShapeKind::Line);

        editor.on_pointer_down(PointerButton::Right, Point::new(100.0, 100.0));
        editor.on_pointer_moved(Point::new(130.0, 90.0));
        editor.on_pointer_moved(Point::new(140.0, 95.0));
        editor.on_pointer_up(PointerButton::Right, Point::new(140.0, 95.0));

        assert_eq!(editor.viewport().offset, Vec2::new(40.0, -5.0));
        assert!(editor.scene().is_empty());

        // Motion after release no longer pans
        editor.on_pointer_moved(Point::new(200.0, 200.0));
        assert_eq!(editor.viewport().offset, Vec2::new(40.0, -5.0));
    }

    #[test]
    fn wheel_compounds_zoom() {
        let mut editor = CanvasEditor::default();
        editor.on_wheel(2);
        assert!((editor.viewport().zoom - 1.21).abs() < 1e-12);
        editor.on_wheel(-1);
        assert!((editor.viewport().zoom - 1.089).abs() < 1e-12);
    }

    #[test]
    fn gestures_snap_once_the_grid_is_planned() {
        let mut editor = CanvasEditor::default();
        editor.tools_mut().set_active(ActiveToolId::Geometry);

        // Range 600 decimal: major 100, minor 20
        editor.paint(CANVAS);
        editor.on_pointer_down(PointerButton::Left, Point::new(47.0, 193.0));

        let (_, shape) = editor.scene().iter().next().unwrap();
        assert_eq!(shape.anchor(), Point::new(40.0, 200.0));
    }

    #[test]
    fn first_press_before_any_paint_is_unsnapped() {
        let mut editor = CanvasEditor::default();
        editor.tools_mut().set_active(ActiveToolId::Geometry);

        editor.on_pointer_down(PointerButton::Left, Point::new(47.0, 193.0));
        let (_, shape) = editor.scene().iter().next().unwrap();
        assert_eq!(shape.anchor(), Point::new(47.0, 193.0));
    }

    #[test]
    fn paint_layers_are_ordered() {
        let mut editor = CanvasEditor::default();
        let frame = editor.paint(CANVAS);

        assert_eq!(
            frame.background[0],
            DrawCmd::Fill {
                rect: Rect::new(0.0, 0.0, 800.0, 600.0),
                color: theme::canvas::SURROUND,
            }
        );
        assert_eq!(
            frame.scene_layer[0],
            DrawCmd::Fill {
                rect: Rect::new(0.0, 0.0, 1000.0, 1000.0),
                color: theme::canvas::BACKGROUND,
            }
        );
        // Grid lines follow the sheet fill; rulers are in the overlay
        assert!(frame.scene_layer.len() > 1);
        assert!(!frame.overlay.is_empty());
    }

    #[test]
    fn extreme_zoom_out_suppresses_grid_and_ruler() {
        let mut editor = CanvasEditor::default();
        // 600 / 0.9^400 is far past the major step render limit
        editor.on_wheel(-400);
        let frame = editor.paint(CANVAS);

        // Sheet fill only, no grid lines; no ruler bands either
        assert_eq!(frame.scene_layer.len(), 1);
        assert!(frame.overlay.is_empty());
    }

    #[test]
    fn disabled_grid_still_draws_shapes_and_ruler() {
        let mut editor = CanvasEditor::new(CanvasConfig {
            draw_grid: false,
            ..CanvasConfig::default()
        });
        editor.tools_mut().set_active(ActiveToolId::Geometry);
        editor.on_pointer_down(PointerButton::Left, Point::new(10.0, 10.0));

        let frame = editor.paint(CANVAS);
        // Sheet fill plus exactly one shape primitive
        assert_eq!(frame.scene_layer.len(), 2);
        assert!(!frame.overlay.is_empty());
    }

    #[test]
    fn cursor_indicator_sits_at_the_snapped_position() {
        let mut editor = CanvasEditor::default();
        editor.paint(CANVAS);

        editor.on_pointer_moved(Point::new(47.0, 193.0));
        let frame = editor.paint(CANVAS);

        // Minor step 20 at identity: cursor cross lands on (40, 200)
        let cross: Vec<&DrawCmd> = frame
            .overlay
            .iter()
            .filter(|cmd| {
                matches!(cmd, DrawCmd::Line { color, .. } if *color == theme::grid::CURSOR)
            })
            .collect();
        // Two crosshair lines in the ruler bands, two for the cross
        assert_eq!(cross.len(), 4);
        let on_snap = cross.iter().any(|cmd| {
            matches!(cmd, DrawCmd::Line { line, .. }
                if line.p0 == Point::new(36.0, 200.0) && line.p1 == Point::new(44.0, 200.0))
        });
        assert!(on_snap);
    }

    #[test]
    fn pointer_leave_hides_the_indicator() {
        let mut editor = CanvasEditor::default();
        editor.paint(CANVAS);
        editor.on_pointer_moved(Point::new(47.0, 193.0));
        editor.on_pointer_left();

        let frame = editor.paint(CANVAS);
        let cursor_lines = frame
            .overlay
            .iter()
            .filter(|cmd| {
                matches!(cmd, DrawCmd::Line { color, .. } if *color == theme::grid::CURSOR)
            })
            .count();
        assert_eq!(cursor_lines, 0);
    }

    #[test]
    fn rule_switch_replans_on_next_paint() {
        let mut editor = CanvasEditor::default();
        editor.paint(CANVAS);

        editor.set_step_rule(grid::StepRule::Binary);
        editor.paint(CANVAS);

        // Range 600 binary: floor(log2(600) - 2.5) = 6 -> major 64
        let steps = editor.planner.last_steps().unwrap();
        assert_eq!(steps.major, 64);
        assert_eq!(steps.minor, 16);
    }

    #[test]
    fn abandoned_gesture_leaves_the_shape_in_the_scene() {
        let mut editor = drawing_editor(ShapeKind::Rectangle);
        editor.on_pointer_down(PointerButton::Left, Point::new(0.0, 0.0));
        editor.on_pointer_moved(Point::new(30.0, 30.0));

        editor.tools_mut().set_active(ActiveToolId::Select);
        assert_eq!(editor.scene().len(), 1);
        assert!(editor.tools().geometry().is_drawing());

        let frame = editor.paint(CANVAS);
        let has_rect = frame
            .scene_layer
            .iter()
            .any(|cmd| matches!(cmd, DrawCmd::Rect { .. }));
        assert!(has_rect);
    }
}
