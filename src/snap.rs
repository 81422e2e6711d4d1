// Copyright 2026 the Shapeboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Cursor-to-grid snapping.
//!
//! The snapper rounds a pointer position to the nearest minor-step grid
//! point. It reads the planner's last computed pair rather than planning
//! itself: until the grid has been planned once there is nothing to snap
//! to, and the pointer passes through unchanged.

use crate::grid::steps::StepPair;
use crate::viewport::ViewPort;
use kurbo::Point;

/// Snaps pointer positions onto minor-step boundaries
#[derive(Debug, Clone, Copy)]
pub struct CursorSnapper {
    /// Whether snapping is active (the fit-cursor-to-grid setting)
    pub enabled: bool,
}

impl CursorSnapper {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Map a view-space pointer position to a (possibly snapped)
    /// scene-space point.
    ///
    /// Snaps only when enabled, a step pair exists, and the minor step
    /// is usable; otherwise the plain scene mapping is returned.
    pub fn snap_scene(
        &self,
        viewport: &ViewPort,
        steps: Option<StepPair>,
        view_pos: Point,
    ) -> Point {
        let scene = viewport.to_scene(view_pos);
        if !self.enabled {
            return scene;
        }
        let Some(steps) = steps else {
            return scene;
        };
        if steps.minor == 0 {
            return scene;
        }

        let minor = steps.minor as f64;
        Point::new(
            ((scene.x + minor / 2.0) / minor).floor() * minor,
            ((scene.y + minor / 2.0) / minor).floor() * minor,
        )
    }

    /// Like [`snap_scene`](Self::snap_scene), mapped back to view space
    /// for drawing the cursor indicator
    pub fn snap_view(&self, viewport: &ViewPort, steps: Option<StepPair>, view_pos: Point) -> Point {
        viewport.to_view(self.snap_scene(viewport, steps, view_pos))
    }
}
