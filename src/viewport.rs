// Copyright 2026 the Shapeboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Scene/view coordinate transform.
//!
//! `ViewPort` owns the pan offset and the uniform zoom scale and converts
//! between view space (device pixels) and scene space (model coordinates):
//!
//! ```text
//! view.x = scene.x * zoom + offset.x
//! view.y = scene.y * zoom + offset.y
//! ```
//!
//! The zoom scale is strictly positive — the inverse mapping divides by
//! it — and is only ever changed by multiplying with the positive wheel
//! factors, so the invariant holds by construction.

use crate::settings;
use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Pan/zoom state for one rendering surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPort {
    /// Uniform scale factor, strictly positive
    pub zoom: f64,
    /// Translation applied after scaling, in device pixels
    pub offset: Vec2,
}

impl ViewPort {
    /// Identity transform: zoom 1.0, no offset
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            offset: Vec2::ZERO,
        }
    }

    /// Map a scene-space point to view space
    pub fn to_view(&self, p: Point) -> Point {
        Point::new(p.x * self.zoom + self.offset.x, p.y * self.zoom + self.offset.y)
    }

    /// Map a view-space point to scene space
    pub fn to_scene(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.offset.x) / self.zoom,
            (p.y - self.offset.y) / self.zoom,
        )
    }

    /// The scene→view transform as an affine, for hosts that apply the
    /// scene layer of a frame in one go
    pub fn affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Pan by a raw pixel delta between consecutive drag samples.
    ///
    /// The delta is applied 1:1 to the offset, not scaled by zoom — the
    /// content follows the pointer exactly regardless of zoom level.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Apply wheel notches: ×1.1 per notch forward, ×0.9 per notch
    /// backward. Compounding and unclamped in both directions.
    pub fn zoom_notches(&mut self, notches: i32) {
        let factor = if notches >= 0 {
            settings::zoom::IN_FACTOR
        } else {
            settings::zoom::OUT_FACTOR
        };
        for _ in 0..notches.unsigned_abs() {
            self.zoom *= factor;
        }
    }

    /// Scene-space bounding rect of the viewport
    pub fn visible_scene_rect(&self, canvas_size: Size) -> Rect {
        let top_left = self.to_scene(Point::ZERO);
        let bottom_right = self.to_scene(Point::new(canvas_size.width, canvas_size.height));
        Rect::from_points(top_left, bottom_right)
    }

    /// Visible scene span for grid purposes: the smaller of the visible
    /// scene width and height.
    ///
    /// Returns `None` for degenerate canvases (zero or negative span).
    /// This is the guard that keeps non-positive ranges away from the
    /// step planner.
    pub fn visible_range(&self, canvas_size: Size) -> Option<f64> {
        let visible = self.visible_scene_rect(canvas_size);
        let range = visible.width().min(visible.height());
        (range > 0.0).then_some(range)
    }
}

impl Default for ViewPort {
    fn default() -> Self {
        Self::new()
    }
}
