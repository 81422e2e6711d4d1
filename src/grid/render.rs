// Copyright 2026 the Shapeboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Grid line generation.
//!
//! Emits the minor and major line families for the visible scene rect
//! into a scene-space draw list. The iterated range is expanded by one
//! major step on every side so lines never pop in at the viewport edge
//! while panning.

use crate::grid::steps::StepPair;
use crate::render::{DrawCmd, DrawList};
use crate::settings;
use crate::theme;
use kurbo::{Line, Point, Rect};

/// Scene-space stroke weight for major grid lines at a given zoom.
///
/// Thin at high zoom, thicker as the view pulls out; clamped to a
/// minimum of 1 so major lines never vanish.
pub fn major_line_weight(zoom: f64) -> f64 {
    if zoom > 3.0 {
        1.0
    } else if zoom > 1.0 {
        2.0
    } else {
        (3.0 / zoom).floor().max(1.0)
    }
}

/// Emit grid lines for the visible scene rect.
///
/// Minor lines are drawn at every `minor` boundary regardless of zoom
/// (skipped entirely when `minor` is 0); major lines only up to the
/// zoom ceiling. Commands are in scene space.
pub fn draw_grid(out: &mut DrawList, visible: Rect, steps: StepPair, zoom: f64) {
    if steps.major == 0 {
        return;
    }
    let major = steps.major as f64;

    // Boundary indices expanded by one major step on each side
    let ix0 = (visible.min_x() / major).floor() as i64 - 1;
    let ix1 = (visible.max_x() / major).ceil() as i64 + 1;
    let iy0 = (visible.min_y() / major).floor() as i64 - 1;
    let iy1 = (visible.max_y() / major).ceil() as i64 + 1;

    let expanded = Rect::new(
        ix0 as f64 * major,
        iy0 as f64 * major,
        ix1 as f64 * major,
        iy1 as f64 * major,
    );

    // Minor family. A minor step of 0 would make this a zero-stride
    // walk, so it degrades to "no minor lines this frame".
    if steps.minor > 0 {
        let minor = steps.minor as f64;
        // One device pixel regardless of zoom
        let width = 1.0 / zoom;

        let jx0 = (expanded.x0 / minor).round() as i64;
        let jx1 = (expanded.x1 / minor).round() as i64;
        for jx in jx0..=jx1 {
            let x = jx as f64 * minor;
            out.push(DrawCmd::Line {
                line: Line::new(Point::new(x, expanded.y0), Point::new(x, expanded.y1)),
                width,
                color: theme::grid::MINOR,
            });
        }

        let jy0 = (expanded.y0 / minor).round() as i64;
        let jy1 = (expanded.y1 / minor).round() as i64;
        for jy in jy0..=jy1 {
            let y = jy as f64 * minor;
            out.push(DrawCmd::Line {
                line: Line::new(Point::new(expanded.x0, y), Point::new(expanded.x1, y)),
                width,
                color: theme::grid::MINOR,
            });
        }
    }

    // Major family, suppressed when zoomed in past the ceiling
    if zoom <= settings::grid::MAJOR_LINE_MAX_ZOOM {
        let width = major_line_weight(zoom);

        for jx in ix0..=ix1 {
            let x = jx as f64 * major;
            out.push(DrawCmd::Line {
                line: Line::new(Point::new(x, expanded.y0), Point::new(x, expanded.y1)),
                width,
                color: theme::grid::MAJOR,
            });
        }

        for jy in iy0..=iy1 {
            let y = jy as f64 * major;
            out.push(DrawCmd::Line {
                line: Line::new(Point::new(expanded.x0, y), Point::new(expanded.x1, y)),
                width,
                color: theme::grid::MAJOR,
            });
        }
    }
}
