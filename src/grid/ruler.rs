// Copyright 2026 the Shapeboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Ruler bands along the top and left viewport edges.
//!
//! The bands have a fixed device-pixel width and live in view space;
//! tick positions come from mapping scene-space step boundaries through
//! the viewport, so ruler and grid always agree on the same `StepPair`.
//! Labels are emitted as `DrawCmd::Label` — text layout is the host's
//! concern.

use crate::grid::steps::StepPair;
use crate::render::{DrawCmd, DrawList};
use crate::settings;
use crate::theme;
use crate::viewport::ViewPort;
use kurbo::{Line, Point, Rect, Size};

/// Emit the top and left ruler bands with ticks, labels, and an
/// optional mirrored cursor crosshair (`cursor_view` in view space).
/// Commands are in view space.
pub fn draw_ruler(
    out: &mut DrawList,
    viewport: &ViewPort,
    canvas_size: Size,
    steps: StepPair,
    cursor_view: Option<Point>,
) {
    if steps.major == 0 {
        return;
    }
    let band = settings::ruler::BAND_WIDTH;

    // Band backgrounds
    out.push(DrawCmd::Fill {
        rect: Rect::new(0.0, 0.0, canvas_size.width, band),
        color: theme::ruler::BAND,
    });
    out.push(DrawCmd::Fill {
        rect: Rect::new(0.0, 0.0, band, canvas_size.height),
        color: theme::ruler::BAND,
    });

    let visible = viewport.visible_scene_rect(canvas_size);
    // Walk minor boundaries when a usable minor step exists, otherwise
    // fall back to major boundaries only
    let stride = if steps.minor > 0 {
        steps.minor
    } else {
        steps.major
    };
    let stride_f = stride as f64;
    let major = steps.major as i64;

    // Top band: vertical ticks at x boundaries
    let jx0 = (visible.min_x() / stride_f).floor() as i64;
    let jx1 = (visible.max_x() / stride_f).ceil() as i64;
    for jx in jx0..=jx1 {
        let units = jx * stride as i64;
        let view_x = viewport.to_view(Point::new(units as f64, 0.0)).x;
        if units % major == 0 {
            out.push(DrawCmd::Line {
                line: Line::new(Point::new(view_x, 0.0), Point::new(view_x, band)),
                width: 1.0,
                color: theme::ruler::TICK,
            });
            out.push(DrawCmd::Label {
                pos: Point::new(view_x + 2.0, band - 4.0),
                text: units.to_string(),
                color: theme::ruler::LABEL,
            });
        } else {
            out.push(DrawCmd::Line {
                line: Line::new(
                    Point::new(view_x, band * settings::ruler::MINOR_TICK_START),
                    Point::new(view_x, band),
                ),
                width: 1.0,
                color: theme::ruler::TICK,
            });
        }
    }

    // Left band: horizontal ticks at y boundaries
    let jy0 = (visible.min_y() / stride_f).floor() as i64;
    let jy1 = (visible.max_y() / stride_f).ceil() as i64;
    for jy in jy0..=jy1 {
        let units = jy * stride as i64;
        let view_y = viewport.to_view(Point::new(0.0, units as f64)).y;
        if units % major == 0 {
            out.push(DrawCmd::Line {
                line: Line::new(Point::new(0.0, view_y), Point::new(band, view_y)),
                width: 1.0,
                color: theme::ruler::TICK,
            });
            out.push(DrawCmd::Label {
                pos: Point::new(2.0, view_y - 2.0),
                text: units.to_string(),
                color: theme::ruler::LABEL,
            });
        } else {
            out.push(DrawCmd::Line {
                line: Line::new(
                    Point::new(band * settings::ruler::MINOR_TICK_START, view_y),
                    Point::new(band, view_y),
                ),
                width: 1.0,
                color: theme::ruler::TICK,
            });
        }
    }

    // Mirror the live cursor into both bands
    if let Some(cursor) = cursor_view {
        out.push(DrawCmd::Line {
            line: Line::new(Point::new(cursor.x, 0.0), Point::new(cursor.x, band)),
            width: 1.0,
            color: theme::ruler::CROSSHAIR,
        });
        out.push(DrawCmd::Line {
            line: Line::new(Point::new(0.0, cursor.y), Point::new(band, cursor.y)),
            width: 1.0,
            color: theme::ruler::CROSSHAIR,
        });
    }
}
