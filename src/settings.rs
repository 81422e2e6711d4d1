// Copyright 2026 the Shapeboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Non-visual tunables and numeric limits.
//!
//! This module holds behavior constants that stay stable across theme
//! changes. Visual styling (colors) belongs in `theme.rs`.

// ============================================================================
// ZOOM SETTINGS
// ============================================================================
/// Scale multiplier for one wheel notch forward
const ZOOM_IN_FACTOR: f64 = 1.1;

/// Scale multiplier for one wheel notch backward
const ZOOM_OUT_FACTOR: f64 = 0.9;

// ============================================================================
// GRID SETTINGS
// ============================================================================
/// Major step above which grid and ruler drawing is suppressed for the
/// frame. Steps this coarse mean the view is too far out for the grid to
/// carry any information.
const GRID_STEP_RENDER_LIMIT: u64 = 100_000_000;

/// Major grid lines are only drawn up to this zoom level
const GRID_MAJOR_LINE_MAX_ZOOM: f64 = 6.0;

// ============================================================================
// RULER SETTINGS
// ============================================================================
/// Width of the top and left ruler bands, in device pixels
const RULER_BAND_WIDTH: f64 = 18.0;

/// Fraction of the band width where minor ticks start (major ticks span
/// the full band)
const RULER_MINOR_TICK_START: f64 = 0.6;

// ============================================================================
// CURSOR SETTINGS
// ============================================================================
/// Half-extent of the snapped-cursor cross, in device pixels
const CURSOR_CROSS_HALF: f64 = 4.0;

// ============================================================================
// SHAPE SETTINGS
// ============================================================================
/// Stroke width for shape outlines, in scene units
const SHAPE_PEN_WIDTH: f64 = 2.0;

// ============================================================================
// SCENE SETTINGS
// ============================================================================
/// Default scene rect edge length, in scene units
const SCENE_DEFAULT_EXTENT: f64 = 1000.0;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Wheel zoom factors
pub mod zoom {
    /// One notch forward
    pub const IN_FACTOR: f64 = super::ZOOM_IN_FACTOR;

    /// One notch backward
    pub const OUT_FACTOR: f64 = super::ZOOM_OUT_FACTOR;
}

/// Grid drawing limits
pub mod grid {
    /// Major step beyond which grid/ruler drawing is skipped
    pub const STEP_RENDER_LIMIT: u64 = super::GRID_STEP_RENDER_LIMIT;

    /// Zoom ceiling for the major line family
    pub const MAJOR_LINE_MAX_ZOOM: f64 = super::GRID_MAJOR_LINE_MAX_ZOOM;
}

/// Ruler band geometry
pub mod ruler {
    /// Band width in device pixels
    pub const BAND_WIDTH: f64 = super::RULER_BAND_WIDTH;

    /// Where minor ticks start, as a fraction of the band width
    pub const MINOR_TICK_START: f64 = super::RULER_MINOR_TICK_START;
}

/// Cursor indicator geometry
pub mod cursor {
    /// Cross half-extent in device pixels
    pub const CROSS_HALF: f64 = super::CURSOR_CROSS_HALF;
}

/// Shape stroke geometry
pub mod shape {
    /// Outline stroke width in scene units
    pub const PEN_WIDTH: f64 = super::SHAPE_PEN_WIDTH;
}

/// Scene defaults
pub mod scene {
    /// Default scene rect edge length
    pub const DEFAULT_EXTENT: f64 = super::SCENE_DEFAULT_EXTENT;
}
