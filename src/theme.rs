// Copyright 2026 the Shapeboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// BASE COLORS -- Light-to-dark gray ramp for the default light canvas
// ============================================================================
const BASE_A: Color = Color::from_rgb8(0xff, 0xff, 0xff);
const BASE_B: Color = Color::from_rgb8(0xf0, 0xf0, 0xf0);
const BASE_C: Color = Color::from_rgb8(0xe0, 0xe0, 0xe0);
const BASE_D: Color = Color::from_rgb8(0xc0, 0xc0, 0xc0);
const BASE_E: Color = Color::from_rgb8(0xa0, 0xa0, 0xa0);
const BASE_F: Color = Color::from_rgb8(0x70, 0x70, 0x70);
const BASE_G: Color = Color::from_rgb8(0x40, 0x40, 0x40);
const BASE_H: Color = Color::from_rgb8(0x00, 0x00, 0x00);

// ============================================================================
// CANVAS BACKGROUNDS
// ============================================================================
// The area outside the scene rect is a gray surround; the scene itself
// is a white sheet.
const CANVAS_SURROUND: Color = BASE_D;
const SCENE_BACKGROUND: Color = BASE_A;

// ============================================================================
// GRID LINES
// ============================================================================
const GRID_MINOR_LINE: Color = BASE_C;
const GRID_MAJOR_LINE: Color = BASE_E;

// ============================================================================
// CURSOR INDICATOR
// ============================================================================
// The snapped-cursor cross is drawn in a distinct warm color so it reads
// against both the grid and shape strokes.
const CURSOR_CROSS: Color = Color::from_rgb8(0xd0, 0x40, 0x40);

// ============================================================================
// RULER BANDS
// ============================================================================
const RULER_BAND: Color = BASE_B;
const RULER_TICK: Color = BASE_F;
const RULER_LABEL: Color = BASE_G;
const RULER_CROSSHAIR: Color = CURSOR_CROSS;

// ============================================================================
// SHAPE STROKES
// ============================================================================
const SHAPE_STROKE: Color = BASE_H;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Canvas background colors
pub mod canvas {
    use super::*;

    /// Fill for the area outside the scene rect
    pub const SURROUND: Color = CANVAS_SURROUND;

    /// Fill for the scene rect itself
    pub const BACKGROUND: Color = SCENE_BACKGROUND;
}

/// Grid line colors
pub mod grid {
    use super::*;

    /// Minor (fine) grid lines
    pub const MINOR: Color = GRID_MINOR_LINE;

    /// Major (coarse) grid lines
    pub const MAJOR: Color = GRID_MAJOR_LINE;

    /// Snapped-cursor cross
    pub const CURSOR: Color = CURSOR_CROSS;
}

/// Ruler band colors
pub mod ruler {
    use super::*;

    /// Band background
    pub const BAND: Color = RULER_BAND;

    /// Tick marks (major and minor)
    pub const TICK: Color = RULER_TICK;

    /// Coordinate labels on major ticks
    pub const LABEL: Color = RULER_LABEL;

    /// Mirrored cursor crosshair
    pub const CROSSHAIR: Color = RULER_CROSSHAIR;
}

/// Shape stroke colors
pub mod shape {
    use super::*;

    /// Committed and in-progress shape outlines
    pub const STROKE: Color = SHAPE_STROKE;
}
