// Copyright 2026 the Shapeboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Host-injected configuration.
//!
//! The canvas core does no file I/O of its own; hosts deserialize a
//! `CanvasConfig` from wherever they persist settings and hand it to
//! `CanvasEditor::new`. Defaults match a fresh install: decimal
//! stepping, grid and ruler on, cursor snapping on, right-button pan.

use crate::grid::steps::StepRule;
use serde::{Deserialize, Serialize};

/// Pointer buttons the canvas distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// Canvas behavior settings, injected at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Which step formula drives grid density
    pub step_rule: StepRule,
    /// Draw the background grid
    pub draw_grid: bool,
    /// Draw the ruler bands
    pub draw_ruler: bool,
    /// Snap the cursor (and drawing gestures) to minor grid points
    pub fit_cursor_to_grid: bool,
    /// Button that pans the canvas instead of reaching the active tool
    pub drag_button: PointerButton,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            step_rule: StepRule::Decimal,
            draw_grid: true,
            draw_ruler: true,
            fit_cursor_to_grid: true,
            drag_button: PointerButton::Right,
        }
    }
}
