// Copyright 2026 the Shapeboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Adaptive grid: step planning, grid lines, ruler bands

pub mod render;
pub mod ruler;
pub mod steps;

pub use render::{draw_grid, major_line_weight};
pub use ruler::draw_ruler;
pub use steps::{GridStepPlanner, ParseStepRuleError, StepPair, StepRule};
