// Copyright 2026 the Shapeboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Adaptive grid step-size planning.
//!
//! Given the visible scene span, the planner picks a (major, minor) step
//! pair so that grid density stays readable at any zoom level. Two
//! stepping rules exist: binary (powers of two) and decimal (powers of
//! ten with a 20/10/5 subdivision). The rule itself is a pure formula;
//! all mutable state — the single-slot cache — lives on the planner
//! instance, one per rendering surface.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

// ===== Stepping Rule =====

/// Which step formula to use. A pure, stateless selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StepRule {
    /// Powers of two: major = 2^k, minor = major / 4
    Binary,
    /// Powers of ten with a 20/10/5 divider picked from the fractional
    /// part of log10(range)
    #[default]
    Decimal,
}

/// Error for unrecognized rule names in host configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown step rule {0:?}, expected \"binary\" or \"decimal\"")]
pub struct ParseStepRuleError(String);

impl FromStr for StepRule {
    type Err = ParseStepRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binary" => Ok(StepRule::Binary),
            "decimal" => Ok(StepRule::Decimal),
            _ => Err(ParseStepRuleError(s.to_owned())),
        }
    }
}

// ===== Step Pair =====

/// Grid spacing for one visible range: coarse and fine step in scene
/// units. `major` is a power of the active rule's base and
/// `major >= minor` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPair {
    /// Coarse grid spacing
    pub major: u64,
    /// Fine grid spacing; can compute to 0 at extreme ranges, which
    /// renderers must treat as "skip the minor family"
    pub minor: u64,
}

impl StepRule {
    /// Compute the step pair for a visible range.
    ///
    /// Precondition: `visible_range > 0`. The caller guards this at the
    /// viewport boundary (`ViewPort::visible_range`).
    pub fn compute(self, visible_range: f64) -> StepPair {
        debug_assert!(
            visible_range > 0.0,
            "step computation needs a positive visible range"
        );
        match self {
            StepRule::Binary => Self::compute_binary(visible_range),
            StepRule::Decimal => Self::compute_decimal(visible_range),
        }
    }

    fn compute_binary(visible_range: f64) -> StepPair {
        let exp = (visible_range.log2() - 2.5).floor() as i64;
        // Cap keeps the shift in u64 range at absurd zoom-out; anything
        // that coarse is suppressed by the render limit anyway.
        let exp = exp.clamp(2, 62) as u32;
        let major = 1u64 << exp;
        StepPair {
            major,
            minor: major / 4,
        }
    }

    fn compute_decimal(visible_range: f64) -> StepPair {
        let mut l = visible_range.log10();
        // Snap near-integer logs so exact powers of ten land in the
        // frac = 0 bucket even when log10 rounds just below.
        if (l - l.round()).abs() < 1e-9 {
            l = l.round();
        }
        let frac = l.rem_euclid(1.0);
        let exp = (l.floor() as i64).clamp(1, 19) as u32;
        let major = 10u64.pow(exp);

        let divider = if visible_range > 10.0 {
            if frac < 0.25 && major != 10 {
                20
            } else if frac < 0.65 {
                10
            } else {
                5
            }
        } else {
            10
        };

        StepPair {
            major,
            minor: major / divider,
        }
    }
}

// ===== Planner =====

/// Step planner with a single-slot memo of the last query.
///
/// The cache is a plain field owned by the planner — one planner per
/// rendering surface, never shared global state. It holds only the most
/// recently requested range and its result; any other range forces a
/// recomputation that overwrites the slot.
#[derive(Debug, Clone)]
pub struct GridStepPlanner {
    rule: StepRule,
    cache: Option<(f64, StepPair)>,
    recomputes: u64,
}

impl GridStepPlanner {
    /// Create a planner for the given rule with an empty cache
    pub fn new(rule: StepRule) -> Self {
        Self {
            rule,
            cache: None,
            recomputes: 0,
        }
    }

    /// The active stepping rule
    pub fn rule(&self) -> StepRule {
        self.rule
    }

    /// Switch the stepping rule. The cached pair belongs to the old
    /// formula, so it is dropped.
    pub fn set_rule(&mut self, rule: StepRule) {
        if self.rule != rule {
            self.rule = rule;
            self.cache = None;
        }
    }

    /// Step pair for the given visible range, served from the cache when
    /// the range is unchanged since the last query.
    ///
    /// Precondition: `visible_range > 0` (guarded at the viewport).
    pub fn get_steps(&mut self, visible_range: f64) -> StepPair {
        if let Some((range, steps)) = self.cache {
            if range == visible_range {
                return steps;
            }
        }
        let steps = self.rule.compute(visible_range);
        self.recomputes += 1;
        self.cache = Some((visible_range, steps));
        steps
    }

    /// The most recently computed pair, if any. Does not recompute —
    /// this is what the cursor snapper reads, and it stays `None` until
    /// the grid has been planned at least once.
    pub fn last_steps(&self) -> Option<StepPair> {
        self.cache.map(|(_, steps)| steps)
    }

    /// How many times a query has actually recomputed the formula
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }
}
