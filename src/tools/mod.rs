// Copyright 2026 the Shapeboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Tool system for the editor canvas.
//!
//! Exactly one tool is active at a time. The controller owns a
//! persistent instance of every tool and routes pointer events to the
//! active one through an explicit match — no dynamic dispatch, no
//! virtual fallthrough. It holds no gesture state of its own; whatever
//! a tool accumulates mid-gesture survives a tool switch untouched.

use crate::config::PointerButton;
use crate::scene::Scene;
use kurbo::Point;

// ===== Tool Identifier =====

/// Tool identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActiveToolId {
    /// Select and inspect shapes
    Select,
    /// Draw geometric primitives
    Geometry,
}

// ===== Tool Trait =====

/// A tool for working on the canvas.
///
/// Pointer positions arrive in scene space, already passed through the
/// cursor snapper. All handlers default to no-ops; attach and detach
/// never fail.
pub trait Tool {
    /// The tool identifier
    fn id(&self) -> ActiveToolId;

    /// Called when the tool becomes active
    fn on_attach(&mut self) {}

    /// Called when another tool takes over
    fn on_detach(&mut self) {}

    /// Primary/secondary button press
    fn pointer_down(&mut self, _button: PointerButton, _pos: Point, _scene: &mut Scene) {}

    /// Pointer motion
    fn pointer_moved(&mut self, _pos: Point, _scene: &mut Scene) {}

    /// Button release
    fn pointer_up(&mut self, _button: PointerButton, _pos: Point, _scene: &mut Scene) {}
}

// ===== Controller =====

/// Owns the tool instances and the notion of "active tool"
#[derive(Debug, Clone)]
pub struct ToolController {
    active: ActiveToolId,
    select: select::SelectTool,
    geometry: geometry::GeometryTool,
}

impl ToolController {
    /// Controller with the selection tool active
    pub fn new() -> Self {
        Self {
            active: ActiveToolId::Select,
            select: select::SelectTool,
            geometry: geometry::GeometryTool::default(),
        }
    }

    /// The active tool's id
    pub fn active_id(&self) -> ActiveToolId {
        self.active
    }

    /// Switch the active tool: detach the outgoing one, attach the
    /// incoming one. Always legal, always succeeds.
    pub fn set_active(&mut self, id: ActiveToolId) {
        tracing::debug!("switching tool {:?} -> {:?}", self.active, id);
        match self.active {
            ActiveToolId::Select => self.select.on_detach(),
            ActiveToolId::Geometry => self.geometry.on_detach(),
        }
        self.active = id;
        match self.active {
            ActiveToolId::Select => self.select.on_attach(),
            ActiveToolId::Geometry => self.geometry.on_attach(),
        }
    }

    /// The geometry tool, for kind selection and state inspection
    pub fn geometry(&self) -> &geometry::GeometryTool {
        &self.geometry
    }

    /// The geometry tool, mutable
    pub fn geometry_mut(&mut self) -> &mut geometry::GeometryTool {
        &mut self.geometry
    }

    /// Forward a button press to the active tool
    pub fn pointer_down(&mut self, button: PointerButton, pos: Point, scene: &mut Scene) {
        match self.active {
            ActiveToolId::Select => self.select.pointer_down(button, pos, scene),
            ActiveToolId::Geometry => self.geometry.pointer_down(button, pos, scene),
        }
    }

    /// Forward pointer motion to the active tool
    pub fn pointer_moved(&mut self, pos: Point, scene: &mut Scene) {
        match self.active {
            ActiveToolId::Select => self.select.pointer_moved(pos, scene),
            ActiveToolId::Geometry => self.geometry.pointer_moved(pos, scene),
        }
    }

    /// Forward a button release to the active tool
    pub fn pointer_up(&mut self, button: PointerButton, pos: Point, scene: &mut Scene) {
        match self.active {
            ActiveToolId::Select => self.select.pointer_up(button, pos, scene),
            ActiveToolId::Geometry => self.geometry.pointer_up(button, pos, scene),
        }
    }
}

impl Default for ToolController {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tool Modules =====

pub mod geometry;
pub mod select;
