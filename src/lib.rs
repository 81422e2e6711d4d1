// Copyright 2026 the Shapeboard Authors
// SPDX-License-Identifier: Apache-2.0

//! A headless 2D shape-editor canvas core.
//!
//! The crate models one editing surface: an adaptive grid whose step
//! sizes follow the zoom level, rulers along the viewport edges, a
//! pan/zoom viewport transform, cursor-to-grid snapping, and a tool
//! system for authoring lines, rectangles, polygons, and ellipses.
//!
//! Nothing here touches a window or a GPU. Hosts feed pointer and wheel
//! events to a [`CanvasEditor`] and replay the [`Frame`] it paints into
//! their own renderer.
//!
//! ```
//! use shapeboard::{CanvasConfig, CanvasEditor};
//! use kurbo::Size;
//!
//! let mut editor = CanvasEditor::new(CanvasConfig::default());
//! let frame = editor.paint(Size::new(800.0, 600.0));
//! assert!(!frame.background.is_empty());
//! ```

pub mod config;
pub mod editor;
pub mod grid;
pub mod render;
pub mod scene;
pub mod settings;
pub mod shape;
pub mod snap;
pub mod theme;
pub mod tools;
pub mod viewport;

pub use config::{CanvasConfig, PointerButton};
pub use editor::CanvasEditor;
pub use grid::{GridStepPlanner, StepPair, StepRule};
pub use render::{DrawCmd, DrawList, Frame};
pub use scene::{Scene, ShapeId};
pub use shape::{ShapeKind, ShapeModel};
pub use snap::CursorSnapper;
pub use tools::{ActiveToolId, Tool, ToolController};
pub use viewport::ViewPort;

use tracing_subscriber::filter::EnvFilter;

/// Install a global tracing subscriber for hosts that have not set one
/// up themselves. Honors `RUST_LOG`; defaults to `info` for this crate.
/// Calling it twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("shapeboard=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
