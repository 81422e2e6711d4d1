// Copyright 2026 the Shapeboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Shape storage for one editing session.
//!
//! The scene owns every committed and in-progress shape entity, in
//! insertion order (which is also draw order). Shapes are keyed by a
//! `ShapeId` drawn from a global atomic counter, so ids are never reused
//! within a session and removal leaves no dangling references.
//!
//! Shapes live only in memory for the session; there is no persistence.

use crate::settings;
use crate::shape::ShapeModel;
use kurbo::Rect;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a shape entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(u64);

static SHAPE_COUNTER: AtomicU64 = AtomicU64::new(1);

impl ShapeId {
    /// Create a new unique shape ID
    pub fn next() -> Self {
        Self(SHAPE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// The set of shape entities in the session
#[derive(Debug, Clone)]
pub struct Scene {
    rect: Rect,
    shapes: Vec<(ShapeId, ShapeModel)>,
}

impl Scene {
    /// Empty scene with the default scene rect
    pub fn new() -> Self {
        Self {
            rect: Rect::new(
                0.0,
                0.0,
                settings::scene::DEFAULT_EXTENT,
                settings::scene::DEFAULT_EXTENT,
            ),
            shapes: Vec::new(),
        }
    }

    /// The scene rect (the white sheet inside the gray surround)
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Resize the scene rect
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Add a shape, taking ownership. Returns its id.
    pub fn add_shape(&mut self, shape: ShapeModel) -> ShapeId {
        let id = ShapeId::next();
        self.shapes.push((id, shape));
        id
    }

    /// Look up a shape by id
    pub fn get(&self, id: ShapeId) -> Option<&ShapeModel> {
        self.shapes
            .iter()
            .find(|(shape_id, _)| *shape_id == id)
            .map(|(_, shape)| shape)
    }

    /// Look up a shape by id for mutation
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut ShapeModel> {
        self.shapes
            .iter_mut()
            .find(|(shape_id, _)| *shape_id == id)
            .map(|(_, shape)| shape)
    }

    /// Remove a shape, returning it if it was present
    pub fn remove(&mut self, id: ShapeId) -> Option<ShapeModel> {
        let index = self.shapes.iter().position(|(shape_id, _)| *shape_id == id)?;
        Some(self.shapes.remove(index).1)
    }

    /// Shapes in insertion (draw) order
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &ShapeModel)> {
        self.shapes.iter().map(|(id, shape)| (*id, shape))
    }

    /// Number of shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the scene holds no shapes
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
