// Copyright 2026 the Shapeboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection tool.
//!
//! Hit-testing and rubber-band selection live in the hosting UI; from
//! the canvas core's point of view this tool only needs to exist so the
//! controller has something to route events to when no drawing tool is
//! active.

use super::{ActiveToolId, Tool};

/// The selection tool
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectTool;

impl Tool for SelectTool {
    fn id(&self) -> ActiveToolId {
        ActiveToolId::Select
    }
}
