// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Shelfscan Team

//! Geometry module - mesh representation and surface detection

mod adjacency;
mod bbox;
pub mod classify;
mod compact;
mod mesh;
mod sections;

pub use adjacency::FaceAdjacency;
pub use bbox::BoundingBox;
pub use classify::{is_horizontal, is_upward_facing, VERTICAL_THRESHOLD};
pub use compact::CompactMesh;
pub use mesh::{Face, Mesh};
pub use sections::{grow_sections, height_score, Section, SectionFilter};
