// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Shelfscan Team

//! Error types for mesh analysis

use thiserror::Error;

/// Structural errors raised by mesh validation and analysis
#[derive(Debug, Error)]
pub enum MeshError {
    /// A face references a vertex index outside the vertex table.
    /// The tolerant OBJ parser never raises this for lines it skips; it is
    /// reserved for meshes whose retained faces are structurally broken.
    #[error("face {face} references vertex {vertex}, but the mesh has only {vertex_count} vertices")]
    MalformedMesh {
        face: usize,
        vertex: usize,
        vertex_count: usize,
    },
}
