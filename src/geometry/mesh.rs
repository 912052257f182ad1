// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Shelfscan Team

//! Mesh representation and per-face derived values

use crate::error::MeshError;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Triangle defined by three vertex indices, in declaration order
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Face {
    pub indices: [usize; 3],
}

impl Face {
    pub fn new(indices: [usize; 3]) -> Self {
        Self { indices }
    }
}

/// Triangular mesh: a vertex table plus faces indexing into it.
///
/// Vertices keep the order they were declared in (0-based after OBJ
/// re-basing). Both tables are treated as immutable during an analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Point3<f64>>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, position: Point3<f64>) -> usize {
        let index = self.vertices.len();
        self.vertices.push(position);
        index
    }

    /// Add a face
    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check that every face index is inside the vertex table.
    /// Out-of-range references are a structural error, not something to
    /// silently index past.
    pub fn validate(&self) -> Result<(), MeshError> {
        for (face_idx, face) in self.faces.iter().enumerate() {
            for &vertex in &face.indices {
                if vertex >= self.vertices.len() {
                    return Err(MeshError::MalformedMesh {
                        face: face_idx,
                        vertex,
                        vertex_count: self.vertices.len(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Normal of a face: normalized cross product of (v1-v0) and (v2-v0).
    /// Winding matters; a degenerate face yields the zero vector.
    pub fn face_normal(&self, face_idx: usize) -> Vector3<f64> {
        let [i0, i1, i2] = self.faces[face_idx].indices;
        let v0 = self.vertices[i0];
        let v1 = self.vertices[i1];
        let v2 = self.vertices[i2];

        (v1 - v0)
            .cross(&(v2 - v0))
            .try_normalize(1e-12)
            .unwrap_or_else(Vector3::zeros)
    }

    /// Mean y-coordinate of a face's three vertices
    pub fn face_center_height(&self, face_idx: usize) -> f64 {
        let [i0, i1, i2] = self.faces[face_idx].indices;
        (self.vertices[i0].y + self.vertices[i1].y + self.vertices[i2].y) / 3.0
    }
}
