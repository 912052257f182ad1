// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Shelfscan Team

//! Compact sub-mesh builder
//!
//! Rebuilds a renderable mesh from a subset of a source mesh's faces: a
//! deduplicated vertex buffer in first-use order plus a triangle index
//! buffer referencing it. Pure data transform, no classification logic.

use super::{BoundingBox, Mesh};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Deduplicated vertex buffer + triangle index buffer, ready for a renderer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompactMesh {
    pub vertices: Vec<nalgebra::Point3<f64>>,
    pub triangles: Vec<[usize; 3]>,
}

impl CompactMesh {
    /// Build a compact mesh from the given faces of a source mesh.
    ///
    /// Each source vertex appears once, at the position of its first use;
    /// triangles keep the order of the input face list.
    pub fn from_faces<I>(mesh: &Mesh, faces: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut vertices = Vec::new();
        let mut triangles = Vec::new();
        let mut remap: AHashMap<usize, usize> = AHashMap::new();

        for face_idx in faces {
            let mut triangle = [0usize; 3];
            for (corner, &vertex) in mesh.faces[face_idx].indices.iter().enumerate() {
                let compact = *remap.entry(vertex).or_insert_with(|| {
                    vertices.push(mesh.vertices[vertex]);
                    vertices.len() - 1
                });
                triangle[corner] = compact;
            }
            triangles.push(triangle);
        }

        Self { vertices, triangles }
    }

    /// Compact mesh of the whole source mesh
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self::from_faces(mesh, 0..mesh.face_count())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Flat index buffer, three entries per triangle
    pub fn index_buffer(&self) -> Vec<usize> {
        self.triangles.iter().flatten().copied().collect()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.vertices)
    }
}
