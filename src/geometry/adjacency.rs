// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Shelfscan Team

//! Face adjacency index
//!
//! Two faces are neighbors when their vertex-index triples share at least two
//! distinct indices. That is deliberately looser than "share a declared
//! edge": two triangles touching at the same two vertices without a common
//! edge still count. Grouping results depend on this predicate, so it is
//! preserved as-is.

use super::Mesh;
use ahash::AHashMap;

/// Precomputed neighbor lists for every face of a mesh.
///
/// Built once per analysis run from a vertex-to-faces incidence map, which
/// gives the same neighbor sets as a pairwise scan of all faces without the
/// quadratic cost on meshes that are mostly disconnected.
#[derive(Debug, Clone)]
pub struct FaceAdjacency {
    neighbors: Vec<Vec<usize>>,
}

impl FaceAdjacency {
    pub fn build(mesh: &Mesh) -> Self {
        // vertex index -> faces touching it
        let mut incidence: AHashMap<usize, Vec<usize>> = AHashMap::new();
        for (face_idx, face) in mesh.faces.iter().enumerate() {
            for &vertex in distinct_indices(&face.indices) {
                incidence.entry(vertex).or_default().push(face_idx);
            }
        }

        let mut neighbors = Vec::with_capacity(mesh.face_count());
        let mut shared: AHashMap<usize, usize> = AHashMap::new();

        for (face_idx, face) in mesh.faces.iter().enumerate() {
            shared.clear();
            for &vertex in distinct_indices(&face.indices) {
                for &other in &incidence[&vertex] {
                    if other != face_idx {
                        *shared.entry(other).or_insert(0) += 1;
                    }
                }
            }

            let mut list: Vec<usize> = shared
                .iter()
                .filter(|(_, &count)| count >= 2)
                .map(|(&other, _)| other)
                .collect();
            // Deterministic neighbor order, matching a pairwise scan
            list.sort_unstable();
            neighbors.push(list);
        }

        Self { neighbors }
    }

    /// Faces sharing at least two vertex indices with `face_idx`
    pub fn neighbors(&self, face_idx: usize) -> &[usize] {
        &self.neighbors[face_idx]
    }

    pub fn face_count(&self) -> usize {
        self.neighbors.len()
    }
}

/// A face triple may repeat an index (degenerate face); shared-vertex counts
/// are over distinct indices, as a set intersection would give.
fn distinct_indices(indices: &[usize; 3]) -> impl Iterator<Item = &usize> + '_ {
    indices
        .iter()
        .enumerate()
        .filter(|(i, v)| !indices[..*i].contains(v))
        .map(|(_, v)| v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Face;
    use nalgebra::Point3;

    fn mesh_with_faces(vertex_count: usize, faces: &[[usize; 3]]) -> Mesh {
        let mut mesh = Mesh::new();
        for i in 0..vertex_count {
            mesh.add_vertex(Point3::new(i as f64, 0.0, 0.0));
        }
        for &f in faces {
            mesh.add_face(Face::new(f));
        }
        mesh
    }

    #[test]
    fn test_edge_sharing_faces_are_neighbors() {
        let mesh = mesh_with_faces(4, &[[0, 1, 2], [1, 2, 3]]);
        let adjacency = FaceAdjacency::build(&mesh);
        assert_eq!(adjacency.neighbors(0), &[1]);
        assert_eq!(adjacency.neighbors(1), &[0]);
    }

    #[test]
    fn test_single_shared_vertex_is_not_enough() {
        let mesh = mesh_with_faces(5, &[[0, 1, 2], [2, 3, 4]]);
        let adjacency = FaceAdjacency::build(&mesh);
        assert!(adjacency.neighbors(0).is_empty());
        assert!(adjacency.neighbors(1).is_empty());
    }

    #[test]
    fn test_two_shared_vertices_without_shared_edge() {
        // Faces share vertices 0 and 2 but no declared edge between them is
        // required by the predicate.
        let mesh = mesh_with_faces(5, &[[0, 1, 2], [0, 3, 2]]);
        let adjacency = FaceAdjacency::build(&mesh);
        assert_eq!(adjacency.neighbors(0), &[1]);
    }

    #[test]
    fn test_degenerate_face_counts_distinct_indices() {
        // Face 1 repeats vertex 1; intersection with face 0 is {1, 2}, two
        // distinct indices, so they are neighbors.
        let mesh = mesh_with_faces(4, &[[0, 1, 2], [1, 1, 2]]);
        let adjacency = FaceAdjacency::build(&mesh);
        assert_eq!(adjacency.neighbors(0), &[1]);
    }

    #[test]
    fn test_neighbor_lists_are_sorted() {
        let mesh = mesh_with_faces(6, &[[0, 1, 2], [1, 2, 3], [0, 1, 4], [2, 0, 5]]);
        let adjacency = FaceAdjacency::build(&mesh);
        let neighbors = adjacency.neighbors(0);
        let mut sorted = neighbors.to_vec();
        sorted.sort_unstable();
        assert_eq!(neighbors, sorted.as_slice());
        assert_eq!(neighbors, &[1, 2, 3]);
    }
}
