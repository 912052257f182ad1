// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Shelfscan Team

//! Horizontal surface detection
//!
//! Groups horizontal faces into maximal connected regions ("sections") via a
//! breadth-first flood fill over the adjacency relation, then filters out the
//! shelf's cap regions by height and keeps only upward-facing faces.

use super::{classify, FaceAdjacency, Mesh};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A connected set of horizontal faces, stored as face indices into the
/// source mesh. Built once per analysis run and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub faces: Vec<usize>,
}

impl Section {
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Partition the mesh's horizontal faces into connected sections.
///
/// Faces are seeded in declaration order, so the output order is the order in
/// which each region's first face appears in the mesh. A face may be enqueued
/// more than once from different neighbors; the visited flag is checked at
/// dequeue time so it joins exactly one section.
pub fn grow_sections(mesh: &Mesh, adjacency: &FaceAdjacency) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut visited = vec![false; mesh.face_count()];

    for seed in 0..mesh.face_count() {
        if visited[seed] || !classify::is_horizontal(mesh, seed) {
            continue;
        }

        let mut faces = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(seed);

        while let Some(current) = queue.pop_front() {
            if visited[current] {
                continue;
            }
            visited[current] = true;
            faces.push(current);

            for &neighbor in adjacency.neighbors(current) {
                if !visited[neighbor] && classify::is_horizontal(mesh, neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        sections.push(Section { faces });
    }

    sections
}

/// Mean face-center height over a section's faces
pub fn height_score(mesh: &Mesh, section: &Section) -> f64 {
    let sum: f64 = section
        .faces
        .iter()
        .map(|&face| mesh.face_center_height(face))
        .sum();
    sum / section.faces.len() as f64
}

/// Cap-removal configuration.
///
/// A shelf mesh's top cap and floor each decompose into roughly three
/// horizontal regions, hence the 3/3 defaults. The counts are a heuristic
/// tied to that geometry, so they are plain public fields rather than
/// constants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SectionFilter {
    /// Number of highest-scoring sections to drop
    pub trim_highest: usize,
    /// Number of lowest-scoring sections to drop
    pub trim_lowest: usize,
}

impl Default for SectionFilter {
    fn default() -> Self {
        Self {
            trim_highest: 3,
            trim_lowest: 3,
        }
    }
}

impl SectionFilter {
    /// Filter grown sections down to usable shelf-top surfaces.
    ///
    /// Drops empty sections, strips the configured number of highest and
    /// lowest sections by height score (fewer if fewer exist), then keeps
    /// only upward-facing faces in the survivors, dropping any section that
    /// empties out. Survivors keep their construction order; the height sort
    /// is only used to pick removals.
    pub fn apply(&self, mesh: &Mesh, sections: Vec<Section>) -> Vec<Section> {
        // The grower always seeds a section with at least one face; empty
        // sections are rejected anyway as a structural invariant.
        let sections: Vec<Section> = sections.into_iter().filter(|s| !s.faces.is_empty()).collect();

        // Order section ids by height score ascending, then mark removals
        // from both ends.
        let scores: Vec<f64> = sections
            .iter()
            .map(|section| height_score(mesh, section))
            .collect();
        let mut by_height: Vec<usize> = (0..sections.len()).collect();
        by_height.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));

        let mut removed = vec![false; sections.len()];
        for _ in 0..self.trim_highest {
            match by_height.pop() {
                Some(id) => removed[id] = true,
                None => break,
            }
        }
        for _ in 0..self.trim_lowest {
            if by_height.is_empty() {
                break;
            }
            removed[by_height.remove(0)] = true;
        }

        sections
            .into_iter()
            .enumerate()
            .filter(|(id, _)| !removed[*id])
            .filter_map(|(_, section)| {
                let faces: Vec<usize> = section
                    .faces
                    .into_iter()
                    .filter(|&face| classify::is_upward_facing(mesh, face))
                    .collect();
                if faces.is_empty() {
                    None
                } else {
                    Some(Section { faces })
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Face;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    /// Two upward triangles forming a horizontal quad at the given height
    fn add_plane(mesh: &mut Mesh, y: f64, x0: f64) {
        let base = mesh.vertex_count();
        mesh.add_vertex(Point3::new(x0, y, 0.0));
        mesh.add_vertex(Point3::new(x0, y, 1.0));
        mesh.add_vertex(Point3::new(x0 + 1.0, y, 1.0));
        mesh.add_vertex(Point3::new(x0 + 1.0, y, 0.0));
        mesh.add_face(Face::new([base, base + 1, base + 3]));
        mesh.add_face(Face::new([base + 1, base + 2, base + 3]));
    }

    fn stacked_planes(count: usize) -> Mesh {
        let mut mesh = Mesh::new();
        for i in 0..count {
            add_plane(&mut mesh, i as f64, 0.0);
        }
        mesh
    }

    #[test]
    fn test_grower_one_section_per_plane() {
        let mesh = stacked_planes(4);
        let adjacency = FaceAdjacency::build(&mesh);
        let sections = grow_sections(&mesh, &adjacency);

        assert_eq!(sections.len(), 4);
        for section in &sections {
            assert_eq!(section.face_count(), 2);
        }
    }

    #[test]
    fn test_grower_partitions_horizontal_faces() {
        let mesh = stacked_planes(5);
        let adjacency = FaceAdjacency::build(&mesh);
        let sections = grow_sections(&mesh, &adjacency);

        let mut seen = vec![0usize; mesh.face_count()];
        for section in &sections {
            for &face in &section.faces {
                seen[face] += 1;
            }
        }
        assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn test_height_score_is_mean_of_face_centers() {
        let mut mesh = Mesh::new();
        add_plane(&mut mesh, 2.0, 0.0);
        let section = Section {
            faces: vec![0, 1],
        };
        assert_relative_eq!(height_score(&mesh, &section), 2.0);
    }

    #[test]
    fn test_filter_trims_both_ends() {
        let mesh = stacked_planes(10);
        let adjacency = FaceAdjacency::build(&mesh);
        let sections = grow_sections(&mesh, &adjacency);
        let kept = SectionFilter::default().apply(&mesh, sections);

        // 10 planes, minus 3 highest and 3 lowest
        assert_eq!(kept.len(), 4);
        let heights: Vec<f64> = kept.iter().map(|s| height_score(&mesh, s)).collect();
        assert_eq!(heights, vec![3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_filter_never_underflows() {
        let mesh = stacked_planes(4);
        let adjacency = FaceAdjacency::build(&mesh);
        let sections = grow_sections(&mesh, &adjacency);
        let kept = SectionFilter::default().apply(&mesh, sections);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_filter_keeps_construction_order() {
        // Planes declared out of height order; survivors must stay in
        // declaration order, not sorted by height.
        let mut mesh = Mesh::new();
        for y in [7.0, 2.0, 9.0, 4.0, 0.0, 5.0, 8.0, 1.0, 6.0, 3.0] {
            add_plane(&mut mesh, y, 0.0);
        }
        let adjacency = FaceAdjacency::build(&mesh);
        let sections = grow_sections(&mesh, &adjacency);
        let kept = SectionFilter::default().apply(&mesh, sections);

        let heights: Vec<f64> = kept.iter().map(|s| height_score(&mesh, s)).collect();
        assert_eq!(heights, vec![4.0, 5.0, 6.0, 3.0]);
    }

    #[test]
    fn test_filter_drops_downward_only_sections() {
        // One upward plane and one downward plane (reversed winding)
        let mut mesh = Mesh::new();
        add_plane(&mut mesh, 0.0, 0.0);
        let base = mesh.vertex_count();
        mesh.add_vertex(Point3::new(5.0, 1.0, 0.0));
        mesh.add_vertex(Point3::new(5.0, 1.0, 1.0));
        mesh.add_vertex(Point3::new(6.0, 1.0, 0.0));
        mesh.add_face(Face::new([base, base + 2, base + 1]));

        let adjacency = FaceAdjacency::build(&mesh);
        let sections = grow_sections(&mesh, &adjacency);
        assert_eq!(sections.len(), 2);

        let filter = SectionFilter {
            trim_highest: 0,
            trim_lowest: 0,
        };
        let kept = filter.apply(&mesh, sections);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].faces, vec![0, 1]);
    }
}
