// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Shelfscan Team

//! Analyzer API - full segmentation pipeline
//!
//! Classifier, adjacency index, region grower, filter and compact-mesh
//! builder wired together: one synchronous run per mesh, inputs treated as
//! immutable throughout.

use crate::error::MeshError;
use crate::geometry::{
    grow_sections, height_score, CompactMesh, FaceAdjacency, Mesh, Section, SectionFilter,
};
use serde::{Deserialize, Serialize};

/// One usable shelf-top surface: the face indices that survived filtering
/// (into the source mesh) plus a compact mesh for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelfSurface {
    /// Source-mesh face indices, all upward-facing
    pub faces: Vec<usize>,
    /// Renderable compact mesh of just this surface
    pub mesh: CompactMesh,
    /// Mean face-center height of the surface
    pub height: f64,
}

/// Result of one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelfAnalysis {
    /// Compact mesh of the entire shelf, all faces
    pub shelf: CompactMesh,
    /// Retained surfaces, in region-construction order
    pub surfaces: Vec<ShelfSurface>,
}

impl ShelfAnalysis {
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }
}

/// Shelf mesh analyzer
pub struct ShelfAnalyzer {
    filter: SectionFilter,
}

impl ShelfAnalyzer {
    pub fn new() -> Self {
        Self {
            filter: SectionFilter::default(),
        }
    }

    pub fn with_filter(filter: SectionFilter) -> Self {
        Self { filter }
    }

    /// Run the full pipeline on a mesh.
    ///
    /// Validates face indices up front, grows horizontal regions, filters
    /// cap and downward faces, and builds compact meshes for the whole
    /// shelf and each retained surface. A mesh with no horizontal faces
    /// yields zero surfaces, which is a valid result.
    pub fn analyze(&self, mesh: &Mesh) -> Result<ShelfAnalysis, MeshError> {
        mesh.validate()?;

        let adjacency = FaceAdjacency::build(mesh);
        let sections = grow_sections(mesh, &adjacency);
        let sections = self.filter.apply(mesh, sections);

        let shelf = CompactMesh::from_mesh(mesh);
        let surfaces = sections
            .into_iter()
            .map(|section| self.build_surface(mesh, section))
            .collect();

        Ok(ShelfAnalysis { shelf, surfaces })
    }

    fn build_surface(&self, mesh: &Mesh, section: Section) -> ShelfSurface {
        let height = height_score(mesh, &section);
        let compact = CompactMesh::from_faces(mesh, section.faces.iter().copied());
        ShelfSurface {
            faces: section.faces,
            mesh: compact,
            height,
        }
    }
}

impl Default for ShelfAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
