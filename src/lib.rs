// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Shelfscan Team

//! Shelfscan Segmentation Engine
//!
//! Parses a triangulated OBJ shelf model, groups horizontal faces into
//! connected surface regions, filters out the shelf's top and bottom caps,
//! and emits compact per-surface meshes that pair positionally with an
//! externally authored shelf layout for item placement.

pub mod analyzer;
pub mod error;
pub mod geometry;
pub mod io;
pub mod layout;
pub mod placement;

pub use analyzer::{ShelfAnalysis, ShelfAnalyzer, ShelfSurface};
pub use error::MeshError;
pub use geometry::{CompactMesh, Face, Mesh, Section, SectionFilter};
pub use io::{import_obj_file, parse_obj};
pub use layout::{import_layout_file, pair_sections, ShelfLayout};

use anyhow::Result;

/// Analyze OBJ text with the default filter
pub fn analyze(source: &str) -> Result<ShelfAnalysis> {
    let mesh = parse_obj(source);
    Ok(ShelfAnalyzer::new().analyze(&mesh)?)
}

/// Analyze an OBJ file with the default filter
pub fn analyze_file(path: &str) -> Result<ShelfAnalysis> {
    let mesh = import_obj_file(path)?;
    Ok(ShelfAnalyzer::new().analyze(&mesh)?)
}
