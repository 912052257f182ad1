// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Shelfscan Team

//! Shelf layout model
//!
//! Externally authored JSON describing a shelf: where it stands, and which
//! item SKUs go on which section. Layout sections correlate with detected
//! surfaces purely by array position (section *i* of the layout pairs with
//! the *i*-th detected surface); there is no identity or geometric matching,
//! and the caller is responsible for keeping the two lists in the same order.

use crate::analyzer::ShelfSurface;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 3D position record
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Shelf rotation; only yaw is meaningful for floor-standing shelves
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Rotation {
    pub y: f64,
}

/// Overall shelf dimensions as authored
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(rename = "Width")]
    pub width: f64,
    #[serde(rename = "Height")]
    pub height: f64,
    #[serde(rename = "Length")]
    pub length: f64,
}

/// One shelf section's worth of placement data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutSection {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Top-level shelf layout record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShelfLayout {
    #[serde(default)]
    pub shelftype: i32,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(rename = "shelfSections", default)]
    pub sections: Vec<LayoutSection>,
}

/// Parse layout JSON
pub fn parse_layout(json: &str) -> Result<ShelfLayout> {
    serde_json::from_str(json).context("Failed to parse shelf layout JSON")
}

/// Read and parse a layout file
pub fn import_layout_file<P: AsRef<Path>>(path: P) -> Result<ShelfLayout> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read shelf layout file: {}", path.display()))?;
    parse_layout(&json)
}

/// Pair detected surfaces with layout sections by array position.
///
/// Truncates to the shorter list, mirroring the placement contract; a count
/// mismatch is logged since it usually means the layout was authored against
/// a different shelf model.
pub fn pair_sections<'a>(
    surfaces: &'a [ShelfSurface],
    layout: &'a ShelfLayout,
) -> Vec<(&'a ShelfSurface, &'a LayoutSection)> {
    if surfaces.len() != layout.sections.len() {
        log::warn!(
            "surface/layout count mismatch: {} detected, {} in layout; pairing the first {}",
            surfaces.len(),
            layout.sections.len(),
            surfaces.len().min(layout.sections.len())
        );
    }

    surfaces.iter().zip(layout.sections.iter()).collect()
}
