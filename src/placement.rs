// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Shelfscan Team

//! Item slot layout along a shelf surface
//!
//! Given per-item dimensions and a detected surface, computes where each
//! item rests: left to right from the surface's minimum x, centered in
//! depth, sitting on top of the surface. Where an item's dimensions come
//! from (product database, catalogue file) is a collaborator concern; this
//! module only does the geometry.

use crate::analyzer::ShelfSurface;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Gap between adjacent items, in metres
pub const ITEM_SPACING: f64 = 0.01;

/// Physical item dimensions in metres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl ItemDimensions {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Product databases commonly store dimensions in centimetres
    pub fn from_centimetres(width: f64, height: f64, depth: f64) -> Self {
        Self::new(width / 100.0, height / 100.0, depth / 100.0)
    }

    /// Unknown dimensions come back as all zeros; such items are skipped
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0 && self.depth == 0.0
    }
}

/// A placed item: where it goes and how to scale a unit prefab to fit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSlot {
    pub sku: String,
    /// Position relative to the shelf, on top of the surface
    pub position: Point3<f64>,
    /// Half the item dimensions, the scale for a 2-unit reference box
    pub scale: Vector3<f64>,
}

/// Lay items out across a surface, left to right.
///
/// Items with all-zero dimensions are skipped but still consume no shelf
/// width. No overflow check is made against the surface's extent; items past
/// the right edge simply land there.
pub fn layout_items(surface: &ShelfSurface, items: &[(String, ItemDimensions)]) -> Vec<ItemSlot> {
    let bounds = surface.mesh.bounding_box();
    let mut slots = Vec::new();
    let mut offset_x = bounds.min.x;

    for (sku, dims) in items {
        if dims.is_zero() {
            continue;
        }

        let half_width = dims.width / 2.0;
        slots.push(ItemSlot {
            sku: sku.clone(),
            position: Point3::new(
                offset_x + half_width,
                bounds.min.y + dims.height / 4.0,
                (bounds.min.z + bounds.max.z) / 2.0,
            ),
            scale: Vector3::new(dims.width, dims.height, dims.depth) / 2.0,
        });

        offset_x += dims.width + ITEM_SPACING;
    }

    slots
}
