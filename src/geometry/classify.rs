// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Shelfscan Team

//! Face orientation classification
//!
//! A face counts as horizontal when the vertical component of its normal
//! exceeds 0.9 in magnitude (within ~26 degrees of vertical), and as
//! upward-facing when that component is positive and exceeds 0.9. Both are
//! pure functions of the face's three vertex positions.

use super::Mesh;

/// Fixed classification threshold on |normal.y|
pub const VERTICAL_THRESHOLD: f64 = 0.9;

/// True iff the face's normal is close to vertical, pointing up or down
pub fn is_horizontal(mesh: &Mesh, face_idx: usize) -> bool {
    mesh.face_normal(face_idx).y.abs() > VERTICAL_THRESHOLD
}

/// True iff the face's normal is close to vertical and points up.
/// Strict sign test: cross-product orientation (winding) decides.
pub fn is_upward_facing(mesh: &Mesh, face_idx: usize) -> bool {
    mesh.face_normal(face_idx).y > VERTICAL_THRESHOLD
}
