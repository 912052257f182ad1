// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Shelfscan Team

//! Tolerant OBJ parser
//!
//! Line-oriented, keep-what-parses policy: `v` lines with at least three
//! numeric tokens become vertices, `f` lines become faces only when exactly
//! three vertex references parse. Everything else (comments, `usemtl`,
//! `mtllib`, polygon faces, broken numbers) is skipped without error, since
//! exported shelf models routinely carry decorative or malformed lines.

use crate::geometry::{Face, Mesh};
use anyhow::{Context, Result};
use nalgebra::Point3;
use std::fs;
use std::path::Path;

/// Parse OBJ text into a mesh
pub fn parse_obj(source: &str) -> Mesh {
    let mut mesh = Mesh::new();

    for line in source.lines() {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                if let Some(position) = parse_vertex_line(tokens) {
                    mesh.add_vertex(position);
                }
            }
            Some("f") => {
                if let Some(face) = parse_face_line(tokens) {
                    mesh.add_face(face);
                }
            }
            _ => {} // blank lines, comments, usemtl, mtllib, ...
        }
    }

    mesh
}

/// Read and parse an OBJ file
pub fn import_obj_file<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read OBJ file: {}", path.display()))?;

    Ok(parse_obj(&source))
}

/// First three tokens must be numeric; extra tokens (e.g. vertex colors)
/// are ignored.
fn parse_vertex_line<'a, I>(mut tokens: I) -> Option<Point3<f64>>
where
    I: Iterator<Item = &'a str>,
{
    let x: f64 = tokens.next()?.parse().ok()?;
    let y: f64 = tokens.next()?.parse().ok()?;
    let z: f64 = tokens.next()?.parse().ok()?;
    Some(Point3::new(x, y, z))
}

/// A face is kept only when exactly three references parse. Each reference
/// uses the first slash-separated field (texture/normal indices ignored) and
/// is re-based from OBJ's 1-based indexing.
fn parse_face_line<'a, I>(tokens: I) -> Option<Face>
where
    I: Iterator<Item = &'a str>,
{
    let mut indices = Vec::with_capacity(3);
    for token in tokens {
        let first_field = token.split('/').next()?;
        let vertex: i64 = first_field.parse().ok()?;
        if vertex < 1 {
            return None; // negative (relative) references not supported
        }
        indices.push((vertex - 1) as usize);
    }

    match indices[..] {
        [a, b, c] => Some(Face::new([a, b, c])),
        _ => None, // points, lines, quads and larger polygons are dropped
    }
}
