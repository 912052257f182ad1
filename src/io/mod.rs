// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Shelfscan Team

//! I/O module - OBJ parsing and import

mod obj;

pub use obj::{import_obj_file, parse_obj};
