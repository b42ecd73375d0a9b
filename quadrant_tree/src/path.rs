// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dotted path parsing: `"a.b.c"` names the node `c` under `b` under `a` under the root.

use alloc::vec::Vec;

use crate::error::PathError;
use crate::types::{MAX_DEPTH, NAME_MAX_LEN, SEPARATOR};

/// Split a dotted path into its level names.
///
/// The empty string is the root and yields no names.
///
/// ```
/// use quadrant_tree::{split_path, PathError};
///
/// assert_eq!(split_path("a.b.c"), Ok(vec!["a", "b", "c"]));
/// assert_eq!(split_path(""), Ok(vec![]));
/// assert_eq!(split_path("a."), Err(PathError::EmptyName));
/// ```
pub fn split_path(path: &str) -> Result<Vec<&str>, PathError> {
    let mut names = Vec::new();
    if path.is_empty() {
        return Ok(names);
    }
    for name in path.split(SEPARATOR) {
        if names.len() == MAX_DEPTH {
            return Err(PathError::TooDeep { max: MAX_DEPTH });
        }
        validate_name(name)?;
        names.push(name);
    }
    Ok(names)
}

/// Check a single level name: non-empty, ASCII alphanumeric, at most [`NAME_MAX_LEN`] bytes.
pub fn validate_name(name: &str) -> Result<(), PathError> {
    if name.is_empty() {
        return Err(PathError::EmptyName);
    }
    if let Some(c) = name.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(PathError::InvalidChar(c));
    }
    if name.len() > NAME_MAX_LEN {
        return Err(PathError::NameTooLong {
            len: name.len(),
            max: NAME_MAX_LEN,
        });
    }
    Ok(())
}
