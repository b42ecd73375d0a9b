// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for path parsing and tree mutation.

use alloc::string::String;
use thiserror::Error;

/// Errors produced while splitting or validating a dotted path.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PathError {
    /// A level name is empty, as in `"a."`, `".a"` or `"a..b"`.
    #[error("empty level name in path")]
    EmptyName,

    /// A level name is longer than [`NAME_MAX_LEN`](crate::NAME_MAX_LEN).
    #[error("level name is {len} bytes long, the limit is {max}")]
    NameTooLong {
        /// Length of the offending name.
        len: usize,
        /// Configured limit.
        max: usize,
    },

    /// A level name contains something other than ASCII letters and digits.
    #[error("invalid character {0:?} in level name")]
    InvalidChar(char),

    /// The path names more levels than [`MAX_DEPTH`](crate::MAX_DEPTH).
    #[error("path has more than {max} levels")]
    TooDeep {
        /// Configured limit.
        max: usize,
    },
}

/// Errors produced by [`Tree`](crate::Tree) operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The path could not be parsed.
    #[error(transparent)]
    Path(#[from] PathError),

    /// No node exists at the path.
    #[error("no node at path {path:?}")]
    NotFound {
        /// The path that was looked up.
        path: String,
    },

    /// An intermediate node is missing and parents were not requested.
    #[error("parent {name:?} does not exist")]
    NoParent {
        /// Name of the first missing level.
        name: String,
    },

    /// A root was inserted into a tree that already has one.
    #[error("the tree already has a root")]
    RootExists,

    /// Inserting would place a node deeper than [`MAX_DEPTH`](crate::MAX_DEPTH).
    #[error("node would exceed the maximum depth of {max}")]
    TooDeep {
        /// Configured limit.
        max: usize,
    },

    /// The node id no longer refers to a live node.
    #[error("stale node id")]
    StaleNode,
}
