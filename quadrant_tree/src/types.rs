// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the named tree: node identifiers and limits.

/// Maximum number of levels below the root.
pub const MAX_DEPTH: usize = 8;

/// Maximum length of a single level name, in bytes.
pub const NAME_MAX_LEN: usize = 8;

/// Separator between level names in a path.
pub const SEPARATOR: char = '.';

/// Identifier for a node in the tree.
///
/// This is a small, copyable handle consisting of a slot index and a generation counter.
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed and any `NodeId` pointing at it becomes stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// Stale ids never alias a different live node because the generation must match.
/// Use [`Tree::is_alive`](crate::Tree::is_alive) to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}
