// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The quad-tree: subdivision, lookup, insertion, queries and teardown.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use quadrant_list::List;
use quadrant_tree::{NodeId, Tree};

use crate::codec::{QuadIndex, common_quadrant_depth, point_index, quadrant_at};
use crate::error::QuadTreeError;
use crate::frame::Frame;
use crate::path::QUADRANT_NAMES;
use crate::types::{Options, QuadBox};

/// Objects stored at one node, in insertion order.
pub type Bucket<T> = List<T>;

/// A region quad-tree bucketing objects of type `T` by quadrant.
///
/// Nodes are subdivided all at once: a node has either no children or exactly four,
/// ordered and named by [`QUADRANT_NAMES`]. Any node, leaf or internal, may hold a
/// [`Bucket`] of objects.
///
/// The root is created by the first [`branch`](Self::branch) or insert. Dropping a
/// quad-tree frees everything; [`release`](Self::release) is the checked teardown for
/// callers that hand objects back through [`clear_with`](Self::clear_with) first.
pub struct QuadTree<T> {
    frame: Frame,
    options: Options,
    tree: Tree<Bucket<T>>,
}

impl<T> fmt::Debug for QuadTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadTree")
            .field("frame", &self.frame)
            .field("options", &self.options)
            .field("nodes", &self.tree.len())
            .finish_non_exhaustive()
    }
}

impl<T> Default for QuadTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> QuadTree<T> {
    /// Create an empty quad-tree over the default frame (a 1024 × 1024 region, three levels).
    pub fn new() -> Self {
        Self::with_frame(Frame::DEFAULT)
    }

    /// Create an empty quad-tree with origin `(x0, y0)`, side `2^dim` and `depth` levels.
    ///
    /// See [`Frame::new`] for the accepted parameters.
    pub fn init(x0: u32, y0: u32, dim: u32, depth: u32) -> Result<Self, QuadTreeError> {
        Ok(Self::with_frame(Frame::new(x0, y0, dim, depth)?))
    }

    /// Create an empty quad-tree over `frame` with default options.
    pub fn with_frame(frame: Frame) -> Self {
        Self::with_options(frame, Options::default())
    }

    /// Create an empty quad-tree over `frame` with `options`.
    pub fn with_options(frame: Frame, options: Options) -> Self {
        Self {
            frame,
            options,
            tree: Tree::new(),
        }
    }

    /// The spatial frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// The options chosen at construction.
    pub fn options(&self) -> Options {
        self.options
    }

    /// Quadrant index of `(x, y)` in this tree's frame.
    pub fn point_index(&self, x: u32, y: u32) -> Result<QuadIndex, QuadTreeError> {
        point_index(&self.frame, x, y)
    }

    /// Number of levels and the index of the deepest quadrant containing `bbox`.
    pub fn locate(&self, bbox: &QuadBox) -> Result<(u32, QuadIndex), QuadTreeError> {
        bbox.validate()?;
        let a = self.point_index(bbox.min_x, bbox.min_y)?;
        let b = self.point_index(bbox.max_x, bbox.max_y)?;
        Ok((common_quadrant_depth(&self.frame, a, b), a))
    }

    /// The node reached by following `index` down `levels` levels. Never creates nodes.
    pub fn get_node(&self, levels: u32, index: QuadIndex) -> Result<NodeId, QuadTreeError> {
        self.check_levels(levels)?;
        let not_found = || QuadTreeError::NotFound { levels, index };
        let mut current = self.tree.root().ok_or_else(not_found)?;
        for level in 0..levels {
            let q = quadrant_at(&self.frame, index, level);
            current = self.child(current, q).ok_or_else(not_found)?;
        }
        Ok(current)
    }

    /// Like [`get_node`](Self::get_node), but creates the root and subdivides every
    /// node on the way that has no children yet.
    ///
    /// Branching the same path again returns the same node and creates nothing.
    pub fn branch(&mut self, levels: u32, index: QuadIndex) -> Result<NodeId, QuadTreeError> {
        self.check_levels(levels)?;
        let mut current = self.tree.ensure_root();
        for level in 0..levels {
            let q = quadrant_at(&self.frame, index, level);
            if self.tree.child_count(current) != Some(4) {
                self.subdivide(current)?;
            }
            current = self
                .tree
                .child_at(current, usize::from(q))
                .expect("subdivided node has four children");
        }
        self.check();
        Ok(current)
    }

    /// Append `data` to the bucket of the node at (`levels`, `index`).
    ///
    /// With `create_parents` the path is materialized through [`branch`](Self::branch);
    /// otherwise it must already exist and a miss is [`QuadTreeError::NotFound`].
    pub fn insert(
        &mut self,
        levels: u32,
        index: QuadIndex,
        create_parents: bool,
        data: T,
    ) -> Result<NodeId, QuadTreeError> {
        self.insert_with(levels, index, create_parents, data, |mut bucket, item| {
            bucket.push_back(item);
            bucket
        })
    }

    /// Like [`insert`](Self::insert), with `merge(existing, data)` deciding the new bucket.
    ///
    /// A node without a bucket hands `merge` an empty one. If `merge` returns an empty
    /// bucket, the node is left without one.
    pub fn insert_with(
        &mut self,
        levels: u32,
        index: QuadIndex,
        create_parents: bool,
        data: T,
        merge: impl FnOnce(Bucket<T>, T) -> Bucket<T>,
    ) -> Result<NodeId, QuadTreeError> {
        let node = if create_parents {
            self.branch(levels, index)?
        } else {
            self.get_node(levels, index)?
        };
        let bucket = self.tree.take_data(node).unwrap_or_default();
        let bucket = merge(bucket, data);
        if self.verbose() {
            log::debug!(
                "insert at {levels} levels along {index}: bucket holds {}",
                bucket.len()
            );
        }
        // An empty bucket is stored as no bucket.
        self.tree
            .set_data(node, (!bucket.is_empty()).then_some(bucket))?;
        self.check();
        Ok(node)
    }

    /// Insert `data` at the deepest quadrant that contains both corners of `bbox`.
    pub fn insert_box(&mut self, bbox: &QuadBox, data: T) -> Result<NodeId, QuadTreeError> {
        let (levels, index) = self.locate(bbox)?;
        self.insert(levels, index, true, data)
    }

    /// The bucket stored at `node`.
    pub fn bucket(&self, node: NodeId) -> Option<&Bucket<T>> {
        self.tree.data(node)
    }

    /// Mutable access to the bucket stored at `node`.
    pub fn bucket_mut(&mut self, node: NodeId) -> Option<&mut Bucket<T>> {
        self.tree.data_mut(node)
    }

    /// Take the bucket out of `node`, leaving the node in place.
    pub fn take_bucket(&mut self, node: NodeId) -> Option<Bucket<T>> {
        self.tree.take_data(node)
    }

    /// Remove the first object equal to `item` from the bucket of `node`.
    ///
    /// A bucket emptied this way is dropped, so the node reads as holding no data.
    pub fn remove_object(&mut self, node: NodeId, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let bucket = self.tree.data_mut(node)?;
        let removed = bucket.remove_item(item)?;
        if bucket.is_empty() {
            self.tree.take_data(node);
        }
        Some(removed)
    }

    /// The four children of `node` in quadrant order, or `None` if it is not subdivided.
    pub fn children(&self, node: NodeId) -> Option<[NodeId; 4]> {
        if self.subdivision(node)? == 0 {
            return None;
        }
        let mut ids = self.tree.children(node);
        Some(core::array::from_fn(|_| {
            ids.next().expect("subdivided node has four children")
        }))
    }

    /// Parent of `node`; `None` for the root.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree.parent(node)
    }

    /// The root, once created.
    pub fn root(&self) -> Option<NodeId> {
        self.tree.root()
    }

    /// Number of subdivisions between the root and `node`.
    pub fn level_of(&self, node: NodeId) -> Option<u32> {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Tree depth is bounded by a small constant."
        )]
        let level = self.tree.depth_of(node)? as u32;
        Some(level)
    }

    /// Number of live nodes, including nodes without data.
    pub fn node_count(&self) -> usize {
        self.tree.len()
    }

    /// Number of stored objects across all buckets.
    pub fn object_count(&self) -> usize {
        self.nodes().filter_map(|id| self.tree.data(id)).map(List::len).sum()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Visit every node depth-first (pre-order, children in quadrant order) with its bucket.
    pub fn visit(&self, mut f: impl FnMut(NodeId, Option<&Bucket<T>>)) {
        for id in self.nodes() {
            f(id, self.tree.data(id));
        }
    }

    /// Every stored object with its node, nodes in pre-order, objects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> + '_ {
        self.nodes().flat_map(move |id| {
            self.tree
                .data(id)
                .into_iter()
                .flat_map(move |bucket| bucket.iter().map(move |item| (id, item)))
        })
    }

    /// Objects that may overlap `bbox`.
    ///
    /// These are the objects stored on the path to the quadrant containing `bbox` and
    /// everything below it. Objects elsewhere lie in quadrants disjoint from the box.
    /// Results come in pre-order, each bucket in insertion order.
    pub fn query_box(&self, bbox: &QuadBox) -> Result<Vec<(NodeId, &T)>, QuadTreeError> {
        let (levels, index) = self.locate(bbox)?;
        let mut nodes = Vec::new();
        if let Some(mut current) = self.tree.root() {
            for level in 0..levels {
                let q = quadrant_at(&self.frame, index, level);
                let Some(child) = self.child(current, q) else {
                    break;
                };
                nodes.push(current);
                current = child;
            }
            nodes.extend(self.tree.flatten(current));
        }
        Ok(nodes
            .into_iter()
            .filter_map(|id| self.tree.data(id).map(|bucket| (id, bucket)))
            .flat_map(|(id, bucket)| bucket.iter().map(move |item| (id, item)))
            .collect())
    }

    /// Remove the four child subtrees of `node`, handing every stored object to `release`.
    ///
    /// The node itself and its bucket stay. Returns the number of released objects.
    pub fn prune(
        &mut self,
        node: NodeId,
        mut release: impl FnMut(T),
    ) -> Result<usize, QuadTreeError> {
        if !self.tree.is_alive(node) {
            return Err(quadrant_tree::TreeError::StaleNode.into());
        }
        let mut released = 0;
        for child in self.children(node).into_iter().flatten() {
            self.tree.remove(child, |mut bucket| {
                released += bucket.len();
                bucket.clear_with(&mut release);
            })?;
        }
        if self.verbose() {
            log::debug!("pruned {node:?}: released {released} objects");
        }
        self.check();
        Ok(released)
    }

    /// Remove every node, handing every stored object to `release` in pre-order.
    pub fn clear_with(&mut self, mut release: impl FnMut(T)) {
        let nodes = self.tree.len();
        self.tree.clear_with(|mut bucket| bucket.clear_with(&mut release));
        if self.verbose() {
            log::debug!("cleared {nodes} nodes");
        }
    }

    /// Consume an empty quad-tree.
    ///
    /// # Panics
    ///
    /// Panics if nodes remain. Empty the tree with [`clear_with`](Self::clear_with)
    /// first so every object goes through the caller's release path.
    pub fn release(self) {
        assert!(self.tree.is_empty(), "releasing a non-empty quad-tree");
        self.tree.release();
    }

    /// Resolve a dotted quadrant path such as `"00.01.10"`; the empty path is the root.
    pub fn find_path(&self, path: &str) -> Result<NodeId, QuadTreeError> {
        Ok(self.tree.find(path)?)
    }

    /// Dotted quadrant path of `node`.
    pub fn path_of(&self, node: NodeId) -> Option<String> {
        self.tree.path_of(node)
    }

    /// Check the structural invariants of the whole tree.
    ///
    /// # Panics
    ///
    /// Panics if a node has a child count other than 0 or 4, a child is misnamed or
    /// points to the wrong parent, or a node lies deeper than the frame allows.
    pub fn assert_consistent(&self) {
        for id in self.nodes() {
            // Counts other than 0 and 4 panic here.
            let _ = self.subdivision(id);
            let level = self.level_of(id).expect("flattened node is live");
            assert!(
                level <= self.frame.depth(),
                "node {id:?} at level {level} is below the frame depth {}",
                self.frame.depth()
            );
            for (k, child) in self.tree.children(id).enumerate() {
                assert_eq!(
                    self.tree.parent(child),
                    Some(id),
                    "child {child:?} does not point back to {id:?}"
                );
                assert_eq!(
                    self.tree.name(child),
                    QUADRANT_NAMES.get(k).copied(),
                    "child {k} of {id:?} is misnamed"
                );
            }
        }
    }

    // --- internals ---

    fn verbose(&self) -> bool {
        self.options.contains(Options::VERBOSE)
    }

    fn check(&self) {
        if self.options.contains(Options::STRICT_CONSISTENCY) {
            self.assert_consistent();
        }
    }

    fn check_levels(&self, levels: u32) -> Result<(), QuadTreeError> {
        if levels > self.frame.depth() {
            return Err(QuadTreeError::TooDeep {
                levels,
                depth: self.frame.depth(),
            });
        }
        Ok(())
    }

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.tree
            .root()
            .into_iter()
            .flat_map(|root| self.tree.flatten(root))
    }

    /// Child count of `node`, which must be 0 or 4.
    fn subdivision(&self, node: NodeId) -> Option<usize> {
        let n = self.tree.child_count(node)?;
        assert!(n == 0 || n == 4, "quad-tree node {node:?} has {n} children");
        Some(n)
    }

    fn child(&self, node: NodeId, q: u8) -> Option<NodeId> {
        if self.subdivision(node)? == 0 {
            return None;
        }
        self.tree.child_at(node, usize::from(q))
    }

    /// Add the children `node` is missing. Children are always added in quadrant
    /// order, so an interrupted subdivision leaves a prefix of [`QUADRANT_NAMES`].
    fn subdivide(&mut self, node: NodeId) -> Result<(), QuadTreeError> {
        let have = self.tree.child_count(node).unwrap_or(0);
        assert!(have < 4, "quad-tree node {node:?} has {have} children");
        for &name in &QUADRANT_NAMES[have..] {
            self.tree.insert_child(node, Some(name), None)?;
        }
        if self.verbose() {
            log::debug!("subdivided {node:?}");
        }
        Ok(())
    }
}
