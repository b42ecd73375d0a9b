// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, path walks, removal.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use quadrant_list::List;

use crate::error::TreeError;
use crate::path::{split_path, validate_name};
use crate::types::{MAX_DEPTH, NodeId, SEPARATOR};

impl<D> Default for Tree<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// A tree of optionally named nodes, each carrying optional data.
pub struct Tree<D> {
    nodes: Vec<Option<Node<D>>>, // slots
    generations: Vec<u32>,       // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    root: Option<NodeId>,
}

impl<D> core::fmt::Debug for Tree<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tree")
            .field("nodes_total", &self.nodes.len())
            .field("nodes_alive", &self.len())
            .field("free_list", &self.free_list.len())
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node<D> {
    generation: u32,
    name: Option<String>,
    data: Option<D>,
    parent: Option<NodeId>,
    children: List<NodeId>,
}

impl<D> Node<D> {
    fn new(generation: u32, name: Option<String>, data: Option<D>) -> Self {
        Self {
            generation,
            name,
            data,
            parent: None,
            children: List::new(),
        }
    }
}

impl<D> Tree<D> {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: None,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// Whether the tree has no root (and therefore no nodes).
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Return the root, creating an unnamed, empty one if the tree has none.
    pub fn ensure_root(&mut self) -> NodeId {
        match self.root {
            Some(root) => root,
            None => {
                let root = self.alloc(None, None);
                self.root = Some(root);
                root
            }
        }
    }

    /// Insert the root node.
    pub fn insert_root(&mut self, name: Option<&str>, data: Option<D>) -> Result<NodeId, TreeError> {
        if self.root.is_some() {
            return Err(TreeError::RootExists);
        }
        if let Some(name) = name {
            validate_name(name)?;
        }
        let root = self.alloc(name.map(ToString::to_string), data);
        self.root = Some(root);
        Ok(root)
    }

    /// Insert a new node as the last child of `parent`.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        name: Option<&str>,
        data: Option<D>,
    ) -> Result<NodeId, TreeError> {
        let depth = self.depth_of(parent).ok_or(TreeError::StaleNode)?;
        if depth >= MAX_DEPTH {
            return Err(TreeError::TooDeep { max: MAX_DEPTH });
        }
        if let Some(name) = name {
            validate_name(name)?;
        }
        let id = self.alloc(name.map(ToString::to_string), data);
        self.node_mut(parent).children.push_back(id);
        self.node_mut(id).parent = Some(parent);
        Ok(id)
    }

    /// Insert `data` at the node named by `path`, creating the root on demand.
    ///
    /// Every level but the last must already exist unless `parents` is true, in which
    /// case missing levels are created without data. The last level is created if
    /// missing. If the target already holds data, `merge(old, new)` decides what it
    /// holds afterwards.
    pub fn insert_path(
        &mut self,
        path: &str,
        data: D,
        parents: bool,
        merge: impl FnOnce(D, D) -> D,
    ) -> Result<NodeId, TreeError> {
        let names = split_path(path)?;
        let mut current = self.ensure_root();
        for (i, &name) in names.iter().enumerate() {
            let is_last = i + 1 == names.len();
            current = match self.find_child(current, name) {
                Some(child) => child,
                None if parents || is_last => self.insert_child(current, Some(name), None)?,
                None => {
                    return Err(TreeError::NoParent {
                        name: name.to_string(),
                    });
                }
            };
        }
        let slot = &mut self.node_mut(current).data;
        *slot = Some(match slot.take() {
            Some(old) => merge(old, data),
            None => data,
        });
        Ok(current)
    }

    /// Find the node named by `path`. The empty path is the root.
    pub fn find(&self, path: &str) -> Result<NodeId, TreeError> {
        let not_found = || TreeError::NotFound {
            path: path.to_string(),
        };
        let names = split_path(path)?;
        let mut current = self.root.ok_or_else(not_found)?;
        for name in names {
            current = self.find_child(current, name).ok_or_else(not_found)?;
        }
        Ok(current)
    }

    /// Find the child of `parent` called `name`.
    pub fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .find(|&c| self.node(c).name.as_deref() == Some(name))
    }

    /// The `k`-th child of `parent`, counting from the first.
    pub fn child_at(&self, parent: NodeId, k: usize) -> Option<NodeId> {
        self.node_opt(parent)?.children.nth(k).copied()
    }

    /// Iterate the children of `id` in order. Empty for stale ids.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.node_opt(id)
            .into_iter()
            .flat_map(|n| n.children.iter().copied())
    }

    /// Number of children of `id`.
    pub fn child_count(&self, id: NodeId) -> Option<usize> {
        self.node_opt(id).map(|n| n.children.len())
    }

    /// Parent of `id`; `None` for the root or a stale id.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id)?.parent
    }

    /// Name of `id`.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node_opt(id)?.name.as_deref()
    }

    /// Data stored at `id`.
    pub fn data(&self, id: NodeId) -> Option<&D> {
        self.node_opt(id)?.data.as_ref()
    }

    /// Mutable data stored at `id`.
    pub fn data_mut(&mut self, id: NodeId) -> Option<&mut D> {
        self.node_opt_mut(id)?.data.as_mut()
    }

    /// Replace the data of `id`, returning the previous value.
    pub fn set_data(&mut self, id: NodeId, data: Option<D>) -> Result<Option<D>, TreeError> {
        let node = self.node_opt_mut(id).ok_or(TreeError::StaleNode)?;
        Ok(core::mem::replace(&mut node.data, data))
    }

    /// Take the data out of `id`, leaving the slot empty.
    pub fn take_data(&mut self, id: NodeId) -> Option<D> {
        self.node_opt_mut(id)?.data.take()
    }

    /// Number of edges between `id` and the root.
    pub fn depth_of(&self, id: NodeId) -> Option<usize> {
        let mut node = self.node_opt(id)?;
        let mut depth = 0;
        while let Some(p) = node.parent {
            node = self.node(p);
            depth += 1;
        }
        Some(depth)
    }

    /// Dotted path from the root to `id`.
    ///
    /// The root's path is the empty string. Returns `None` for stale ids and for
    /// nodes with an unnamed ancestor (other than the root).
    pub fn path_of(&self, id: NodeId) -> Option<String> {
        let mut names = Vec::new();
        let mut current = id;
        while let Some(parent) = self.node_opt(current)?.parent {
            names.push(self.node(current).name.as_deref()?);
            current = parent;
        }
        let mut path = String::new();
        for (i, name) in names.iter().rev().enumerate() {
            if i > 0 {
                path.push(SEPARATOR);
            }
            path.push_str(name);
        }
        Some(path)
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some()
    }

    /// The subtree under `from` in pre-order, `from` first.
    pub fn flatten(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if !self.is_alive(from) {
            return out;
        }
        let mut stack = Vec::from([from]);
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }

    /// Remove `id` and its subtree, handing every data value to `release` in pre-order.
    pub fn remove(&mut self, id: NodeId, mut release: impl FnMut(D)) -> Result<(), TreeError> {
        if !self.is_alive(id) {
            return Err(TreeError::StaleNode);
        }
        match self.node(id).parent {
            Some(parent) => {
                self.node_mut(parent).children.remove_item(&id);
            }
            None => self.root = None,
        }
        for victim in self.flatten(id) {
            let node = self.nodes[victim.idx()].take().expect("dangling NodeId");
            self.free_list.push(victim.idx());
            if let Some(data) = node.data {
                release(data);
            }
        }
        Ok(())
    }

    /// Remove every node, handing every data value to `release` in pre-order.
    pub fn clear_with(&mut self, release: impl FnMut(D)) {
        if let Some(root) = self.root {
            self.remove(root, release).expect("root id is always live");
        }
    }

    /// Consume an empty tree.
    ///
    /// # Panics
    ///
    /// Panics if the tree still has nodes. Empty it with [`Tree::clear_with`] or
    /// [`Tree::remove`] first so every data value goes through the caller's release path.
    pub fn release(self) {
        assert!(self.is_empty(), "releasing a non-empty tree");
    }

    // --- internals ---

    fn alloc(&mut self, name: Option<String>, data: Option<D>) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, name, data));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, name, data)));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let idx = idx as u32;
        NodeId::new(idx, generation)
    }

    fn node(&self, id: NodeId) -> &Node<D> {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<D> {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node<D>> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node<D>> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }
}
