// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable menu tree: structure, labels, and path queries.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::types::{ItemId, MenuItem, Path};

/// Flattened, immutable menu tree.
///
/// Built once from a nested [`MenuItem`]; nothing in this crate mutates it
/// afterwards. Nodes are numbered in depth-first pre-order (parent before
/// children, children in their given order), so iterating ids in ascending
/// order is the same walk a search performs.
///
/// Lowercased labels are computed once at construction and reused by every
/// [`search`](crate::search()).
///
/// ## Example
///
/// ```rust
/// use understory_menu::{MenuItem, MenuTree};
///
/// let tree = MenuTree::new(
///     &MenuItem::new("Main").with_child(MenuItem::new("Settings").with_child(MenuItem::new("Audio"))),
/// );
///
/// let settings = tree.children_of(tree.root())[0];
/// let audio = tree.children_of(settings)[0];
///
/// assert_eq!(tree.label(audio), Some("Audio"));
/// assert_eq!(tree.path_to(audio).unwrap().as_slice(), &[tree.root(), settings, audio]);
/// ```
#[derive(Clone)]
pub struct MenuTree {
    nodes: Vec<Node>,
}

#[derive(Clone, Debug)]
struct Node {
    label: String,
    folded: String,
    parent: Option<ItemId>,
    children: Vec<ItemId>,
    depth: usize,
}

impl core::fmt::Debug for MenuTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let leaves = self.nodes.iter().filter(|n| n.children.is_empty()).count();
        f.debug_struct("MenuTree")
            .field("nodes", &self.nodes.len())
            .field("leaves", &leaves)
            .finish_non_exhaustive()
    }
}

impl MenuTree {
    /// Build a tree from a root item.
    ///
    /// The returned tree copies every label; `root` can be dropped afterwards.
    pub fn new(root: &MenuItem) -> Self {
        let mut nodes: Vec<Node> = Vec::new();
        // Children are pushed in reverse so they pop in their given order,
        // which keeps ids in pre-order.
        let mut pending: Vec<(&MenuItem, Option<ItemId>)> = alloc::vec![(root, None)];

        while let Some((item, parent)) = pending.pop() {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ItemId uses 32-bit indices by design."
            )]
            let id = ItemId(nodes.len() as u32);
            let depth = match parent {
                Some(p) => {
                    let parent_node = &mut nodes[p.idx()];
                    parent_node.children.push(id);
                    parent_node.depth + 1
                }
                None => 0,
            };
            nodes.push(Node {
                label: item.label.clone(),
                folded: item.label.to_lowercase(),
                parent,
                children: Vec::with_capacity(item.children.len()),
                depth,
            });
            pending.extend(item.children.iter().rev().map(|child| (child, Some(id))));
        }

        Self { nodes }
    }

    /// The root node. Always present.
    pub fn root(&self) -> ItemId {
        ItemId(0)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if `id` names a node of this tree.
    pub fn contains(&self, id: ItemId) -> bool {
        id.idx() < self.nodes.len()
    }

    /// Label of a node, or `None` for ids from another tree.
    pub fn label(&self, id: ItemId) -> Option<&str> {
        self.node(id).map(|n| n.label.as_str())
    }

    /// Get the children of a node, or empty slice for leaves and foreign ids.
    pub fn children_of(&self, id: ItemId) -> &[ItemId] {
        self.node(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Returns the parent of a node, or `None` for the root or foreign ids.
    pub fn parent_of(&self, id: ItemId) -> Option<ItemId> {
        self.node(id)?.parent
    }

    /// Distance from the root (the root itself is at depth 0).
    pub fn depth_of(&self, id: ItemId) -> Option<usize> {
        self.node(id).map(|n| n.depth)
    }

    /// Returns true if `child` is one of `parent`'s direct children.
    pub fn is_child_of(&self, child: ItemId, parent: ItemId) -> bool {
        self.contains(parent) && self.parent_of(child) == Some(parent)
    }

    /// Root-to-node path, inclusive of `id`.
    pub fn path_to(&self, id: ItemId) -> Option<Path> {
        let depth = self.depth_of(id)?;
        let mut path = Path::new();
        path.resize(depth + 1, self.root());
        let mut cursor = Some(id);
        for slot in path.iter_mut().rev() {
            let Some(current) = cursor else { break };
            *slot = current;
            cursor = self.parent_of(current);
        }
        Some(path)
    }

    /// Returns true if `path` starts at the root and every step follows a
    /// `children` link.
    pub fn is_valid_path(&self, path: &[ItemId]) -> bool {
        match path.first() {
            Some(&first) if first == self.root() => path
                .windows(2)
                .all(|pair| self.is_child_of(pair[1], pair[0])),
            _ => false,
        }
    }

    /// Iterate all nodes in depth-first pre-order, starting at the root.
    pub fn iter_depth_first(&self) -> DepthFirst {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ItemId uses 32-bit indices by design."
        )]
        let range = 0..self.nodes.len() as u32;
        DepthFirst { range }
    }

    /// Lowercased label used for case-insensitive matching.
    pub(crate) fn folded_label(&self, id: ItemId) -> &str {
        self.node(id).map_or("", |n| n.folded.as_str())
    }

    fn node(&self, id: ItemId) -> Option<&Node> {
        self.nodes.get(id.idx())
    }
}

/// Depth-first pre-order iterator over a [`MenuTree`].
///
/// Returned by [`MenuTree::iter_depth_first`].
#[derive(Clone, Debug)]
pub struct DepthFirst {
    range: Range<u32>,
}

impl Iterator for DepthFirst {
    type Item = ItemId;

    fn next(&mut self) -> Option<ItemId> {
        self.range.next().map(ItemId)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for DepthFirst {}
