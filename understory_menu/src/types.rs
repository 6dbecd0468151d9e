// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for menus: the nested item description and node handles.

use alloc::string::String;
use alloc::vec::Vec;
use smallvec::SmallVec;

/// Identifier for a node in a [`MenuTree`](crate::MenuTree).
///
/// Ids are plain indices into the tree's arena. A tree never changes after it
/// is built, so ids stay valid for its whole lifetime; they carry no meaning
/// for any other tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ItemId(pub(crate) u32);

impl ItemId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// The raw arena index, suitable as a stable key for host-side view caches.
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// A root-to-node chain of ids, root first, inclusive of the final node.
///
/// Menus are shallow in practice, so short paths stay inline.
pub type Path = SmallVec<[ItemId; 8]>;

/// Caller-facing description of a menu node and its submenus.
///
/// This is the value a host builds (or deserializes) once and hands to
/// [`MenuTree::new`](crate::MenuTree::new). Children keep their given order,
/// which is also the order they are displayed and searched in.
///
/// ```rust
/// use understory_menu::MenuItem;
///
/// let menu = MenuItem::new("File")
///     .with_child(MenuItem::new("Open"))
///     .with_child(MenuItem::new("Recent").with_child(MenuItem::new("notes.txt")));
///
/// assert_eq!(menu.children.len(), 2);
/// assert!(menu.children[0].is_leaf());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuItem {
    /// Text shown for this entry and matched by search.
    pub label: String,
    /// Ordered submenu entries; empty for leaves.
    ///
    /// With the `serde` feature, a missing or `null` list reads as empty.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "null_as_empty")
    )]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// A leaf item with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Append a child, builder style.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children, builder style.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Whether this item has no submenu.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(feature = "serde")]
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<MenuItem>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    Ok(Option::<Vec<MenuItem>>::deserialize(deserializer)?.unwrap_or_default())
}
