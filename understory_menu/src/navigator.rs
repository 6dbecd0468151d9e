// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation state machine: forward/back through levels and search jumps.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::NavigateError;
use crate::search::{SearchResult, search};
use crate::tree::MenuTree;
use crate::types::{ItemId, Path};
use crate::util::trace_transition;

/// How [`MenuNavigator::ascend`] behaves once the stack is back at the root.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackPolicy {
    /// Pop the stack while it has more than the root. At the root, unwind the
    /// path remembered from the last search jump one level at a time, moving
    /// the stack to the shortened trail.
    #[default]
    JumpTrail,
    /// Only ever pop the stack; back at the root is a no-op.
    Breadcrumb,
}

/// Navigator configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigatorConfig {
    /// Back-navigation policy.
    pub back: BackPolicy,
    /// Clear an in-progress query when the user steps into a child.
    pub clear_search_on_descend: bool,
}

/// Everything the view needs to render the menu.
///
/// Replaced as a whole by each navigation action; see [`MenuNavigator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    stack: Path,
    search_query: String,
    search_results: Vec<SearchResult>,
    search_path: Path,
}

impl NavigationState {
    fn at_root(root: ItemId) -> Self {
        let mut stack = Path::new();
        stack.push(root);
        Self {
            stack,
            search_query: String::new(),
            search_results: Vec::new(),
            search_path: Path::new(),
        }
    }

    /// Root-to-current path. Never empty; the first element is the root.
    pub fn stack(&self) -> &[ItemId] {
        &self.stack
    }

    /// The query last passed to [`MenuNavigator::search`], or empty.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Matches for [`search_query`](Self::search_query).
    pub fn search_results(&self) -> &[SearchResult] {
        &self.search_results
    }

    /// The path taken by the last search jump, shortened by each unwind.
    pub fn search_path(&self) -> &[ItemId] {
        &self.search_path
    }

    fn current(&self) -> ItemId {
        // `stack` always holds at least the root.
        self.stack[self.stack.len() - 1]
    }

    fn clear_search(&mut self) {
        self.search_query.clear();
        self.search_results.clear();
    }
}

/// One column of the menu carousel.
#[derive(Copy, Clone, Debug)]
pub struct Level<'a> {
    /// Position in the stack; the root level is 0.
    pub depth: usize,
    /// The item whose submenu this level shows.
    pub item: ItemId,
    /// Label of [`item`](Self::item).
    pub label: &'a str,
    /// Entries shown in this level. Empty means "no sub-items".
    pub children: &'a [ItemId],
}

/// Drives a multi-level menu over an injected [`MenuTree`].
///
/// The navigator owns one [`NavigationState`]. Hosts call [`search`],
/// [`jump_to`], [`descend`] and [`ascend`] from their input handlers and read
/// [`current_children`], [`levels`] and the state accessors when rendering.
///
/// [`search`]: Self::search
/// [`jump_to`]: Self::jump_to
/// [`descend`]: Self::descend
/// [`ascend`]: Self::ascend
/// [`current_children`]: Self::current_children
/// [`levels`]: Self::levels
///
/// ## Example
///
/// ```rust
/// use understory_menu::{MenuItem, MenuNavigator, MenuTree};
///
/// let tree = MenuTree::new(&MenuItem::new("Main").with_children([
///     MenuItem::new("Edit").with_children([MenuItem::new("Undo"), MenuItem::new("Redo")]),
///     MenuItem::new("Help"),
/// ]));
/// let mut nav = MenuNavigator::new(tree);
///
/// // Step into "Edit" and back out again.
/// let edit = nav.current_children()[0];
/// nav.descend(edit).unwrap();
/// assert_eq!(nav.current_children().len(), 2);
/// nav.ascend();
/// assert_eq!(nav.depth(), 1);
///
/// // Type a query and pick the first suggestion.
/// nav.search("redo");
/// nav.jump_to_index(0).unwrap();
/// assert_eq!(nav.tree().label(nav.current()), Some("Redo"));
/// assert!(nav.search_query().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct MenuNavigator {
    tree: MenuTree,
    config: NavigatorConfig,
    state: NavigationState,
}

impl MenuNavigator {
    /// Create a navigator showing the root level, with the default config.
    pub fn new(tree: MenuTree) -> Self {
        Self::with_config(tree, NavigatorConfig::default())
    }

    /// Create a navigator showing the root level.
    pub fn with_config(tree: MenuTree, config: NavigatorConfig) -> Self {
        let state = NavigationState::at_root(tree.root());
        Self {
            tree,
            config,
            state,
        }
    }

    /// The menu being navigated.
    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    /// Active configuration.
    pub fn config(&self) -> NavigatorConfig {
        self.config
    }

    /// Current state snapshot.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Root-to-current path.
    pub fn stack(&self) -> &[ItemId] {
        self.state.stack()
    }

    /// Current search query.
    pub fn search_query(&self) -> &str {
        self.state.search_query()
    }

    /// Results for the current query.
    pub fn search_results(&self) -> &[SearchResult] {
        self.state.search_results()
    }

    /// Remaining trail of the last search jump.
    pub fn search_path(&self) -> &[ItemId] {
        self.state.search_path()
    }

    /// The item whose children are displayed.
    pub fn current(&self) -> ItemId {
        self.state.current()
    }

    /// Number of levels on the stack (1 at the root).
    pub fn depth(&self) -> usize {
        self.state.stack.len()
    }

    /// Children of the displayed level; empty for leaves.
    pub fn current_children(&self) -> &[ItemId] {
        self.tree.children_of(self.state.current())
    }

    /// Whether the view should offer a back button.
    ///
    /// This tracks the stack only; with [`BackPolicy::JumpTrail`] an
    /// [`ascend`](Self::ascend) at the root can still move along the jump
    /// trail.
    pub fn can_ascend(&self) -> bool {
        self.state.stack.len() > 1
    }

    /// Whether the suggestion list should be open.
    pub fn suggestions_visible(&self) -> bool {
        !self.state.search_query.is_empty() && !self.state.search_results.is_empty()
    }

    /// Every level on the stack, root first, for carousel rendering.
    pub fn levels(&self) -> impl Iterator<Item = Level<'_>> + '_ {
        self.state
            .stack
            .iter()
            .enumerate()
            .map(|(depth, &item)| Level {
                depth,
                item,
                label: self.tree.label(item).unwrap_or_default(),
                children: self.tree.children_of(item),
            })
    }

    /// Replace the query and recompute its results from scratch.
    ///
    /// An empty query yields no results.
    pub fn search(&mut self, query: &str) -> &[SearchResult] {
        self.state.search_results = search(&self.tree, query);
        self.state.search_query.clear();
        self.state.search_query.push_str(query);
        trace_transition!(
            query = query,
            results = self.state.search_results.len(),
            "search"
        );
        &self.state.search_results
    }

    /// Drop the query and its results without navigating.
    pub fn clear_search(&mut self) {
        self.state.clear_search();
    }

    /// Show `result.item`'s submenu, replacing the stack with its path.
    ///
    /// The path is also remembered as the jump trail, and the search is
    /// cleared. Fails with [`NavigateError::InvalidPath`] if the path is not
    /// a root-to-item chain of this tree.
    pub fn jump_to(&mut self, result: &SearchResult) -> Result<(), NavigateError> {
        if result.path.last() != Some(&result.item) || !self.tree.is_valid_path(&result.path) {
            return Err(NavigateError::InvalidPath);
        }
        self.state.stack.clone_from(&result.path);
        self.state.search_path.clone_from(&result.path);
        self.state.clear_search();
        trace_transition!(
            item = result.item.index(),
            depth = self.state.stack.len(),
            "jump"
        );
        Ok(())
    }

    /// [`jump_to`](Self::jump_to) the result at `index` of the current results.
    pub fn jump_to_index(&mut self, index: usize) -> Result<(), NavigateError> {
        let len = self.state.search_results.len();
        let Some(result) = self.state.search_results.get(index).cloned() else {
            return Err(NavigateError::NoSuchResult { index, len });
        };
        self.jump_to(&result)
    }

    /// Step into `child`, one of [`current_children`](Self::current_children).
    ///
    /// Anything else is refused with [`NavigateError::NotAChild`] and the
    /// state is left unchanged.
    pub fn descend(&mut self, child: ItemId) -> Result<(), NavigateError> {
        let parent = self.state.current();
        if !self.tree.is_child_of(child, parent) {
            return Err(NavigateError::NotAChild { child, parent });
        }
        self.state.stack.push(child);
        if self.config.clear_search_on_descend {
            self.state.clear_search();
        }
        trace_transition!(
            item = child.index(),
            depth = self.state.stack.len(),
            "descend"
        );
        Ok(())
    }

    /// Go back one level.
    ///
    /// Pops the stack if it holds more than the root. Otherwise, under
    /// [`BackPolicy::JumpTrail`], a jump trail longer than one is shortened by
    /// its last element and becomes the new stack. Returns `false` when
    /// nothing changed.
    pub fn ascend(&mut self) -> bool {
        let state = &mut self.state;
        if state.stack.len() > 1 {
            state.stack.pop();
        } else if self.config.back == BackPolicy::JumpTrail && state.search_path.len() > 1 {
            state.search_path.pop();
            state.stack.clone_from(&state.search_path);
        } else {
            return false;
        }
        trace_transition!(
            depth = state.stack.len(),
            trail = state.search_path.len(),
            "ascend"
        );
        true
    }

    /// Back to the freshly mounted state: root level, no search, no trail.
    pub fn reset(&mut self) {
        self.state = NavigationState::at_root(self.tree.root());
        trace_transition!("reset");
    }
}
