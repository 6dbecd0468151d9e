// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label search over a [`MenuTree`].

use alloc::vec::Vec;

use crate::tree::MenuTree;
use crate::types::{ItemId, Path};

/// One search match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The matched node.
    pub item: ItemId,
    /// Path from root to node (inclusive).
    pub path: Path,
}

/// Case-insensitive substring search over every label in `tree`.
///
/// An empty query matches nothing. Otherwise every node whose label contains
/// `query` yields one result, in depth-first pre-order (parent before
/// children, children in their given order). A node and its descendants
/// match independently; there is no deduplication or ranking.
///
/// ```rust
/// use understory_menu::{MenuItem, MenuTree, search};
///
/// let tree = MenuTree::new(
///     &MenuItem::new("View").with_children([MenuItem::new("Zoom In"), MenuItem::new("Zoom Out")]),
/// );
///
/// let hits = search(&tree, "ZOOM");
/// assert_eq!(hits.len(), 2);
/// assert_eq!(tree.label(hits[1].item), Some("Zoom Out"));
/// assert!(search(&tree, "").is_empty());
/// ```
pub fn search(tree: &MenuTree, query: &str) -> Vec<SearchResult> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    // Ids are pre-order, so the ancestor chain of the node being visited is
    // always a prefix of `trail`.
    let mut trail = Path::new();
    let mut results = Vec::new();
    for id in tree.iter_depth_first() {
        if let Some(depth) = tree.depth_of(id) {
            trail.truncate(depth);
        }
        trail.push(id);
        if tree.folded_label(id).contains(needle.as_str()) {
            results.push(SearchResult {
                item: id,
                path: trail.clone(),
            });
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::tests::sample_menu;
    use crate::types::MenuItem;
    use alloc::string::String;
    use alloc::vec;

    fn hit_labels(tree: &MenuTree, results: &[SearchResult]) -> Vec<String> {
        results
            .iter()
            .map(|r| String::from(tree.label(r.item).unwrap()))
            .collect()
    }

    /// Every result must end at its item, match the query, and walk real child links.
    fn assert_well_formed(tree: &MenuTree, query: &str, results: &[SearchResult]) {
        let needle = query.to_lowercase();
        for r in results {
            assert!(!r.path.is_empty(), "path must not be empty");
            assert_eq!(r.path.last(), Some(&r.item), "path ends at the item");
            assert!(
                tree.label(r.item).unwrap().to_lowercase().contains(&needle),
                "label must contain the query"
            );
            assert!(tree.is_valid_path(&r.path), "path must follow child links");
        }
    }

    #[test]
    fn empty_query_matches_nothing() {
        let tree = MenuTree::new(&sample_menu());
        assert!(search(&tree, "").is_empty());
    }

    #[test]
    fn options_in_depth_first_order() {
        let tree = MenuTree::new(&sample_menu());
        let results = search(&tree, "option");
        assert_eq!(
            hit_labels(&tree, &results),
            vec!["Option 1", "Option 2", "Option A", "Option B"]
        );
        for r in &results {
            assert_eq!(r.path.len(), 3, "[Main, SubMenuK, OptionX]");
            assert_eq!(r.path[0], tree.root());
        }
        assert_well_formed(&tree, "option", &results);
    }

    #[test]
    fn ancestor_and_descendant_both_match() {
        let tree = MenuTree::new(&sample_menu());
        let results = search(&tree, "menu");
        assert_eq!(
            hit_labels(&tree, &results),
            vec!["Main Menu", "Sub Menu 1", "Sub Menu 2"]
        );
        assert_eq!(results[0].path.as_slice(), &[tree.root()]);
        assert_well_formed(&tree, "menu", &results);
    }

    #[test]
    fn match_is_case_insensitive_both_ways() {
        let tree = MenuTree::new(&sample_menu());
        let results = search(&tree, "OPTION a");
        assert_eq!(hit_labels(&tree, &results), vec!["Option A"]);
        assert_well_formed(&tree, "OPTION a", &results);
    }

    #[test]
    fn no_match_is_empty() {
        let tree = MenuTree::new(&sample_menu());
        assert!(search(&tree, "zzz").is_empty());
    }

    #[test]
    fn paths_unwind_after_deep_branch() {
        // Deep first branch, then a shallow sibling: the trail must shrink.
        let tree = MenuTree::new(&MenuItem::new("r").with_children([
            MenuItem::new("a").with_child(MenuItem::new("b").with_child(MenuItem::new("x1"))),
            MenuItem::new("x2"),
        ]));
        let results = search(&tree, "x");
        assert_eq!(hit_labels(&tree, &results), vec!["x1", "x2"]);
        assert_eq!(results[0].path.len(), 4);
        assert_eq!(results[1].path.len(), 2);
        assert_well_formed(&tree, "x", &results);
    }
}
