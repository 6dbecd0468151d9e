// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for search and navigation over generated menus.

use proptest::prelude::*;

use understory_menu::{MenuItem, MenuNavigator, MenuTree, SearchResult, search};

/// Labels from a small alphabet so short queries hit often.
fn label() -> impl Strategy<Value = String> {
    "[abAB ]{0,6}"
}

fn query() -> impl Strategy<Value = String> {
    "[abAB ]{1,3}"
}

fn menu() -> impl Strategy<Value = MenuItem> {
    label().prop_map(MenuItem::new).prop_recursive(4, 48, 5, |inner| {
        (label(), prop::collection::vec(inner, 0..5))
            .prop_map(|(label, children)| MenuItem::new(label).with_children(children))
    })
}

#[derive(Clone, Debug)]
enum Op {
    Search(String),
    Jump(usize),
    Descend(usize),
    Ascend,
    ClearSearch,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        query().prop_map(Op::Search),
        any::<usize>().prop_map(Op::Jump),
        any::<usize>().prop_map(Op::Descend),
        Just(Op::Ascend),
        Just(Op::ClearSearch),
    ]
}

/// Apply `op`, picking indices modulo whatever is currently on offer.
fn apply(nav: &mut MenuNavigator, op: &Op) {
    match op {
        Op::Search(q) => {
            nav.search(q);
        }
        Op::Jump(i) => {
            let len = nav.search_results().len();
            if len > 0 {
                nav.jump_to_index(i % len).unwrap();
            }
        }
        Op::Descend(i) => {
            let children = nav.current_children();
            if !children.is_empty() {
                let child = children[i % children.len()];
                nav.descend(child).unwrap();
            }
        }
        Op::Ascend => {
            nav.ascend();
        }
        Op::ClearSearch => nav.clear_search(),
    }
}

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

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// Every match is a real root-to-item chain, and every matching node is found, in pre-order.
    #[test]
    fn search_results_are_complete_and_well_formed(menu in menu(), q in query()) {
        let tree = MenuTree::new(&menu);
        let results = search(&tree, &q);
        assert_well_formed(&tree, &q, &results);

        let needle = q.to_lowercase();
        let expected: Vec<_> = tree
            .iter_depth_first()
            .filter(|&id| tree.label(id).unwrap().to_lowercase().contains(&needle))
            .collect();
        let found: Vec<_> = results.iter().map(|r| r.item).collect();
        prop_assert_eq!(found, expected);
        prop_assert!(search(&tree, "").is_empty());
    }

    /// Jumping to any result shows exactly that item's children.
    #[test]
    fn jump_shows_item_children(menu in menu(), q in query()) {
        let mut nav = MenuNavigator::new(MenuTree::new(&menu));
        let results = nav.search(&q).to_vec();
        for result in &results {
            nav.jump_to(result).unwrap();
            prop_assert_eq!(nav.stack(), result.path.as_slice());
            prop_assert_eq!(nav.current_children(), nav.tree().children_of(result.item));
            prop_assert!(nav.search_results().is_empty());
        }
    }

    /// From any reachable state, one descend followed by one ascend is a round trip.
    #[test]
    fn ascend_undoes_descend(
        menu in menu(),
        ops in prop::collection::vec(op(), 0..16),
        pick in any::<usize>(),
    ) {
        let mut nav = MenuNavigator::new(MenuTree::new(&menu));
        for op in &ops {
            apply(&mut nav, op);
        }
        let children = nav.current_children();
        if !children.is_empty() {
            let child = children[pick % children.len()];
            let before = nav.state().clone();
            nav.descend(child).unwrap();
            prop_assert!(nav.ascend());
            prop_assert_eq!(nav.state(), &before);
        }
    }

    /// The stack always starts at the root and only follows child links.
    #[test]
    fn stack_stays_rooted(menu in menu(), ops in prop::collection::vec(op(), 0..32)) {
        let mut nav = MenuNavigator::new(MenuTree::new(&menu));
        let root = nav.tree().root();
        for op in &ops {
            apply(&mut nav, op);
            prop_assert!(!nav.stack().is_empty());
            prop_assert_eq!(nav.stack()[0], root);
            prop_assert!(nav.tree().is_valid_path(nav.stack()));
        }
        // Unwinding always terminates at the root.
        while nav.ascend() {}
        prop_assert_eq!(nav.stack(), &[root][..]);
    }
}
