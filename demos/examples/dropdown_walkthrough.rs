// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropdown walkthrough: drive a `MenuNavigator` the way a view would.
//!
//! This example shows how a host:
//! - loads menu data in the `{ label, children }` shape,
//! - renders the stack of levels as carousel columns,
//! - routes child clicks, "back", and search input to the navigator.
//!
//! Run:
//! - `cargo run -p understory_menu_demos --example dropdown_walkthrough`

use understory_menu::{MenuNavigator, MenuTree};
use understory_menu_demos::sample_menu;

/// Print what a view would draw: suggestions, back button, and every column.
fn render(nav: &MenuNavigator) {
    let tree = nav.tree();
    println!("search: [{}]", nav.search_query());
    if nav.suggestions_visible() {
        for result in nav.search_results() {
            println!("  > {}", tree.label(result.item).unwrap_or_default());
        }
    }
    if nav.can_ascend() {
        println!("  <- Back");
    }
    for level in nav.levels() {
        let marker = if level.depth + 1 == nav.depth() { "*" } else { " " };
        println!(" {marker}[{}] {}", level.depth, level.label);
        if level.children.is_empty() {
            println!("      No sub-items");
        }
        for &child in level.children {
            println!("      {}", tree.label(child).unwrap_or_default());
        }
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let menu = sample_menu()?;
    let mut nav = MenuNavigator::new(MenuTree::new(&menu));
    render(&nav);

    // Click "Sub Menu 1", then "Option 2".
    let sub1 = nav.current_children()[0];
    nav.descend(sub1)?;
    let option2 = nav.current_children()[1];
    nav.descend(option2)?;
    render(&nav);

    // Back twice to the root.
    nav.ascend();
    nav.ascend();
    render(&nav);

    // Type "option b" and click the only suggestion.
    nav.search("option b");
    render(&nav);
    nav.jump_to_index(0)?;
    render(&nav);

    // Back out past the root: the jump trail takes over.
    while nav.ascend() {
        render(&nav);
    }

    Ok(())
}
