// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_menu --heading-base-level=0

//! Understory Menu: headless multi-level menu navigation.
//!
//! This crate holds the state behind a dropdown/flyout menu whose submenus
//! slide in as columns: stepping into a child pushes a level, "back" pops
//! one, and typing into a search box lists every matching entry so the user
//! can jump straight to it.
//!
//! - [`MenuItem`]: the nested description a host builds (or deserializes) once.
//! - [`MenuTree`]: an immutable, flattened form of that description addressed
//!   by [`ItemId`] handles, with labels pre-folded for search.
//! - [`search()`]: case-insensitive substring search that returns every match
//!   with its root-to-item [`Path`].
//! - [`MenuNavigator`]: the state machine. It owns a [`NavigationState`]
//!   (stack, query, results, jump trail) and exposes
//!   [`search`](MenuNavigator::search), [`jump_to`](MenuNavigator::jump_to),
//!   [`descend`](MenuNavigator::descend) and [`ascend`](MenuNavigator::ascend).
//!
//! This crate deliberately does **not** render anything. Hosts are responsible
//! for drawing [`MenuNavigator::levels`] as columns, offsetting the carousel by
//! [`MenuNavigator::depth`], and routing clicks and text input back in.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_menu::{MenuItem, MenuNavigator, MenuTree};
//!
//! let menu = MenuItem::new("Main Menu").with_children([
//!     MenuItem::new("Sub Menu 1").with_children([MenuItem::new("Option 1"), MenuItem::new("Option 2")]),
//!     MenuItem::new("Sub Menu 2").with_children([MenuItem::new("Option A"), MenuItem::new("Option B")]),
//! ]);
//! let mut nav = MenuNavigator::new(MenuTree::new(&menu));
//!
//! let hits = nav.search("option");
//! assert_eq!(hits.len(), 4);
//!
//! // Jump to "Option A": the stack becomes the match's path.
//! nav.jump_to_index(2).unwrap();
//! assert_eq!(nav.depth(), 3);
//! assert!(nav.current_children().is_empty());
//!
//! nav.ascend();
//! assert_eq!(nav.tree().label(nav.current()), Some("Sub Menu 2"));
//! ```
//!
//! ## Back navigation
//!
//! [`MenuNavigator::ascend`] pops the stack while it holds more than the root.
//! With the default [`BackPolicy::JumpTrail`], once the stack is down to the
//! root the path of the last search jump is unwound instead, one level per
//! call. [`BackPolicy::Breadcrumb`] turns that off so back at the root is
//! always a no-op.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`MenuItem`] using the
//!   `{ "label": ..., "children": [...] | null }` shape.
//! - `tracing`: emit `trace!` events for every navigation transition.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod navigator;
mod search;
mod tree;
mod types;
mod util;

pub use error::NavigateError;
pub use navigator::{BackPolicy, Level, MenuNavigator, NavigationState, NavigatorConfig};
pub use search::{SearchResult, search};
pub use tree::{DepthFirst, MenuTree};
pub use types::{ItemId, MenuItem, Path};
