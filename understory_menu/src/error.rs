// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::types::ItemId;

/// Why a navigation request was refused.
///
/// A refused request leaves the navigator's state untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum NavigateError {
    /// `child` is not one of the children of the level currently shown.
    #[error(
        "item {} is not a child of the current level {}",
        child.index(),
        parent.index()
    )]
    NotAChild {
        /// The rejected node.
        child: ItemId,
        /// The level currently shown.
        parent: ItemId,
    },
    /// A jump target's path does not start at the root or skips a child link.
    #[error("path is not a root-to-item chain in this menu")]
    InvalidPath,
    /// No search result at `index`.
    #[error("no search result at index {index} (have {len})")]
    NoSuchResult {
        /// Requested position.
        index: usize,
        /// Number of results available.
        len: usize,
    },
}
