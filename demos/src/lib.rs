// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared data for the `understory_menu` demos.

use understory_menu::MenuItem;

/// Sample menu in the `{ label, children }` data shape a host page would ship.
pub const SAMPLE_MENU_JSON: &str = r#"{
    "label": "Main Menu",
    "children": [
        { "label": "Sub Menu 1", "children": [
            { "label": "Option 1", "children": null },
            { "label": "Option 2", "children": null }
        ] },
        { "label": "Sub Menu 2", "children": [
            { "label": "Option A", "children": null },
            { "label": "Option B", "children": null }
        ] }
    ]
}"#;

/// Parse [`SAMPLE_MENU_JSON`].
pub fn sample_menu() -> serde_json::Result<MenuItem> {
    serde_json::from_str(SAMPLE_MENU_JSON)
}
