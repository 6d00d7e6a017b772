// Host-side tests for the web frontend's DOM ids and timing.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::collections::HashSet;

const ELEMENT_IDS: [&str; 13] = [
    CANVAS_ID,
    ENERGY_VALUE_ID,
    NEEDLE_ID,
    GLOW_ID,
    LEVEL_ID,
    POWER_FILL_ID,
    POWER_NUMERIC_ID,
    INTENSITY_LABEL_ID,
    LIGHT_CORE_ID,
    LIGHT_BEAM_ID,
    PANEL_ID,
    PANEL_HEADER_ID,
    PANEL_TOGGLE_ID,
];

#[test]
fn element_ids_are_unique_and_selector_safe() {
    let mut seen = HashSet::new();
    for id in ELEMENT_IDS {
        assert!(!id.is_empty());
        assert!(
            id.chars().all(|c| c.is_ascii_alphanumeric()),
            "id {id:?} would need escaping"
        );
        assert!(seen.insert(id), "duplicate id {id:?}");
    }
}

#[test]
fn panel_classes_and_selector_are_well_formed() {
    assert!(STAGE_SELECTOR.starts_with('.'));
    assert_ne!(DRAGGING_CLASS, CUSTOM_POSITION_CLASS);
    assert!(COLLAPSED_ATTR.starts_with("data-"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orientation_delay_is_short_but_positive() {
    assert!(ORIENTATION_RESIZE_DELAY_MS > 0);
    assert!(ORIENTATION_RESIZE_DELAY_MS <= 500);
}
