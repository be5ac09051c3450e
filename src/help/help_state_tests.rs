//! Tests for help popup state

use super::*;

#[test]
fn test_help_starts_hidden() {
    assert!(!HelpPopupState::new().visible);
}

#[test]
fn test_toggle_flips_visibility() {
    let mut state = HelpPopupState::new();
    state.toggle();
    assert!(state.visible);
    state.toggle();
    assert!(!state.visible);
}

#[test]
fn test_close_is_idempotent() {
    let mut state = HelpPopupState::new();
    state.toggle();
    state.close();
    state.close();
    assert!(!state.visible);
}
