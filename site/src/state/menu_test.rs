use super::*;

fn open_menu() -> MenuState {
    let mut state = MenuState::default();
    state.apply(&MenuEvent::Toggled { open: true });
    state
}

fn key(name: &str) -> MenuEvent {
    MenuEvent::KeyDown { key: name.to_owned() }
}

// =============================================================
// Opening
// =============================================================

#[test]
fn menu_starts_closed() {
    let state = MenuState::default();
    assert!(!state.is_open);
    assert_eq!(state.summary_label(), "Open menu");
}

#[test]
fn toggle_open_attaches_listeners() {
    let mut state = MenuState::default();
    let transition = state.apply(&MenuEvent::Toggled { open: true });
    assert!(state.is_open);
    assert_eq!(transition.listeners, ListenerChange::Attach);
    assert!(!transition.close_native);
    assert_eq!(state.summary_label(), "Close menu");
}

#[test]
fn repeated_toggle_open_keeps_listeners() {
    let mut state = open_menu();
    let transition = state.apply(&MenuEvent::Toggled { open: true });
    assert!(state.is_open);
    assert_eq!(transition.listeners, ListenerChange::Keep);
}

// =============================================================
// Dismissal
// =============================================================

#[test]
fn summary_reactivation_closes_without_touching_native_state() {
    let mut state = open_menu();
    let transition = state.apply(&MenuEvent::Toggled { open: false });
    assert!(!state.is_open);
    assert_eq!(transition.listeners, ListenerChange::Detach);
    assert!(!transition.close_native);
}

#[test]
fn escape_closes_open_menu() {
    let mut state = open_menu();
    let transition = state.apply(&key("Escape"));
    assert!(!state.is_open);
    assert!(transition.close_native);
    assert_eq!(transition.listeners, ListenerChange::Detach);
}

#[test]
fn other_keys_leave_menu_open() {
    let mut state = open_menu();
    for name in ["Enter", "Tab", "esc", "ArrowDown"] {
        let transition = state.apply(&key(name));
        assert!(state.is_open, "{name} should not close the menu");
        assert_eq!(transition, MenuTransition { close_native: false, listeners: ListenerChange::Keep });
    }
}

#[test]
fn pointer_down_outside_closes() {
    let mut state = open_menu();
    let transition = state.apply(&MenuEvent::PointerDown { inside: false });
    assert!(!state.is_open);
    assert!(transition.close_native);
    assert_eq!(transition.listeners, ListenerChange::Detach);
}

#[test]
fn pointer_down_inside_never_closes() {
    let mut state = open_menu();
    for _ in 0..3 {
        let transition = state.apply(&MenuEvent::PointerDown { inside: true });
        assert!(state.is_open);
        assert!(!transition.close_native);
        assert_eq!(transition.listeners, ListenerChange::Keep);
    }
}

#[test]
fn link_activation_closes() {
    let mut state = open_menu();
    let transition = state.apply(&MenuEvent::LinkActivated);
    assert!(!state.is_open);
    assert!(transition.close_native);
}

// =============================================================
// Closed-state inputs
// =============================================================

#[test]
fn dismissal_inputs_are_noops_while_closed() {
    let events = [MenuEvent::PointerDown { inside: false }, key("Escape"), MenuEvent::LinkActivated];
    for event in events {
        let mut state = MenuState::default();
        let transition = state.apply(&event);
        assert!(!state.is_open);
        assert_eq!(transition, MenuTransition { close_native: false, listeners: ListenerChange::Keep });
    }
}

#[test]
fn native_toggle_after_programmatic_close_is_idempotent() {
    let mut state = open_menu();
    state.apply(&key("Escape"));
    let transition = state.apply(&MenuEvent::Toggled { open: false });
    assert!(!state.is_open);
    assert_eq!(transition.listeners, ListenerChange::Keep);
}

#[test]
fn reopen_after_dismissal_attaches_again() {
    let mut state = open_menu();
    state.apply(&MenuEvent::PointerDown { inside: false });
    let transition = state.apply(&MenuEvent::Toggled { open: true });
    assert!(state.is_open);
    assert_eq!(transition.listeners, ListenerChange::Attach);
}
