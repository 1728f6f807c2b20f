//! Mobile menu disclosure state.
//!
//! DESIGN
//! ======
//! The `<details>` element owns the visible open/closed state; `MenuState`
//! tracks it so the summary label, icon, and outside-dismissal listeners can
//! follow along. Every input goes through [`MenuState::apply`], which reports
//! what the DOM layer must do next instead of touching the DOM itself.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Key that dismisses the open menu.
pub const DISMISS_KEY: &str = "Escape";

/// Tracked open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub is_open: bool,
}

/// Inputs the menu reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// Native `toggle` fired; `open` is the element's current attribute.
    Toggled { open: bool },
    /// Capture-phase pointer-down or touch-start anywhere in the document.
    PointerDown { inside: bool },
    /// Capture-phase key-down anywhere in the document.
    KeyDown { key: String },
    /// An in-menu navigation link or button was activated.
    LinkActivated,
}

/// What happens to the document-level dismissal listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerChange {
    Attach,
    Detach,
    Keep,
}

/// Side effects the DOM layer applies after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuTransition {
    /// Set the native `open` attribute to `false`.
    pub close_native: bool,
    pub listeners: ListenerChange,
}

impl MenuTransition {
    const NONE: Self = Self { close_native: false, listeners: ListenerChange::Keep };
}

impl MenuState {
    /// Apply one event and return the side effects it requires.
    pub fn apply(&mut self, event: &MenuEvent) -> MenuTransition {
        match event {
            MenuEvent::Toggled { open } => self.sync(*open),
            MenuEvent::PointerDown { inside: false } if self.is_open => self.close(),
            MenuEvent::KeyDown { key } if self.is_open && key == DISMISS_KEY => self.close(),
            MenuEvent::LinkActivated if self.is_open => self.close(),
            _ => MenuTransition::NONE,
        }
    }

    /// Accessible label for the summary control.
    #[must_use]
    pub fn summary_label(self) -> &'static str {
        if self.is_open { "Close menu" } else { "Open menu" }
    }

    fn sync(&mut self, open: bool) -> MenuTransition {
        let was_open = self.is_open;
        self.is_open = open;
        MenuTransition { close_native: false, listeners: listener_change(was_open, open) }
    }

    fn close(&mut self) -> MenuTransition {
        let was_open = self.is_open;
        self.is_open = false;
        MenuTransition { close_native: true, listeners: listener_change(was_open, false) }
    }
}

fn listener_change(was_open: bool, is_open: bool) -> ListenerChange {
    match (was_open, is_open) {
        (false, true) => ListenerChange::Attach,
        (true, false) => ListenerChange::Detach,
        _ => ListenerChange::Keep,
    }
}
