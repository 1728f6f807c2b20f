//! Scroll-reveal stagger and one-shot reveal tracking.
//!
//! Elements marked `data-reveal` fade in the first time they scroll into
//! view. Inside a `data-reveal-group` container each marked child gets a
//! capped linear delay so siblings enter in sequence.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Delay added per position inside a reveal group.
pub const STAGGER_STEP_MS: u32 = 70;
/// Upper bound for any stagger delay.
pub const STAGGER_CAP_MS: u32 = 420;
/// Fraction of the element that must be visible to trigger.
pub const VISIBILITY_THRESHOLD: f64 = 0.12;
/// Pre-trigger margin applied on every side of the viewport.
pub const ROOT_MARGIN: &str = "80px";

/// Attribute marking an element for reveal.
pub const REVEAL_ATTR: &str = "data-reveal";
/// Attribute marking a stagger group container.
pub const GROUP_ATTR: &str = "data-reveal-group";
/// Class applied once an element has been revealed.
pub const REVEALED_CLASS: &str = "in";
/// Class applied to the root element once the observer is attached.
pub const READY_CLASS: &str = "reveal-ready";
/// CSS custom property carrying the stagger delay.
pub const DELAY_PROPERTY: &str = "--d";

/// Stagger delay for the item at `index` within its group.
#[must_use]
pub fn stagger_delay_ms(index: usize) -> u32 {
    let Ok(index) = u32::try_from(index) else {
        return STAGGER_CAP_MS;
    };
    index
        .checked_mul(STAGGER_STEP_MS)
        .map_or(STAGGER_CAP_MS, |delay| delay.min(STAGGER_CAP_MS))
}

/// Delays for every item of a group of `len` marked elements.
#[must_use]
pub fn group_delays(len: usize) -> Vec<u32> {
    (0..len).map(stagger_delay_ms).collect()
}

/// CSS value for a delay, e.g. `140ms`.
#[must_use]
pub fn delay_css(delay_ms: u32) -> String {
    format!("{delay_ms}ms")
}

/// One observed element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealItem {
    pub delay_ms: Option<u32>,
    revealed: bool,
}

impl RevealItem {
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Result of a visibility notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// First sufficient visibility: add the revealed class and unobserve.
    Reveal,
    /// Not visible yet, already revealed, or unknown.
    Ignore,
}

/// Tracks which observed elements have revealed.
///
/// Items are addressed by their index in document order. Once an item
/// reveals it is no longer observed; later notifications for it are ignored.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    items: Vec<RevealItem>,
}

impl RevealTracker {
    /// Track `count` elements, none revealed yet.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { items: vec![RevealItem::default(); count] }
    }

    /// Record the group stagger for an item. A later group wins when groups nest.
    pub fn set_delay(&mut self, index: usize, delay_ms: u32) {
        if let Some(item) = self.items.get_mut(index) {
            item.delay_ms = Some(delay_ms);
        }
    }

    /// Handle a visibility change for the item at `index`.
    pub fn on_visibility(&mut self, index: usize, intersecting: bool) -> RevealOutcome {
        let Some(item) = self.items.get_mut(index) else {
            return RevealOutcome::Ignore;
        };
        if !intersecting || item.revealed {
            return RevealOutcome::Ignore;
        }
        item.revealed = true;
        RevealOutcome::Reveal
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&RevealItem> {
        self.items.get(index)
    }

    /// Whether the item is still being watched.
    #[must_use]
    pub fn is_observed(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|item| !item.revealed)
    }

    /// Number of items still waiting to reveal.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.items.iter().filter(|item| !item.revealed).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
