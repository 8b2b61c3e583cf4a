//! Local UI chrome state (active tab, card expansion).
//!
//! DESIGN
//! ======
//! Card expansion is keyed by section id and entry title and owned by the tab
//! container rather than each card, so the collapse-on-tab-switch behavior is
//! an explicit rule of `TabsState::select` instead of a side effect of
//! unmounting.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::collections::HashSet;

/// Panels of the tab container, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TabId {
    #[default]
    Highlights,
    Champions,
    Items,
    Arena,
    Other,
}

impl TabId {
    /// Every tab in the order its button is shown.
    pub const ALL: [TabId; 5] = [TabId::Highlights, TabId::Champions, TabId::Items, TabId::Arena, TabId::Other];

    /// Stable identifier, also used as the card-key prefix for the tab's section.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            TabId::Highlights => "highlights",
            TabId::Champions => "champions",
            TabId::Items => "items",
            TabId::Arena => "arena",
            TabId::Other => "other",
        }
    }

    /// Button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TabId::Highlights => "Highlights",
            TabId::Champions => "Champions",
            TabId::Items => "Items",
            TabId::Arena => "Arena",
            TabId::Other => "Other",
        }
    }
}

/// Key identifying one card across the whole tab container.
#[must_use]
pub fn card_key(section: &str, title: &str) -> String {
    format!("{section}/{title}")
}

/// Tab container state. Starts on the first tab with every card collapsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabsState {
    pub active: TabId,
    expanded: HashSet<String>,
}

impl TabsState {
    #[must_use]
    pub fn new(initial: TabId) -> Self {
        Self { active: initial, expanded: HashSet::new() }
    }

    /// Switch panels. Leaving a panel collapses all cards; clicking the
    /// already-active tab changes nothing.
    pub fn select(&mut self, tab: TabId) {
        if self.active == tab {
            return;
        }
        self.active = tab;
        self.expanded.clear();
    }

    /// Flip one card's open state.
    pub fn toggle(&mut self, key: &str) {
        if !self.expanded.remove(key) {
            self.expanded.insert(key.to_owned());
        }
    }

    #[must_use]
    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }
}
