//! Tab descriptors and the single-active-choice selector.

/// Identifier for one of the six demo panels.
///
/// The set is closed and ordered; the order here is the display order of the
/// tab bar and the first variant is the initial selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    AsyncRequest,
    CacheSemantics,
    React19Support,
    NextForm,
    Turbopack,
    ServerAction,
}

impl TabId {
    /// All tabs in display order.
    pub const ALL: [TabId; 6] = [
        TabId::AsyncRequest,
        TabId::CacheSemantics,
        TabId::React19Support,
        TabId::NextForm,
        TabId::Turbopack,
        TabId::ServerAction,
    ];

    /// Stable string key for the tab, used by stringly-typed callers.
    pub fn key(self) -> &'static str {
        match self {
            TabId::AsyncRequest => "async-request",
            TabId::CacheSemantics => "cache-semantics",
            TabId::React19Support => "react19-support",
            TabId::NextForm => "next-form",
            TabId::Turbopack => "turbopack",
            TabId::ServerAction => "server-action",
        }
    }

    /// Human-readable tab label.
    pub fn label(self) -> &'static str {
        match self {
            TabId::AsyncRequest => "Async Request",
            TabId::CacheSemantics => "Cache Semantics",
            TabId::React19Support => "React 19 Support",
            TabId::NextForm => "Next Form",
            TabId::Turbopack => "Turbopack",
            TabId::ServerAction => "Server Action",
        }
    }

    /// Resolve a string key back to a tab identifier.
    ///
    /// # Returns
    /// `Some(TabId)` for a known key, otherwise `None`.
    pub fn from_key(key: &str) -> Option<TabId> {
        TabId::ALL.iter().copied().find(|tab| tab.key() == key)
    }
}

/// One entry of the fixed tab table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDescriptor {
    pub id: TabId,
    pub label: &'static str,
}

/// The fixed ordered tab table shown in the tab bar.
pub const TABS: [TabDescriptor; 6] = [
    TabDescriptor {
        id: TabId::AsyncRequest,
        label: "Async Request",
    },
    TabDescriptor {
        id: TabId::CacheSemantics,
        label: "Cache Semantics",
    },
    TabDescriptor {
        id: TabId::React19Support,
        label: "React 19 Support",
    },
    TabDescriptor {
        id: TabId::NextForm,
        label: "Next Form",
    },
    TabDescriptor {
        id: TabId::Turbopack,
        label: "Turbopack",
    },
    TabDescriptor {
        id: TabId::ServerAction,
        label: "Server Action",
    },
];

/// Deterministic single-active-choice state machine over the fixed tab set.
///
/// Exactly one tab is active at any time. Selection is synchronous and has no
/// terminal state; the selector lives for the whole app session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelector {
    active: TabId,
}

impl TabSelector {
    /// Create a selector with the first tab active.
    pub fn new() -> Self {
        Self {
            active: TabId::ALL[0],
        }
    }

    /// The currently active tab. No side effects.
    pub fn current(&self) -> TabId {
        self.active
    }

    /// Activate `tab`, replacing the current selection.
    ///
    /// Selecting the already-active tab is a no-op; the return value tells the
    /// caller whether the selection actually changed (and the previous panel
    /// must be torn down).
    pub fn select(&mut self, tab: TabId) -> bool {
        if self.active == tab {
            return false;
        }
        self.active = tab;
        true
    }

    /// Activate the tab named by `key`.
    ///
    /// Unknown keys are ignored: the typed [`select`](Self::select) surface
    /// cannot express an invalid tab, and the stringly surface must not abort
    /// the session over a typo.
    ///
    /// # Returns
    /// `true` when the key resolved and the selection changed.
    pub fn select_key(&mut self, key: &str) -> bool {
        match TabId::from_key(key) {
            Some(tab) => self.select(tab),
            None => {
                tracing::warn!("ignoring unknown tab key: {:?}", key);
                false
            }
        }
    }
}

impl Default for TabSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_selection_is_first_descriptor() {
        let selector = TabSelector::new();
        assert_eq!(selector.current(), TabId::AsyncRequest);
        assert_eq!(selector.current(), TABS[0].id);
    }

    #[test]
    fn select_then_current_returns_selected_for_every_tab() {
        let mut selector = TabSelector::new();
        for tab in TabId::ALL {
            selector.select(tab);
            assert_eq!(selector.current(), tab);
        }
    }

    #[test]
    fn select_reports_whether_selection_changed() {
        let mut selector = TabSelector::new();
        assert!(!selector.select(TabId::AsyncRequest));
        assert!(selector.select(TabId::Turbopack));
        assert!(!selector.select(TabId::Turbopack));
    }

    #[test]
    fn select_key_round_trips_every_key() {
        let mut selector = TabSelector::new();
        for tab in TabId::ALL.iter().rev() {
            assert_eq!(selector.select_key(tab.key()), selector.current() == *tab);
            assert_eq!(selector.current(), *tab);
        }
    }

    #[test]
    fn unknown_key_is_a_no_op() {
        let mut selector = TabSelector::new();
        selector.select(TabId::NextForm);
        assert!(!selector.select_key("nonexistent-tab"));
        assert_eq!(selector.current(), TabId::NextForm);
    }

    #[test]
    fn keys_and_labels_are_unique() {
        let keys: std::collections::HashSet<&str> =
            TabId::ALL.iter().map(|tab| tab.key()).collect();
        assert_eq!(keys.len(), TabId::ALL.len());
        let labels: std::collections::HashSet<&str> =
            TABS.iter().map(|descriptor| descriptor.label).collect();
        assert_eq!(labels.len(), TABS.len());
    }

    #[test]
    fn table_and_enum_agree() {
        for (descriptor, tab) in TABS.iter().zip(TabId::ALL) {
            assert_eq!(descriptor.id, tab);
            assert_eq!(descriptor.label, tab.label());
            assert_eq!(TabId::from_key(tab.key()), Some(tab));
        }
    }
}
