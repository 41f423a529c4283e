//! ==============================================================================
//! tabs.rs - tab collection state machine
//! ==============================================================================
//!
//! purpose:
//!     owns the ordered collection of open tabs and the active-tab pointer.
//!     pure data, no reactivity: every operation that should move the browser
//!     returns the target path, and the component layer performs the actual
//!     router navigation. this keeps the whole state machine testable on the
//!     native target without a browser.
//!
//! invariants:
//!     - the collection is never empty; the dashboard tab is created on
//!       construction and cannot be closed
//!     - tab ids are unique (opening an existing id activates it)
//!     - exactly one tab is active at all times
//!
//! ==============================================================================

/// id of the permanent home tab
pub const HOME_TAB_ID: &str = "dashboard";
/// route of the permanent home tab
pub const HOME_TAB_PATH: &str = "/";

/// one open navigational destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub title: String,
    pub path: String,
    pub active: bool,
}

/// ordered collection of open tabs, insertion order = display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStore {
    tabs: Vec<Tab>,
    active_id: String,
}

impl Default for TabStore {
    fn default() -> Self {
        Self {
            tabs: vec![Tab {
                id: HOME_TAB_ID.to_string(),
                title: "Dashboard".to_string(),
                path: HOME_TAB_PATH.to_string(),
                active: true,
            }],
            active_id: HOME_TAB_ID.to_string(),
        }
    }
}

impl TabStore {
    /// read-only snapshot of the open tabs
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// id of the currently active tab
    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    fn activate(&mut self, id: &str) {
        for tab in &mut self.tabs {
            tab.active = tab.id == id;
        }
        self.active_id = id.to_string();
    }

    /// open a tab, or activate it if `id` is already open.
    ///
    /// re-opening an existing id ignores the `title`/`path` arguments and
    /// keeps the tab's originally recorded path, so a menu entry and a view
    /// that disagree about a destination cannot clobber each other.
    ///
    /// returns the path the caller must navigate to.
    pub fn add_tab(&mut self, id: &str, title: &str, path: &str) -> String {
        if let Some(existing) = self.tabs.iter().find(|tab| tab.id == id) {
            let target = existing.path.clone();
            self.activate(id);
            target
        } else {
            self.tabs.push(Tab {
                id: id.to_string(),
                title: title.to_string(),
                path: path.to_string(),
                active: false,
            });
            self.activate(id);
            path.to_string()
        }
    }

    /// activate an already-open tab.
    ///
    /// returns the tab's path, or `None` (and no state change) for an
    /// unknown id.
    pub fn switch_tab(&mut self, id: &str) -> Option<String> {
        let target = self.tabs.iter().find(|tab| tab.id == id)?.path.clone();
        self.activate(id);
        Some(target)
    }

    /// close a tab. the home tab refuses to close; unknown ids no-op.
    ///
    /// closing the active tab falls back to the home tab and returns
    /// `Some(HOME_TAB_PATH)` as the navigation request; closing an inactive
    /// tab leaves the active tab alone and returns `None`.
    pub fn close_tab(&mut self, id: &str) -> Option<String> {
        if id == HOME_TAB_ID {
            return None;
        }
        let pos = self.tabs.iter().position(|tab| tab.id == id)?;
        self.tabs.remove(pos);
        if self.active_id == id {
            self.activate(HOME_TAB_ID);
            Some(HOME_TAB_PATH.to_string())
        } else {
            None
        }
    }

    /// whether activating `path` would change anything. lets the component
    /// layer skip the signal write entirely when the url already agrees with
    /// the active tab or matches no open tab.
    pub fn needs_activation(&self, path: &str) -> bool {
        self.tabs
            .iter()
            .any(|tab| tab.path == path && tab.id != self.active_id)
    }

    /// align the active tab with an externally observed path (browser
    /// back/forward, direct navigation). a path with no matching tab leaves
    /// the state untouched; no tab is ever created from a raw url.
    pub fn activate_path(&mut self, path: &str) {
        let matched = self
            .tabs
            .iter()
            .find(|tab| tab.path == path)
            .map(|tab| tab.id.clone());
        if let Some(id) = matched {
            if id != self.active_id {
                self.activate(&id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &TabStore) -> Vec<&str> {
        store.tabs().iter().map(|tab| tab.id.as_str()).collect()
    }

    fn active_count(store: &TabStore) -> usize {
        store.tabs().iter().filter(|tab| tab.active).count()
    }

    #[test]
    fn starts_with_only_the_home_tab_active() {
        let store = TabStore::default();
        assert_eq!(ids(&store), vec![HOME_TAB_ID]);
        assert_eq!(store.active_id(), HOME_TAB_ID);
        assert!(store.tabs()[0].active);
        assert_eq!(store.tabs()[0].path, HOME_TAB_PATH);
    }

    #[test]
    fn add_tab_appends_and_activates() {
        let mut store = TabStore::default();
        let target = store.add_tab("users", "User Management", "/users");

        assert_eq!(target, "/users");
        assert_eq!(ids(&store), vec!["dashboard", "users"]);
        assert!(!store.tabs()[0].active);
        assert!(store.tabs()[1].active);
        assert_eq!(store.active_id(), "users");
    }

    #[test]
    fn add_tab_with_existing_id_activates_and_keeps_stored_path() {
        let mut store = TabStore::default();
        store.add_tab("users", "User Management", "/users");
        store.add_tab("products", "Product Management", "/products");

        // divergent title and path must not overwrite the original tab
        let target = store.add_tab("users", "X", "/other");

        assert_eq!(target, "/users");
        assert_eq!(ids(&store), vec!["dashboard", "users", "products"]);
        let users = &store.tabs()[1];
        assert_eq!(users.title, "User Management");
        assert_eq!(users.path, "/users");
        assert!(users.active);
        assert_eq!(active_count(&store), 1);
    }

    #[test]
    fn repeated_add_tab_never_duplicates_ids() {
        let mut store = TabStore::default();
        for _ in 0..5 {
            store.add_tab("users", "User Management", "/users");
            store.add_tab("finance", "Finance", "/finance");
        }
        assert_eq!(ids(&store), vec!["dashboard", "users", "finance"]);
        assert_eq!(active_count(&store), 1);
    }

    #[test]
    fn exactly_one_tab_active_across_operation_sequences() {
        let mut store = TabStore::default();
        store.add_tab("users", "User Management", "/users");
        store.add_tab("products", "Product Management", "/products");
        store.switch_tab("users");
        store.close_tab("products");
        store.add_tab("finance", "Finance", "/finance");
        store.switch_tab("dashboard");
        store.activate_path("/finance");

        assert_eq!(active_count(&store), 1);
        assert_eq!(store.active_id(), "finance");
    }

    #[test]
    fn switch_tab_activates_and_returns_stored_path() {
        let mut store = TabStore::default();
        store.add_tab("users", "User Management", "/users");

        assert_eq!(store.switch_tab("dashboard").as_deref(), Some("/"));
        assert_eq!(store.active_id(), "dashboard");
        assert!(store.tabs()[0].active);
        assert!(!store.tabs()[1].active);
    }

    #[test]
    fn switch_tab_with_unknown_id_is_a_silent_noop() {
        let mut store = TabStore::default();
        store.add_tab("users", "User Management", "/users");
        let before = store.clone();

        assert_eq!(store.switch_tab("nope"), None);
        assert_eq!(store, before);
    }

    #[test]
    fn close_active_tab_falls_back_to_home() {
        let mut store = TabStore::default();
        store.add_tab("users", "User Management", "/users");

        let target = store.close_tab("users");

        assert_eq!(target.as_deref(), Some("/"));
        assert_eq!(ids(&store), vec!["dashboard"]);
        assert_eq!(store.active_id(), "dashboard");
        assert!(store.tabs()[0].active);
    }

    #[test]
    fn close_inactive_tab_leaves_active_tab_alone() {
        let mut store = TabStore::default();
        store.add_tab("users", "User Management", "/users");
        store.add_tab("products", "Product Management", "/products");

        let target = store.close_tab("users");

        assert_eq!(target, None);
        assert_eq!(ids(&store), vec!["dashboard", "products"]);
        assert_eq!(store.active_id(), "products");
    }

    #[test]
    fn close_preserves_the_order_of_surviving_tabs() {
        let mut store = TabStore::default();
        store.add_tab("users", "User Management", "/users");
        store.add_tab("finance", "Finance", "/finance");
        store.add_tab("products", "Product Management", "/products");

        store.close_tab("finance");

        assert_eq!(ids(&store), vec!["dashboard", "users", "products"]);
    }

    #[test]
    fn home_tab_rejects_close() {
        let mut store = TabStore::default();
        store.add_tab("users", "User Management", "/users");

        assert_eq!(store.close_tab(HOME_TAB_ID), None);
        assert_eq!(ids(&store), vec!["dashboard", "users"]);
    }

    #[test]
    fn close_with_unknown_id_is_a_silent_noop() {
        let mut store = TabStore::default();
        store.add_tab("users", "User Management", "/users");
        let before = store.clone();

        assert_eq!(store.close_tab("nope"), None);
        assert_eq!(store, before);
    }

    #[test]
    fn activate_path_selects_the_matching_tab() {
        let mut store = TabStore::default();
        store.add_tab("users", "User Management", "/users");
        store.switch_tab("dashboard");

        assert!(store.needs_activation("/users"));
        store.activate_path("/users");
        assert_eq!(store.active_id(), "users");
        assert_eq!(active_count(&store), 1);
    }

    #[test]
    fn activate_path_without_a_match_changes_nothing() {
        let mut store = TabStore::default();
        store.add_tab("users", "User Management", "/users");
        let before = store.clone();

        assert!(!store.needs_activation("/loan-approvals"));
        store.activate_path("/loan-approvals");
        assert_eq!(store, before);
    }

    #[test]
    fn activate_path_is_idempotent() {
        let mut store = TabStore::default();
        store.add_tab("users", "User Management", "/users");

        store.activate_path("/users");
        let once = store.clone();
        assert!(!store.needs_activation("/users"));
        store.activate_path("/users");
        assert_eq!(store, once);
    }

    // the scripted end-to-end sequence: open, idempotent re-open, close
    #[test]
    fn open_reopen_close_scenario() {
        let mut store = TabStore::default();

        let target = store.add_tab("users", "User Management", "/users");
        assert_eq!(target, "/users");
        assert!(!store.tabs()[0].active);
        assert!(store.tabs()[1].active);

        let target = store.add_tab("users", "X", "/other");
        assert_eq!(target, "/users");
        assert_eq!(store.tabs()[1].path, "/users");
        assert_eq!(ids(&store), vec!["dashboard", "users"]);

        let target = store.close_tab("users");
        assert_eq!(target.as_deref(), Some("/"));
        assert_eq!(ids(&store), vec!["dashboard"]);
        assert!(store.tabs()[0].active);
    }
}
