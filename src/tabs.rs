/// Tab lifecycle: open, close and switch tabs, keeping the session persisted

use crate::storage::{KeyValueStore, SessionStore};
use crate::tab_data::{INITIAL_TAB_KEY, RepoSource, Tab};
use log::{debug, error};

/// Owns the ordered list of open tabs and the active tab key.
///
/// Every mutation settles the state (the active key must name an open tab,
/// otherwise it falls back to `"initial"`) and then writes both values
/// back to the session store.
#[derive(Debug, Clone)]
pub struct TabController<S> {
    store: SessionStore<S>,
    tabs: Vec<Tab>,
    active_tab: String,
}

impl<S: KeyValueStore> TabController<S> {
    /// Restore the session from `backend`, or start with the Home tab
    pub fn load(backend: S) -> Self {
        let store = SessionStore::new(backend);
        let tabs = store.load_tabs().unwrap_or_else(|| vec![Tab::initial()]);
        let active_tab = store
            .load_active_tab()
            .unwrap_or_else(|| INITIAL_TAB_KEY.to_string());

        let mut controller = TabController {
            store,
            tabs,
            active_tab,
        };
        controller.settle();
        controller
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    pub fn active(&self) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.key == self.active_tab)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.tabs.iter().any(|t| t.key == key)
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    /// Open a tab for `repo_ref` and make it active.
    ///
    /// Returns false when a tab with that key was already open, in which
    /// case the list is left as is.
    pub fn add_tab(&mut self, repo_ref: &str, repo_name: &str, name: &str, source: RepoSource) -> bool {
        let appended = if self.contains(repo_ref) {
            debug!("Tab {} already open", repo_ref);
            false
        } else {
            debug!("Opening tab {}", repo_ref);
            self.tabs.push(Tab::new(
                repo_ref.to_string(),
                name.to_string(),
                repo_name.to_string(),
                source,
            ));
            true
        };

        self.active_tab = repo_ref.to_string();
        self.settle();
        appended
    }

    /// Close the tab with `key`.
    ///
    /// Closing the active tab activates its left neighbour, or its right
    /// neighbour when it was first. An active key with no open tab (the
    /// `"initial"` fallback) hands over to the first tab. Returns false if
    /// no tab had that key.
    pub fn remove_tab(&mut self, key: &str) -> bool {
        if key == self.active_tab {
            if let Some(next) = self.neighbour_of(key) {
                debug!("Closing active tab {}, switching to {}", key, next);
                self.active_tab = next;
            }
        }

        let before = self.tabs.len();
        self.tabs.retain(|t| t.key != key);
        let removed = self.tabs.len() < before;

        self.settle();
        removed
    }

    /// Activate `key`. Unknown keys are reset by reconciliation.
    pub fn set_active_tab(&mut self, key: &str) {
        self.active_tab = key.to_string();
        self.settle();
    }

    /// Reset the active key to `"initial"` if it names no open tab.
    /// Returns true if the key was changed.
    pub fn reconcile(&mut self) -> bool {
        if self.contains(&self.active_tab) || self.active_tab == INITIAL_TAB_KEY {
            return false;
        }

        debug!("Active tab {} is not open, falling back to {}", self.active_tab, INITIAL_TAB_KEY);
        self.active_tab = INITIAL_TAB_KEY.to_string();
        true
    }

    /// Write tabs and active key to the store. Failures are logged and dropped.
    pub fn persist(&self) {
        if let Err(e) = self.store.save_tabs(&self.tabs) {
            error!("Failed to save tabs: {}", e);
        }
        if let Err(e) = self.store.save_active_tab(&self.active_tab) {
            error!("Failed to save active tab: {}", e);
        }
    }

    fn settle(&mut self) {
        self.reconcile();
        self.persist();
    }

    fn neighbour_of(&self, key: &str) -> Option<String> {
        let neighbour = match self.tabs.iter().position(|t| t.key == key) {
            Some(index) if index > 0 => self.tabs.get(index - 1),
            Some(index) => self.tabs.get(index + 1),
            None => self.tabs.first(),
        };
        neighbour.map(|t| t.key.clone())
    }
}
