use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::{CategorySummary, Item, Page};

/// File name of the persisted state blob inside the storage directory
pub const STATE_FILE_NAME: &str = "tracker-state.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Full application state handed to subscribers and the renderer.
/// `items` is a flat list, never partitioned by page; filtering by
/// category_id happens at render time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateData {
    pub categories: BTreeMap<Page, Vec<CategorySummary>>,
    pub items: Vec<Item>,
    /// None means the landing page
    #[serde(skip)]
    pub current_page: Option<Page>,
    pub theme: Theme,
}

impl StateData {
    /// Categories of one page (empty slice when nothing is loaded)
    pub fn categories_for(&self, page: Page) -> &[CategorySummary] {
        self.categories.get(&page).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Subset of state that survives reloads, written as one JSON blob
#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    categories: BTreeMap<Page, Vec<CategorySummary>>,
    items: Vec<Item>,
    theme: Theme,
}

/// Partial state for `set_state`: present fields are merged, absent fields
/// left alone
#[derive(Debug, Default)]
pub struct StateUpdate {
    pub categories: Option<(Page, Vec<CategorySummary>)>,
    pub items: Option<Vec<Item>>,
    pub current_page: Option<Page>,
    pub theme: Option<Theme>,
}

type Subscriber = Box<dyn FnMut(&StateData)>;

/// Application state store: single source of truth for rendering. An
/// explicit context object rather than a global, so tests can run isolated
/// instances side by side.
pub struct Store {
    state: StateData,
    subscribers: Vec<Subscriber>,
    storage_path: PathBuf,
}

impl Store {
    /// Create a store persisting to `storage_dir`, hydrating from a
    /// previously saved blob when one exists
    pub fn new(storage_dir: &Path) -> Self {
        let mut store = Self {
            state: StateData::default(),
            subscribers: Vec::new(),
            storage_path: storage_dir.join(STATE_FILE_NAME),
        };
        store.load_from_storage();
        store
    }

    pub fn state(&self) -> &StateData {
        &self.state
    }

    /// Register a callback invoked with the full state on every change
    pub fn subscribe(&mut self, callback: impl FnMut(&StateData) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Shallow-merge the update, then synchronously notify every
    /// subscriber. No batching: one call, one notify pass.
    pub fn set_state(&mut self, update: StateUpdate) {
        if let Some((page, categories)) = update.categories {
            self.state.categories.insert(page, categories);
        }
        if let Some(items) = update.items {
            self.state.items = items;
        }
        if let Some(page) = update.current_page {
            self.state.current_page = Some(page);
        }
        if let Some(theme) = update.theme {
            self.state.theme = theme;
        }
        self.notify();
    }

    fn notify(&mut self) {
        for callback in &mut self.subscribers {
            callback(&self.state);
        }
    }

    /// Write `{categories, items, theme}` to the storage blob. Best-effort:
    /// a write failure is logged and otherwise ignored.
    pub fn save_to_storage(&self) {
        let persisted = PersistedState {
            categories: self.state.categories.clone(),
            items: self.state.items.clone(),
            theme: self.state.theme,
        };
        match serde_json::to_vec(&persisted) {
            Ok(bytes) => {
                if let Err(e) = std::fs::write(&self.storage_path, bytes) {
                    tracing::warn!("Failed to persist state: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize state: {}", e),
        }
    }

    /// Hydrate from the storage blob. Missing or malformed data silently
    /// falls back to defaults.
    pub fn load_from_storage(&mut self) {
        let Ok(bytes) = std::fs::read(&self.storage_path) else {
            return;
        };
        if let Ok(persisted) = serde_json::from_slice::<PersistedState>(&bytes) {
            self.state.categories = persisted.categories;
            self.state.items = persisted.items;
            self.state.theme = persisted.theme;
        }
    }
}
