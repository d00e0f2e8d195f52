//! Client half of the tracker: API wrapper, state store, renderer, and the
//! context object that wires them together.

pub mod api;
pub mod render;
pub mod state;

pub use api::{ApiClient, ClientError, LoadData};
pub use render::render;
pub use state::{StateData, StateUpdate, Store, Theme};

use crate::models::Page;

/// User confirmation hook for guarded actions. The UI shows a modal; tests
/// script an answer.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Wires the store and the API client. Every mutation is followed by a full
/// reload of the current page's data, so displayed totals always reflect
/// server state after a write.
pub struct AppContext {
    pub api: ApiClient,
    pub store: Store,
}

impl AppContext {
    pub fn new(api: ApiClient, store: Store) -> Self {
        Self { api, store }
    }

    /// Navigate to a page and fetch its data
    pub async fn open_page(&mut self, page: Page) -> Result<(), ClientError> {
        self.store.set_state(StateUpdate {
            current_page: Some(page),
            ..Default::default()
        });
        self.load_data().await
    }

    /// Fetch the current page's categories and the full item set, update
    /// the store, and persist the blob. On failure the lists are cleared,
    /// like the browser client does, and the error is returned for display.
    pub async fn load_data(&mut self) -> Result<(), ClientError> {
        let page = match self.store.state().current_page {
            Some(page) if page.is_loadable() => page,
            _ => return Err(ClientError::InvalidPage),
        };

        match self.api.load(page).await {
            Ok(data) => {
                self.store.set_state(StateUpdate {
                    categories: Some((page, data.categories)),
                    items: Some(data.items),
                    ..Default::default()
                });
                self.store.save_to_storage();
                Ok(())
            }
            Err(e) => {
                self.store.set_state(StateUpdate {
                    categories: Some((page, Vec::new())),
                    items: Some(Vec::new()),
                    ..Default::default()
                });
                Err(e)
            }
        }
    }

    /// Add a category under the current page, then reload
    pub async fn add_category(&mut self, name: &str) -> Result<(), ClientError> {
        let page = match self.store.state().current_page {
            Some(page) => page,
            None => return Err(ClientError::InvalidPage),
        };
        self.api.add_category(page, name).await?;
        self.load_data().await
    }

    /// Add an item under a category, then reload
    pub async fn add_item(
        &mut self,
        category_id: i64,
        name: &str,
        price: f64,
    ) -> Result<(), ClientError> {
        self.api.add_item(category_id, name, price).await?;
        self.load_data().await
    }

    /// Toggle an item's done flag. Marking done asks for confirmation
    /// first; a declined prompt sends nothing. Unchecking goes through
    /// immediately. The asymmetry guards against accidental completion.
    pub async fn toggle_item(
        &mut self,
        id: i64,
        checked: bool,
        confirm: &dyn Confirm,
    ) -> Result<(), ClientError> {
        if checked && !confirm.confirm("Mark this item as complete?") {
            return Ok(());
        }
        self.api.toggle_item(id, checked).await?;
        self.load_data().await
    }

    /// Legacy delete path: confirmed client-side, rejected server-side
    pub async fn delete_item(
        &mut self,
        id: i64,
        name: &str,
        confirm: &dyn Confirm,
    ) -> Result<(), ClientError> {
        let prompt = format!("Are you sure you want to delete \"{}\"?", name);
        if !confirm.confirm(&prompt) {
            return Ok(());
        }
        self.api.delete_item(id).await?;
        self.load_data().await
    }

    /// Flip the theme and persist it
    pub fn toggle_theme(&mut self) {
        let theme = self.store.state().theme.toggled();
        self.store.set_state(StateUpdate {
            theme: Some(theme),
            ..Default::default()
        });
        self.store.save_to_storage();
    }
}
