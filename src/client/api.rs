use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::models::{CategorySummary, Item, Page};

/// Client-side error taxonomy: transport failures and server rejections.
/// State is never mutated on either; callers surface the message and move on.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server rejected request: {0}")]
    Rejected(String),

    #[error("Please select a valid page first")]
    InvalidPage,
}

/// One envelope covers every action; absent fields default. `success` is
/// the only field callers branch on.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    categories: Vec<CategorySummary>,
    #[serde(default)]
    items: Vec<Item>,
}

impl Envelope {
    fn accept(self) -> Result<Self, ClientError> {
        if self.success {
            Ok(self)
        } else {
            let message = self
                .error
                .or(self.message)
                .unwrap_or_else(|| "Request failed".to_string());
            Err(ClientError::Rejected(message))
        }
    }
}

/// Categories (with totals) and the full item set returned by `load`
#[derive(Debug, Clone)]
pub struct LoadData {
    pub categories: Vec<CategorySummary>,
    pub items: Vec<Item>,
}

/// Thin wrapper over the dispatch endpoint, one method per action.
/// No retries, no timeout configuration, no caching.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn post_action(&self, body: serde_json::Value) -> Result<Envelope, ClientError> {
        let response = self
            .http
            .post(format!("{}/api", self.base_url))
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch a page's categories and the full item set (GET, like the
    /// browser's load path)
    pub async fn load(&self, page: Page) -> Result<LoadData, ClientError> {
        let response = self
            .http
            .get(format!(
                "{}/api?action=load&page={}",
                self.base_url,
                page.as_str()
            ))
            .send()
            .await?
            .error_for_status()?;
        let envelope: Envelope = response.json().await?;
        let envelope = envelope.accept()?;
        Ok(LoadData {
            categories: envelope.categories,
            items: envelope.items,
        })
    }

    /// Add a category under a page; returns the new row id
    pub async fn add_category(&self, page: Page, name: &str) -> Result<i64, ClientError> {
        let envelope = self
            .post_action(json!({
                "action": "addCategory",
                "page": page.as_str(),
                "name": name,
            }))
            .await?
            .accept()?;
        Ok(envelope.id.unwrap_or_default())
    }

    /// Add an item under a category; returns the new row id
    pub async fn add_item(
        &self,
        category_id: i64,
        name: &str,
        price: f64,
    ) -> Result<i64, ClientError> {
        let envelope = self
            .post_action(json!({
                "action": "addItem",
                "category": category_id,
                "name": name,
                "price": price,
            }))
            .await?
            .accept()?;
        Ok(envelope.id.unwrap_or_default())
    }

    /// Set an item's done flag
    pub async fn toggle_item(&self, id: i64, done: bool) -> Result<(), ClientError> {
        self.post_action(json!({
            "action": "toggleItem",
            "id": id,
            "done": if done { 1 } else { 0 },
        }))
        .await?
        .accept()?;
        Ok(())
    }

    /// Legacy call with no server-side implementation; the dispatch endpoint
    /// answers with its unknown-action rejection
    pub async fn delete_item(&self, id: i64) -> Result<(), ClientError> {
        self.post_action(json!({
            "action": "deleteItem",
            "id": id,
        }))
        .await?
        .accept()?;
        Ok(())
    }
}
