use chrono::Utc;
use serde_json::{json, Value};

use crate::constants::MSG_CATEGORY_ADDED;
use crate::error::Result;
use crate::AppState;

/// `addCategory` / `save_category`: insert a category with the current
/// timestamp. Fields were validated during action parsing.
pub async fn add_category(state: &AppState, kind: &str, name: &str) -> Result<Value> {
    let created_at = Utc::now().to_rfc3339();

    let result = sqlx::query("INSERT INTO categories (type, name, created_at) VALUES (?, ?, ?)")
        .bind(kind)
        .bind(name)
        .bind(&created_at)
        .execute(&state.pool)
        .await?;

    let id = result.last_insert_rowid();
    tracing::info!(id, kind, "category added");

    Ok(json!({
        "success": true,
        "message": MSG_CATEGORY_ADDED,
        "id": id,
    }))
}
