use serde_json::{json, Value};

use crate::constants::{MSG_ITEM_ADDED, MSG_ITEM_UPDATED};
use crate::error::Result;
use crate::AppState;

/// `addItem` / `save_item`: insert an item under a category. The category
/// id is only checked for positivity; existence is not verified, matching
/// the totals calculation which ignores orphans.
pub async fn add_item(state: &AppState, category_id: i64, name: &str, price: f64) -> Result<Value> {
    let result = sqlx::query("INSERT INTO items (category_id, name, price, done) VALUES (?, ?, ?, 0)")
        .bind(category_id)
        .bind(name)
        .bind(price)
        .execute(&state.pool)
        .await?;

    let id = result.last_insert_rowid();
    tracing::info!(id, category_id, "item added");

    Ok(json!({
        "success": true,
        "message": MSG_ITEM_ADDED,
        "id": id,
    }))
}

/// `toggleItem`: set an item's done flag. A toggle against a missing id
/// still reports success; the single UPDATE simply matches nothing.
pub async fn toggle_item(state: &AppState, id: i64, done: i64) -> Result<Value> {
    sqlx::query("UPDATE items SET done = ? WHERE id = ?")
        .bind(done)
        .bind(id)
        .execute(&state.pool)
        .await?;

    tracing::debug!(id, done, "item toggled");

    Ok(json!({
        "success": true,
        "message": MSG_ITEM_UPDATED,
    }))
}
