use serde_json::{json, Value};
use sqlx::{sqlite::SqliteRow, Row};

use crate::error::Result;
use crate::models::{Category, CategoryDetail, CategorySummary, Item};
use crate::AppState;

fn category_from_row(row: &SqliteRow) -> std::result::Result<Category, sqlx::Error> {
    Ok(Category {
        id: row.try_get("id")?,
        kind: row.try_get("type")?,
        name: row.try_get("name")?,
        created_at: row.try_get("created_at")?,
    })
}

fn item_from_row(row: &SqliteRow) -> std::result::Result<Item, sqlx::Error> {
    Ok(Item {
        id: row.try_get("id")?,
        category_id: row.try_get("category_id")?,
        name: row.try_get("name")?,
        price: row.try_get("price")?,
        done: row.try_get("done")?,
    })
}

/// `load`: categories of one page plus ALL items. Items are deliberately
/// not filtered by page; the client filters by category_id at render time
/// and depends on receiving the full set.
pub async fn load_data(state: &AppState, page: &str) -> Result<Value> {
    let rows = sqlx::query(
        "SELECT id, type, name, created_at FROM categories WHERE type = ? ORDER BY name ASC",
    )
    .bind(page)
    .fetch_all(&state.pool)
    .await?;

    let categories = rows
        .iter()
        .map(category_from_row)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let rows = sqlx::query("SELECT id, category_id, name, price, done FROM items ORDER BY name ASC")
        .fetch_all(&state.pool)
        .await?;

    let items = rows
        .iter()
        .map(item_from_row)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let summaries: Vec<CategorySummary> = categories
        .into_iter()
        .map(|category| {
            let total = category.total_of(&items);
            CategorySummary { category, total }
        })
        .collect();

    let category_count = summaries.len();
    let item_count = items.len();
    tracing::debug!(category_count, item_count, page, "load complete");

    Ok(json!({
        "success": true,
        "categories": summaries,
        "items": items,
        "count": {
            "categories": category_count,
            "items": item_count,
        },
    }))
}

/// `get_all`: categories of one type newest-first, each with its own items
/// embedded newest-first. The raw type string passes straight through to
/// the query, so types outside personal/business are reachable here.
pub async fn get_all(state: &AppState, kind: &str) -> Result<Value> {
    let rows =
        sqlx::query("SELECT id, type, name, created_at FROM categories WHERE type = ? ORDER BY id DESC")
            .bind(kind)
            .fetch_all(&state.pool)
            .await?;

    let categories = rows
        .iter()
        .map(category_from_row)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut details = Vec::with_capacity(categories.len());
    for category in categories {
        let rows = sqlx::query(
            "SELECT id, category_id, name, price, done FROM items WHERE category_id = ? ORDER BY id DESC",
        )
        .bind(category.id)
        .fetch_all(&state.pool)
        .await?;

        let items = rows
            .iter()
            .map(item_from_row)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        details.push(CategoryDetail { category, items });
    }

    let count = details.len();
    Ok(json!({
        "success": true,
        "categories": details,
        "count": count,
    }))
}
