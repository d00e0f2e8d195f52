use serde::{Deserialize, Serialize};

use super::Item;

/// Category row as stored. The `type` column is a free string on the wire
/// and in the database: the gateway only requires it to be non-empty, so
/// rows outside personal/business can exist and are simply never loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub created_at: String,
}

/// Category as returned by `load`: the base row plus its derived total.
/// Totals are always recomputed from the current item set, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    #[serde(flatten)]
    pub category: Category,
    pub total: f64,
}

/// Category as returned by `get_all`: the base row with its items embedded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub category: Category,
    pub items: Vec<Item>,
}

impl Category {
    /// Required-field check shared by addCategory: both name and type must
    /// be non-empty strings
    pub fn validate_fields(name: &str, kind: &str) -> bool {
        !name.is_empty() && !kind.is_empty()
    }

    /// Sum of prices of the given items that belong to this category.
    /// Done state does not matter: completed items still count.
    pub fn total_of(&self, items: &[Item]) -> f64 {
        items
            .iter()
            .filter(|i| i.category_id == self.id)
            .map(|i| i.price)
            .sum()
    }
}
