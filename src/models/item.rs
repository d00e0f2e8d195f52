use serde::{Deserialize, Serialize};

/// Item row. `done` stays an integer 0/1 on the wire, matching storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub done: i64,
}

impl Item {
    pub fn is_done(&self) -> bool {
        self.done != 0
    }

    /// Required-field check shared by addItem: non-empty name and a
    /// positive category id (existence is not verified)
    pub fn validate_fields(name: &str, category_id: i64) -> bool {
        !name.is_empty() && category_id > 0
    }

    /// Collapse any incoming done value to the stored 0/1 form
    pub fn normalize_done(raw: i64) -> i64 {
        if raw != 0 {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_fields() {
        assert!(Item::validate_fields("Milk", 1));
        assert!(!Item::validate_fields("", 1));
        assert!(!Item::validate_fields("Milk", 0));
        assert!(!Item::validate_fields("Milk", -4));
    }

    #[test]
    fn test_normalize_done() {
        assert_eq!(Item::normalize_done(0), 0);
        assert_eq!(Item::normalize_done(1), 1);
        assert_eq!(Item::normalize_done(7), 1);
        assert_eq!(Item::normalize_done(-1), 1);
    }

    #[test]
    fn test_is_done() {
        let mut item = Item {
            id: 1,
            category_id: 1,
            name: "Milk".to_string(),
            price: 3.5,
            done: 0,
        };
        assert!(!item.is_done());
        item.done = 1;
        assert!(item.is_done());
    }

    #[test]
    fn test_price_defaults_when_absent() {
        let item: Item = serde_json::from_str(
            r#"{"id":1,"category_id":2,"name":"Milk"}"#,
        )
        .unwrap();
        assert_eq!(item.price, 0.0);
        assert_eq!(item.done, 0);
    }
}
