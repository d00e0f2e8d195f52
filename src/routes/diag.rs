use axum::http::Method;
use chrono::Utc;
use serde_json::{json, Value};

use crate::constants::{ACTION_HELP, MSG_API_WORKING};

/// `test` (or empty action): fixed diagnostic payload with an echo of the
/// received request. Kept for browser poking; never fails.
pub fn test_payload(method: &Method, action: &str, data: Value) -> Value {
    json!({
        "success": true,
        "message": MSG_API_WORKING,
        "available_actions": ACTION_HELP,
        "test_data": {
            "test_categories": [
                { "id": 1, "name": "Test Category", "type": "personal", "total": 100 },
                { "id": 2, "name": "Another Category", "type": "business", "total": 200 },
            ],
            "test_items": [
                { "id": 1, "category_id": 1, "name": "Test Item", "price": 50, "done": 0 },
                { "id": 2, "category_id": 1, "name": "Another Item", "price": 50, "done": 1 },
            ],
        },
        "debug": {
            "method": method.as_str(),
            "action_received": action,
            "data_received": data,
            "timestamp": Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        },
    })
}
