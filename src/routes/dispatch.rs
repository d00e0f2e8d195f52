use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::Method,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

use crate::constants::{ERR_INVALID_ITEM_ID, ERR_MISSING_CATEGORY_FIELDS, ERR_MISSING_ITEM_FIELDS};
use crate::error::{envelope_response, AppError, Result};
use crate::models::{page::resolve_load_page, Category, Item};
use crate::routes::{category, diag, item, load};
use crate::AppState;

/// Request parameters after extraction: a loose string-keyed map. Values may
/// be JSON numbers, strings, or anything else a caller sent; form-encoded
/// bodies always produce strings, so coercion happens at read time.
pub struct Params(Map<String, Value>);

impl Params {
    fn from_query(query: Option<&str>) -> Self {
        let pairs: Vec<(String, String)> = query
            .and_then(|q| serde_urlencoded::from_str(q).ok())
            .unwrap_or_default();
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect(),
        )
    }

    /// POST body: JSON object preferred, form-encoded fallback
    fn from_body(body: &[u8]) -> Self {
        if let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) {
            return Self(map);
        }
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_bytes(body).unwrap_or_default();
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect(),
        )
    }

    /// First non-empty string value among the given keys. Bare numbers are
    /// accepted and stringified, since JSON callers may send them unquoted.
    fn str_of(&self, keys: &[&str]) -> Option<String> {
        for key in keys {
            match self.0.get(*key) {
                Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
                Some(Value::Number(n)) => return Some(n.to_string()),
                _ => {}
            }
        }
        None
    }

    /// First integer value among the given keys, accepting numeric strings
    fn int_of(&self, keys: &[&str], default: i64) -> i64 {
        for key in keys {
            match self.0.get(*key) {
                Some(Value::Number(n)) => {
                    if let Some(i) = n.as_i64() {
                        return i;
                    }
                    if let Some(f) = n.as_f64() {
                        return f as i64;
                    }
                }
                Some(Value::String(s)) => {
                    if let Ok(i) = s.trim().parse::<i64>() {
                        return i;
                    }
                }
                _ => {}
            }
        }
        default
    }

    /// First float value among the given keys, accepting numeric strings
    fn float_of(&self, keys: &[&str], default: f64) -> f64 {
        for key in keys {
            match self.0.get(*key) {
                Some(Value::Number(n)) => {
                    if let Some(f) = n.as_f64() {
                        return f;
                    }
                }
                Some(Value::String(s)) => {
                    if let Ok(f) = s.trim().parse::<f64>() {
                        return f;
                    }
                }
                _ => {}
            }
        }
        default
    }

    fn action(&self) -> String {
        self.str_of(&["action"]).unwrap_or_default()
    }

    /// Echo of everything received, for the diagnostic action
    fn as_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// Typed request variants behind the `action` string. Aliases map to the
/// same variant; validation runs during parsing so handlers only ever see
/// well-formed requests.
#[derive(Debug)]
pub enum Action {
    Load { page: &'static str },
    AddCategory { kind: String, name: String },
    AddItem { category_id: i64, name: String, price: f64 },
    GetAll { kind: String },
    ToggleItem { id: i64, done: i64 },
    Test,
}

impl Action {
    pub fn parse(raw: &str, params: &Params) -> Result<Self> {
        match raw {
            "load" => Ok(Self::Load {
                page: resolve_load_page(params.str_of(&["page"]).as_deref()),
            }),
            "addCategory" | "save_category" => {
                // `page` wins over `type` when both are present
                let kind = params.str_of(&["page", "type"]).unwrap_or_default();
                let name = params.str_of(&["name"]).unwrap_or_default();
                if !Category::validate_fields(&name, &kind) {
                    return Err(AppError::InvalidInput(
                        ERR_MISSING_CATEGORY_FIELDS.to_string(),
                    ));
                }
                Ok(Self::AddCategory { kind, name })
            }
            "addItem" | "save_item" => {
                let category_id = params.int_of(&["category", "cat_id"], 0);
                let name = params.str_of(&["name"]).unwrap_or_default();
                let price = params.float_of(&["price"], 0.0);
                if !Item::validate_fields(&name, category_id) {
                    return Err(AppError::InvalidInput(ERR_MISSING_ITEM_FIELDS.to_string()));
                }
                Ok(Self::AddItem {
                    category_id,
                    name,
                    price,
                })
            }
            "get_all" => Ok(Self::GetAll {
                kind: params
                    .str_of(&["type"])
                    .unwrap_or_else(|| crate::constants::DEFAULT_PAGE.to_string()),
            }),
            "toggleItem" => {
                let id = params.int_of(&["id"], 0);
                if id <= 0 {
                    return Err(AppError::InvalidInput(ERR_INVALID_ITEM_ID.to_string()));
                }
                let done = Item::normalize_done(params.int_of(&["done"], 0));
                Ok(Self::ToggleItem { id, done })
            }
            "" | "test" => Ok(Self::Test),
            other => Err(AppError::UnknownAction(other.to_string())),
        }
    }
}

/// Single dispatch endpoint: GET parameters come from the query string,
/// POST parameters from the body only (matching the legacy gateway).
pub async fn api_dispatch(
    State(state): State<AppState>,
    method: Method,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Response {
    let params = if method == Method::GET {
        Params::from_query(query.as_deref())
    } else {
        Params::from_body(&body)
    };

    let raw_action = params.action();
    if state.config.log_requests {
        tracing::debug!(action = %raw_action, method = %method, "api request");
    }

    let action = match Action::parse(&raw_action, &params) {
        Ok(action) => action,
        Err(e) => return e.into_response(),
    };

    let result = match action {
        Action::Load { page } => load::load_data(&state, page).await,
        Action::AddCategory { kind, name } => category::add_category(&state, &kind, &name).await,
        Action::AddItem {
            category_id,
            name,
            price,
        } => item::add_item(&state, category_id, &name, price).await,
        Action::GetAll { kind } => load::get_all(&state, &kind).await,
        Action::ToggleItem { id, done } => item::toggle_item(&state, id, done).await,
        Action::Test => Ok(diag::test_payload(&method, &raw_action, params.as_value())),
    };

    match result {
        Ok(value) => envelope_response(&value),
        Err(e) => e.into_response(),
    }
}
