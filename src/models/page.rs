use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE;

/// Top-level view context. The server only ever stores categories under the
/// raw type string it received; this enum is the client-side vocabulary.
/// Budget exists in the UI but has no loadable server data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Personal,
    Business,
    Budget,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Business => "business",
            Self::Budget => "budget",
        }
    }

    /// Pages the gateway serves data for
    pub fn is_loadable(&self) -> bool {
        matches!(self, Self::Personal | Self::Business)
    }
}

/// Resolve the `page` parameter of a load request. Anything outside
/// personal/business (including budget) folds back to personal.
pub fn resolve_load_page(raw: Option<&str>) -> &'static str {
    match raw {
        Some("personal") => "personal",
        Some("business") => "business",
        _ => DEFAULT_PAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_load_page() {
        assert_eq!(resolve_load_page(Some("personal")), "personal");
        assert_eq!(resolve_load_page(Some("business")), "business");
        assert_eq!(resolve_load_page(Some("budget")), "personal");
        assert_eq!(resolve_load_page(Some("nonsense")), "personal");
        assert_eq!(resolve_load_page(None), "personal");
    }

    #[test]
    fn test_page_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Page::Business).unwrap(), "\"business\"");
        let page: Page = serde_json::from_str("\"budget\"").unwrap();
        assert_eq!(page, Page::Budget);
    }

    #[test]
    fn test_budget_is_not_loadable() {
        assert!(Page::Personal.is_loadable());
        assert!(Page::Business.is_loadable());
        assert!(!Page::Budget.is_loadable());
    }
}
