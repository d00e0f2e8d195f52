/// Default page when a request omits the page or names an unknown one
pub const DEFAULT_PAGE: &str = "personal";

/// Actions the dispatch endpoint recognizes, in the order the unknown-action
/// reply advertises them
pub const VALID_ACTIONS: &[&str] = &["load", "addCategory", "addItem", "toggleItem", "get_all"];

/// Human-readable action list returned by the `test` diagnostic action
pub const ACTION_HELP: &[&str] = &[
    "load (GET/POST) - Load categories and items",
    "addCategory/save_category - Add category",
    "addItem/save_item - Add item",
    "toggleItem - Toggle item status",
    "get_all - Get all categories with items",
];

// =============================================================================
// Wire Messages
// =============================================================================

/// Error message when addCategory is missing its required fields
pub const ERR_MISSING_CATEGORY_FIELDS: &str = "Missing required fields: name and type/page";

/// Error message when addItem is missing its required fields
pub const ERR_MISSING_ITEM_FIELDS: &str = "Missing required fields: name and category";

/// Error message for a non-positive item id in toggleItem
pub const ERR_INVALID_ITEM_ID: &str = "Invalid item ID";

/// Error message sent for unrecognized actions
pub const ERR_INVALID_ACTION: &str = "Invalid action specified";

/// Generic message for persistence failures (detail stays in the log)
pub const ERR_DATABASE: &str = "Database error";

/// Success message after inserting a category
pub const MSG_CATEGORY_ADDED: &str = "Category added successfully";

/// Success message after inserting an item
pub const MSG_ITEM_ADDED: &str = "Item added successfully";

/// Success message after updating an item's done flag
pub const MSG_ITEM_UPDATED: &str = "Item updated";

/// Message returned by the `test` diagnostic action
pub const MSG_API_WORKING: &str = "API is working!";
