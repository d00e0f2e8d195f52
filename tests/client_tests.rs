//! End-to-end tests driving the bundled client (API wrapper, state store,
//! renderer) against a live server on an ephemeral port.

use tempfile::TempDir;

use expense_tracker::client::{render, ApiClient, AppContext, ClientError, Confirm, Store, Theme};
use expense_tracker::models::Page;
use expense_tracker::{create_pool, routes, AppState, Config, MIGRATOR};

// =============================================================================
// Test Helpers
// =============================================================================

fn test_config() -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        database_path: String::new(),
        allowed_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        log_requests: false,
    }
}

/// Boot the API on an ephemeral port and return its base URL
async fn spawn_server(temp_dir: &TempDir) -> String {
    let db_path = temp_dir.path().join("server.db");
    let pool = create_pool(db_path.to_str().unwrap())
        .await
        .expect("Failed to create test database");
    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    let app = routes::api_router(AppState::new(pool, test_config()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Fresh context with its own storage directory
async fn make_context(temp_dir: &TempDir) -> AppContext {
    let base_url = spawn_server(temp_dir).await;
    let storage = temp_dir.path().join("storage");
    std::fs::create_dir_all(&storage).unwrap();
    AppContext::new(ApiClient::new(base_url), Store::new(&storage))
}

/// Scripted confirmation dialog
struct Answer(bool);

impl Confirm for Answer {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

// =============================================================================
// Full Flow
// =============================================================================

#[tokio::test]
async fn test_full_flow_updates_state_after_every_mutation() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = make_context(&temp_dir).await;

    ctx.open_page(Page::Personal).await.unwrap();
    assert_eq!(ctx.store.state().current_page, Some(Page::Personal));
    assert!(ctx.store.state().categories_for(Page::Personal).is_empty());

    ctx.add_category("Groceries").await.unwrap();
    let categories = ctx.store.state().categories_for(Page::Personal);
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].category.name, "Groceries");
    assert_eq!(categories[0].total, 0.0);

    let category_id = categories[0].category.id;
    ctx.add_item(category_id, "Milk", 3.5).await.unwrap();

    // displayed totals always reflect server state after a write
    let categories = ctx.store.state().categories_for(Page::Personal);
    assert_eq!(categories[0].total, 3.5);
    assert_eq!(ctx.store.state().items.len(), 1);
    assert!(!ctx.store.state().items[0].is_done());
}

#[tokio::test]
async fn test_marking_done_requires_confirmation() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = make_context(&temp_dir).await;

    ctx.open_page(Page::Personal).await.unwrap();
    ctx.add_category("Groceries").await.unwrap();
    let category_id = ctx.store.state().categories_for(Page::Personal)[0]
        .category
        .id;
    ctx.add_item(category_id, "Milk", 3.5).await.unwrap();
    let item_id = ctx.store.state().items[0].id;

    // declined: nothing is sent, state unchanged
    ctx.toggle_item(item_id, true, &Answer(false)).await.unwrap();
    assert!(!ctx.store.state().items[0].is_done());

    // confirmed: done flag committed and refetched
    ctx.toggle_item(item_id, true, &Answer(true)).await.unwrap();
    assert!(ctx.store.state().items[0].is_done());

    // unchecking never asks; the declining dialog is not consulted
    ctx.toggle_item(item_id, false, &Answer(false)).await.unwrap();
    assert!(!ctx.store.state().items[0].is_done());
}

#[tokio::test]
async fn test_delete_item_is_rejected_by_server() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = make_context(&temp_dir).await;

    ctx.open_page(Page::Personal).await.unwrap();
    ctx.add_category("Groceries").await.unwrap();
    let category_id = ctx.store.state().categories_for(Page::Personal)[0]
        .category
        .id;
    ctx.add_item(category_id, "Milk", 3.5).await.unwrap();
    let item_id = ctx.store.state().items[0].id;

    let err = ctx
        .delete_item(item_id, "Milk", &Answer(true))
        .await
        .unwrap_err();
    match err {
        ClientError::Rejected(message) => assert!(message.contains("Invalid action")),
        other => panic!("expected rejection, got {:?}", other),
    }

    // the item is still there
    ctx.load_data().await.unwrap();
    assert_eq!(ctx.store.state().items.len(), 1);
}

#[tokio::test]
async fn test_items_from_other_pages_arrive_with_load() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = make_context(&temp_dir).await;

    ctx.open_page(Page::Business).await.unwrap();
    ctx.add_category("Office").await.unwrap();
    let office = ctx.store.state().categories_for(Page::Business)[0]
        .category
        .id;
    ctx.add_item(office, "Stapler", 12.0).await.unwrap();

    // switching pages reloads; the flat item list still carries the
    // business item even though no personal category references it
    ctx.open_page(Page::Personal).await.unwrap();
    assert!(ctx.store.state().categories_for(Page::Personal).is_empty());
    assert_eq!(ctx.store.state().items.len(), 1);

    // and it contributes nothing to what personal renders
    let markup = render(ctx.store.state());
    assert!(!markup.contains("Stapler"));
}

// =============================================================================
// Page Handling
// =============================================================================

#[tokio::test]
async fn test_budget_page_refuses_to_load() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = make_context(&temp_dir).await;

    let err = ctx.open_page(Page::Budget).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidPage));
    assert_eq!(ctx.store.state().current_page, Some(Page::Budget));
}

#[tokio::test]
async fn test_load_failure_clears_lists_and_surfaces_error() {
    let temp_dir = TempDir::new().unwrap();
    // nothing listens here
    let storage = temp_dir.path().join("storage");
    std::fs::create_dir_all(&storage).unwrap();
    let mut ctx = AppContext::new(
        ApiClient::new("http://127.0.0.1:9"),
        Store::new(&storage),
    );

    let err = ctx.open_page(Page::Personal).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert!(ctx.store.state().categories_for(Page::Personal).is_empty());
    assert!(ctx.store.state().items.is_empty());
}

// =============================================================================
// Persistence & Theme
// =============================================================================

#[tokio::test]
async fn test_theme_persists_across_simulated_reload() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = make_context(&temp_dir).await;

    assert_eq!(ctx.store.state().theme, Theme::Dark);
    ctx.toggle_theme();
    assert_eq!(ctx.store.state().theme, Theme::Light);

    // a new store hydrated from the same directory sees the same theme
    let rehydrated = Store::new(&temp_dir.path().join("storage"));
    assert_eq!(rehydrated.state().theme, Theme::Light);
}

#[tokio::test]
async fn test_loaded_data_persists_for_reload_continuity() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = make_context(&temp_dir).await;

    ctx.open_page(Page::Personal).await.unwrap();
    ctx.add_category("Groceries").await.unwrap();

    // the blob written after the reload carries categories and items
    let rehydrated = Store::new(&temp_dir.path().join("storage"));
    assert_eq!(rehydrated.state().categories_for(Page::Personal).len(), 1);
}

// =============================================================================
// Rendering Against Live Data
// =============================================================================

#[tokio::test]
async fn test_render_reflects_fetched_state() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = make_context(&temp_dir).await;

    ctx.open_page(Page::Personal).await.unwrap();
    ctx.add_category("Groceries").await.unwrap();
    let category_id = ctx.store.state().categories_for(Page::Personal)[0]
        .category
        .id;
    ctx.add_item(category_id, "Milk", 3.5).await.unwrap();

    let markup = render(ctx.store.state());
    assert!(markup.contains("Groceries"));
    assert!(markup.contains("Milk"));
    assert!(markup.contains("(K3.50)"));

    // pure function of state: rendering twice changes nothing
    assert_eq!(markup, render(ctx.store.state()));
}
