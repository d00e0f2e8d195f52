pub mod category;
pub mod diag;
pub mod dispatch;
pub mod health;
pub mod item;
pub mod load;

pub use dispatch::api_dispatch;
pub use health::health_check;

use axum::{
    routing::get,
    Router,
};

use crate::AppState;

/// Build the application router: the single action-dispatch endpoint plus
/// the health check. OPTIONS preflight is answered by the CORS layer added
/// in main.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(api_dispatch).post(api_dispatch))
        .route("/health", get(health_check))
        .with_state(state)
}
