use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::items::handlers;
use crate::features::items::services::ItemService;

/// Create routes for the items feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<ItemService>) -> Router {
    Router::new()
        .route("/api/items", get(handlers::list_items))
        .route("/api/items/{id}", get(handlers::get_item))
        .with_state(service)
}
