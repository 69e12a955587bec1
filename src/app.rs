use std::sync::Arc;

use axum::{Extension, Router};
use sqlx::MySqlPool;
use tower_http::trace::TraceLayer;

use crate::config::CorsSettings;
use crate::services::ContactService;
use crate::storage::{ContactStore, MySqlContactStore};

/// Routes and layers without a store attached.
pub fn build_router(cors: &CorsSettings) -> Router {
    let mut app = Router::new()
        .merge(crate::routes::contact_routes::contact_routes())
        .merge(crate::routes::health_routes::health_routes());

    if let Some(cors_layer) = cors.layer() {
        app = app.layer(cors_layer);
    }

    app.layer(TraceLayer::new_for_http())
}

pub fn create_app_with_store(store: Arc<dyn ContactStore>, cors: &CorsSettings) -> Router {
    build_router(cors).layer(Extension(ContactService::new(store)))
}

pub fn create_app(pool: MySqlPool, cors: &CorsSettings) -> Router {
    create_app_with_store(Arc::new(MySqlContactStore::new(pool)), cors)
}
