use axum::{Router, extract::DefaultBodyLimit, routing::post};

// Import the contact handler
use crate::handlers::contact_handler::create_contact;

/// Largest accepted request body for a contact inquiry. Larger bodies are
/// answered with a 400 before any validation or write.
pub const CONTACT_BODY_LIMIT: usize = 64 * 1024;

pub fn contact_routes() -> Router {
    Router::new()
        .route("/api/contact", post(create_contact))
        .layer(DefaultBodyLimit::max(CONTACT_BODY_LIMIT))
}
