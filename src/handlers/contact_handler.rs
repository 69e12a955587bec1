use axum::{Extension, Json, extract::rejection::JsonRejection, http::StatusCode};

use crate::errors::ContactError;
use crate::models::contact::Contact;
use crate::schemas::contact_schema::ContactSubmission;
use crate::services::ContactService;

// Handler for contact form submissions. A created inquiry is echoed back as the bare record.
pub async fn create_contact(
    Extension(service): Extension<ContactService>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), ContactError> {
    // Unreadable bodies are reported as validation errors instead of axum's default 413/415/422
    let Json(submission) = payload?;

    let contact = service.create(submission).await?;

    Ok((StatusCode::CREATED, Json(contact)))
}
