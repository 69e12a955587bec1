use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::utils::response::ApiResponse;
use crate::utils::validation::FieldErrors;

/// Body of a 400 response: `{"errors": {"<field>": ["<reason>", ...]}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    pub errors: FieldErrors,
}

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("validation failed: {0}")]
    Validation(#[from] FieldErrors),

    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

impl From<JsonRejection> for ContactError {
    fn from(rejection: JsonRejection) -> Self {
        ContactError::Validation(FieldErrors::single("body", rejection.body_text()))
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        match self {
            ContactError::Validation(errors) => {
                let response =
                    ApiResponse::error_with_data("Validation error", ValidationErrorBody { errors });
                (StatusCode::BAD_REQUEST, Json(response)).into_response()
            }
            // details stay in the logs
            ContactError::Storage(_) => {
                let response = ApiResponse::error_with_data(
                    "Internal server error",
                    json!({ "error": "Failed to submit inquiry" }),
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
            }
        }
    }
}
