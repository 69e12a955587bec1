//! Typed caller for `POST /api/contact`.
//!
//! Input is checked with the same rules the server applies, so a submission
//! that would be rejected never leaves the process.

use reqwest::StatusCode;
use thiserror::Error;

use crate::errors::ValidationErrorBody;
use crate::models::contact::Contact;
use crate::schemas::contact_schema::ContactSubmission;
use crate::utils::response::ApiResponse;
use crate::utils::validation::FieldErrors;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Rejected locally; no request was sent.
    #[error("{0}")]
    Invalid(FieldErrors),

    /// Rejected by the server with a 400.
    #[error("{message}: {errors}")]
    Rejected { message: String, errors: FieldErrors },

    #[error("Failed to submit inquiry (status {status})")]
    Server { status: StatusCode },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    base_url: String,
}

impl ContactClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/contact", self.base_url)
    }

    /// Validate `submission`, send it once, and return the stored record.
    ///
    /// Nothing is retried: a transport error after the request left may still
    /// have produced a record.
    pub async fn submit(&self, submission: ContactSubmission) -> Result<Contact, ClientError> {
        let validated = submission.validated().map_err(ClientError::Invalid)?;

        let res = self.http.post(self.endpoint()).json(&validated).send().await?;

        match res.status() {
            StatusCode::CREATED => Ok(res.json::<Contact>().await?),
            StatusCode::BAD_REQUEST => {
                let body: ApiResponse<ValidationErrorBody> = res.json().await?;
                Err(ClientError::Rejected {
                    message: body.message,
                    errors: body.data.map(|d| d.errors).unwrap_or_default(),
                })
            }
            status => {
                tracing::warn!(%status, "contact submission failed");
                Err(ClientError::Server { status })
            }
        }
    }
}
