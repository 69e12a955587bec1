use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schemas::contact_schema::ValidatedSubmission;

/// A stored contact inquiry. Rows are only ever appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Build the record for a validated submission with the identity and
    /// timestamp assigned by the write path.
    pub fn new(id: Uuid, created_at: DateTime<Utc>, submission: ValidatedSubmission) -> Self {
        let submission = submission.into_inner();
        Self {
            id,
            name: submission.name,
            email: submission.email,
            phone: submission.phone,
            company: submission.company,
            message: submission.message,
            created_at,
        }
    }
}
