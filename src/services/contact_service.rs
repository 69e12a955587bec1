use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use uuid::Uuid;

use crate::errors::ContactError;
use crate::models::contact::Contact;
use crate::schemas::contact_schema::ContactSubmission;
use crate::storage::ContactStore;

/// The contact write path. Holds nothing but a handle to the store, so clones
/// are cheap and requests never share mutable state.
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// Validate `submission`, assign its identity and timestamp, and append it.
    ///
    /// Input is checked again here even when the caller already holds a
    /// [`ValidatedSubmission`](crate::schemas::ValidatedSubmission). Identical
    /// payloads produce distinct records; there is no deduplication and no retry.
    pub async fn create(
        &self,
        submission: impl Into<ContactSubmission>,
    ) -> Result<Contact, ContactError> {
        let validated = submission.into().validated()?;

        // TIMESTAMP(6) keeps microseconds; truncate so the echoed record matches the row.
        let contact = Contact::new(Uuid::new_v4(), Utc::now().trunc_subsecs(6), validated);

        if let Err(e) = self.store.insert(&contact).await {
            tracing::error!(error = %e, "failed to store contact inquiry");
            return Err(ContactError::Storage(e));
        }

        tracing::info!(id = %contact.id, "contact inquiry stored");
        Ok(contact)
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        self.store.ping().await
    }
}
