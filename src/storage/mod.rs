//! Persistence for contact inquiries.
//!
//! The store only appends: it has no update, delete or lookup operation.

use async_trait::async_trait;

use crate::models::contact::Contact;

pub mod mysql;

pub use mysql::MySqlContactStore;

#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Append one record. Either the whole row is written or nothing is.
    async fn insert(&self, contact: &Contact) -> Result<(), sqlx::Error>;

    /// Cheap round trip used by the health check.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}
