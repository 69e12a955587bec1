//! Store doubles for tests that should not need a database.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::contact::Contact;
use crate::storage::ContactStore;

/// Keeps every inserted record in memory, in insertion order.
#[derive(Default)]
pub struct MemoryContactStore {
    contacts: Mutex<Vec<Contact>>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contacts(&self) -> Vec<Contact> {
        self.contacts.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.contacts.lock().await.len()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn insert(&self, contact: &Contact) -> Result<(), sqlx::Error> {
        let mut contacts = self.contacts.lock().await;
        if contacts.iter().any(|c| c.id == contact.id) {
            return Err(sqlx::Error::Protocol(format!("duplicate id {}", contact.id)));
        }
        contacts.push(contact.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

/// Behaves like a database that cannot be reached.
pub struct UnavailableContactStore;

fn connection_refused() -> sqlx::Error {
    sqlx::Error::Io(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused",
    ))
}

#[async_trait]
impl ContactStore for UnavailableContactStore {
    async fn insert(&self, _contact: &Contact) -> Result<(), sqlx::Error> {
        Err(connection_refused())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Err(connection_refused())
    }
}
