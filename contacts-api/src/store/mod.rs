//! Contact persistence behind a trait, so the route handlers can run against
//! SQLite in the server and against an in-memory store in tests.

pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use shared_types::{Contact, ContactMutation};

pub use memory::MemoryContactStore;
pub use sqlite::SqliteContactStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("contact {0} not found")]
    NotFound(String),
    #[error(transparent)]
    Database(#[from] anyhow::Error),
}

#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Contacts matching `query` in insertion order. `None` and `Some("")`
    /// both return everything.
    async fn list(&self, query: Option<&str>) -> Result<Vec<Contact>, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<Contact>, StoreError>;

    /// Creates a contact with every optional field empty.
    async fn create(&self) -> Result<Contact, StoreError>;

    /// Fails with [`StoreError::NotFound`] when `id` is unknown.
    async fn update(&self, id: &str, mutation: ContactMutation) -> Result<Contact, StoreError>;

    /// Returns whether a contact was removed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.list(None).await?.len())
    }
}

/// Case-insensitive substring match against first name, last name, or both
/// joined by a space.
pub fn matches_query(contact: &Contact, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let first = contact.first.as_deref().unwrap_or_default().to_lowercase();
    let last = contact.last.as_deref().unwrap_or_default().to_lowercase();

    first.contains(&needle)
        || last.contains(&needle)
        || format!("{first} {last}").contains(&needle)
}

pub(crate) fn filter_contacts(contacts: Vec<Contact>, query: Option<&str>) -> Vec<Contact> {
    match query {
        Some(query) if !query.trim().is_empty() => contacts
            .into_iter()
            .filter(|contact| matches_query(contact, query))
            .collect(),
        _ => contacts,
    }
}

pub(crate) fn new_contact_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
