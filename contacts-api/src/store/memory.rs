use async_trait::async_trait;
use shared_types::{Contact, ContactMutation};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{filter_contacts, new_contact_id, ContactStore, StoreError};

/// Vec-backed store. Order of the vec is insertion order.
#[derive(Clone, Default)]
pub struct MemoryContactStore {
    contacts: Arc<RwLock<Vec<Contact>>>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Arc::new(RwLock::new(contacts)),
        }
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn list(&self, query: Option<&str>) -> Result<Vec<Contact>, StoreError> {
        let contacts = self.contacts.read().await;
        Ok(filter_contacts(contacts.clone(), query))
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>, StoreError> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self) -> Result<Contact, StoreError> {
        let contact = Contact::blank(new_contact_id(), chrono::Utc::now().timestamp());
        self.contacts.write().await.push(contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: &str, mutation: ContactMutation) -> Result<Contact, StoreError> {
        let mut contacts = self.contacts.write().await;
        let contact = contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        mutation.apply_to(contact);
        contact.updated_at = chrono::Utc::now().timestamp();
        Ok(contact.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut contacts = self.contacts.write().await;
        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        Ok(contacts.len() != before)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.contacts.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Contact {
        Contact {
            first: Some("Alice".to_string()),
            ..Contact::blank("1", 0)
        }
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_favorite() {
        let store = MemoryContactStore::with_contacts(vec![alice()]);

        let once = store.update("1", ContactMutation::favorite(true)).await.unwrap();
        let twice = store.update("1", ContactMutation::favorite(false)).await.unwrap();

        assert!(once.favorite);
        assert_eq!(
            Contact {
                updated_at: 0,
                ..twice
            },
            alice()
        );
    }

    #[tokio::test]
    async fn test_create_appends() {
        let store = MemoryContactStore::with_contacts(vec![alice()]);
        let created = store.create().await.unwrap();

        let ids: Vec<_> = store
            .list(None)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["1".to_string(), created.id]);
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let store = MemoryContactStore::new();
        assert!(!store.delete("1").await.unwrap());
    }
}
