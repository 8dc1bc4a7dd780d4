use async_trait::async_trait;
use shared_types::{Contact, ContactMutation};
use std::sync::Arc;
use tracing::{debug, info};

use super::{filter_contacts, new_contact_id, ContactStore, StoreError};
use crate::database::contacts as contacts_db;
use crate::database::Database;

pub struct SqliteContactStore {
    db: Arc<Database>,
}

impl SqliteContactStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactStore for SqliteContactStore {
    async fn list(&self, query: Option<&str>) -> Result<Vec<Contact>, StoreError> {
        let contacts = contacts_db::list_contacts(self.db.async_connection.clone()).await?;
        let contacts = filter_contacts(contacts, query);
        debug!("Listed {} contacts for query {:?}", contacts.len(), query);
        Ok(contacts)
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>, StoreError> {
        Ok(contacts_db::get_contact(self.db.async_connection.clone(), id).await?)
    }

    async fn create(&self) -> Result<Contact, StoreError> {
        let contact = Contact::blank(new_contact_id(), chrono::Utc::now().timestamp());
        contacts_db::insert_contact(self.db.async_connection.clone(), &contact).await?;
        info!("Created contact {}", contact.id);
        Ok(contact)
    }

    async fn update(&self, id: &str, mutation: ContactMutation) -> Result<Contact, StoreError> {
        let contact = contacts_db::update_contact(self.db.async_connection.clone(), id, &mutation)
            .await?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        info!("Updated contact {}", id);
        Ok(contact)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let deleted = contacts_db::delete_contact(self.db.async_connection.clone(), id).await?;
        if deleted {
            info!("Deleted contact {}", id);
        }
        Ok(deleted)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let count = contacts_db::count_contacts(self.db.async_connection.clone()).await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_store(dir: &tempfile::TempDir) -> SqliteContactStore {
        let db = Database::new(&dir.path().join("contacts.sqlite3")).unwrap();
        SqliteContactStore::new(Arc::new(db))
    }

    async fn named(store: &SqliteContactStore, first: &str) -> Contact {
        let contact = store.create().await.unwrap();
        store
            .update(
                &contact.id,
                ContactMutation {
                    first: Some(first.to_string()),
                    ..ContactMutation::default()
                },
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        assert_eq!(store.count().await.unwrap(), 0);

        let created = store.create().await.unwrap();
        assert!(!created.has_name());
        assert!(!created.favorite);

        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
        assert_eq!(store.get("missing").await.unwrap(), None);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_filters_and_keeps_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        let alice = named(&store, "Alice").await;
        let bob = named(&store, "Bob").await;

        let all = store.list(None).await.unwrap();
        assert_eq!(all, vec![alice.clone(), bob.clone()]);
        assert_eq!(store.list(Some("")).await.unwrap(), all);
        assert_eq!(store.list(Some("ali")).await.unwrap(), vec![alice]);
    }

    #[tokio::test]
    async fn test_update_favorite_only_changes_favorite() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        let alice = named(&store, "Alice").await;

        let updated = store
            .update(&alice.id, ContactMutation::favorite(true))
            .await
            .unwrap();

        assert!(updated.favorite);
        assert_eq!(updated.first, alice.first);
        assert_eq!(updated.id, alice.id);
        assert_eq!(store.get(&alice.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        let err = store
            .update("nope", ContactMutation::favorite(true))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "nope"));
    }

    #[tokio::test]
    async fn test_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        let alice = named(&store, "Alice").await;

        assert!(store.delete(&alice.id).await.unwrap());
        assert!(!store.delete(&alice.id).await.unwrap());
        assert!(store.list(None).await.unwrap().is_empty());
    }
}
