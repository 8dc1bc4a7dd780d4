use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row, TransactionBehavior};
use shared_types::{Contact, ContactMutation};

const CONTACT_COLUMNS: &str =
    "id, first, last, avatar, twitter, notes, favorite, created_at, updated_at";

fn map_row_to_contact(row: &Row) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        first: row.get(1)?,
        last: row.get(2)?,
        avatar: row.get(3)?,
        twitter: row.get(4)?,
        notes: row.get(5)?,
        favorite: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

pub async fn insert_contact(conn: AsyncDbConnection, contact: &Contact) -> Result<()> {
    let conn = conn.lock().await?;

    conn.execute(
        "INSERT INTO contacts
         (id, first, last, avatar, twitter, notes, favorite, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            &contact.id,
            contact.first.as_deref(),
            contact.last.as_deref(),
            contact.avatar.as_deref(),
            contact.twitter.as_deref(),
            contact.notes.as_deref(),
            contact.favorite,
            contact.created_at,
            contact.updated_at,
        ],
    )?;

    Ok(())
}

pub async fn get_contact(conn: AsyncDbConnection, id: &str) -> Result<Option<Contact>> {
    let conn = conn.lock().await?;

    let mut stmt = conn.prepare(&format!(
        "SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1"
    ))?;

    stmt.query_row([id], map_row_to_contact)
        .optional()
        .map_err(|e| anyhow::anyhow!("Failed to get contact: {}", e))
}

/// All contacts in insertion order.
pub async fn list_contacts(conn: AsyncDbConnection) -> Result<Vec<Contact>> {
    let conn = conn.lock().await?;

    let mut stmt = conn.prepare(&format!(
        "SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY created_at, seq"
    ))?;

    let contacts = stmt
        .query_map([], map_row_to_contact)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(contacts)
}

/// Applies `mutation` and returns the updated row, or `None` if `id` is unknown.
/// Only the columns the mutation sets are written, so concurrent updates of
/// different fields do not overwrite each other.
pub async fn update_contact(
    conn: AsyncDbConnection,
    id: &str,
    mutation: &ContactMutation,
) -> Result<Option<Contact>> {
    let mut conn = conn.lock().await?;
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let updated = tx.execute(
        "UPDATE contacts
         SET first = COALESCE(?1, first),
             last = COALESCE(?2, last),
             avatar = COALESCE(?3, avatar),
             twitter = COALESCE(?4, twitter),
             notes = COALESCE(?5, notes),
             favorite = COALESCE(?6, favorite),
             updated_at = ?7
         WHERE id = ?8",
        params![
            mutation.first.as_deref(),
            mutation.last.as_deref(),
            mutation.avatar.as_deref(),
            mutation.twitter.as_deref(),
            mutation.notes.as_deref(),
            mutation.favorite,
            chrono::Utc::now().timestamp(),
            id,
        ],
    )?;

    if updated == 0 {
        return Ok(None);
    }

    let contact = tx.query_row(
        &format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1"),
        [id],
        map_row_to_contact,
    )?;
    tx.commit()?;

    Ok(Some(contact))
}

/// Returns whether a row was removed.
pub async fn delete_contact(conn: AsyncDbConnection, id: &str) -> Result<bool> {
    let conn = conn.lock().await?;

    let deleted = conn.execute("DELETE FROM contacts WHERE id = ?1", [id])?;

    Ok(deleted > 0)
}

pub async fn count_contacts(conn: AsyncDbConnection) -> Result<usize> {
    let conn = conn.lock().await?;

    let count: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;

    Ok(usize::try_from(count)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;
    use std::sync::Arc;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_updates_keep_each_field() {
        let dir = tempfile::tempdir().unwrap();
        let db = Arc::new(Database::new(&dir.path().join("contacts.sqlite3")).unwrap());
        let contact = Contact::blank("1", 0);
        insert_contact(db.async_connection.clone(), &contact)
            .await
            .unwrap();

        let mut tasks = Vec::new();
        for i in 0..16 {
            let conn = db.async_connection.clone();
            tasks.push(tokio::spawn(async move {
                let mutation = if i % 2 == 0 {
                    ContactMutation::favorite(true)
                } else {
                    ContactMutation {
                        notes: Some(format!("note {i}")),
                        ..ContactMutation::default()
                    }
                };
                update_contact(conn, "1", &mutation).await.unwrap()
            }));
        }
        for task in tasks {
            assert!(task.await.unwrap().is_some());
        }

        let stored = get_contact(db.async_connection.clone(), "1")
            .await
            .unwrap()
            .unwrap();
        assert!(stored.favorite);
        assert!(stored.notes.is_some_and(|notes| notes.starts_with("note ")));
    }

    #[tokio::test]
    async fn test_update_writes_only_set_fields() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(&dir.path().join("contacts.sqlite3")).unwrap();
        let contact = Contact {
            first: Some("Bob".to_string()),
            notes: Some("keep me".to_string()),
            ..Contact::blank("2", 0)
        };
        insert_contact(db.async_connection.clone(), &contact)
            .await
            .unwrap();

        let updated = update_contact(
            db.async_connection.clone(),
            "2",
            &ContactMutation {
                first: Some("Robert".to_string()),
                twitter: Some(String::new()),
                ..ContactMutation::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(updated.first.as_deref(), Some("Robert"));
        assert_eq!(updated.twitter.as_deref(), Some(""));
        assert_eq!(updated.notes.as_deref(), Some("keep me"));
        assert!(!updated.favorite);

        let missing = update_contact(
            db.async_connection.clone(),
            "nope",
            &ContactMutation::favorite(true),
        )
        .await
        .unwrap();
        assert_eq!(missing, None);
    }
}
