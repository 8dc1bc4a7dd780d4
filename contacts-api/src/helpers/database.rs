use std::path::PathBuf;
use std::sync::Arc;

use crate::config::StorageConfig;
use crate::database::Database;

/// Returns the default path to the contacts database
///
/// # Platform-specific paths
///
/// - **macOS**: `~/Library/Application Support/contacts/contacts.sqlite3`
/// - **Linux**: `~/.local/share/contacts/contacts.sqlite3`
/// - **Windows**: `%LOCALAPPDATA%\contacts\contacts.sqlite3`
pub fn get_db_path() -> anyhow::Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(data_dir.join("contacts").join("contacts.sqlite3"))
}

/// Open the database named by `storage`, or the default one
pub fn initialize_database(storage: &StorageConfig) -> anyhow::Result<(Arc<Database>, PathBuf)> {
    let db_path = match &storage.database_path {
        Some(path) => path.clone(),
        None => get_db_path()?,
    };

    let db = Database::new(&db_path)?;
    Ok((Arc::new(db), db_path))
}
