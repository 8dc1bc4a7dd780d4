use rusqlite::Connection;

/// Run all database migrations
pub fn run_migrations(conn: &Connection) -> anyhow::Result<()> {
    // `seq` keeps insertion order for contacts created within the same second
    conn.execute(
        "CREATE TABLE IF NOT EXISTS contacts (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id VARCHAR NOT NULL UNIQUE,
            first VARCHAR,
            last VARCHAR,
            avatar VARCHAR,
            twitter VARCHAR,
            notes VARCHAR,
            favorite BOOLEAN NOT NULL DEFAULT false,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_contacts_created
            ON contacts(created_at, seq)",
        [],
    )?;

    Ok(())
}
