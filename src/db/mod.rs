// src/db/mod.rs

//! SQLite persistence for recipes
//!
//! The database holds a single `recipes` table plus the `schema_version`
//! bookkeeping table. Connections are opened on demand; callers that need
//! several statements to land together use [`transaction`].

pub mod models;
pub mod schema;

use crate::error::{Error, Result};
use rusqlite::{Connection, Transaction};
use std::path::Path;
use tracing::{debug, info};

/// Create the database file (and its directory) and bring the schema up to date
pub fn init(db_path: &str) -> Result<()> {
    info!("Initializing recipe database at: {}", db_path);

    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let conn = open(db_path)?;
    schema::migrate(&conn)?;
    Ok(())
}

/// Open a connection to an existing database
pub fn open(db_path: &str) -> Result<Connection> {
    debug!("Opening database: {}", db_path);
    let conn = Connection::open(db_path)
        .map_err(|e| Error::InitError(format!("Failed to open database {}: {}", db_path, e)))?;
    configure(&conn)?;
    Ok(conn)
}

/// Open a private in-memory database with the schema applied
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    schema::migrate(&conn)?;
    Ok(conn)
}

fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")?;
    conn.busy_timeout(std::time::Duration::from_secs(5))?;
    Ok(())
}

/// Run `f` inside a transaction, committing on success and rolling back on error
pub fn transaction<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Transaction) -> Result<T>,
{
    let tx = conn.transaction()?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested/dir/recipes.db");
        let db_path = db_path.to_str().unwrap();

        init(db_path).unwrap();

        let conn = open(db_path).unwrap();
        assert_eq!(schema::get_schema_version(&conn).unwrap(), schema::SCHEMA_VERSION);
    }

    #[test]
    fn test_transaction_rolls_back_on_error() {
        let mut conn = open_in_memory().unwrap();

        let result: Result<()> = transaction(&mut conn, |tx| {
            tx.execute(
                "INSERT INTO recipes (title, making_time, serves, ingredients, cost, created_at, updated_at)
                 VALUES ('Tea', '5 min', '1', 'water', 50, '2024-12-26 10:00:00', '2024-12-26 10:00:00')",
                [],
            )?;
            Err(Error::NotFound(1))
        });
        assert!(result.is_err());

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
