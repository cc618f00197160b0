// src/store/sqlite.rs

//! SQLite-backed recipe store

use crate::db;
use crate::error::{Error, Result};
use crate::recipe::{Recipe, RecipeInput, timestamp};
use crate::store::RecipeStore;
use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::Path;
use tracing::{debug, warn};

/// Recipe store backed by the `recipes` table
///
/// A single connection is shared behind a mutex; SQLite's
/// `AUTOINCREMENT` keeps ids unique across deletes and restarts.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        let db_path = path
            .to_str()
            .ok_or_else(|| Error::InitError(format!("Non-UTF-8 database path: {:?}", path)))?;
        db::init(db_path)?;
        let conn = db::open(db_path)?;
        Ok(Self::from_connection(conn))
    }

    /// Private in-memory database, gone when the store is dropped
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::from_connection(db::open_in_memory()?))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Number of stored records
    pub fn count(&self) -> Result<i64> {
        Recipe::count(&self.conn.lock())
    }
}

impl RecipeStore for SqliteStore {
    fn create(&self, input: RecipeInput) -> Result<Recipe> {
        let new = input.validate().inspect_err(|e| warn!("{}", e))?;

        let conn = self.conn.lock();
        let recipe = Recipe::insert(&conn, new, timestamp::now())?;

        debug!("Created recipe {} ({})", recipe.id, recipe.title);
        Ok(recipe)
    }

    fn list_all(&self) -> Result<Vec<Recipe>> {
        Recipe::list_all(&self.conn.lock())
    }

    fn get(&self, id: i64) -> Result<Recipe> {
        Recipe::find_by_id(&self.conn.lock(), id)?.ok_or(Error::NotFound(id))
    }

    fn update(&self, id: i64, patch: RecipeInput) -> Result<Recipe> {
        let mut conn = self.conn.lock();

        let recipe = db::transaction(&mut conn, |tx| {
            let mut recipe = Recipe::find_by_id(tx, id)?.ok_or(Error::NotFound(id))?;
            recipe.apply(patch, timestamp::now());
            recipe.save(tx)?;
            Ok(recipe)
        })?;

        debug!("Updated recipe {}", id);
        Ok(recipe)
    }

    fn delete(&self, id: i64) -> Result<()> {
        if Recipe::delete(&self.conn.lock(), id)? {
            debug!("Deleted recipe {}", id);
            Ok(())
        } else {
            Err(Error::NotFound(id))
        }
    }
}
