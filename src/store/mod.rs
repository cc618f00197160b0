// src/store/mod.rs

//! Recipe store: the record lifecycle and its business rules
//!
//! Two backends implement [`RecipeStore`]:
//! - [`MemoryStore`] keeps records in an ordered map owned by the process
//! - [`SqliteStore`] keeps them in the `recipes` table
//!
//! Both run every operation under one lock, so concurrent callers see
//! whole operations in some serial order. Id allocation is part of the
//! same critical section as the insert it belongs to.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::recipe::{Recipe, RecipeInput};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// Operations every recipe backend provides
pub trait RecipeStore: Send + Sync {
    /// Validate a complete payload, assign the next id and stamp both timestamps
    fn create(&self, input: RecipeInput) -> Result<Recipe>;

    /// All live records in ascending id order
    fn list_all(&self) -> Result<Vec<Recipe>>;

    /// Fetch one record
    fn get(&self, id: i64) -> Result<Recipe>;

    /// Merge the fields present in `patch` and refresh `updated_at`
    fn update(&self, id: i64, patch: RecipeInput) -> Result<Recipe>;

    /// Remove a record permanently; its id is never handed out again
    fn delete(&self, id: i64) -> Result<()>;
}

/// Which backend to run with
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Memory,
    Sqlite,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Memory => "memory",
            StoreKind::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "sqlite" => Ok(StoreKind::Sqlite),
            other => Err(format!(
                "unknown store backend '{}' (expected 'memory' or 'sqlite')",
                other
            )),
        }
    }
}

/// Resolved backend selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Sqlite(PathBuf),
}

impl StoreBackend {
    /// Open the selected backend
    pub fn open(&self) -> Result<Arc<dyn RecipeStore>> {
        match self {
            StoreBackend::Memory => {
                info!("Using in-memory recipe store");
                Ok(Arc::new(MemoryStore::new()))
            }
            StoreBackend::Sqlite(path) => {
                info!("Using SQLite recipe store at {}", path.display());
                Ok(Arc::new(SqliteStore::open(path)?))
            }
        }
    }
}
