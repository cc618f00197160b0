// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use recipe_api::{MemoryStore, RecipeInput, RecipeStore, SqliteStore};
use std::sync::Arc;
use tempfile::TempDir;

/// The tea payload from the reference scenario.
pub fn tea() -> RecipeInput {
    RecipeInput {
        title: Some("Tea".to_string()),
        making_time: Some("5 min".to_string()),
        serves: Some("1".to_string()),
        ingredients: Some("tea leaves, water".to_string()),
        cost: Some(50),
    }
}

/// A second, unrelated payload.
pub fn curry() -> RecipeInput {
    RecipeInput {
        title: Some("Chicken Curry".to_string()),
        making_time: Some("45 min".to_string()),
        serves: Some("4 people".to_string()),
        ingredients: Some("onion, chicken, seasoning".to_string()),
        cost: Some(1000),
    }
}

/// Every store backend, each freshly created.
///
/// Returns the TempDir alongside so the SQLite file outlives the test body.
pub fn all_stores() -> (TempDir, Vec<(&'static str, Arc<dyn RecipeStore>)>) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("recipes.db");

    let stores: Vec<(&'static str, Arc<dyn RecipeStore>)> = vec![
        ("memory", Arc::new(MemoryStore::new())),
        ("sqlite", Arc::new(SqliteStore::open(&db_path).unwrap())),
        ("sqlite-in-memory", Arc::new(SqliteStore::open_in_memory().unwrap())),
    ];

    (temp_dir, stores)
}
