// src/lib.rs

//! Recipe API
//!
//! A small recipe management service: create, list, fetch, merge-update
//! and delete recipes over HTTP.
//!
//! # Architecture
//!
//! - `recipe`: the record type, payloads and validation rules
//! - `store`: the record lifecycle, in memory or in SQLite
//! - `db`: SQLite schema and row mapping
//! - `server`: axum transport and TOML configuration

pub mod db;
mod error;
pub mod recipe;
pub mod server;
pub mod store;

pub use error::{Error, Result};
pub use recipe::{NewRecipe, REQUIRED_FIELDS, Recipe, RecipeInput};
pub use store::{MemoryStore, RecipeStore, SqliteStore, StoreBackend, StoreKind};
