// src/db/models/mod.rs

//! Data models for recipe database entities
//!
//! The row mapping lives next to the table it reads; the record type
//! itself is [`crate::recipe::Recipe`].

mod recipe;
