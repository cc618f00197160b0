// src/recipe/mod.rs

//! Recipe record and the payloads that create or modify it
//!
//! A [`Recipe`] is the only entity in the system. It is created from a
//! complete [`RecipeInput`] and mutated by merging a partial one:
//! fields present in the patch overwrite, absent fields are kept.
//!
//! `id` and `created_at` never change once assigned. `updated_at` is
//! refreshed on every successful update and never moves backwards.

mod input;
pub mod timestamp;

pub use input::{NewRecipe, REQUIRED_FIELDS, RecipeInput};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub making_time: String,
    pub serves: String,
    pub ingredients: String,
    pub cost: i64,
    #[serde(with = "timestamp::serde_format")]
    pub created_at: NaiveDateTime,
    #[serde(with = "timestamp::serde_format")]
    pub updated_at: NaiveDateTime,
}

impl Recipe {
    /// Build a fresh record with both timestamps set to `now`
    pub fn from_new(id: i64, new: NewRecipe, now: NaiveDateTime) -> Self {
        Self {
            id,
            title: new.title,
            making_time: new.making_time,
            serves: new.serves,
            ingredients: new.ingredients,
            cost: new.cost,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial payload into this record and refresh `updated_at`
    ///
    /// The refresh happens even when the patch carries no fields.
    pub fn apply(&mut self, patch: RecipeInput, now: NaiveDateTime) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(making_time) = patch.making_time {
            self.making_time = making_time;
        }
        if let Some(serves) = patch.serves {
            self.serves = serves;
        }
        if let Some(ingredients) = patch.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(cost) = patch.cost {
            self.cost = cost;
        }
        self.updated_at = now.max(self.updated_at);
    }
}
