// src/recipe/input.rs

//! Create/update payloads and required-field validation

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Content fields every new recipe must carry, in response order
pub const REQUIRED_FIELDS: [&str; 5] = ["title", "making_time", "serves", "ingredients", "cost"];

/// Payload for create and update
///
/// Every field is optional so the same shape serves both operations:
/// create requires all five, update merges whichever are present.
/// Keys outside these five (including `id` and the timestamps) are
/// dropped during deserialization. A JSON `null` reads as absent.
/// Empty strings are accepted as values, including an empty `title`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub making_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serves: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
}

/// A create payload that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub title: String,
    pub making_time: String,
    pub serves: String,
    pub ingredients: String,
    pub cost: i64,
}

impl RecipeInput {
    /// Names of required fields absent from this payload
    ///
    /// Presence is all that counts: `cost: 0` and empty strings pass.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = [
            self.title.is_some(),
            self.making_time.is_some(),
            self.serves.is_some(),
            self.ingredients.is_some(),
            self.cost.is_some(),
        ];

        REQUIRED_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Turn a complete payload into a [`NewRecipe`]
    pub fn validate(self) -> Result<NewRecipe> {
        match self {
            RecipeInput {
                title: Some(title),
                making_time: Some(making_time),
                serves: Some(serves),
                ingredients: Some(ingredients),
                cost: Some(cost),
            } => Ok(NewRecipe {
                title,
                making_time,
                serves,
                ingredients,
                cost,
            }),
            incomplete => Err(Error::Validation {
                missing: incomplete.missing_fields(),
            }),
        }
    }
}
