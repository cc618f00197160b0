// src/server/handlers/recipes.rs
//! Recipe CRUD handlers

use crate::recipe::{Recipe, RecipeInput};
use crate::server::SharedState;
use crate::server::error::{ApiError, ApiResult, NO_RECIPE_FOUND, RECIPE_NOT_FOUND};
use crate::store::RecipeStore;
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Response for a successful create
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeCreatedResponse {
    pub message: String,
    pub recipe: Recipe,
}

/// Response for a single-recipe lookup or update
///
/// The record is wrapped in a one-element list.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeDetailResponse {
    pub message: String,
    pub recipe: Vec<Recipe>,
}

/// Response for the list endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<Recipe>,
}

/// Response carrying only a message
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Run a store operation on the blocking pool
async fn with_store<T, F>(state: &SharedState, not_found_message: &str, f: F) -> ApiResult<T>
where
    F: FnOnce(&dyn RecipeStore) -> crate::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || f(store.as_ref()))
        .await
        .map_err(|e| ApiError::internal(&format!("Task join error: {}", e)))?
        .map_err(|e| ApiError::from_store(e, not_found_message))
}

/// A path segment that is not an integer names no recipe
fn recipe_id(
    id: Result<Path<i64>, PathRejection>,
    not_found_message: &str,
) -> ApiResult<i64> {
    id.map(|Path(id)| id)
        .map_err(|_| ApiError::not_found(not_found_message))
}

fn recipe_payload(payload: Result<Json<RecipeInput>, JsonRejection>) -> ApiResult<RecipeInput> {
    payload
        .map(|Json(input)| input)
        .map_err(|rejection| ApiError::bad_request(&rejection.body_text()))
}

/// POST /recipes
pub async fn create_recipe(
    State(state): State<SharedState>,
    payload: Result<Json<RecipeInput>, JsonRejection>,
) -> ApiResult<Json<RecipeCreatedResponse>> {
    let input = recipe_payload(payload)?;

    let recipe = with_store(&state, RECIPE_NOT_FOUND, move |store| store.create(input)).await?;
    info!("Recipe {} created", recipe.id);

    Ok(Json(RecipeCreatedResponse {
        message: "Recipe successfully created!".to_string(),
        recipe,
    }))
}

/// GET /recipes
pub async fn list_recipes(State(state): State<SharedState>) -> ApiResult<Json<RecipeListResponse>> {
    let recipes = with_store(&state, RECIPE_NOT_FOUND, |store| store.list_all()).await?;
    Ok(Json(RecipeListResponse { recipes }))
}

/// GET /recipes/:id
pub async fn get_recipe(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<RecipeDetailResponse>> {
    let id = recipe_id(id, RECIPE_NOT_FOUND)?;

    let recipe = with_store(&state, RECIPE_NOT_FOUND, move |store| store.get(id)).await?;

    Ok(Json(RecipeDetailResponse {
        message: "Recipe details by id".to_string(),
        recipe: vec![recipe],
    }))
}

/// PATCH /recipes/:id
///
/// Only the fields present in the body change. An unknown id is
/// reported before a malformed body.
pub async fn update_recipe(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<RecipeInput>, JsonRejection>,
) -> ApiResult<Json<RecipeDetailResponse>> {
    let id = recipe_id(id, RECIPE_NOT_FOUND)?;
    let patch = match recipe_payload(payload) {
        Ok(patch) => patch,
        Err(bad_body) => {
            with_store(&state, RECIPE_NOT_FOUND, move |store| store.get(id)).await?;
            return Err(bad_body);
        }
    };

    let recipe =
        with_store(&state, RECIPE_NOT_FOUND, move |store| store.update(id, patch)).await?;
    info!("Recipe {} updated", id);

    Ok(Json(RecipeDetailResponse {
        message: "Recipe successfully updated!".to_string(),
        recipe: vec![recipe],
    }))
}

/// DELETE /recipes/:id
pub async fn delete_recipe(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = recipe_id(id, NO_RECIPE_FOUND)?;

    with_store(&state, NO_RECIPE_FOUND, move |store| store.delete(id)).await?;
    info!("Recipe {} removed", id);

    Ok(Json(MessageResponse {
        message: "Recipe successfully removed!".to_string(),
    }))
}
