// src/store/memory.rs

//! In-process recipe store

use crate::error::{Error, Result};
use crate::recipe::{Recipe, RecipeInput, timestamp};
use crate::store::RecipeStore;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Recipe store backed by an ordered map
///
/// Ids come from a counter that only moves forward, so the map's key
/// order is also insertion order.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    next_id: i64,
    recipes: BTreeMap<i64, Recipe>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                recipes: BTreeMap::new(),
            }),
        }
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.inner.lock().recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeStore for MemoryStore {
    fn create(&self, input: RecipeInput) -> Result<Recipe> {
        let new = input.validate().inspect_err(|e| warn!("{}", e))?;

        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        let recipe = Recipe::from_new(id, new, timestamp::now());
        inner.recipes.insert(id, recipe.clone());

        debug!("Created recipe {} ({})", id, recipe.title);
        Ok(recipe)
    }

    fn list_all(&self) -> Result<Vec<Recipe>> {
        Ok(self.inner.lock().recipes.values().cloned().collect())
    }

    fn get(&self, id: i64) -> Result<Recipe> {
        self.inner
            .lock()
            .recipes
            .get(&id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    fn update(&self, id: i64, patch: RecipeInput) -> Result<Recipe> {
        let mut inner = self.inner.lock();
        let recipe = inner.recipes.get_mut(&id).ok_or(Error::NotFound(id))?;

        recipe.apply(patch, timestamp::now());

        debug!("Updated recipe {}", id);
        Ok(recipe.clone())
    }

    fn delete(&self, id: i64) -> Result<()> {
        match self.inner.lock().recipes.remove(&id) {
            Some(_) => {
                debug!("Deleted recipe {}", id);
                Ok(())
            }
            None => Err(Error::NotFound(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn tea() -> RecipeInput {
        RecipeInput {
            title: Some("Tea".to_string()),
            making_time: Some("5 min".to_string()),
            serves: Some("1".to_string()),
            ingredients: Some("tea leaves, water".to_string()),
            cost: Some(50),
        }
    }

    #[test]
    fn test_ids_start_at_one() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.create(tea()).unwrap().id, 1);
        assert_eq!(store.create(tea()).unwrap().id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_failed_create_does_not_consume_an_id() {
        let store = MemoryStore::new();
        let incomplete = RecipeInput {
            cost: None,
            ..tea()
        };

        assert!(matches!(
            store.create(incomplete),
            Err(Error::Validation { .. })
        ));
        assert_eq!(store.create(tea()).unwrap().id, 1);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.update(5, RecipeInput::default()),
            Err(Error::NotFound(5))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..25)
                        .map(|_| store.create(tea()).unwrap().id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<i64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 200);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&200));
    }
}
