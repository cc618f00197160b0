// src/db/models/recipe.rs

//! Recipe table access

use crate::error::Result;
use crate::recipe::{NewRecipe, Recipe, timestamp};
use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};

const COLUMNS: &str =
    "id, title, making_time, serves, ingredients, cost, created_at, updated_at";

impl Recipe {
    /// Insert a validated recipe and return the stored record
    pub fn insert(conn: &Connection, new: NewRecipe, now: NaiveDateTime) -> Result<Self> {
        let stamp = timestamp::format(&now);
        conn.execute(
            "INSERT INTO recipes (title, making_time, serves, ingredients, cost, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                &new.title,
                &new.making_time,
                &new.serves,
                &new.ingredients,
                new.cost,
                &stamp,
                &stamp,
            ],
        )?;

        let id = conn.last_insert_rowid();
        Ok(Self::from_new(id, new, now))
    }

    /// Find a recipe by ID
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM recipes WHERE id = ?1"))?;
        let recipe = stmt.query_row([id], Self::from_row).optional()?;
        Ok(recipe)
    }

    /// List all recipes in id order
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM recipes ORDER BY id"))?;
        let recipes = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(recipes)
    }

    /// Count stored recipes
    pub fn count(conn: &Connection) -> Result<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Write content fields and `updated_at` back; `created_at` is left alone
    pub fn save(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "UPDATE recipes
             SET title = ?1, making_time = ?2, serves = ?3, ingredients = ?4, cost = ?5, updated_at = ?6
             WHERE id = ?7",
            params![
                &self.title,
                &self.making_time,
                &self.serves,
                &self.ingredients,
                self.cost,
                timestamp::format(&self.updated_at),
                self.id,
            ],
        )?;
        Ok(())
    }

    /// Delete a recipe by ID, returning whether a row was removed
    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let rows = conn.execute("DELETE FROM recipes WHERE id = ?1", [id])?;
        Ok(rows > 0)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            making_time: row.get(2)?,
            serves: row.get(3)?,
            ingredients: row.get(4)?,
            cost: row.get(5)?,
            created_at: timestamp_column(row, 6)?,
            updated_at: timestamp_column(row, 7)?,
        })
    }
}

fn timestamp_column(row: &Row, idx: usize) -> rusqlite::Result<NaiveDateTime> {
    let text: String = row.get(idx)?;
    timestamp::parse(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
