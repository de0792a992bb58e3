// src/db/models/ingredient.rs

//! Ingredient model - addable items with optional finite stock
//!
//! Stock is the only mutable column in the catalog. Both mutations are
//! guarded updates: a reservation only succeeds if a unit is still there,
//! and a release never touches unlimited rows.

use crate::error::Result;
use crate::price::Price;
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde::Serialize;

/// An ingredient; `stock` of `None` means unlimited supply
#[derive(Debug, Clone, Serialize)]
pub struct Ingredient {
    pub id: Option<i64>,
    pub name: String,
    pub price: Price,
    pub stock: Option<i64>,
}

impl Ingredient {
    /// Create a new unlimited-stock Ingredient
    pub fn new(name: String, price: Price) -> Self {
        Self {
            id: None,
            name,
            price,
            stock: None,
        }
    }

    /// Create a new Ingredient with finite stock
    pub fn with_stock(name: String, price: Price, stock: i64) -> Self {
        Self {
            id: None,
            name,
            price,
            stock: Some(stock),
        }
    }

    /// Insert this ingredient into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO ingredients (name, price, stock) VALUES (?1, ?2, ?3)",
            params![&self.name, &self.price, &self.stock],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Find an ingredient by ID
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt =
            conn.prepare("SELECT id, name, price, stock FROM ingredients WHERE id = ?1")?;

        let ingredient = stmt.query_row([id], Self::from_row).optional()?;

        Ok(ingredient)
    }

    /// Find an ingredient by name
    pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Self>> {
        let mut stmt =
            conn.prepare("SELECT id, name, price, stock FROM ingredients WHERE name = ?1")?;

        let ingredient = stmt.query_row([name], Self::from_row).optional()?;

        Ok(ingredient)
    }

    /// List all ingredients, by name
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt =
            conn.prepare("SELECT id, name, price, stock FROM ingredients ORDER BY name")?;

        let ingredients = stmt
            .query_map([], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(ingredients)
    }

    /// Take one unit of finite stock. Returns false when no unit was left
    /// to take, which means a concurrent writer exhausted the row first.
    /// Unlimited rows must not be passed here.
    pub fn reserve_one(conn: &Connection, id: i64) -> Result<bool> {
        let changed = conn.execute(
            "UPDATE ingredients SET stock = stock - 1
             WHERE id = ?1 AND stock IS NOT NULL AND stock >= 1",
            [id],
        )?;
        Ok(changed > 0)
    }

    /// Return one unit of finite stock. A no-op for unlimited rows.
    pub fn release_one(conn: &Connection, id: i64) -> Result<()> {
        conn.execute(
            "UPDATE ingredients SET stock = stock + 1
             WHERE id = ?1 AND stock IS NOT NULL",
            [id],
        )?;
        Ok(())
    }

    /// Convert a database row to an Ingredient
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            price: row.get(2)?,
            stock: row.get(3)?,
        })
    }
}
