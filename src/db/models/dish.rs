// src/db/models/dish.rs

//! Dish model - priced menu items keyed by (name, size)

use crate::error::Result;
use crate::price::Price;
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde::Serialize;

/// A dish is immutable reference data: created at catalog load, never
/// mutated by the order flow.
#[derive(Debug, Clone, Serialize)]
pub struct Dish {
    pub id: Option<i64>,
    pub name: String,
    pub size: String,
    pub price: Price,
    pub max_ingredients: i64,
}

impl Dish {
    /// Create a new Dish
    pub fn new(name: String, size: String, price: Price, max_ingredients: i64) -> Self {
        Self {
            id: None,
            name,
            size,
            price,
            max_ingredients,
        }
    }

    /// Insert this dish into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO dishes (name, size, price, max_ingredients)
             VALUES (?1, ?2, ?3, ?4)",
            params![&self.name, &self.size, &self.price, &self.max_ingredients],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Find a dish by its (name, size) key
    pub fn find(conn: &Connection, name: &str, size: &str) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, size, price, max_ingredients
             FROM dishes WHERE name = ?1 AND size = ?2",
        )?;

        let dish = stmt.query_row([name, size], Self::from_row).optional()?;

        Ok(dish)
    }

    /// List all dishes, by name and then by price ascending
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, size, price, max_ingredients
             FROM dishes ORDER BY name, CAST(price AS REAL)",
        )?;

        let dishes = stmt
            .query_map([], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(dishes)
    }

    /// Convert a database row to a Dish
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            size: row.get(2)?,
            price: row.get(3)?,
            max_ingredients: row.get(4)?,
        })
    }
}
