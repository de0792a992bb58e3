// src/db/models/order.rs

//! Order models - the immutable ledger rows
//!
//! An order is created with its price fixed at placement and is never
//! edited afterwards; the only other operation is deletion on cancel,
//! which removes the selection rows together with the order.

use crate::error::Result;
use crate::price::Price;
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde::Serialize;

/// A placed order
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: Option<i64>,
    pub user_id: i64,
    pub dish_name: String,
    pub dish_size: String,
    pub total_price: Price,
    pub ordered_at: Option<String>,
}

impl Order {
    /// Create a new Order
    pub fn new(user_id: i64, dish_name: String, dish_size: String, total_price: Price) -> Self {
        Self {
            id: None,
            user_id,
            dish_name,
            dish_size,
            total_price,
            ordered_at: None,
        }
    }

    /// Insert this order into the database. When `ordered_at` is unset the
    /// database stamps the current time.
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        match &self.ordered_at {
            Some(stamp) => {
                conn.execute(
                    "INSERT INTO orders (user_id, dish_name, dish_size, total_price, ordered_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        &self.user_id,
                        &self.dish_name,
                        &self.dish_size,
                        &self.total_price,
                        stamp,
                    ],
                )?;
            }
            None => {
                conn.execute(
                    "INSERT INTO orders (user_id, dish_name, dish_size, total_price)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![
                        &self.user_id,
                        &self.dish_name,
                        &self.dish_size,
                        &self.total_price,
                    ],
                )?;
            }
        }

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Find an order by id, scoped to its owner
    pub fn find_for_user(conn: &Connection, id: i64, user_id: i64) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, user_id, dish_name, dish_size, total_price, ordered_at
             FROM orders WHERE id = ?1 AND user_id = ?2",
        )?;

        let order = stmt
            .query_row(params![id, user_id], Self::from_row)
            .optional()?;

        Ok(order)
    }

    /// List a user's orders, newest placement first
    pub fn list_by_user(conn: &Connection, user_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, user_id, dish_name, dish_size, total_price, ordered_at
             FROM orders WHERE user_id = ?1
             ORDER BY ordered_at DESC, id DESC",
        )?;

        let orders = stmt
            .query_map([user_id], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(orders)
    }

    /// Delete an order and its selection rows
    pub fn delete(conn: &Connection, id: i64, user_id: i64) -> Result<()> {
        conn.execute("DELETE FROM order_ingredients WHERE order_id = ?1", [id])?;
        conn.execute(
            "DELETE FROM orders WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
        )?;
        Ok(())
    }

    /// Convert a database row to an Order
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            user_id: row.get(1)?,
            dish_name: row.get(2)?,
            dish_size: row.get(3)?,
            total_price: row.get(4)?,
            ordered_at: row.get(5)?,
        })
    }
}

/// A selection row linking an order to one of its ingredients
#[derive(Debug, Clone)]
pub struct OrderIngredient {
    pub id: Option<i64>,
    pub order_id: i64,
    pub ingredient_id: i64,
}

impl OrderIngredient {
    /// Create a new OrderIngredient
    pub fn new(order_id: i64, ingredient_id: i64) -> Self {
        Self {
            id: None,
            order_id,
            ingredient_id,
        }
    }

    /// Insert this selection row into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO order_ingredients (order_id, ingredient_id) VALUES (?1, ?2)",
            params![&self.order_id, &self.ingredient_id],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Ingredient ids of an order, in selection order
    pub fn ids_for_order(conn: &Connection, order_id: i64) -> Result<Vec<i64>> {
        let mut stmt = conn.prepare(
            "SELECT ingredient_id FROM order_ingredients WHERE order_id = ?1 ORDER BY id",
        )?;

        let ids = stmt
            .query_map([order_id], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(ids)
    }

    /// Ingredient ids and names of an order, in selection order
    pub fn selection_for_order(conn: &Connection, order_id: i64) -> Result<Vec<(i64, String)>> {
        let mut stmt = conn.prepare(
            "SELECT i.id, i.name FROM ingredients i
             JOIN order_ingredients oi ON i.id = oi.ingredient_id
             WHERE oi.order_id = ?1
             ORDER BY oi.id",
        )?;

        let selection = stmt
            .query_map([order_id], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(selection)
    }
}
