// src/db/migrations.rs

//! Database migration implementations
//!
//! This module contains the individual migration functions for evolving
//! the database schema. Each migration function handles a specific
//! version upgrade.

use crate::error::Result;
use rusqlite::Connection;
use tracing::debug;

/// Initial schema - Version 1
///
/// Creates all core tables:
/// - dishes: Priced menu items keyed by (name, size)
/// - ingredients: Addable items with optional finite stock
/// - ingredient_dependencies: Directional requires-relations
/// - ingredient_incompatibilities: Symmetric exclusion pairs
/// - orders: Placed orders with the price fixed at placement
/// - order_ingredients: Selection rows for each order
pub fn migrate_v1(conn: &Connection) -> Result<()> {
    debug!("Creating schema version 1");

    conn.execute_batch(
        "
        -- Dishes: Immutable reference data, one row per (name, size)
        CREATE TABLE dishes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            size TEXT NOT NULL,
            price TEXT NOT NULL,
            max_ingredients INTEGER NOT NULL CHECK(max_ingredients >= 0),
            UNIQUE(name, size)
        );

        CREATE INDEX idx_dishes_name ON dishes(name);

        -- Ingredients: stock NULL means unlimited; finite stock never negative
        CREATE TABLE ingredients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            price TEXT NOT NULL,
            stock INTEGER CHECK(stock IS NULL OR stock >= 0)
        );

        -- Dependencies: directional, ingredient requires required_ingredient
        CREATE TABLE ingredient_dependencies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            ingredient_id INTEGER NOT NULL,
            required_ingredient_id INTEGER NOT NULL,
            UNIQUE(ingredient_id, required_ingredient_id),
            FOREIGN KEY (ingredient_id) REFERENCES ingredients(id),
            FOREIGN KEY (required_ingredient_id) REFERENCES ingredients(id)
        );

        CREATE INDEX idx_dependencies_ingredient
            ON ingredient_dependencies(ingredient_id);

        -- Incompatibilities: stored normalized (first < second) so the pair
        -- is symmetric by construction; reads still match both columns
        CREATE TABLE ingredient_incompatibilities (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_ingredient_id INTEGER NOT NULL,
            second_ingredient_id INTEGER NOT NULL,
            CHECK(first_ingredient_id < second_ingredient_id),
            UNIQUE(first_ingredient_id, second_ingredient_id),
            FOREIGN KEY (first_ingredient_id) REFERENCES ingredients(id),
            FOREIGN KEY (second_ingredient_id) REFERENCES ingredients(id)
        );

        CREATE INDEX idx_incompatibilities_first
            ON ingredient_incompatibilities(first_ingredient_id);
        CREATE INDEX idx_incompatibilities_second
            ON ingredient_incompatibilities(second_ingredient_id);

        -- Orders: total_price is computed at placement and never recomputed
        CREATE TABLE orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            dish_name TEXT NOT NULL,
            dish_size TEXT NOT NULL,
            total_price TEXT NOT NULL,
            ordered_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX idx_orders_user ON orders(user_id);
        CREATE INDEX idx_orders_ordered_at ON orders(ordered_at);

        -- Order ingredients: selection rows, removed with their order
        CREATE TABLE order_ingredients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            order_id INTEGER NOT NULL,
            ingredient_id INTEGER NOT NULL,
            UNIQUE(order_id, ingredient_id),
            FOREIGN KEY (order_id) REFERENCES orders(id),
            FOREIGN KEY (ingredient_id) REFERENCES ingredients(id)
        );

        CREATE INDEX idx_order_ingredients_order ON order_ingredients(order_id);
        ",
    )?;

    Ok(())
}
