// src/catalog/mod.rs

//! Read-only catalog lookups
//!
//! Dishes and ingredients are reference data owned by the storage layer;
//! this module exposes the read surface the request layer and the
//! validator work from. Ingredient listings are annotated with their
//! resolved dependency and incompatibility name sets at read time.

use crate::db::models::{DependencyLink, Dish, IncompatibilityPair, Ingredient};
use crate::error::Result;
use crate::price::Price;
use rusqlite::Connection;
use serde::Serialize;

/// An ingredient together with its resolved constraint relations
#[derive(Debug, Clone, Serialize)]
pub struct IngredientInfo {
    pub id: i64,
    pub name: String,
    pub price: Price,
    /// Remaining units; `None` means unlimited
    pub stock: Option<i64>,
    /// Names of ingredients this one requires
    pub dependencies: Vec<String>,
    /// Names of ingredients this one excludes, in either declared direction
    pub incompatibilities: Vec<String>,
}

/// Find a dish by its (name, size) key
pub fn find_dish(conn: &Connection, name: &str, size: &str) -> Result<Option<Dish>> {
    Dish::find(conn, name, size)
}

/// List all dishes, by name and then by price ascending
pub fn list_dishes(conn: &Connection) -> Result<Vec<Dish>> {
    Dish::list_all(conn)
}

/// Find an ingredient by id
pub fn find_ingredient(conn: &Connection, id: i64) -> Result<Option<Ingredient>> {
    Ingredient::find_by_id(conn, id)
}

/// List all ingredients by name, each annotated with its dependency and
/// incompatibility name sets
pub fn list_ingredients(conn: &Connection) -> Result<Vec<IngredientInfo>> {
    let mut annotated = Vec::new();

    for ingredient in Ingredient::list_all(conn)? {
        let Some(id) = ingredient.id else { continue };
        annotated.push(IngredientInfo {
            id,
            name: ingredient.name,
            price: ingredient.price,
            stock: ingredient.stock,
            dependencies: DependencyLink::required_names(conn, id)?,
            incompatibilities: IncompatibilityPair::conflicting_names(conn, id)?,
        });
    }

    Ok(annotated)
}
