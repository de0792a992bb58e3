// src/db/models/relation.rs

//! Constraint relation models
//!
//! Two relations connect ingredients: dependencies are directional
//! (A requires B says nothing about B), incompatibilities are symmetric.
//! Incompatibility pairs are normalized on insert so only one row shape
//! exists per pair; lookups still match both columns.

use crate::error::Result;
use rusqlite::{Connection, Row, params};

/// Directional requires-relation between two ingredients
#[derive(Debug, Clone)]
pub struct DependencyLink {
    pub id: Option<i64>,
    pub ingredient_id: i64,
    pub required_ingredient_id: i64,
}

impl DependencyLink {
    /// Create a new DependencyLink
    pub fn new(ingredient_id: i64, required_ingredient_id: i64) -> Self {
        Self {
            id: None,
            ingredient_id,
            required_ingredient_id,
        }
    }

    /// Insert this dependency into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO ingredient_dependencies (ingredient_id, required_ingredient_id)
             VALUES (?1, ?2)",
            params![&self.ingredient_id, &self.required_ingredient_id],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Id and name of every ingredient the given ingredient requires
    pub fn required_for(conn: &Connection, ingredient_id: i64) -> Result<Vec<(i64, String)>> {
        let mut stmt = conn.prepare(
            "SELECT i.id, i.name FROM ingredients i
             JOIN ingredient_dependencies d ON i.id = d.required_ingredient_id
             WHERE d.ingredient_id = ?1
             ORDER BY i.name",
        )?;

        let required = stmt
            .query_map([ingredient_id], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(required)
    }

    /// Names of every ingredient the given ingredient requires
    pub fn required_names(conn: &Connection, ingredient_id: i64) -> Result<Vec<String>> {
        let required = Self::required_for(conn, ingredient_id)?;
        Ok(required.into_iter().map(|(_, name)| name).collect())
    }
}

/// Symmetric exclusion between two ingredients
#[derive(Debug, Clone)]
pub struct IncompatibilityPair {
    pub id: Option<i64>,
    pub first_ingredient_id: i64,
    pub second_ingredient_id: i64,
}

impl IncompatibilityPair {
    /// Create a new IncompatibilityPair, normalized so the lower id comes
    /// first regardless of declaration order.
    pub fn new(a: i64, b: i64) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self {
            id: None,
            first_ingredient_id: first,
            second_ingredient_id: second,
        }
    }

    /// Insert this pair into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO ingredient_incompatibilities (first_ingredient_id, second_ingredient_id)
             VALUES (?1, ?2)",
            params![&self.first_ingredient_id, &self.second_ingredient_id],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Id and name of every ingredient declared incompatible with the given
    /// one, matching the pair in either direction.
    pub fn conflicting_with(conn: &Connection, ingredient_id: i64) -> Result<Vec<(i64, String)>> {
        let mut stmt = conn.prepare(
            "SELECT i.id, i.name FROM ingredients i
             JOIN ingredient_incompatibilities p ON
                 (i.id = p.first_ingredient_id AND p.second_ingredient_id = ?1) OR
                 (i.id = p.second_ingredient_id AND p.first_ingredient_id = ?1)
             ORDER BY i.name",
        )?;

        let conflicting = stmt
            .query_map([ingredient_id], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(conflicting)
    }

    /// Names of every ingredient declared incompatible with the given one
    pub fn conflicting_names(conn: &Connection, ingredient_id: i64) -> Result<Vec<String>> {
        let conflicting = Self::conflicting_with(conn, ingredient_id)?;
        Ok(conflicting.into_iter().map(|(_, name)| name).collect())
    }
}
