// src/constraints/mod.rs

//! Selection validation
//!
//! The one authoritative check for whether an ingredient selection is
//! legal for a dish. Validation is a pure read of the catalog snapshot:
//! it mutates nothing and is deterministic for a given database state.
//!
//! Checks run in a fixed order and the first failure wins, so a rejected
//! request always carries one specific reason:
//!
//! 1. Cardinality against the dish's ingredient limit
//! 2. Existence of every selected id
//! 3. Availability of every finite-stock ingredient (all offenders reported)
//! 4. Dependencies: required ingredients must also be selected
//! 5. Incompatibilities: no selected pair may exclude each other
//!
//! Duplicate ids are collapsed before the first check, keeping the first
//! occurrence, so a repeated ingredient neither double-charges nor counts
//! twice against the limit.

mod violation;

pub use violation::Violation;

use crate::db::models::{DependencyLink, Dish, IncompatibilityPair, Ingredient};
use crate::error::Result;
use crate::price::Price;
use rusqlite::Connection;
use std::collections::HashSet;
use tracing::debug;

/// One resolved ingredient of a validated selection
#[derive(Debug, Clone)]
pub struct Selected {
    pub id: i64,
    pub name: String,
    pub price: Price,
    /// True when the ingredient draws from finite stock
    pub finite_stock: bool,
}

/// A selection that passed every check, with its computed total
#[derive(Debug, Clone)]
pub struct ValidatedSelection {
    /// Resolved ingredients in selection order, duplicates collapsed
    pub ingredients: Vec<Selected>,
    /// Dish unit price plus the sum of the selected ingredients' prices
    pub total_price: Price,
}

/// Validate a proposed ingredient selection for a dish and compute its
/// total price. Read-only; the caller decides what to do with the result.
pub fn validate_selection(
    conn: &Connection,
    dish: &Dish,
    requested: &[i64],
) -> Result<ValidatedSelection> {
    let ids = dedup_preserving_order(requested);
    debug!(
        "Validating {} ingredient(s) for {} {}",
        ids.len(),
        dish.size,
        dish.name
    );

    // 1. Cardinality
    if ids.len() as i64 > dish.max_ingredients {
        return Err(Violation::TooManyIngredients {
            dish: dish.name.clone(),
            size: dish.size.clone(),
            limit: dish.max_ingredients,
            requested: ids.len(),
        }
        .into());
    }

    // 2. Existence, collecting exhausted stock for the next check
    let mut selected = Vec::with_capacity(ids.len());
    let mut exhausted = Vec::new();
    for id in &ids {
        match Ingredient::find_by_id(conn, *id)? {
            Some(ingredient) => {
                if ingredient.stock == Some(0) {
                    exhausted.push(ingredient.name.clone());
                }
                selected.push(Selected {
                    id: *id,
                    name: ingredient.name,
                    price: ingredient.price,
                    finite_stock: ingredient.stock.is_some(),
                });
            }
            None => return Err(Violation::UnknownIngredient { id: *id }.into()),
        }
    }

    // 3. Availability: every exhausted ingredient is reported, not just the first
    if !exhausted.is_empty() {
        return Err(Violation::OutOfStock { names: exhausted }.into());
    }

    // 4. Dependencies
    let id_set: HashSet<i64> = ids.iter().copied().collect();
    for sel in &selected {
        for (required_id, required_name) in DependencyLink::required_for(conn, sel.id)? {
            if !id_set.contains(&required_id) {
                return Err(Violation::MissingDependency {
                    ingredient: sel.name.clone(),
                    requires: required_name,
                }
                .into());
            }
        }
    }

    // 5. Incompatibilities, matched in either declared direction
    for sel in &selected {
        for (conflict_id, conflict_name) in IncompatibilityPair::conflicting_with(conn, sel.id)? {
            if id_set.contains(&conflict_id) {
                return Err(Violation::IncompatibleIngredients {
                    first: sel.name.clone(),
                    second: conflict_name,
                }
                .into());
            }
        }
    }

    let total_price = dish.price + selected.iter().map(|s| s.price).sum::<Price>();

    Ok(ValidatedSelection {
        ingredients: selected,
        total_price,
    })
}

/// Collapse duplicate ids, keeping the first occurrence of each
fn dedup_preserving_order(ids: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
