// src/db/seed.rs

//! Demo menu loader
//!
//! Populates an empty database with a small menu: three dish names in
//! three sizes, a dozen ingredients with finite stock on the scarce ones,
//! and a handful of dependency and incompatibility relations. Used by
//! `init --demo` and by the test suite.

use crate::db;
use crate::db::models::{DependencyLink, Dish, IncompatibilityPair, Ingredient};
use crate::error::Result;
use rusqlite::Connection;
use std::collections::HashMap;
use tracing::info;

/// Load the demo menu into an empty database
pub fn demo_menu(conn: &mut Connection) -> Result<()> {
    db::transaction(conn, |tx| {
        for (name, size, price, max_ingredients) in [
            ("pizza", "Small", "5.00", 3),
            ("pizza", "Medium", "7.00", 5),
            ("pizza", "Large", "9.00", 7),
            ("pasta", "Small", "5.00", 3),
            ("pasta", "Medium", "7.00", 5),
            ("pasta", "Large", "9.00", 7),
            ("salad", "Small", "5.00", 3),
            ("salad", "Medium", "7.00", 5),
            ("salad", "Large", "9.00", 7),
        ] {
            Dish::new(
                name.to_string(),
                size.to_string(),
                price.parse()?,
                max_ingredients,
            )
            .insert(tx)?;
        }

        let mut ids: HashMap<&str, i64> = HashMap::new();
        for (name, price, stock) in [
            ("mozzarella", "1.00", None),
            ("tomatoes", "0.50", None),
            ("mushrooms", "0.80", Some(3)),
            ("ham", "1.20", None),
            ("olives", "0.70", None),
            ("tuna", "1.50", Some(2)),
            ("eggs", "1.00", None),
            ("anchovies", "1.50", Some(1)),
            ("parmesan", "1.20", None),
            ("carrots", "0.40", None),
            ("potatoes", "0.30", None),
        ] {
            let mut ingredient = match stock {
                Some(n) => Ingredient::with_stock(name.to_string(), price.parse()?, n),
                None => Ingredient::new(name.to_string(), price.parse()?),
            };
            ids.insert(name, ingredient.insert(tx)?);
        }

        for (dependent, required) in [
            ("parmesan", "mozzarella"),
            ("tuna", "olives"),
            ("anchovies", "olives"),
        ] {
            DependencyLink::new(ids[dependent], ids[required]).insert(tx)?;
        }

        for (a, b) in [
            ("eggs", "mushrooms"),
            ("ham", "tuna"),
            ("anchovies", "parmesan"),
        ] {
            IncompatibilityPair::new(ids[a], ids[b]).insert(tx)?;
        }

        Ok(())
    })?;

    info!("Seeded demo menu");
    Ok(())
}
