// src/commands.rs
//! Command handlers for the tavola CLI

use anyhow::Result;
use tavola::{catalog, db, ledger};
use tracing::info;

/// Initialize the database, optionally loading the demo menu
pub fn init(db_path: &str, demo: bool) -> Result<()> {
    let mut conn = db::init(db_path)?;

    if demo {
        db::seed::demo_menu(&mut conn)?;
        info!("Loaded demo menu");
    }

    println!("Initialized database at {}", db_path);
    Ok(())
}

/// List dishes by name and price
pub fn dishes(db_path: &str, json: bool) -> Result<()> {
    let conn = db::open(db_path)?;
    let dishes = catalog::list_dishes(&conn)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dishes)?);
        return Ok(());
    }

    println!("{:<12} {:<8} {:>8}  {}", "DISH", "SIZE", "PRICE", "MAX INGREDIENTS");
    for dish in dishes {
        println!(
            "{:<12} {:<8} {:>8}  {}",
            dish.name, dish.size, dish.price, dish.max_ingredients
        );
    }
    Ok(())
}

/// List ingredients with stock and constraint annotations
pub fn ingredients(db_path: &str, json: bool) -> Result<()> {
    let conn = db::open(db_path)?;
    let ingredients = catalog::list_ingredients(&conn)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ingredients)?);
        return Ok(());
    }

    println!("{:<4} {:<14} {:>8} {:>8}  {}", "ID", "NAME", "PRICE", "STOCK", "CONSTRAINTS");
    for item in ingredients {
        let stock = item
            .stock
            .map_or_else(|| "-".to_string(), |n| n.to_string());

        let mut notes = Vec::new();
        if !item.dependencies.is_empty() {
            notes.push(format!("requires {}", item.dependencies.join(", ")));
        }
        if !item.incompatibilities.is_empty() {
            notes.push(format!("excludes {}", item.incompatibilities.join(", ")));
        }

        println!(
            "{:<4} {:<14} {:>8} {:>8}  {}",
            item.id,
            item.name,
            item.price,
            stock,
            notes.join("; ")
        );
    }
    Ok(())
}

/// Place an order and print the receipt
pub fn order(
    db_path: &str,
    user: i64,
    dish: &str,
    size: &str,
    ingredient_ids: &[i64],
) -> Result<()> {
    let mut conn = db::open(db_path)?;
    let order = ledger::place(&mut conn, user, dish, size, ingredient_ids)?;

    println!(
        "Order {} placed: {} {} for {}",
        order.id.unwrap_or_default(),
        order.dish_size,
        order.dish_name,
        order.total_price
    );
    Ok(())
}

/// List a user's orders, newest first
pub fn orders(db_path: &str, user: i64, json: bool) -> Result<()> {
    let conn = db::open(db_path)?;
    let records = ledger::list_by_user(&conn, user)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No orders for user {}", user);
        return Ok(());
    }

    for record in records {
        println!(
            "#{} {} - {} {} ({}) [{}]",
            record.id,
            record.ordered_at,
            record.dish_size,
            record.dish_name,
            record.total_price,
            record.ingredients.join(", ")
        );
    }
    Ok(())
}

/// Cancel an order, restoring its ingredients' stock
pub fn cancel(db_path: &str, user: i64, order_id: i64, elevated: bool) -> Result<()> {
    let mut conn = db::open(db_path)?;
    ledger::cancel(&mut conn, user, order_id, elevated)?;

    println!("Order {} cancelled", order_id);
    Ok(())
}
