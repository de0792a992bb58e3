// src/ledger/mod.rs

//! Order ledger
//!
//! Orchestrates validated order placement and cancellation with
//! inventory-consistent side effects. Every mutation runs inside one
//! IMMEDIATE transaction: validation, stock movement, and the order rows
//! commit together or not at all. A reservation that loses a race on the
//! last unit of stock rolls the whole placement back.

use crate::constraints::{self, Violation};
use crate::db;
use crate::db::models::{Dish, Ingredient, Order, OrderIngredient};
use crate::error::{Error, Result};
use crate::price::Price;
use chrono::Utc;
use rusqlite::Connection;
use serde::Serialize;
use tracing::{debug, info};

/// A user's order annotated with its ingredient selection, the shape the
/// request layer renders order history from
#[derive(Debug, Clone, Serialize)]
pub struct OrderRecord {
    pub id: i64,
    pub user_id: i64,
    pub dish_name: String,
    pub dish_size: String,
    pub total_price: Price,
    pub ordered_at: String,
    pub ingredient_ids: Vec<i64>,
    pub ingredients: Vec<String>,
}

/// Place an order: resolve the dish, validate the selection, reserve one
/// unit of every finite-stock ingredient, and persist the order with its
/// computed total. The stored price is fixed here and never recomputed
/// from live catalog prices.
pub fn place(
    conn: &mut Connection,
    user_id: i64,
    dish_name: &str,
    dish_size: &str,
    ingredient_ids: &[i64],
) -> Result<Order> {
    let order = db::transaction(conn, |tx| {
        let dish = Dish::find(tx, dish_name, dish_size)?.ok_or_else(|| Error::DishNotFound {
            name: dish_name.to_string(),
            size: dish_size.to_string(),
        })?;

        let selection = constraints::validate_selection(tx, &dish, ingredient_ids)?;

        for sel in &selection.ingredients {
            if !sel.finite_stock {
                continue;
            }
            // Guarded decrement: zero rows affected means a concurrent
            // placement took the last unit after validation read it.
            if !Ingredient::reserve_one(tx, sel.id)? {
                debug!("Reservation lost for {}, rolling back", sel.name);
                return Err(Violation::OutOfStock {
                    names: vec![sel.name.clone()],
                }
                .into());
            }
        }

        let mut order = Order::new(
            user_id,
            dish.name.clone(),
            dish.size.clone(),
            selection.total_price,
        );
        order.ordered_at = Some(Utc::now().format("%Y-%m-%d %H:%M:%S").to_string());
        let order_id = order.insert(tx)?;

        for sel in &selection.ingredients {
            OrderIngredient::new(order_id, sel.id).insert(tx)?;
        }

        Ok(order)
    })?;

    info!(
        "Placed order {} for user {}: {} {} at {}",
        order.id.unwrap_or_default(),
        user_id,
        dish_size,
        dish_name,
        order.total_price
    );
    Ok(order)
}

/// Cancel a user's order and restore one unit of stock for every
/// finite-stock ingredient it held. Requires the elevated trust flag the
/// session layer grants after a second authentication factor; the check
/// runs before any storage access.
pub fn cancel(conn: &mut Connection, user_id: i64, order_id: i64, elevated: bool) -> Result<()> {
    if !elevated {
        return Err(Error::Forbidden);
    }

    db::transaction(conn, |tx| {
        Order::find_for_user(tx, order_id, user_id)?.ok_or(Error::OrderNotFound(order_id))?;

        // Restore before delete; both sit in the same transaction, so a
        // failure in either leaves stock and ledger untouched.
        for ingredient_id in OrderIngredient::ids_for_order(tx, order_id)? {
            Ingredient::release_one(tx, ingredient_id)?;
        }

        Order::delete(tx, order_id, user_id)?;
        Ok(())
    })?;

    info!("Cancelled order {} for user {}", order_id, user_id);
    Ok(())
}

/// A user's orders, newest placement first, each annotated with its
/// ingredient names and ids. Pure read.
pub fn list_by_user(conn: &Connection, user_id: i64) -> Result<Vec<OrderRecord>> {
    let mut records = Vec::new();

    for order in Order::list_by_user(conn, user_id)? {
        let Some(id) = order.id else { continue };
        let selection = OrderIngredient::selection_for_order(conn, id)?;
        let (ingredient_ids, ingredients) = selection.into_iter().unzip();

        records.push(OrderRecord {
            id,
            user_id: order.user_id,
            dish_name: order.dish_name,
            dish_size: order.dish_size,
            total_price: order.total_price,
            ordered_at: order.ordered_at.unwrap_or_default(),
            ingredient_ids,
            ingredients,
        });
    }

    Ok(records)
}
