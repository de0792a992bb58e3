// tests/ordering.rs

//! Integration tests for the order ledger
//!
//! These tests verify the place/cancel lifecycle end to end: price
//! computation, stock movement, atomic rollback, and the trust gate on
//! cancellation.

mod common;

use common::{order_count, setup_pizzeria_db, stock_of, stock_snapshot};
use tavola::{Error, Violation, db, ledger};

#[test]
fn test_place_computes_price_and_reserves_stock() {
    let (_dir, db_path, menu) = setup_pizzeria_db();
    let mut conn = db::open(&db_path).unwrap();

    let order = ledger::place(
        &mut conn,
        1,
        "pizza",
        "Medium",
        &[menu.mozzarella, menu.pepperoni],
    )
    .unwrap();

    assert_eq!(order.total_price.to_string(), "9.50");
    assert!(order.id.is_some());

    // The scarce topping lost its single unit; the unlimited one is untouched.
    assert_eq!(stock_of(&conn, menu.pepperoni), Some(0));
    assert_eq!(stock_of(&conn, menu.mozzarella), None);
}

#[test]
fn test_exhausted_topping_rejects_next_order() {
    let (_dir, db_path, menu) = setup_pizzeria_db();
    let mut conn = db::open(&db_path).unwrap();

    ledger::place(&mut conn, 1, "pizza", "Medium", &[menu.pepperoni]).unwrap();

    // A second order over the same last unit must lose, with no side effects.
    let before = stock_snapshot(&conn);
    let err = ledger::place(&mut conn, 2, "pizza", "Medium", &[menu.pepperoni]).unwrap_err();
    match err {
        Error::Rejected(Violation::OutOfStock { names }) => {
            assert_eq!(names, vec!["pepperoni".to_string()]);
        }
        other => panic!("expected OutOfStock, got {}", other),
    }
    assert_eq!(stock_snapshot(&conn), before);
    assert_eq!(order_count(&conn), 1);
}

#[test]
fn test_rejected_selection_leaves_no_trace() {
    let (_dir, db_path, menu) = setup_pizzeria_db();
    let mut conn = db::open(&db_path).unwrap();

    let before = stock_snapshot(&conn);
    let err = ledger::place(
        &mut conn,
        1,
        "pizza",
        "Medium",
        &[menu.pepperoni, menu.pineapple],
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::Rejected(Violation::IncompatibleIngredients { .. })
    ));
    assert_eq!(stock_snapshot(&conn), before);
    assert_eq!(order_count(&conn), 0);
}

#[test]
fn test_unknown_dish() {
    let (_dir, db_path, menu) = setup_pizzeria_db();
    let mut conn = db::open(&db_path).unwrap();

    let err = ledger::place(&mut conn, 1, "pizza", "Giant", &[menu.mozzarella]).unwrap_err();
    assert!(matches!(err, Error::DishNotFound { .. }));
    assert_eq!(order_count(&conn), 0);
}

#[test]
fn test_dependency_scenario() {
    let (_dir, db_path, menu) = setup_pizzeria_db();
    let mut conn = db::open(&db_path).unwrap();

    let err = ledger::place(&mut conn, 1, "pizza", "Medium", &[menu.truffle]).unwrap_err();
    match err {
        Error::Rejected(Violation::MissingDependency {
            ingredient,
            requires,
        }) => {
            assert_eq!(ingredient, "truffle");
            assert_eq!(requires, "cheese");
        }
        other => panic!("expected MissingDependency, got {}", other),
    }

    let order =
        ledger::place(&mut conn, 1, "pizza", "Medium", &[menu.truffle, menu.cheese]).unwrap();
    assert_eq!(order.total_price.to_string(), "10.20");
}

#[test]
fn test_duplicates_collapse_in_placement() {
    let (_dir, db_path, menu) = setup_pizzeria_db();
    let mut conn = db::open(&db_path).unwrap();

    let order = ledger::place(
        &mut conn,
        1,
        "pizza",
        "Medium",
        &[menu.mozzarella, menu.mozzarella],
    )
    .unwrap();
    assert_eq!(order.total_price.to_string(), "8.00");

    let records = ledger::list_by_user(&conn, 1).unwrap();
    assert_eq!(records[0].ingredients, vec!["mozzarella".to_string()]);
}

#[test]
fn test_cancel_restores_stock_and_removes_order() {
    let (_dir, db_path, menu) = setup_pizzeria_db();
    let mut conn = db::open(&db_path).unwrap();

    let before = stock_snapshot(&conn);
    let order = ledger::place(
        &mut conn,
        1,
        "pizza",
        "Medium",
        &[menu.pepperoni, menu.mozzarella],
    )
    .unwrap();
    assert_eq!(stock_of(&conn, menu.pepperoni), Some(0));

    ledger::cancel(&mut conn, 1, order.id.unwrap(), true).unwrap();

    // Stock is back to its pre-order value and the ledger is empty.
    assert_eq!(stock_snapshot(&conn), before);
    assert_eq!(order_count(&conn), 0);
    assert!(ledger::list_by_user(&conn, 1).unwrap().is_empty());
}

#[test]
fn test_cancel_requires_elevated_session() {
    let (_dir, db_path, menu) = setup_pizzeria_db();
    let mut conn = db::open(&db_path).unwrap();

    let order = ledger::place(&mut conn, 1, "pizza", "Medium", &[menu.pepperoni]).unwrap();

    // Even the owner is refused without the second factor.
    let err = ledger::cancel(&mut conn, 1, order.id.unwrap(), false).unwrap_err();
    assert!(matches!(err, Error::Forbidden));

    assert_eq!(order_count(&conn), 1);
    assert_eq!(stock_of(&conn, menu.pepperoni), Some(0));
}

#[test]
fn test_cancel_is_scoped_to_owner() {
    let (_dir, db_path, menu) = setup_pizzeria_db();
    let mut conn = db::open(&db_path).unwrap();

    let order = ledger::place(&mut conn, 1, "pizza", "Medium", &[menu.mozzarella]).unwrap();

    let err = ledger::cancel(&mut conn, 2, order.id.unwrap(), true).unwrap_err();
    assert!(matches!(err, Error::OrderNotFound(_)));
    assert_eq!(order_count(&conn), 1);

    let err = ledger::cancel(&mut conn, 1, 9999, true).unwrap_err();
    assert!(matches!(err, Error::OrderNotFound(9999)));
}

#[test]
fn test_stored_price_survives_catalog_changes() {
    let (_dir, db_path, menu) = setup_pizzeria_db();
    let mut conn = db::open(&db_path).unwrap();

    ledger::place(&mut conn, 1, "pizza", "Medium", &[menu.mozzarella]).unwrap();

    // Reprice the catalog after the fact; history keeps the old total.
    conn.execute(
        "UPDATE ingredients SET price = '9.99' WHERE id = ?1",
        [menu.mozzarella],
    )
    .unwrap();
    conn.execute("UPDATE dishes SET price = '99.00'", []).unwrap();

    let records = ledger::list_by_user(&conn, 1).unwrap();
    assert_eq!(records[0].total_price.to_string(), "8.00");
}

#[test]
fn test_orders_listed_newest_first_with_annotations() {
    let (_dir, db_path, menu) = setup_pizzeria_db();
    let mut conn = db::open(&db_path).unwrap();

    let first = ledger::place(&mut conn, 1, "pizza", "Small", &[]).unwrap();
    let second = ledger::place(
        &mut conn,
        1,
        "pizza",
        "Medium",
        &[menu.truffle, menu.cheese],
    )
    .unwrap();
    // Another user's orders stay out of the listing.
    ledger::place(&mut conn, 2, "pizza", "Small", &[]).unwrap();

    let records = ledger::list_by_user(&conn, 1).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, second.id.unwrap());
    assert_eq!(records[1].id, first.id.unwrap());
    assert_eq!(
        records[0].ingredients,
        vec!["truffle".to_string(), "cheese".to_string()]
    );
    assert_eq!(records[0].ingredient_ids, vec![menu.truffle, menu.cheese]);
    assert!(records[1].ingredients.is_empty());
}

#[test]
fn test_transaction_rolls_back_partial_reservations() {
    let (_dir, db_path, menu) = setup_pizzeria_db();
    let mut conn = db::open(&db_path).unwrap();

    let before = stock_snapshot(&conn);

    // Reserve a unit, then fail the transaction; the reservation must not
    // survive the rollback.
    let result: tavola::Result<()> = db::transaction(&mut conn, |tx| {
        assert!(tavola::Ingredient::reserve_one(tx, menu.pineapple).unwrap());
        Err(Error::OrderNotFound(0))
    });
    assert!(result.is_err());

    assert_eq!(stock_snapshot(&conn), before);
}
