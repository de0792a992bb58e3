// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use tavola::db;
use tavola::db::models::{DependencyLink, Dish, IncompatibilityPair, Ingredient};
use tempfile::TempDir;

/// Ingredient ids of the test menu
pub struct Menu {
    pub mozzarella: i64,
    pub pepperoni: i64,
    pub pineapple: i64,
    pub truffle: i64,
    pub cheese: i64,
}

/// Create a test database with a pizzeria menu: a Medium pizza with room
/// for five ingredients, one scarce topping, one incompatible pair, and
/// one dependency chain.
///
/// Returns (TempDir, db_path, menu) - keep the TempDir alive to prevent cleanup.
pub fn setup_pizzeria_db() -> (TempDir, String, Menu) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_str()
        .unwrap()
        .to_string();

    let mut conn = db::init(&db_path).unwrap();

    let menu = db::transaction(&mut conn, |tx| {
        Dish::new(
            "pizza".to_string(),
            "Medium".to_string(),
            "7.00".parse()?,
            5,
        )
        .insert(tx)?;
        Dish::new("pizza".to_string(), "Small".to_string(), "5.00".parse()?, 3)
            .insert(tx)?;

        let mozzarella =
            Ingredient::new("mozzarella".to_string(), "1.00".parse()?).insert(tx)?;
        let pepperoni =
            Ingredient::with_stock("pepperoni".to_string(), "1.50".parse()?, 1).insert(tx)?;
        let pineapple =
            Ingredient::with_stock("pineapple".to_string(), "1.00".parse()?, 3).insert(tx)?;
        let truffle = Ingredient::new("truffle".to_string(), "2.20".parse()?).insert(tx)?;
        let cheese = Ingredient::new("cheese".to_string(), "1.00".parse()?).insert(tx)?;

        IncompatibilityPair::new(pepperoni, pineapple).insert(tx)?;
        DependencyLink::new(truffle, cheese).insert(tx)?;

        Ok(Menu {
            mozzarella,
            pepperoni,
            pineapple,
            truffle,
            cheese,
        })
    })
    .unwrap();

    (temp_dir, db_path, menu)
}

/// Read an ingredient's stock column directly
pub fn stock_of(conn: &rusqlite::Connection, id: i64) -> Option<i64> {
    conn.query_row(
        "SELECT stock FROM ingredients WHERE id = ?1",
        [id],
        |row| row.get(0),
    )
    .unwrap()
}

/// Snapshot (id, stock) for every ingredient
pub fn stock_snapshot(conn: &rusqlite::Connection) -> Vec<(i64, Option<i64>)> {
    let mut stmt = conn
        .prepare("SELECT id, stock FROM ingredients ORDER BY id")
        .unwrap();
    let rows = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .collect::<rusqlite::Result<Vec<_>>>()
        .unwrap();
    rows
}

/// Count order rows in the database
pub fn order_count(conn: &rusqlite::Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM orders", [], |row| row.get(0))
        .unwrap()
}
