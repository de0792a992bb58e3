// src/db/mod.rs

//! SQLite access layer
//!
//! Connection setup, schema migration, and the transaction helper every
//! mutating operation goes through. Connections run with foreign keys
//! enforced and (for file databases) WAL journaling.

pub mod migrations;
pub mod models;
pub mod schema;
pub mod seed;

use crate::error::Result;
use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Initialize a database: create parent directories, apply pragmas, and
/// migrate the schema to the current version.
pub fn init(db_path: &str) -> Result<Connection> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let conn = open(db_path)?;
    schema::migrate(&conn)?;
    info!("Initialized database at {}", db_path);
    Ok(conn)
}

/// Open an existing database and apply per-connection pragmas.
pub fn open(db_path: &str) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure(&conn)?;

    // WAL lets one writer proceed alongside readers; a no-op on re-open.
    let _mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;

    Ok(conn)
}

/// Open a fresh in-memory database with the full schema applied.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    schema::migrate(&conn)?;
    Ok(conn)
}

/// Per-connection pragmas. Foreign key enforcement is off by default in
/// SQLite and must be switched on for every connection.
fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    Ok(())
}

/// Run a closure inside an IMMEDIATE transaction.
///
/// IMMEDIATE takes the write lock up front, so concurrent writers serialize
/// and a read-modify-write inside the closure cannot race another writer.
/// Commits when the closure returns `Ok`; any error rolls everything back.
pub fn transaction<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Transaction) -> Result<T>,
{
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}
