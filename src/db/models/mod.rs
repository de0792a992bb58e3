// src/db/models/mod.rs

//! Data models for database entities
//!
//! This module defines Rust structs that correspond to database tables
//! and provides methods for creating, reading, updating, and deleting records.

mod dish;
mod ingredient;
mod order;
mod relation;

pub use dish::Dish;
pub use ingredient::Ingredient;
pub use order::{Order, OrderIngredient};
pub use relation::{DependencyLink, IncompatibilityPair};
