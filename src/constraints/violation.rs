// src/constraints/violation.rs

//! Violation types for selection validation
//!
//! Defines the reasons an ingredient selection can be rejected. Each
//! variant carries the structured detail the presentation layer needs
//! to render a specific message.

/// A constraint violation in a proposed ingredient selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The selection exceeds the dish's ingredient limit
    TooManyIngredients {
        dish: String,
        size: String,
        limit: i64,
        requested: usize,
    },
    /// An ingredient id does not exist in the catalog
    UnknownIngredient { id: i64 },
    /// Finite-stock ingredients with no units left; all offenders listed
    OutOfStock { names: Vec<String> },
    /// A selected ingredient requires one that is not selected
    MissingDependency {
        ingredient: String,
        requires: String,
    },
    /// Two selected ingredients exclude each other
    IncompatibleIngredients { first: String, second: String },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::TooManyIngredients {
                dish,
                size,
                limit,
                requested,
            } => write!(
                f,
                "too many ingredients: {} {} can have at most {} ({} requested)",
                size, dish, limit, requested
            ),
            Violation::UnknownIngredient { id } => {
                write!(f, "unknown ingredient id {}", id)
            }
            Violation::OutOfStock { names } => {
                write!(f, "not enough ingredients available: {}", names.join(", "))
            }
            Violation::MissingDependency {
                ingredient,
                requires,
            } => write!(f, "{} requires {} to be selected", ingredient, requires),
            Violation::IncompatibleIngredients { first, second } => {
                write!(f, "{} is incompatible with {}", first, second)
            }
        }
    }
}

impl std::error::Error for Violation {}
