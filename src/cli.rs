// src/cli.rs

//! CLI definitions for the tavola ordering tool
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tavola")]
#[command(version)]
#[command(about = "Restaurant ordering core with atomic stock reservation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new database
    Init {
        /// Path to the database file
        #[arg(short, long, default_value = "tavola.db")]
        db_path: String,

        /// Load the demo menu after creating the schema
        #[arg(long)]
        demo: bool,
    },

    /// List the dishes on the menu
    Dishes {
        /// Path to the database file
        #[arg(short, long, default_value = "tavola.db")]
        db_path: String,

        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List ingredients with their constraints and stock
    Ingredients {
        /// Path to the database file
        #[arg(short, long, default_value = "tavola.db")]
        db_path: String,

        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Place an order
    Order {
        /// Dish name (e.g. pizza)
        dish: String,

        /// Dish size (e.g. Medium)
        size: String,

        /// Ingredient ids to add
        ingredient_ids: Vec<i64>,

        /// Ordering user id
        #[arg(short, long)]
        user: i64,

        /// Path to the database file
        #[arg(short, long, default_value = "tavola.db")]
        db_path: String,
    },

    /// List a user's orders, newest first
    Orders {
        /// Owning user id
        #[arg(short, long)]
        user: i64,

        /// Path to the database file
        #[arg(short, long, default_value = "tavola.db")]
        db_path: String,

        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Cancel an order and restore its ingredients' stock
    Cancel {
        /// Order id to cancel
        order_id: i64,

        /// Requesting user id
        #[arg(short, long)]
        user: i64,

        /// The session completed a second authentication factor
        #[arg(long)]
        elevated: bool,

        /// Path to the database file
        #[arg(short, long, default_value = "tavola.db")]
        db_path: String,
    },
}
