// src/main.rs

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { db_path, demo } => commands::init(&db_path, demo),
        Commands::Dishes { db_path, json } => commands::dishes(&db_path, json),
        Commands::Ingredients { db_path, json } => commands::ingredients(&db_path, json),
        Commands::Order {
            dish,
            size,
            ingredient_ids,
            user,
            db_path,
        } => commands::order(&db_path, user, &dish, &size, &ingredient_ids),
        Commands::Orders {
            user,
            db_path,
            json,
        } => commands::orders(&db_path, user, json),
        Commands::Cancel {
            order_id,
            user,
            elevated,
            db_path,
        } => commands::cancel(&db_path, user, order_id, elevated),
    }
}
