//! CLI subcommands.

pub mod catalog;
pub mod migrate;
pub mod quote;

use tagsmith_core::CustomOrderError;
use tagsmith_storefront::config::ConfigError;
use thiserror::Error;

/// Errors reported by any subcommand.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("{0}")]
    InvalidInput(#[from] CustomOrderError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
