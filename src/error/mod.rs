//! Error types for the test helpers.
//!
//! Errors raised by the signing library, the database driver or the filesystem are carried
//! through unchanged via `#[error(transparent)]`, so a failing helper surfaces the original
//! cause in the calling test.

pub mod config;

use std::path::PathBuf;

use thiserror::Error;

use crate::error::config::ConfigError;

#[derive(Error, Debug)]
pub enum TestError {
    /// Missing or invalid configuration value.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error while connecting or restoring fixtures.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Token signing or verification error.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// A fixture file exists but does not hold the records of its collection.
    #[error("Failed to parse fixture file {}: {source}", path.display())]
    FixtureError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
