//! Declarative test setup.
//!
//! `TestBuilder` collects what a test needs and performs it in `build()`: connect to the
//! configured database, then restore the fixture seed set when asked to.

use std::path::PathBuf;

use crate::{
    config::TestConfig,
    error::TestError,
    seed::{self, Seeder},
    TestContext,
};

/// Builder for test environments.
///
/// Without configuration the builder uses [`TestConfig::local`], an in-memory SQLite
/// database private to the returned context.
#[derive(Debug, Default)]
pub struct TestBuilder {
    config: Option<TestConfig>,
    seed_root: Option<PathBuf>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config` instead of the local defaults.
    pub fn with_config(mut self, config: TestConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Restore the default fixture seed set during `build()`.
    pub fn with_seed_data(self) -> Self {
        self.with_seed_root(seed::DEFAULT_SEED_ROOT)
    }

    /// Restore the seed set found in `root` during `build()`.
    pub fn with_seed_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.seed_root = Some(root.into());
        self
    }

    /// Connect to the database and restore fixtures if requested.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Connected, and seeded when configured
    /// - `Err(TestError::DbErr)` - Connection or restore failed
    /// - `Err(TestError::IoError)` / `Err(TestError::FixtureError)` - Seed set unreadable
    pub async fn build(self) -> Result<TestContext, TestError> {
        let config = self.config.unwrap_or_else(TestConfig::local);
        let db = seed::connect(&config).await?;

        let seed_report = match self.seed_root {
            Some(root) => Some(Seeder::new(root).restore(&db).await?),
            None => None,
        };

        Ok(TestContext {
            db,
            config,
            seed_report,
        })
    }
}
