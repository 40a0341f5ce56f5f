//! Test context structure returned by [`TestBuilder`](crate::TestBuilder).
//!
//! The context owns the database connection the test works against, the configuration it was
//! built from, and the seed report when fixtures were restored.

use sea_orm::DatabaseConnection;

use crate::{
    auth::JwtIssuer, config::TestConfig, error::TestError, sample_data::USER_ADDRESS,
    seed::SeedReport,
};

/// Test environment ready for use.
///
/// ```ignore
/// let test = TestBuilder::new().with_seed_data().build().await?;
///
/// let campaign = entity::prelude::Campaign::find_by_id(CAMPAIGN_ID)
///     .one(&test.db)
///     .await?;
/// let authorization = test.get_jwt(None)?;
/// ```
pub struct TestContext {
    /// Connection to the test database
    pub db: DatabaseConnection,
    pub config: TestConfig,
    /// Present when the builder restored the seed set
    pub seed_report: Option<SeedReport>,
}

impl TestContext {
    /// Token issuer using this context's authentication settings.
    pub fn jwt(&self) -> JwtIssuer {
        JwtIssuer::new(self.config.authentication.clone())
    }

    /// Issue a bearer token for `address`, or for [`USER_ADDRESS`] when `None`.
    pub fn get_jwt(&self, address: Option<&str>) -> Result<String, TestError> {
        self.jwt().get_jwt(address.unwrap_or(USER_ADDRESS))
    }
}
