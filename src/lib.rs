//! Helpers for the Giveth donation backend's end-to-end tests.
//!
//! - [`auth`] issues bearer tokens for test identities
//! - [`seed`] restores the fixture seed set into a database
//! - [`sample_data`] names the records that seed set contains
//! - [`random`] and [`format`] produce throwaway identifiers and formatted values
//! - [`assertion`] turns the outcome of an async operation into a test assertion

pub mod assertion;
pub mod auth;
pub mod builder;
pub mod config;
pub mod constant;
pub mod context;
pub mod error;
pub mod format;
pub mod random;
pub mod sample_data;
pub mod seed;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        assertion::{assert_not_throws_async, assert_throws_async},
        auth::{get_jwt, JwtIssuer},
        config::TestConfig,
        format::pad_with_zero,
        random::{
            generate_hex_number, generate_random_ethereum_address, generate_random_mongo_id,
            generate_random_number, generate_random_transaction_hash,
        },
        sample_data,
        seed::{seed_data, seed_from_config, Seeder},
        TestBuilder, TestContext, TestError,
    };
}
