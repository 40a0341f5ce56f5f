//! Default configuration values for running the helpers without an environment.
//!
//! These mirror the defaults of the donation backend's own test configuration. The secret is
//! a placeholder and must never be used outside of tests.

/// HMAC secret used to sign test tokens.
pub static TEST_AUTHENTICATION_SECRET: &str = "giveth-e2e-test-secret";

pub static TEST_JWT_AUDIENCE: &str = "https://yourdomain.com";

pub static TEST_JWT_ISSUER: &str = "feathers";

pub static TEST_JWT_SUBJECT: &str = "anonymous";

pub static TEST_JWT_ALGORITHM: &str = "HS256";

/// Token lifetime in `ms` notation.
pub static TEST_JWT_EXPIRES_IN: &str = "1d";

pub static TEST_JWT_HEADER_TYP: &str = "access";

/// In-memory SQLite database, private to one connection.
pub static TEST_DATABASE_URL: &str = "sqlite::memory:";

/// Prefix of the `Authorization` header value carrying a token.
pub static BEARER_PREFIX: &str = "Bearer ";
