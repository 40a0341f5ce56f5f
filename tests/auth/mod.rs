//! Tests for bearer tokens issued from a test context.

use giveth_test_utils::{
    assertion::{assert_not_throws_async, assert_throws_async},
    auth::get_jwt,
    config::TestConfig,
    sample_data::{SECOND_USER_ADDRESS, USER_ADDRESS},
    TestBuilder, TestError,
};

/// Tests that a context issues tokens for the default test address.
///
/// Expected: Ok with `userId` equal to the seeded user's address
#[tokio::test]
async fn context_token_defaults_to_test_address() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let bearer = test.get_jwt(None)?;
    assert!(bearer.starts_with("Bearer "));

    let claims = assert_not_throws_async(|| async { test.jwt().decode(&bearer) }).await;
    assert_eq!(claims.user_id, USER_ADDRESS);

    Ok(())
}

/// Tests that a token from a custom configuration is rejected by the local one.
///
/// Expected: decoding fails with a signature error
#[tokio::test]
async fn token_from_other_secret_fails_to_decode() -> Result<(), TestError> {
    let mut other = TestConfig::local();
    other.authentication.secret = "rotated-secret".to_string();

    let bearer = get_jwt(&other.authentication, Some(SECOND_USER_ADDRESS))?;
    let test = TestBuilder::new().build().await?;

    assert_throws_async(
        || async { test.jwt().decode(&bearer) },
        Some("InvalidSignature"),
    )
    .await;

    Ok(())
}

/// Tests that a context built from a custom configuration signs with it.
///
/// Expected: the issuer's configuration carries the custom audience
#[tokio::test]
async fn context_uses_injected_configuration() -> Result<(), TestError> {
    let mut config = TestConfig::local();
    config.authentication.jwt.audience = "https://beta.giveth.io".to_string();

    let test = TestBuilder::new().with_config(config).build().await?;
    let claims = test.jwt().decode(&test.get_jwt(Some(SECOND_USER_ADDRESS))?)?;

    assert_eq!(claims.aud, "https://beta.giveth.io");
    assert_eq!(claims.user_id, SECOND_USER_ADDRESS);

    Ok(())
}
