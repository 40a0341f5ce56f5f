//! Assertions over the outcome of an async operation.
//!
//! Both wrappers await the operation once and produce exactly one assertion outcome: they
//! either return normally or panic with a message carrying the original error, which the test
//! harness reports as the failure.

use std::{fmt::Display, future::Future};

/// Assert that an async operation fails.
///
/// When `expected_message` is given, the error's `Display` output must contain it.
///
/// # Arguments
/// - `operation` - Closure producing the future to await
/// - `expected_message` - Optional substring the error message must include
///
/// # Returns
/// - `E` - The error returned by the operation, for further inspection
///
/// # Panics
/// - The operation succeeded
/// - The error message does not include `expected_message`
///
/// # Example
/// ```ignore
/// let error = assert_throws_async(
///     || async { issuer.decode("Bearer not-a-token") },
///     Some("InvalidToken"),
/// )
/// .await;
/// ```
pub async fn assert_throws_async<F, Fut, T, E>(operation: F, expected_message: Option<&str>) -> E
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    match operation().await {
        Err(error) => {
            if let Some(expected) = expected_message {
                let message = error.to_string();
                assert!(
                    message.contains(expected),
                    "expected an error including '{}' but got '{}'",
                    expected,
                    message
                );
            }
            error
        }
        Ok(_) => panic!("expected an error but none was raised"),
    }
}

/// Assert that an async operation succeeds and return its value.
///
/// # Panics
/// Panics with the original error message if the operation fails.
pub async fn assert_not_throws_async<F, Fut, T, E>(operation: F) -> T
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    match operation().await {
        Ok(value) => value,
        Err(error) => panic!("expected no error but got '{}'", error),
    }
}
