//! Random identifiers for test records.
//!
//! Nothing here is seeded or reproducible: every call draws fresh values from the thread-local
//! generator. Uniqueness is probabilistic only.

use std::cmp::Ordering;

use bson::oid::ObjectId;
use rand::Rng;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Hex characters in an Ethereum address (20 bytes).
pub const ETHEREUM_ADDRESS_HEX_LEN: usize = 40;

/// Hex characters in a generated transaction hash.
///
/// This is 31 bytes, one short of a real 32 byte hash. Existing suites compare against values
/// of this length, so it is kept as is.
pub const TRANSACTION_HASH_HEX_LEN: usize = 62;

/// Generate `len` random lowercase hex characters.
pub fn generate_hex_number(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| HEX_DIGITS[rng.random_range(0..HEX_DIGITS.len())] as char)
        .collect()
}

/// Generate a `0x` prefixed, lowercase, 20 byte address.
pub fn generate_random_ethereum_address() -> String {
    format!("0x{}", generate_hex_number(ETHEREUM_ADDRESS_HEX_LEN))
}

/// Generate a `0x` prefixed transaction hash of [`TRANSACTION_HASH_HEX_LEN`] hex characters.
pub fn generate_random_transaction_hash() -> String {
    format!("0x{}", generate_hex_number(TRANSACTION_HASH_HEX_LEN))
}

/// Generate a new object id, the primary key type of the seeded collections.
///
/// Use [`ObjectId::to_hex`] to get the 24 character form stored in the `_id` columns.
pub fn generate_random_mongo_id() -> ObjectId {
    ObjectId::new()
}

/// Generate a random integer in `[min, max)`.
///
/// The upper bound is exclusive; pass `max + 1` to include it. When `min == max` the result is
/// `min`. When the bounds are swapped (`min > max`) the result lies in `(max, min]`, so `min`
/// stays reachable and `max` does not.
pub fn generate_random_number(min: i64, max: i64) -> i64 {
    match min.cmp(&max) {
        Ordering::Less => rand::rng().random_range(min..max),
        Ordering::Equal => min,
        Ordering::Greater => rand::rng().random_range(max + 1..=min),
    }
}
