//! Database entities for the collections seeded into the Giveth test database.
//!
//! Each module mirrors one collection of the fixture seed set. Field names serialize in
//! camelCase with `_id` primary keys so the fixture files keep the shape of the documents
//! the donation backend stores.

pub mod prelude;

pub mod campaign;
pub mod dac;
pub mod donation;
pub mod event;
pub mod milestone;
pub mod sea_orm_active_enums;
pub mod user;
