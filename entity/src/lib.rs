//! SeaORM entity models for the rentboard database schema.

pub mod booking;
pub mod prelude;
pub mod user;
pub mod vehicle;
