//! Entity factories for building test fixtures.
//!
//! Each factory inserts an entity with sensible defaults that can be
//! overridden per test through a builder pattern.

pub mod booking;
pub mod helpers;
pub mod user;
pub mod vehicle;
