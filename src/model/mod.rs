//! Domain models, request/response DTOs, and operation parameter types.
//!
//! Domain structs are built from SeaORM entities at the data boundary
//! (`from_entity`) and converted to DTOs at the HTTP boundary (`into_dto`).
//! Request DTOs are strict: unknown fields are rejected before any business
//! logic runs.

pub mod api;
pub mod booking;
pub mod user;
pub mod vehicle;
