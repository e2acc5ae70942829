//! HTTP request handlers.
//!
//! Controllers translate between the HTTP surface and the service layer:
//! they enforce access control through the auth guard, convert request DTOs
//! into parameter models, call a service, and wrap the result in the
//! `{success, message, data}` envelope.

pub mod auth;
pub mod booking;
pub mod user;
pub mod vehicle;
