//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls per operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Wrapping multi-step writes so they commit or roll
//!   back as a unit
//!
//! The booking service is the heart of the application: it owns the booking
//! lifecycle and the availability transitions on vehicles.

pub mod auth;
pub mod booking;
pub mod pricing;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
