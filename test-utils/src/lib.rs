//! Rentboard Test Utils
//!
//! Shared testing utilities for the rentboard backend. This crate offers a
//! builder pattern for creating test contexts backed by in-memory SQLite
//! databases, plus entity factories that cut down fixture boilerplate.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder for configuring test environments
//! - **TestContext**: test environment holding the database and session
//! - **TestError**: errors that can occur during test setup
//! - **factory**: helpers that insert users, vehicles, and bookings
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_vehicle_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_rental_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
