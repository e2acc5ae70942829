//! Booking factory for creating test booking entities.
//!
//! Factory-built bookings bypass the lifecycle engine on purpose: tests use
//! them to seed ledger states (active, returned, cancelled) that the engine
//! is then exercised against.

use chrono::{Duration, Utc};
use entity::booking::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    vehicle_id: i32,
    rent_start_date: chrono::DateTime<Utc>,
    rent_end_date: chrono::DateTime<Utc>,
    total_price: f64,
    status: BookingStatus,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory for the given customer and vehicle.
    ///
    /// Defaults:
    /// - rent window: tomorrow for two days
    /// - total_price: `100.0`
    /// - status: `BookingStatus::Active`
    pub fn new(db: &'a DatabaseConnection, customer_id: i32, vehicle_id: i32) -> Self {
        let start = Utc::now() + Duration::days(1);
        Self {
            db,
            customer_id,
            vehicle_id,
            rent_start_date: start,
            rent_end_date: start + Duration::days(2),
            total_price: 100.0,
            status: BookingStatus::Active,
        }
    }

    pub fn rent_start_date(mut self, start: chrono::DateTime<Utc>) -> Self {
        self.rent_start_date = start;
        self
    }

    pub fn rent_end_date(mut self, end: chrono::DateTime<Utc>) -> Self {
        self.rent_end_date = end;
        self
    }

    pub fn total_price(mut self, total_price: f64) -> Self {
        self.total_price = total_price;
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            customer_id: ActiveValue::Set(self.customer_id),
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            rent_start_date: ActiveValue::Set(self.rent_start_date),
            rent_end_date: ActiveValue::Set(self.rent_end_date),
            total_price: ActiveValue::Set(self.total_price),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active booking for the given customer and vehicle.
pub async fn create_active_booking(
    db: &DatabaseConnection,
    customer_id: i32,
    vehicle_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, customer_id, vehicle_id).build().await
}
