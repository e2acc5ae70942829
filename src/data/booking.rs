//! Booking data repository for database operations.
//!
//! This module provides the `BookingRepository` for booking records. Inserts
//! always create `active` bookings; the only status transition exposed here
//! is the guarded move to `returned`. The repository is generic over the
//! connection so the lifecycle service can run it inside a transaction.

use crate::model::booking::{Booking, CreateBookingParams};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for booking management.
pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `BookingRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new booking in `active` status.
    ///
    /// The total price is computed by the caller from the vehicle's daily
    /// rate and the rental window; this layer stores it as given.
    ///
    /// # Arguments
    /// - `param` - Booking creation parameters
    /// - `total_price` - Price for the full rental window
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_active(
        &self,
        param: CreateBookingParams,
        total_price: f64,
    ) -> Result<Booking, DbErr> {
        let entity = entity::prelude::Booking::insert(entity::booking::ActiveModel {
            customer_id: ActiveValue::Set(param.customer_id),
            vehicle_id: ActiveValue::Set(param.vehicle_id),
            rent_start_date: ActiveValue::Set(param.rent_start_date),
            rent_end_date: ActiveValue::Set(param.rent_end_date),
            total_price: ActiveValue::Set(total_price),
            status: ActiveValue::Set(entity::booking::BookingStatus::Active),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    /// Finds a booking by its primary key.
    ///
    /// # Arguments
    /// - `booking_id` - Booking record ID
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Booking found
    /// - `Ok(None)` - No booking with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, booking_id: i32) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(booking_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Retrieves all bookings ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - All booking records, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Moves an `active` booking to `returned`.
    ///
    /// The status filter makes the transition idempotent under concurrency:
    /// of any set of concurrent return attempts, exactly one observes an
    /// affected row. Terminal bookings are never rewritten.
    ///
    /// # Arguments
    /// - `booking_id` - Booking record ID
    ///
    /// # Returns
    /// - `Ok(true)` - Booking was active and is now returned
    /// - `Ok(false)` - Booking was missing or already terminal
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_returned_if_active(&self, booking_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .set(entity::booking::ActiveModel {
                status: ActiveValue::Set(entity::booking::BookingStatus::Returned),
                ..Default::default()
            })
            .filter(entity::booking::Column::Id.eq(booking_id))
            .filter(entity::booking::Column::Status.eq(entity::booking::BookingStatus::Active))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
