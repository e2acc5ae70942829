//! Booking lifecycle service.
//!
//! This module owns the booking state machine: `active` is the only
//! non-terminal status, moving to `returned` through the return operation.
//! (`cancelled` is a reserved terminal status with no operation behind it
//! yet.) Every write that spans the booking ledger and the vehicle's
//! availability flag runs inside one transaction, so a booking row and its
//! vehicle flag always commit or roll back together.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{booking::BookingRepository, vehicle::VehicleRepository},
    error::{booking::BookingError, AppError},
    model::booking::{Booking, CreateBookingParams},
    service::pricing,
};

/// Service providing business logic for the booking lifecycle.
pub struct BookingService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new BookingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BookingService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking and claims the vehicle for it.
    ///
    /// Validates the rental window, atomically claims the vehicle, then
    /// prices the booking from the vehicle's current daily rate and inserts
    /// it, all in one transaction. The claim is a conditional update on the
    /// availability flag, so two concurrent requests for the same vehicle
    /// cannot both succeed: the loser observes zero affected rows and the
    /// whole transaction rolls back, leaving no partial state. Claiming
    /// before pricing means an unavailable vehicle is always reported as
    /// such, even when its stored rate would not price.
    ///
    /// The stored total price is a snapshot; later changes to the vehicle's
    /// rate do not reprice the booking.
    ///
    /// # Arguments
    /// - `param` - Booking creation parameters
    ///
    /// # Returns
    /// - `Ok(Booking)` - The persisted booking in `active` status
    /// - `Err(AppError::BookingErr)` - Invalid window, unknown vehicle, or
    ///   vehicle already claimed
    /// - `Err(AppError::DbErr)` - Database error; no partial writes remain
    pub async fn create(&self, param: CreateBookingParams) -> Result<Booking, AppError> {
        if param.rent_end_date <= param.rent_start_date {
            return Err(BookingError::InvalidWindow.into());
        }

        // Dropping the transaction on any early return rolls it back.
        let txn = self.db.begin().await?;

        let vehicle_repo = VehicleRepository::new(&txn);

        let Some(vehicle) = vehicle_repo.find_by_id(param.vehicle_id).await? else {
            return Err(BookingError::VehicleNotFound.into());
        };

        if !vehicle_repo.try_set_booked(param.vehicle_id).await? {
            return Err(BookingError::VehicleUnavailable.into());
        }

        let total_price = pricing::compute_price(
            vehicle.daily_rent_price,
            param.rent_start_date,
            param.rent_end_date,
        )?;

        let booking = BookingRepository::new(&txn)
            .insert_active(param, total_price)
            .await?;

        txn.commit().await?;

        Ok(booking)
    }

    /// Returns a booking, freeing its vehicle.
    ///
    /// The status transition is guarded: only an `active` booking moves to
    /// `returned`, and the vehicle is freed only when this call performed
    /// that transition. Re-applying return to an already-terminal booking
    /// is a no-op that reports the booking as it stands, without touching
    /// the vehicle. That keeps the operation idempotent and prevents a
    /// stale return from releasing a vehicle that a newer active booking
    /// has since claimed.
    ///
    /// # Arguments
    /// - `booking_id` - Booking record ID
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - The booking, now (or already) terminal
    /// - `Ok(None)` - No booking with that ID
    /// - `Err(AppError::DbErr)` - Database error; no partial writes remain
    pub async fn return_booking(&self, booking_id: i32) -> Result<Option<Booking>, AppError> {
        let txn = self.db.begin().await?;

        let booking_repo = BookingRepository::new(&txn);

        let Some(booking) = booking_repo.find_by_id(booking_id).await? else {
            return Ok(None);
        };

        if !booking_repo.mark_returned_if_active(booking_id).await? {
            // Already terminal: report it as-is, leave the vehicle alone.
            txn.commit().await?;
            return Ok(Some(booking));
        }

        VehicleRepository::new(&txn)
            .set_available(booking.vehicle_id)
            .await?;

        let updated = booking_repo.find_by_id(booking_id).await?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Retrieves all bookings.
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - All booking records, possibly empty
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Booking>, AppError> {
        let bookings = BookingRepository::new(self.db).get_all().await?;

        Ok(bookings)
    }
}
