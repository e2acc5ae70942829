//! Rental price calculation.
//!
//! Pricing is a pure function of the vehicle's daily rate and the rental
//! window, kept free of any storage access so it can be tested exhaustively
//! and reused wherever a quote is needed.

use chrono::{DateTime, Utc};

use crate::error::booking::BookingError;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Computes the total price for a rental window.
///
/// Duration is billed in whole days, rounding any partial day up, with a
/// minimum of one day for any valid window. The rate is snapshotted by the
/// caller at booking time; later rate changes never reprice an existing
/// booking.
///
/// # Arguments
/// - `daily_rent_price` - Vehicle's daily rate, must be positive
/// - `rent_start_date` - Start of the rental window
/// - `rent_end_date` - End of the rental window, must be after the start
///
/// # Returns
/// - `Ok(f64)` - Total price: billed days times the daily rate
/// - `Err(BookingError::InvalidWindow)` - Window ends on or before its start
/// - `Err(BookingError::InvalidRate)` - Daily rate is zero or negative
pub fn compute_price(
    daily_rent_price: f64,
    rent_start_date: DateTime<Utc>,
    rent_end_date: DateTime<Utc>,
) -> Result<f64, BookingError> {
    if rent_end_date <= rent_start_date {
        return Err(BookingError::InvalidWindow);
    }

    if daily_rent_price <= 0.0 {
        return Err(BookingError::InvalidRate);
    }

    let millis = (rent_end_date - rent_start_date).num_milliseconds();
    let billed_days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;

    Ok(billed_days as f64 * daily_rent_price)
}
