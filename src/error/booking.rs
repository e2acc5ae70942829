use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ApiResponse;

/// Booking lifecycle error taxonomy.
///
/// `InvalidWindow`, `InvalidRate`, and `VehicleUnavailable` are client
/// errors; the two not-found variants map to 404. Persistence failures are
/// not part of this enum; they travel as `sea_orm::DbErr` through
/// `AppError` and surface as 500.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The requested rental window ends on or before it starts.
    #[error("End date must be after start date")]
    InvalidWindow,

    /// The vehicle's daily rate is zero or negative. The vehicle directory
    /// enforces a positive rate on write; this guards stale or hand-edited
    /// rows.
    #[error("Daily rent price must be greater than zero")]
    InvalidRate,

    /// No vehicle exists with the requested id.
    #[error("Vehicle not found")]
    VehicleNotFound,

    /// The vehicle is already claimed by an active booking, either before
    /// the request or by a concurrent create that won the race.
    #[error("Vehicle is currently not available")]
    VehicleUnavailable,

    /// No booking exists with the requested id.
    #[error("Booking not found")]
    BookingNotFound,
}

/// Maps booking errors onto the HTTP surface.
///
/// # Returns
/// - 400 Bad Request - `InvalidWindow`, `InvalidRate`, `VehicleUnavailable`
/// - 404 Not Found - `VehicleNotFound`, `BookingNotFound`
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidWindow | Self::InvalidRate | Self::VehicleUnavailable => {
                StatusCode::BAD_REQUEST
            }
            Self::VehicleNotFound | Self::BookingNotFound => StatusCode::NOT_FOUND,
        };

        (status, Json(ApiResponse::failure(self.to_string()))).into_response()
    }
}
