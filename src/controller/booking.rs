use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::{booking::BookingError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::ApiResponse,
        booking::{BookingDto, CreateBookingDto, CreateBookingParams},
    },
    service::booking::BookingService,
    state::AppState,
};

pub static BOOKING_TAG: &str = "booking";

/// POST /api/bookings - Create a booking
///
/// Books a vehicle for the requested window. The booking service validates
/// the window, prices it from the vehicle's current daily rate, and claims
/// the vehicle atomically; a concurrent request for the same vehicle gets
/// a 400 instead of a double-booking.
///
/// # Access Control
/// - Any signed-in user
///
/// # Returns
/// - `201 Created` - Persisted booking in `active` status
/// - `400 Bad Request` - Window ends on or before its start, or vehicle
///   currently not available
/// - `401 Unauthorized` - Not signed in
/// - `404 Not Found` - No vehicle with the requested id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created successfully", body = BookingDto),
        (status = 400, description = "Invalid window or vehicle not available"),
        (status = 401, description = "Unauthorized access"),
        (status = 404, description = "Vehicle not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking = BookingService::new(&state.db)
        .create(CreateBookingParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Booking created successfully",
            booking.into_dto(),
        )),
    ))
}

/// GET /api/bookings - List all bookings
///
/// # Access Control
/// - `Admin` - Only admins see the full ledger
///
/// # Returns
/// - `200 OK` - All booking records, unfiltered
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Signed in without the admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Bookings retrieved successfully", body = Vec<BookingDto>),
        (status = 401, description = "Unauthorized access"),
        (status = 403, description = "Admin role required"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_all_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let bookings = BookingService::new(&state.db).get_all().await?;

    let bookings_dto: Vec<_> = bookings
        .into_iter()
        .map(|booking| booking.into_dto())
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Bookings retrieved successfully",
            bookings_dto,
        )),
    ))
}

/// PUT /api/bookings/{id}/return - Return a booked vehicle
///
/// Moves the booking to `returned` and frees its vehicle. Returning a
/// booking that is already terminal is a no-op that reports the booking
/// as it stands.
///
/// # Access Control
/// - Any signed-in user
///
/// # Returns
/// - `200 OK` - Booking record after the return
/// - `401 Unauthorized` - Not signed in
/// - `404 Not Found` - No booking with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/bookings/{id}/return",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking record ID")
    ),
    responses(
        (status = 200, description = "Vehicle returned successfully", body = BookingDto),
        (status = 401, description = "Unauthorized access"),
        (status = 404, description = "Booking not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn return_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Some(booking) = BookingService::new(&state.db).return_booking(id).await? else {
        return Err(BookingError::BookingNotFound.into());
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Vehicle returned successfully",
            booking.into_dto(),
        )),
    ))
}
