//! OpenAPI document assembly.

use axum::Json;
use utoipa::OpenApi;

use crate::{
    controller,
    model::{
        booking::{BookingDto, BookingStatus, CreateBookingDto},
        user::{SigninDto, SignupDto, UpdateUserDto, UserDto, UserRole},
        vehicle::{
            AvailabilityStatus, CreateVehicleDto, UpdateVehicleDto, VehicleDto, VehicleType,
        },
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rentboard API",
        description = "Vehicle rental backend: fleet and user management plus the booking lifecycle."
    ),
    paths(
        controller::auth::signup,
        controller::auth::signin,
        controller::auth::logout,
        controller::auth::me,
        controller::user::get_all_users,
        controller::user::get_user,
        controller::user::update_user,
        controller::user::delete_user,
        controller::vehicle::create_vehicle,
        controller::vehicle::get_all_vehicles,
        controller::vehicle::update_vehicle,
        controller::vehicle::delete_vehicle,
        controller::booking::create_booking,
        controller::booking::get_all_bookings,
        controller::booking::return_booking,
    ),
    components(schemas(
        UserDto,
        SignupDto,
        SigninDto,
        UpdateUserDto,
        UserRole,
        VehicleDto,
        CreateVehicleDto,
        UpdateVehicleDto,
        VehicleType,
        AvailabilityStatus,
        BookingDto,
        CreateBookingDto,
        BookingStatus,
    )),
    tags(
        (name = "auth", description = "Registration, sign-in, and session management"),
        (name = "user", description = "User directory management"),
        (name = "vehicle", description = "Fleet management"),
        (name = "booking", description = "Booking lifecycle"),
    )
)]
pub struct ApiDoc;

/// GET /api/docs/openapi.json - Serve the OpenAPI document
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
