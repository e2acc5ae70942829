use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::ApiResponse,
        vehicle::{
            CreateVehicleDto, CreateVehicleParams, UpdateVehicleDto, UpdateVehicleParams,
            VehicleDto,
        },
    },
    service::vehicle::VehicleService,
    state::AppState,
};

pub static VEHICLE_TAG: &str = "vehicle";

/// POST /api/vehicles - Add a vehicle to the fleet
///
/// Creates a vehicle record. The availability status defaults to
/// `available` when omitted from the payload.
///
/// # Access Control
/// - `Admin` - Only admins can add vehicles
///
/// # Returns
/// - `201 Created` - Created vehicle record
/// - `400 Bad Request` - Non-positive daily rate or malformed body
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Signed in without the admin role
/// - `500 Internal Server Error` - Database error, including duplicate
///   registration number
#[utoipa::path(
    post,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    request_body = CreateVehicleDto,
    responses(
        (status = 201, description = "Vehicle added successfully", body = VehicleDto),
        (status = 400, description = "Invalid vehicle data"),
        (status = 401, description = "Unauthorized access"),
        (status = 403, description = "Admin role required"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let vehicle = VehicleService::new(&state.db)
        .create_vehicle(CreateVehicleParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Vehicle added successfully",
            vehicle.into_dto(),
        )),
    ))
}

/// GET /api/vehicles - List the fleet
///
/// Publicly browsable; no authentication required.
///
/// # Returns
/// - `200 OK` - All vehicle records
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Vehicles retrieved successfully", body = Vec<VehicleDto>),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_all_vehicles(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let vehicles = VehicleService::new(&state.db).get_all_vehicles().await?;

    let vehicles_dto: Vec<_> = vehicles
        .into_iter()
        .map(|vehicle| vehicle.into_dto())
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Vehicles retrieved successfully",
            vehicles_dto,
        )),
    ))
}

/// PUT /api/vehicles/{id} - Update a vehicle
///
/// Updates name, type, and daily rate. The registration number is
/// immutable. The availability status only changes when the payload
/// carries an explicit value; it is normally driven by bookings.
///
/// # Access Control
/// - `Admin` - Only admins can update vehicles
///
/// # Returns
/// - `200 OK` - Updated vehicle record
/// - `400 Bad Request` - Non-positive daily rate or malformed body
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Signed in without the admin role
/// - `404 Not Found` - No vehicle with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle record ID")
    ),
    request_body = UpdateVehicleDto,
    responses(
        (status = 200, description = "Vehicle updated successfully", body = VehicleDto),
        (status = 400, description = "Invalid vehicle data"),
        (status = 401, description = "Unauthorized access"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Vehicle not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateVehicleParams::from_dto(id, payload);

    let Some(vehicle) = VehicleService::new(&state.db).update_vehicle(param).await? else {
        return Err(AppError::NotFound("Vehicle not found".to_string()));
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Vehicle updated successfully",
            vehicle.into_dto(),
        )),
    ))
}

/// DELETE /api/vehicles/{id} - Remove a vehicle from the fleet
///
/// Deletes the vehicle record; its bookings are removed by cascade.
///
/// # Access Control
/// - `Admin` - Only admins can delete vehicles
///
/// # Returns
/// - `200 OK` - Vehicle deleted, `data` is null
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Signed in without the admin role
/// - `404 Not Found` - No vehicle with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle record ID")
    ),
    responses(
        (status = 200, description = "Vehicle deleted successfully"),
        (status = 401, description = "Unauthorized access"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Vehicle not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if !VehicleService::new(&state.db).delete_vehicle(id).await? {
        return Err(AppError::NotFound("Vehicle not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_empty("Vehicle deleted successfully")),
    ))
}
