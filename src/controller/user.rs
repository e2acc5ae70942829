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
        user::{UpdateUserDto, UpdateUserParams, UserDto},
    },
    service::user::UserService,
    state::AppState,
};

pub static USER_TAG: &str = "user";

/// GET /api/users - List all users
///
/// # Access Control
/// - `Admin` - Only admins can list user records
///
/// # Returns
/// - `200 OK` - All user records
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Signed in without the admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Users retrieved successfully", body = Vec<UserDto>),
        (status = 401, description = "Unauthorized access"),
        (status = 403, description = "Admin role required"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).get_all_users().await?;

    let users_dto: Vec<_> = users.into_iter().map(|user| user.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Users retrieved successfully", users_dto)),
    ))
}

/// GET /api/users/{id} - Get a single user
///
/// # Access Control
/// - Any signed-in user
///
/// # Returns
/// - `200 OK` - User record
/// - `401 Unauthorized` - Not signed in
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User record ID")
    ),
    responses(
        (status = 200, description = "User fetched successfully", body = UserDto),
        (status = 401, description = "Unauthorized access"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Some(user) = UserService::new(&state.db).get_user(id).await? else {
        return Err(AppError::NotFound("User not found".to_string()));
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "User fetched successfully",
            user.into_dto(),
        )),
    ))
}

/// PUT /api/users/{id} - Update a user's profile
///
/// Updates name, email, phone, and role. The password is not updatable
/// through this route.
///
/// # Access Control
/// - `Admin` - Only admins can update user records
///
/// # Returns
/// - `200 OK` - Updated user record
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Signed in without the admin role
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User record ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated successfully", body = UserDto),
        (status = 401, description = "Unauthorized access"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateUserParams::from_dto(id, payload);

    let Some(user) = UserService::new(&state.db).update_user(param).await? else {
        return Err(AppError::NotFound("User not found".to_string()));
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "User updated successfully",
            user.into_dto(),
        )),
    ))
}

/// DELETE /api/users/{id} - Delete a user
///
/// Deletes the user record; their bookings are removed by cascade.
///
/// # Access Control
/// - `Admin` - Only admins can delete user records
///
/// # Returns
/// - `200 OK` - User deleted, `data` is null
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Signed in without the admin role
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User record ID")
    ),
    responses(
        (status = 200, description = "User deleted successfully"),
        (status = 401, description = "Unauthorized access"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if !UserService::new(&state.db).delete_user(id).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_empty("User deleted successfully")),
    ))
}
