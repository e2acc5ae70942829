use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::ApiResponse,
        user::{CreateUserParams, SigninDto, SignupDto, UserDto},
    },
    service::auth::AuthService,
    state::AppState,
};

/// Session key under which the authenticated user's id is stored.
pub const SESSION_AUTH_USER_ID: &str = "auth_user_id";

pub static AUTH_TAG: &str = "auth";

const MIN_PASSWORD_LENGTH: usize = 6;

/// POST /api/auth/signup - Register a new user
///
/// Creates a user account from the registration payload. The password is
/// length-checked here, hashed in the auth service, and never stored or
/// echoed in plaintext. The email is stored lower-cased and must be unique.
///
/// # Returns
/// - `201 Created` - User registered, sanitized record in `data`
/// - `400 Bad Request` - Password shorter than 6 characters or malformed body
/// - `500 Internal Server Error` - Database error, including duplicate email
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "User registered successfully", body = UserDto),
        (status = 400, description = "Password too short or malformed body"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    let user = AuthService::new(&state.db)
        .register(CreateUserParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "User registered successfully",
            user.into_dto(),
        )),
    ))
}

/// POST /api/auth/signin - Sign in with email and password
///
/// Verifies the credentials and, on success, writes the user's id into the
/// session so subsequent requests are authenticated by cookie.
///
/// # Returns
/// - `200 OK` - Signed in, sanitized user in `data`
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    tag = AUTH_TAG,
    request_body = SigninDto,
    responses(
        (status = 200, description = "User logged in successfully", body = UserDto),
        (status = 401, description = "Email or password is incorrect"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn signin(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SigninDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    session.insert(SESSION_AUTH_USER_ID, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "User logged in successfully",
            user.into_dto(),
        )),
    ))
}

/// GET /api/auth/logout - End the current session
///
/// Flushes the session from the store. Safe to call without a session.
///
/// # Returns
/// - `200 OK` - Session cleared
/// - `500 Internal Server Error` - Session store error
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "User logged out successfully"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.flush().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_empty("User logged out successfully")),
    ))
}

/// GET /api/auth/me - Get the current authenticated user
///
/// # Returns
/// - `200 OK` - Sanitized user record for the session's user
/// - `401 Unauthorized` - No valid session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "User fetched successfully", body = UserDto),
        (status = 401, description = "Unauthorized access"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "User fetched successfully",
            user.into_dto(),
        )),
    ))
}
