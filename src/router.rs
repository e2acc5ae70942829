use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{
    controller::{
        auth::{logout, me, signin, signup},
        booking::{create_booking, get_all_bookings, return_booking},
        user::{delete_user, get_all_users, get_user, update_user},
        vehicle::{create_vehicle, delete_vehicle, get_all_vehicles, update_vehicle},
    },
    doc::openapi_spec,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/signin", post(signin))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/me", get(me))
        .route("/api/users", get(get_all_users))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/vehicles", get(get_all_vehicles).post(create_vehicle))
        .route(
            "/api/vehicles/{id}",
            put(update_vehicle).delete(delete_vehicle),
        )
        .route("/api/bookings", get(get_all_bookings).post(create_booking))
        .route("/api/bookings/{id}/return", put(return_booking))
        .route("/api/docs/openapi.json", get(openapi_spec))
}
