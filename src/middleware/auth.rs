//! Session-based authentication guard.
//!
//! Handlers that require a signed-in caller construct an `AuthGuard` from
//! the request's session and the database handle, then call `require` with
//! the permissions the route demands. The guard resolves the session's user
//! id against the user directory on every request, so deleted accounts lose
//! access immediately even while their session cookie is still live.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    controller::auth::SESSION_AUTH_USER_ID,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{User, UserRole},
};

/// Permissions a route can demand beyond a valid session.
pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the calling user and checks the required permissions.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the route requires; empty means any
    ///   signed-in user
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated caller
    /// - `Err(AppError::AuthErr)` - No session user, stale session, or a
    ///   missing permission
    /// - `Err(AppError::DbErr)` - Database error during user lookup
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "admin role required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
