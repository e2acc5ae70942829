//! User service for business logic.
//!
//! Thin orchestration over the user repository: queries, profile updates,
//! and deletion. Registration lives in the auth service because it involves
//! credential hashing.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{UpdateUserParams, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID.
    ///
    /// # Arguments
    /// - `user_id` - User record ID
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        Ok(user)
    }

    /// Retrieves all users.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All user records, possibly empty
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users)
    }

    /// Updates a user's profile fields.
    ///
    /// # Arguments
    /// - `param` - Update parameters including the target user ID
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_user(&self, param: UpdateUserParams) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).update(param).await?;

        Ok(user)
    }

    /// Deletes a user and, via cascade, their bookings.
    ///
    /// # Arguments
    /// - `user_id` - User record ID
    ///
    /// # Returns
    /// - `Ok(true)` - User existed and was deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, AppError> {
        let deleted = UserRepository::new(self.db).delete(user_id).await?;

        Ok(deleted)
    }
}
