//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, updates, queries, and deletion with proper conversion
//! between entity models and domain models at the infrastructure boundary.

use crate::model::user::{CreateUserParams, UpdateUserParams, User};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user record.
    ///
    /// The email is lower-cased before insert so the unique index treats
    /// addresses case-insensitively. `param.password` must already be a
    /// password hash; the auth service is responsible for hashing before
    /// the parameters reach this layer.
    ///
    /// # Arguments
    /// - `param` - User creation parameters with a hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user without the credential
    /// - `Err(DbErr)` - Database error, including unique violations on email
    pub async fn create(&self, param: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email.to_lowercase()),
            password: ActiveValue::Set(param.password),
            phone: ActiveValue::Set(param.phone),
            role: ActiveValue::Set(param.role.into()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by their primary key.
    ///
    /// # Arguments
    /// - `user_id` - User record ID
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email for credential verification.
    ///
    /// Returns the raw entity model because this is the one lookup that
    /// legitimately needs the stored password hash. The input is lower-cased
    /// to match the normalization applied on insert.
    ///
    /// # Arguments
    /// - `email` - Email address, any casing
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User entity including the password hash
    /// - `Ok(None)` - No user registered under that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.to_lowercase()))
            .one(self.db)
            .await
    }

    /// Retrieves all users ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All user records, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Updates an existing user's profile fields.
    ///
    /// The password column is never touched here; credential changes go
    /// through the auth service.
    ///
    /// # Arguments
    /// - `param` - Update parameters including the target user ID
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        active.name = ActiveValue::Set(param.name);
        active.email = ActiveValue::Set(param.email.to_lowercase());
        active.phone = ActiveValue::Set(param.phone);
        active.role = ActiveValue::Set(param.role.into());

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Deletes a user by ID.
    ///
    /// Bookings referencing the user are removed by the cascade on the
    /// foreign key.
    ///
    /// # Arguments
    /// - `user_id` - User record ID
    ///
    /// # Returns
    /// - `Ok(true)` - User existed and was deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
