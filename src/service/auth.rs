//! Authentication service.
//!
//! Registration and sign-in against the user directory. Passwords are
//! stored as Argon2id PHC strings; sign-in failures collapse unknown email
//! and wrong password into one error so responses never reveal which
//! accounts exist.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, User},
};

/// Hashes a plaintext password into an Argon2id PHC string.
///
/// # Arguments
/// - `password` - Plaintext password
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash including salt and parameters
/// - `Err(AuthError::Crypto)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AuthError::Crypto(err.to_string()))
}

/// Verifies a plaintext password against a stored PHC string.
///
/// # Arguments
/// - `password` - Plaintext candidate
/// - `hash` - Stored PHC string
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AuthError::Crypto)` - Stored hash could not be parsed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|err| AuthError::Crypto(err.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Service providing registration and credential verification.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// Hashes the plaintext password from the parameters before anything is
    /// written; the plaintext never reaches the data layer.
    ///
    /// # Arguments
    /// - `param` - User creation parameters with a plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user without the credential
    /// - `Err(AppError::AuthErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error, including duplicate email
    pub async fn register(&self, mut param: CreateUserParams) -> Result<User, AppError> {
        param.password = hash_password(&param.password)?;

        let user = UserRepository::new(self.db).create(param).await?;

        Ok(user)
    }

    /// Verifies sign-in credentials.
    ///
    /// # Arguments
    /// - `email` - Email address, any casing
    /// - `password` - Plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid; the matching user
    /// - `Err(AppError::AuthErr)` - Unknown email or wrong password, both
    ///   reported as `InvalidCredentials`
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let Some(entity) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &entity.password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(User::from_entity(entity))
    }
}
