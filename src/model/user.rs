use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role of an account. Immutable intent: customers book vehicles, admins
/// manage the fleet and user records.
#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Customer,
}

impl From<entity::user::UserRole> for UserRole {
    fn from(role: entity::user::UserRole) -> Self {
        match role {
            entity::user::UserRole::Admin => Self::Admin,
            entity::user::UserRole::Customer => Self::Customer,
        }
    }
}

impl From<UserRole> for entity::user::UserRole {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => Self::Admin,
            UserRole::Customer => Self::Customer,
        }
    }
}

/// Domain user with the password credential stripped.
///
/// The hash never leaves the data layer; anything built from this type is
/// safe to serialize.
#[derive(Clone, Debug)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            role: entity.role.into(),
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: self.role,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
}

/// Registration request body.
#[derive(Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SignupDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: UserRole,
}

/// Sign-in request body.
#[derive(Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SigninDto {
    pub email: String,
    pub password: String,
}

/// Update request body. The password is deliberately absent: credential
/// changes do not belong in a generic record update.
#[derive(Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
}

/// Parameters for creating a user; `password` is still plaintext here and
/// is hashed by the auth service before it reaches the repository.
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: UserRole,
}

impl CreateUserParams {
    pub fn from_dto(dto: SignupDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            phone: dto.phone,
            role: dto.role,
        }
    }
}

pub struct UpdateUserParams {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Self {
        Self {
            id,
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            role: dto.role,
        }
    }
}
