use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Booking status. `active` is the only non-terminal state; `cancelled` is
/// reserved and currently unreachable through the HTTP surface.
#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Active,
    Cancelled,
    Returned,
}

impl From<entity::booking::BookingStatus> for BookingStatus {
    fn from(status: entity::booking::BookingStatus) -> Self {
        match status {
            entity::booking::BookingStatus::Active => Self::Active,
            entity::booking::BookingStatus::Cancelled => Self::Cancelled,
            entity::booking::BookingStatus::Returned => Self::Returned,
        }
    }
}

impl From<BookingStatus> for entity::booking::BookingStatus {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Active => Self::Active,
            BookingStatus::Cancelled => Self::Cancelled,
            BookingStatus::Returned => Self::Returned,
        }
    }
}

/// Domain booking record. `customer_id` and `vehicle_id` are non-owning
/// references resolved against the user and vehicle records at access time.
#[derive(Clone, Debug)]
pub struct Booking {
    pub id: i32,
    pub customer_id: i32,
    pub vehicle_id: i32,
    pub rent_start_date: DateTime<Utc>,
    pub rent_end_date: DateTime<Utc>,
    pub total_price: f64,
    pub status: BookingStatus,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            vehicle_id: entity.vehicle_id,
            rent_start_date: entity.rent_start_date,
            rent_end_date: entity.rent_end_date,
            total_price: entity.total_price,
            status: entity.status.into(),
        }
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            customer_id: self.customer_id,
            vehicle_id: self.vehicle_id,
            rent_start_date: self.rent_start_date,
            rent_end_date: self.rent_end_date,
            total_price: self.total_price,
            status: self.status,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub customer_id: i32,
    pub vehicle_id: i32,
    pub rent_start_date: DateTime<Utc>,
    pub rent_end_date: DateTime<Utc>,
    pub total_price: f64,
    pub status: BookingStatus,
}

/// Booking creation request body. Timestamps are RFC 3339.
#[derive(Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateBookingDto {
    pub customer_id: i32,
    pub vehicle_id: i32,
    pub rent_start_date: DateTime<Utc>,
    pub rent_end_date: DateTime<Utc>,
}

pub struct CreateBookingParams {
    pub customer_id: i32,
    pub vehicle_id: i32,
    pub rent_start_date: DateTime<Utc>,
    pub rent_end_date: DateTime<Utc>,
}

impl CreateBookingParams {
    pub fn from_dto(dto: CreateBookingDto) -> Self {
        Self {
            customer_id: dto.customer_id,
            vehicle_id: dto.vehicle_id,
            rent_start_date: dto.rent_start_date,
            rent_end_date: dto.rent_end_date,
        }
    }
}
