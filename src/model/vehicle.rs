use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Bike,
    Van,
    #[serde(rename = "SUV")]
    Suv,
}

impl From<entity::vehicle::VehicleType> for VehicleType {
    fn from(vehicle_type: entity::vehicle::VehicleType) -> Self {
        match vehicle_type {
            entity::vehicle::VehicleType::Car => Self::Car,
            entity::vehicle::VehicleType::Bike => Self::Bike,
            entity::vehicle::VehicleType::Van => Self::Van,
            entity::vehicle::VehicleType::Suv => Self::Suv,
        }
    }
}

impl From<VehicleType> for entity::vehicle::VehicleType {
    fn from(vehicle_type: VehicleType) -> Self {
        match vehicle_type {
            VehicleType::Car => Self::Car,
            VehicleType::Bike => Self::Bike,
            VehicleType::Van => Self::Van,
            VehicleType::Suv => Self::Suv,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Booked,
}

impl From<entity::vehicle::AvailabilityStatus> for AvailabilityStatus {
    fn from(status: entity::vehicle::AvailabilityStatus) -> Self {
        match status {
            entity::vehicle::AvailabilityStatus::Available => Self::Available,
            entity::vehicle::AvailabilityStatus::Booked => Self::Booked,
        }
    }
}

impl From<AvailabilityStatus> for entity::vehicle::AvailabilityStatus {
    fn from(status: AvailabilityStatus) -> Self {
        match status {
            AvailabilityStatus::Available => Self::Available,
            AvailabilityStatus::Booked => Self::Booked,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub vehicle_type: VehicleType,
    pub registration_number: String,
    pub daily_rent_price: f64,
    pub availability_status: AvailabilityStatus,
}

impl Vehicle {
    pub fn from_entity(entity: entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            vehicle_type: entity.vehicle_type.into(),
            registration_number: entity.registration_number,
            daily_rent_price: entity.daily_rent_price,
            availability_status: entity.availability_status.into(),
        }
    }

    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            vehicle_name: self.name,
            vehicle_type: self.vehicle_type,
            registration_number: self.registration_number,
            daily_rent_price: self.daily_rent_price,
            availability_status: self.availability_status,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub vehicle_name: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub registration_number: String,
    pub daily_rent_price: f64,
    pub availability_status: AvailabilityStatus,
}

#[derive(Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateVehicleDto {
    pub vehicle_name: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub registration_number: String,
    pub daily_rent_price: f64,
    /// Defaults to `available` when omitted.
    pub availability_status: Option<AvailabilityStatus>,
}

/// Update body. `registration_number` is immutable after creation.
/// `availability_status` only changes when explicitly provided; it is
/// normally owned by the booking lifecycle.
#[derive(Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateVehicleDto {
    pub vehicle_name: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub daily_rent_price: f64,
    pub availability_status: Option<AvailabilityStatus>,
}

pub struct CreateVehicleParams {
    pub name: String,
    pub vehicle_type: VehicleType,
    pub registration_number: String,
    pub daily_rent_price: f64,
    pub availability_status: AvailabilityStatus,
}

impl CreateVehicleParams {
    pub fn from_dto(dto: CreateVehicleDto) -> Self {
        Self {
            name: dto.vehicle_name,
            vehicle_type: dto.vehicle_type,
            registration_number: dto.registration_number,
            daily_rent_price: dto.daily_rent_price,
            availability_status: dto
                .availability_status
                .unwrap_or(AvailabilityStatus::Available),
        }
    }
}

pub struct UpdateVehicleParams {
    pub id: i32,
    pub name: String,
    pub vehicle_type: VehicleType,
    pub daily_rent_price: f64,
    pub availability_status: Option<AvailabilityStatus>,
}

impl UpdateVehicleParams {
    pub fn from_dto(id: i32, dto: UpdateVehicleDto) -> Self {
        Self {
            id,
            name: dto.vehicle_name,
            vehicle_type: dto.vehicle_type,
            daily_rent_price: dto.daily_rent_price,
            availability_status: dto.availability_status,
        }
    }
}
