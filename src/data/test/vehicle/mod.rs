use crate::data::vehicle::VehicleRepository;
use crate::model::vehicle::{
    AvailabilityStatus, CreateVehicleParams, UpdateVehicleParams, VehicleType,
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::vehicle::{create_booked_vehicle, create_vehicle};

mod create;
mod delete;
mod find_by_id;
mod set_available;
mod try_set_booked;
