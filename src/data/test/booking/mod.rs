use crate::data::booking::BookingRepository;
use crate::model::booking::{BookingStatus, CreateBookingParams};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::{
    booking::{create_active_booking, BookingFactory},
    user::create_customer,
    vehicle::create_vehicle,
};

mod find_by_id;
mod get_all;
mod insert_active;
mod mark_returned_if_active;
