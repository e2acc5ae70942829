use crate::data::vehicle::VehicleRepository;
use crate::error::{booking::BookingError, AppError};
use crate::model::booking::{BookingStatus, CreateBookingParams};
use crate::model::vehicle::AvailabilityStatus;
use crate::service::booking::BookingService;
use chrono::{DateTime, Duration, Utc};
use test_utils::builder::TestBuilder;
use test_utils::factory::{
    user::create_customer,
    vehicle::{create_booked_vehicle, create_vehicle, VehicleFactory},
};

mod create;

fn window(days: i64) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc::now() + Duration::days(1);
    (start, start + Duration::days(days))
}
