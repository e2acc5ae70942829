//! Vehicle factory for creating test vehicle entities.

use entity::vehicle::{AvailabilityStatus, VehicleType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test vehicles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::vehicle::VehicleFactory;
/// use entity::vehicle::AvailabilityStatus;
///
/// let booked = VehicleFactory::new(&db)
///     .daily_rent_price(75.0)
///     .availability_status(AvailabilityStatus::Booked)
///     .build()
///     .await?;
/// ```
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    vehicle_type: VehicleType,
    registration_number: String,
    daily_rent_price: f64,
    availability_status: AvailabilityStatus,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Vehicle {id}"` where id is auto-incremented
    /// - vehicle_type: `VehicleType::Car`
    /// - registration_number: `"REG-{id}"`
    /// - daily_rent_price: `50.0`
    /// - availability_status: `AvailabilityStatus::Available`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Vehicle {}", id),
            vehicle_type: VehicleType::Car,
            registration_number: format!("REG-{}", id),
            daily_rent_price: 50.0,
            availability_status: AvailabilityStatus::Available,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn vehicle_type(mut self, vehicle_type: VehicleType) -> Self {
        self.vehicle_type = vehicle_type;
        self
    }

    pub fn registration_number(mut self, registration_number: impl Into<String>) -> Self {
        self.registration_number = registration_number.into();
        self
    }

    pub fn daily_rent_price(mut self, daily_rent_price: f64) -> Self {
        self.daily_rent_price = daily_rent_price;
        self
    }

    pub fn availability_status(mut self, availability_status: AvailabilityStatus) -> Self {
        self.availability_status = availability_status;
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::vehicle::Model)` - Created vehicle entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            name: ActiveValue::Set(self.name),
            vehicle_type: ActiveValue::Set(self.vehicle_type),
            registration_number: ActiveValue::Set(self.registration_number),
            daily_rent_price: ActiveValue::Set(self.daily_rent_price),
            availability_status: ActiveValue::Set(self.availability_status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available vehicle with default values.
pub async fn create_vehicle(db: &DatabaseConnection) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db).build().await
}

/// Creates a vehicle already marked as booked.
pub async fn create_booked_vehicle(
    db: &DatabaseConnection,
) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db)
        .availability_status(AvailabilityStatus::Booked)
        .build()
        .await
}
