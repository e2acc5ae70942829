//! Vehicle service for business logic.
//!
//! Fleet management: create, query, update, and delete vehicles. Rate
//! validation happens here so the directory never stores a non-positive
//! daily price. Availability transitions driven by bookings do not go
//! through this service; the booking service owns those.

use sea_orm::DatabaseConnection;

use crate::{
    data::vehicle::VehicleRepository,
    error::AppError,
    model::vehicle::{CreateVehicleParams, UpdateVehicleParams, Vehicle},
};

/// Service providing business logic for vehicle management.
pub struct VehicleService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    /// Creates a new VehicleService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `VehicleService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a vehicle to the fleet.
    ///
    /// # Arguments
    /// - `param` - Vehicle creation parameters
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The created vehicle
    /// - `Err(AppError::BadRequest)` - Non-positive daily rate
    /// - `Err(AppError::DbErr)` - Database error, including duplicate
    ///   registration number
    pub async fn create_vehicle(&self, param: CreateVehicleParams) -> Result<Vehicle, AppError> {
        Self::validate_rate(param.daily_rent_price)?;

        let vehicle = VehicleRepository::new(self.db).create(param).await?;

        Ok(vehicle)
    }

    /// Retrieves all vehicles.
    ///
    /// # Returns
    /// - `Ok(Vec<Vehicle>)` - All vehicle records, possibly empty
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_vehicles(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = VehicleRepository::new(self.db).get_all().await?;

        Ok(vehicles)
    }

    /// Updates a vehicle's details.
    ///
    /// # Arguments
    /// - `param` - Update parameters including the target vehicle ID
    ///
    /// # Returns
    /// - `Ok(Some(Vehicle))` - Updated vehicle
    /// - `Ok(None)` - No vehicle with that ID
    /// - `Err(AppError::BadRequest)` - Non-positive daily rate
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_vehicle(
        &self,
        param: UpdateVehicleParams,
    ) -> Result<Option<Vehicle>, AppError> {
        Self::validate_rate(param.daily_rent_price)?;

        let vehicle = VehicleRepository::new(self.db).update(param).await?;

        Ok(vehicle)
    }

    /// Deletes a vehicle and, via cascade, its bookings.
    ///
    /// # Arguments
    /// - `vehicle_id` - Vehicle record ID
    ///
    /// # Returns
    /// - `Ok(true)` - Vehicle existed and was deleted
    /// - `Ok(false)` - No vehicle with that ID
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_vehicle(&self, vehicle_id: i32) -> Result<bool, AppError> {
        let deleted = VehicleRepository::new(self.db).delete(vehicle_id).await?;

        Ok(deleted)
    }

    fn validate_rate(daily_rent_price: f64) -> Result<(), AppError> {
        if daily_rent_price <= 0.0 {
            return Err(AppError::BadRequest(
                "Daily rent price must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
