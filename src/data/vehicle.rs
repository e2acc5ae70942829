//! Vehicle data repository for database operations.
//!
//! This module provides the `VehicleRepository` for managing the vehicle fleet.
//! Besides plain CRUD it owns the two availability transitions used by the
//! booking lifecycle: an atomic compare-and-set to `booked` and the release
//! back to `available`. The repository is generic over the connection so the
//! lifecycle service can run it inside a transaction.

use crate::model::vehicle::{CreateVehicleParams, UpdateVehicleParams, Vehicle};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Repository providing database operations for vehicle management.
pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new VehicleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `VehicleRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new vehicle record.
    ///
    /// # Arguments
    /// - `param` - Vehicle creation parameters
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The created vehicle
    /// - `Err(DbErr)` - Database error, including unique violations on the
    ///   registration number
    pub async fn create(&self, param: CreateVehicleParams) -> Result<Vehicle, DbErr> {
        let entity = entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
            name: ActiveValue::Set(param.name),
            vehicle_type: ActiveValue::Set(param.vehicle_type.into()),
            registration_number: ActiveValue::Set(param.registration_number),
            daily_rent_price: ActiveValue::Set(param.daily_rent_price),
            availability_status: ActiveValue::Set(param.availability_status.into()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Vehicle::from_entity(entity))
    }

    /// Finds a vehicle by its primary key.
    ///
    /// # Arguments
    /// - `vehicle_id` - Vehicle record ID
    ///
    /// # Returns
    /// - `Ok(Some(Vehicle))` - Vehicle found
    /// - `Ok(None)` - No vehicle with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, vehicle_id: i32) -> Result<Option<Vehicle>, DbErr> {
        let entity = entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Vehicle::from_entity))
    }

    /// Retrieves all vehicles ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Vehicle>)` - All vehicle records, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Vehicle>, DbErr> {
        let entities = entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Vehicle::from_entity).collect())
    }

    /// Updates an existing vehicle's details.
    ///
    /// The registration number is immutable and never updated. The
    /// availability status is only written when the parameters carry an
    /// explicit value.
    ///
    /// # Arguments
    /// - `param` - Update parameters including the target vehicle ID
    ///
    /// # Returns
    /// - `Ok(Some(Vehicle))` - Updated vehicle
    /// - `Ok(None)` - No vehicle with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateVehicleParams) -> Result<Option<Vehicle>, DbErr> {
        let Some(entity) = entity::prelude::Vehicle::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::vehicle::ActiveModel = entity.into();
        active.name = ActiveValue::Set(param.name);
        active.vehicle_type = ActiveValue::Set(param.vehicle_type.into());
        active.daily_rent_price = ActiveValue::Set(param.daily_rent_price);

        if let Some(status) = param.availability_status {
            active.availability_status = ActiveValue::Set(status.into());
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Vehicle::from_entity(updated)))
    }

    /// Deletes a vehicle by ID.
    ///
    /// Bookings referencing the vehicle are removed by the cascade on the
    /// foreign key.
    ///
    /// # Arguments
    /// - `vehicle_id` - Vehicle record ID
    ///
    /// # Returns
    /// - `Ok(true)` - Vehicle existed and was deleted
    /// - `Ok(false)` - No vehicle with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, vehicle_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Vehicle::delete_by_id(vehicle_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Atomically claims a vehicle for a booking.
    ///
    /// Issues a single conditional UPDATE that flips the availability status
    /// from `available` to `booked`. Exactly one of any set of concurrent
    /// callers observes an affected row; the rest see the vehicle already
    /// claimed. The read-then-write race is resolved here rather than by the
    /// caller checking availability first.
    ///
    /// # Arguments
    /// - `vehicle_id` - Vehicle record ID
    ///
    /// # Returns
    /// - `Ok(true)` - This caller claimed the vehicle
    /// - `Ok(false)` - Vehicle was missing or already booked
    /// - `Err(DbErr)` - Database error during update
    pub async fn try_set_booked(&self, vehicle_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Vehicle::update_many()
            .set(entity::vehicle::ActiveModel {
                availability_status: ActiveValue::Set(
                    entity::vehicle::AvailabilityStatus::Booked,
                ),
                ..Default::default()
            })
            .filter(entity::vehicle::Column::Id.eq(vehicle_id))
            .filter(
                entity::vehicle::Column::AvailabilityStatus
                    .eq(entity::vehicle::AvailabilityStatus::Available),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Releases a vehicle back to the available pool.
    ///
    /// # Arguments
    /// - `vehicle_id` - Vehicle record ID
    ///
    /// # Returns
    /// - `Ok(true)` - Vehicle existed and is now available
    /// - `Ok(false)` - No vehicle with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_available(&self, vehicle_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Vehicle::update_many()
            .set(entity::vehicle::ActiveModel {
                availability_status: ActiveValue::Set(
                    entity::vehicle::AvailabilityStatus::Available,
                ),
                ..Default::default()
            })
            .filter(entity::vehicle::Column::Id.eq(vehicle_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
