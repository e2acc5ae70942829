use super::*;

/// Tests creating a new vehicle.
///
/// Expected: Ok with all fields persisted
#[tokio::test]
async fn creates_new_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);
    let vehicle = repo
        .create(CreateVehicleParams {
            name: "Family Van".to_string(),
            vehicle_type: VehicleType::Van,
            registration_number: "DHK-1234".to_string(),
            daily_rent_price: 80.0,
            availability_status: AvailabilityStatus::Available,
        })
        .await?;

    assert_eq!(vehicle.name, "Family Van");
    assert_eq!(vehicle.vehicle_type, VehicleType::Van);
    assert_eq!(vehicle.registration_number, "DHK-1234");
    assert_eq!(vehicle.daily_rent_price, 80.0);
    assert_eq!(vehicle.availability_status, AvailabilityStatus::Available);

    Ok(())
}

/// Tests that registration numbers are unique.
///
/// Expected: Err on the second insert with the same registration
#[tokio::test]
async fn rejects_duplicate_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);
    let param = |name: &str| CreateVehicleParams {
        name: name.to_string(),
        vehicle_type: VehicleType::Car,
        registration_number: "DUP-0001".to_string(),
        daily_rent_price: 50.0,
        availability_status: AvailabilityStatus::Available,
    };

    repo.create(param("First")).await?;
    let result = repo.create(param("Second")).await;

    assert!(result.is_err());

    Ok(())
}
