use super::*;

/// Tests claiming an available vehicle.
///
/// Expected: Ok(true) and the stored status is booked
#[tokio::test]
async fn claims_available_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_vehicle(db).await?;

    let repo = VehicleRepository::new(db);
    let claimed = repo.try_set_booked(created.id).await?;

    assert!(claimed);
    assert_eq!(
        repo.find_by_id(created.id).await?.unwrap().availability_status,
        AvailabilityStatus::Booked
    );

    Ok(())
}

/// Tests that a claimed vehicle cannot be claimed again.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn second_claim_loses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_vehicle(db).await?;

    let repo = VehicleRepository::new(db);

    assert!(repo.try_set_booked(created.id).await?);
    assert!(!repo.try_set_booked(created.id).await?);

    Ok(())
}

/// Tests claiming a missing id.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);
    let claimed = repo.try_set_booked(4242).await?;

    assert!(!claimed);

    Ok(())
}
