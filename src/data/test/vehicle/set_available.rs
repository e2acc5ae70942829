use super::*;

/// Tests releasing a booked vehicle.
///
/// Expected: Ok(true) and the stored status is available
#[tokio::test]
async fn frees_booked_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_booked_vehicle(db).await?;

    let repo = VehicleRepository::new(db);
    let freed = repo.set_available(created.id).await?;

    assert!(freed);
    assert_eq!(
        repo.find_by_id(created.id).await?.unwrap().availability_status,
        AvailabilityStatus::Available
    );

    Ok(())
}

/// Tests releasing a missing id.
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
    let freed = repo.set_available(4242).await?;

    assert!(!freed);

    Ok(())
}
