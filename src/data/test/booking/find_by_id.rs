use super::*;

/// Tests finding a booking by primary key.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = create_customer(db).await?;
    let vehicle = create_vehicle(db).await?;
    let created = create_active_booking(db, customer.id, vehicle.id).await?;

    let repo = BookingRepository::new(db);
    let found = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.vehicle_id, vehicle.id);
    assert_eq!(found.status, BookingStatus::Active);

    Ok(())
}

/// Tests lookup of a missing id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let found = repo.find_by_id(4242).await?;

    assert!(found.is_none());

    Ok(())
}
