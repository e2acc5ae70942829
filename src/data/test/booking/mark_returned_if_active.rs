use super::*;

/// Tests the guarded transition on an active booking.
///
/// Expected: Ok(true) and the stored status is returned
#[tokio::test]
async fn returns_active_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = create_customer(db).await?;
    let vehicle = create_vehicle(db).await?;
    let booking = create_active_booking(db, customer.id, vehicle.id).await?;

    let repo = BookingRepository::new(db);
    let transitioned = repo.mark_returned_if_active(booking.id).await?;

    assert!(transitioned);
    assert_eq!(
        repo.find_by_id(booking.id).await?.unwrap().status,
        BookingStatus::Returned
    );

    Ok(())
}

/// Tests re-applying the transition to a returned booking.
///
/// Expected: Ok(false) on the second call; terminal states are never
/// rewritten
#[tokio::test]
async fn second_transition_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = create_customer(db).await?;
    let vehicle = create_vehicle(db).await?;
    let booking = create_active_booking(db, customer.id, vehicle.id).await?;

    let repo = BookingRepository::new(db);

    assert!(repo.mark_returned_if_active(booking.id).await?);
    assert!(!repo.mark_returned_if_active(booking.id).await?);

    Ok(())
}

/// Tests the transition on a cancelled booking.
///
/// Expected: Ok(false); cancelled is terminal
#[tokio::test]
async fn leaves_cancelled_booking_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = create_customer(db).await?;
    let vehicle = create_vehicle(db).await?;
    let booking = BookingFactory::new(db, customer.id, vehicle.id)
        .status(entity::booking::BookingStatus::Cancelled)
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    assert!(!repo.mark_returned_if_active(booking.id).await?);
    assert_eq!(
        repo.find_by_id(booking.id).await?.unwrap().status,
        BookingStatus::Cancelled
    );

    Ok(())
}

/// Tests the transition on a missing id.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);

    assert!(!repo.mark_returned_if_active(4242).await?);

    Ok(())
}
