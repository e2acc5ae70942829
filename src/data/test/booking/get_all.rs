use super::*;

/// Tests listing the whole ledger.
///
/// Expected: Ok with every record, ordered by id
#[tokio::test]
async fn returns_all_bookings_ordered() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = create_customer(db).await?;
    let vehicle = create_vehicle(db).await?;

    let first = create_active_booking(db, customer.id, vehicle.id).await?;
    let second = BookingFactory::new(db, customer.id, vehicle.id)
        .status(entity::booking::BookingStatus::Returned)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_all().await?;

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, first.id);
    assert_eq!(bookings[1].id, second.id);
    assert_eq!(bookings[1].status, BookingStatus::Returned);

    Ok(())
}
