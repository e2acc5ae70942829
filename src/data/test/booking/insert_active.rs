use super::*;

/// Tests inserting a booking.
///
/// Verifies the booking lands in `active` status with the price stored as
/// given by the caller.
///
/// Expected: Ok with status active and the exact price
#[tokio::test]
async fn inserts_booking_in_active_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = create_customer(db).await?;
    let vehicle = create_vehicle(db).await?;

    let start = Utc::now() + Duration::days(1);
    let end = start + Duration::days(3);

    let repo = BookingRepository::new(db);
    let booking = repo
        .insert_active(
            CreateBookingParams {
                customer_id: customer.id,
                vehicle_id: vehicle.id,
                rent_start_date: start,
                rent_end_date: end,
            },
            150.0,
        )
        .await?;

    assert_eq!(booking.customer_id, customer.id);
    assert_eq!(booking.vehicle_id, vehicle.id);
    assert_eq!(booking.total_price, 150.0);
    assert_eq!(booking.status, BookingStatus::Active);

    Ok(())
}
