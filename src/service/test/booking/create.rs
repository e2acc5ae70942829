use super::*;

/// Tests the happy path of booking creation.
///
/// Verifies the booking is persisted in `active` status, priced from the
/// vehicle's daily rate, and that the vehicle ends up booked.
///
/// Expected: Ok with total 150 (3 days at 50/day) and the vehicle claimed
#[tokio::test]
async fn creates_booking_and_claims_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = create_customer(db).await?;
    let vehicle = create_vehicle(db).await?;

    let (start, end) = window(3);
    let booking = BookingService::new(db)
        .create(CreateBookingParams {
            customer_id: customer.id,
            vehicle_id: vehicle.id,
            rent_start_date: start,
            rent_end_date: end,
        })
        .await?;

    assert_eq!(booking.status, BookingStatus::Active);
    assert_eq!(booking.total_price, 150.0);

    let stored = VehicleRepository::new(db)
        .find_by_id(vehicle.id)
        .await?
        .unwrap();
    assert_eq!(stored.availability_status, AvailabilityStatus::Booked);

    Ok(())
}

/// Tests that a window ending on or before its start is rejected before
/// anything is written.
///
/// Expected: Err(InvalidWindow) and no booking rows
#[tokio::test]
async fn rejects_invalid_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = create_customer(db).await?;
    let vehicle = create_vehicle(db).await?;

    let (start, _) = window(1);
    let service = BookingService::new(db);
    let result = service
        .create(CreateBookingParams {
            customer_id: customer.id,
            vehicle_id: vehicle.id,
            rent_start_date: start,
            rent_end_date: start,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::InvalidWindow))
    ));
    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests booking an unknown vehicle id.
///
/// Expected: Err(VehicleNotFound)
#[tokio::test]
async fn rejects_missing_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = create_customer(db).await?;

    let (start, end) = window(2);
    let result = BookingService::new(db)
        .create(CreateBookingParams {
            customer_id: customer.id,
            vehicle_id: 4242,
            rent_start_date: start,
            rent_end_date: end,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::VehicleNotFound))
    ));

    Ok(())
}

/// Tests booking a vehicle that is already claimed.
///
/// Expected: Err(VehicleUnavailable), vehicle status unchanged, no booking
/// rows
#[tokio::test]
async fn rejects_unavailable_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = create_customer(db).await?;
    let vehicle = create_booked_vehicle(db).await?;

    let (start, end) = window(2);
    let service = BookingService::new(db);
    let result = service
        .create(CreateBookingParams {
            customer_id: customer.id,
            vehicle_id: vehicle.id,
            rent_start_date: start,
            rent_end_date: end,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::VehicleUnavailable))
    ));
    assert!(service.get_all().await?.is_empty());

    let stored = VehicleRepository::new(db)
        .find_by_id(vehicle.id)
        .await?
        .unwrap();
    assert_eq!(stored.availability_status, AvailabilityStatus::Booked);

    Ok(())
}

/// Tests booking a claimed vehicle whose stored rate would not price.
///
/// The availability check comes before pricing, so the caller hears about
/// the unavailable vehicle rather than its broken rate.
///
/// Expected: Err(VehicleUnavailable)
#[tokio::test]
async fn reports_unavailable_before_pricing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = create_customer(db).await?;
    let vehicle = VehicleFactory::new(db)
        .daily_rent_price(0.0)
        .availability_status(entity::vehicle::AvailabilityStatus::Booked)
        .build()
        .await?;

    let (start, end) = window(2);
    let result = BookingService::new(db)
        .create(CreateBookingParams {
            customer_id: customer.id,
            vehicle_id: vehicle.id,
            rent_start_date: start,
            rent_end_date: end,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::VehicleUnavailable))
    ));

    Ok(())
}

/// Tests that a failed pricing step releases the claimed vehicle.
///
/// An available vehicle with a non-positive rate is claimed first; the
/// pricing error must roll the whole transaction back, leaving the vehicle
/// available and the ledger empty.
///
/// Expected: Err(InvalidRate), vehicle still available, no booking rows
#[tokio::test]
async fn rolls_back_claim_when_pricing_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = create_customer(db).await?;
    let vehicle = VehicleFactory::new(db).daily_rent_price(0.0).build().await?;

    let (start, end) = window(2);
    let service = BookingService::new(db);
    let result = service
        .create(CreateBookingParams {
            customer_id: customer.id,
            vehicle_id: vehicle.id,
            rent_start_date: start,
            rent_end_date: end,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::InvalidRate))
    ));
    assert!(service.get_all().await?.is_empty());

    let stored = VehicleRepository::new(db)
        .find_by_id(vehicle.id)
        .await?
        .unwrap();
    assert_eq!(stored.availability_status, AvailabilityStatus::Available);

    Ok(())
}

/// Tests two concurrent creates racing for one vehicle.
///
/// Both requests target the same available vehicle at the same time. The
/// conditional claim guarantees at most one wins; the loser must see the
/// vehicle as unavailable and leave no booking behind.
///
/// Expected: exactly one Ok, the other Err(VehicleUnavailable), one booking
/// row total
#[tokio::test]
async fn concurrent_creates_cannot_double_book() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = create_customer(db).await?;
    let vehicle = create_vehicle(db).await?;

    let (start, end) = window(2);
    let service = BookingService::new(db);
    let param = || CreateBookingParams {
        customer_id: customer.id,
        vehicle_id: vehicle.id,
        rent_start_date: start,
        rent_end_date: end,
    };

    let (first, second) = tokio::join!(service.create(param()), service.create(param()));

    let winners = [first.is_ok(), second.is_ok()]
        .iter()
        .filter(|ok| **ok)
        .count();
    assert_eq!(winners, 1);

    let loser = if first.is_err() { first } else { second };
    assert!(matches!(
        loser,
        Err(AppError::BookingErr(BookingError::VehicleUnavailable))
    ));

    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}

/// Tests that the stored price is a snapshot of the rate at booking time.
///
/// Expected: the booking keeps its original total after the vehicle's rate
/// changes
#[tokio::test]
async fn price_is_snapshot_of_booking_time_rate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = create_customer(db).await?;
    let vehicle = VehicleFactory::new(db).daily_rent_price(40.0).build().await?;

    let (start, end) = window(2);
    let service = BookingService::new(db);
    let booking = service
        .create(CreateBookingParams {
            customer_id: customer.id,
            vehicle_id: vehicle.id,
            rent_start_date: start,
            rent_end_date: end,
        })
        .await?;

    assert_eq!(booking.total_price, 80.0);

    VehicleRepository::new(db)
        .update(crate::model::vehicle::UpdateVehicleParams {
            id: vehicle.id,
            name: vehicle.name.clone(),
            vehicle_type: crate::model::vehicle::VehicleType::Car,
            daily_rent_price: 500.0,
            availability_status: None,
        })
        .await?;

    let stored = service.get_all().await?;
    assert_eq!(stored[0].total_price, 80.0);

    Ok(())
}
