use super::*;

/// Tests finding a vehicle by primary key.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_vehicle(db).await?;

    let repo = VehicleRepository::new(db);
    let found = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.registration_number, created.registration_number);

    Ok(())
}

/// Tests lookup of a missing id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);
    let found = repo.find_by_id(4242).await?;

    assert!(found.is_none());

    Ok(())
}
