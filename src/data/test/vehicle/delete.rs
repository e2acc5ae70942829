use super::*;

/// Tests deleting an existing vehicle.
///
/// Expected: Ok(true) and the record is gone
#[tokio::test]
async fn deletes_existing_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_vehicle(db).await?;

    let repo = VehicleRepository::new(db);
    let deleted = repo.delete(created.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting a missing id.
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
    let deleted = repo.delete(4242).await?;

    assert!(!deleted);

    Ok(())
}
