use super::*;

/// Tests updating an existing user's profile fields.
///
/// Expected: Ok(Some) with new values and the email lower-cased
#[tokio::test]
async fn updates_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_customer(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParams {
            id: created.id,
            name: "Renamed".to_string(),
            email: "Renamed@Example.com".to_string(),
            phone: "01999999999".to_string(),
            role: UserRole::Admin,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, "renamed@example.com");
    assert_eq!(updated.phone, "01999999999");
    assert_eq!(updated.role, UserRole::Admin);

    Ok(())
}

/// Tests updating a missing id.
///
/// Expected: Ok(None), nothing inserted
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParams {
            id: 4242,
            name: "Ghost".to_string(),
            email: "ghost@example.com".to_string(),
            phone: "0".to_string(),
            role: UserRole::Customer,
        })
        .await?;

    assert!(updated.is_none());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
