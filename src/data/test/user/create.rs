use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts the record, lower-cases the email,
/// and returns a domain user without the credential.
///
/// Expected: Ok with all fields persisted and email normalized
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Alice".to_string(),
            email: "Alice@Example.com".to_string(),
            password: "hashed-password".to_string(),
            phone: "01812345678".to_string(),
            role: UserRole::Customer,
        })
        .await?;

    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.phone, "01812345678");
    assert_eq!(user.role, UserRole::Customer);

    Ok(())
}

/// Tests that two users cannot share an email address.
///
/// Expected: Err on the second insert with the same address
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = |name: &str| CreateUserParams {
        name: name.to_string(),
        email: "same@example.com".to_string(),
        password: "hashed-password".to_string(),
        phone: "01812345678".to_string(),
        role: UserRole::Customer,
    };

    repo.create(param("First")).await?;
    let result = repo.create(param("Second")).await;

    assert!(result.is_err());

    Ok(())
}
