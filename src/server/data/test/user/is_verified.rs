use super::*;

/// Tests a user with a future verification deadline.
///
/// Expected: Ok(true)
#[tokio::test]
async fn verified_before_deadline() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_verified_user(db, "123456789").await?;

    let repo = UserRepository::new(db);

    assert!(repo.is_verified(123456789).await?);

    Ok(())
}

/// Tests a user whose verification lapsed.
///
/// Expected: Ok(false)
#[tokio::test]
async fn not_verified_after_deadline() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .verified_until(Utc::now() - Duration::days(1))
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(!repo.is_verified(123456789).await?);

    Ok(())
}

/// Tests users that never verified or never logged in.
///
/// Expected: Ok(false) for both
#[tokio::test]
async fn not_verified_without_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(!repo.is_verified(123456789).await?);
    assert!(!repo.is_verified(987654321).await?);

    Ok(())
}
