use super::*;

/// Tests storing a verification deadline.
///
/// Expected: Ok(true) and the user reads as verified
#[tokio::test]
async fn stores_deadline() -> Result<(), DbErr> {
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
    let until = Utc::now() + Duration::days(30);
    let updated = repo.verify(123456789, until).await?;

    assert!(updated);
    assert!(repo.is_verified(123456789).await?);

    let user = repo.find_by_discord_id(123456789).await.unwrap().unwrap();
    assert_eq!(
        user.verified_until.map(|t| t.timestamp()),
        Some(until.timestamp())
    );

    Ok(())
}

/// Tests verifying an unknown user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo
        .verify(999999999, Utc::now() + Duration::days(30))
        .await?;

    assert!(!updated);

    Ok(())
}
