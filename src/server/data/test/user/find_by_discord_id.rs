use super::*;

/// Tests finding an existing user.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .name("Gloop")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id(123456789).await.unwrap();

    assert!(user.is_some());
    assert_eq!(user.unwrap().name, "Gloop");

    Ok(())
}

/// Tests looking up an unknown user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id(999999999).await.unwrap();

    assert!(user.is_none());

    Ok(())
}
