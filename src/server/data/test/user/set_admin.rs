use super::*;

/// Tests granting admin status to a user.
///
/// Expected: Ok(true) with user admin status set to true
#[tokio::test]
async fn grants_admin_status() -> Result<(), DbErr> {
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
    let updated = repo.set_admin(123456789, true).await?;

    assert!(updated);
    let user = repo.find_by_discord_id(123456789).await.unwrap().unwrap();
    assert!(user.admin);

    Ok(())
}

/// Tests revoking admin status from a user.
///
/// Expected: Ok(true) with user admin status set to false
#[tokio::test]
async fn revokes_admin_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .admin(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.set_admin(123456789, false).await?;

    let user = repo.find_by_discord_id(123456789).await.unwrap().unwrap();
    assert!(!user.admin);

    Ok(())
}

/// Tests setting admin status for a non-existent user.
///
/// Expected: Ok(false), nothing updated
#[tokio::test]
async fn reports_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo.set_admin(999999999, true).await?;

    assert!(!updated);

    Ok(())
}
