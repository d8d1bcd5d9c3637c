use super::*;

/// Tests creating a new user on first login.
///
/// Expected: Ok with the user stored, not admin, not verified
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
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "Gloop".to_string(),
            is_admin: None,
        })
        .await
        .unwrap();

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "Gloop");
    assert!(!user.admin);
    assert!(user.verified_until.is_none());

    Ok(())
}

/// Tests that a repeated login updates the name but keeps admin and verification.
///
/// Expected: name changed, admin flag and verified_until preserved
#[tokio::test]
async fn preserves_admin_and_verification_on_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .name("OldName")
        .admin(true)
        .verified(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "NewName".to_string(),
            is_admin: None,
        })
        .await
        .unwrap();

    assert_eq!(user.name, "NewName");
    assert!(user.admin);
    assert_eq!(user.verified_until, existing.verified_until);

    Ok(())
}

/// Tests that an explicit admin flag overwrites the stored one.
///
/// Expected: admin promoted on upsert with Some(true)
#[tokio::test]
async fn updates_admin_when_provided() -> Result<(), DbErr> {
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
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "Gloop".to_string(),
            is_admin: Some(true),
        })
        .await
        .unwrap();

    assert!(user.admin);

    Ok(())
}
