use super::*;

/// Tests listing admins.
///
/// Expected: only admin users, ordered by name
#[tokio::test]
async fn returns_only_admins_sorted_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("Zed")
        .admin(true)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("Alice")
        .admin(true)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("Bob")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let admins = repo.get_admins().await.unwrap();

    let names: Vec<&str> = admins.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Zed"]);

    Ok(())
}

/// Tests listing admins when none exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let admins = repo.get_admins().await.unwrap();

    assert!(admins.is_empty());

    Ok(())
}
