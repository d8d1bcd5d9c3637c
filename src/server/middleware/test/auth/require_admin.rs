use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with admin=true
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let login_sessions = LoginSessionStore::new(LOGIN_TTL);

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .name("AdminUser")
        .admin(true)
        .build()
        .await?;

    let token = login_sessions.create(123456789).await;
    AuthSession::new(session).set_login_token(token).await?;

    let auth_guard = AuthGuard::new(db, &login_sessions, session);
    let user = auth_guard.require(&[Permission::Admin]).await?;

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "AdminUser");
    assert!(user.admin);

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let login_sessions = LoginSessionStore::new(LOGIN_TTL);

    factory::user::UserFactory::new(db)
        .discord_id("987654321")
        .admin(false)
        .build()
        .await?;

    let token = login_sessions.create(987654321).await;
    AuthSession::new(session).set_login_token(token).await?;

    let auth_guard = AuthGuard::new(db, &login_sessions, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, 987654321);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other.map(|u| u.name)),
    }

    Ok(())
}

/// Tests empty permission list grants access.
///
/// Expected: Ok(User) for a non-admin
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let login_sessions = LoginSessionStore::new(LOGIN_TTL);

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .build()
        .await?;

    let token = login_sessions.create(123456789).await;
    AuthSession::new(session).set_login_token(token).await?;

    let auth_guard = AuthGuard::new(db, &login_sessions, session);
    let user = auth_guard.require(&[]).await?;

    assert_eq!(user.discord_id, 123456789);

    Ok(())
}
