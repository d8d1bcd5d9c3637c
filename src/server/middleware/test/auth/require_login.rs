use super::*;

/// Tests a session without a login token.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let login_sessions = LoginSessionStore::new(LOGIN_TTL);

    let auth_guard = AuthGuard::new(db, &login_sessions, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a cookie whose token was replaced by a newer login.
///
/// Expected: Err(AuthError::UserNotInSession) for the old token, Ok for the new one
#[tokio::test]
async fn rejects_token_replaced_by_newer_login() -> Result<(), AppError> {
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

    let old_token = login_sessions.create(123456789).await;
    AuthSession::new(session).set_login_token(old_token).await?;
    let new_token = login_sessions.create(123456789).await;

    let auth_guard = AuthGuard::new(db, &login_sessions, session);
    assert!(matches!(
        auth_guard.require(&[]).await,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    AuthSession::new(session).set_login_token(new_token).await?;
    assert!(auth_guard.require(&[]).await.is_ok());

    Ok(())
}

/// Tests a token whose user row is missing.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let login_sessions = LoginSessionStore::new(LOGIN_TTL);

    let token = login_sessions.create(555).await;
    AuthSession::new(session).set_login_token(token).await?;

    let auth_guard = AuthGuard::new(db, &login_sessions, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(555)))
    ));

    Ok(())
}
