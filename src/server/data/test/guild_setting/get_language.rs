use super::*;

/// Tests reading a stored language.
///
/// Expected: Ok with the stored code
#[tokio::test]
async fn returns_stored_language() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_setting(db, "111", "ko").await?;

    let repo = GuildSettingRepository::new(db);

    assert_eq!(repo.get_language(111, "en").await?, "ko");

    Ok(())
}

/// Tests reading the language of a guild without settings.
///
/// Expected: Ok with the default
#[tokio::test]
async fn falls_back_to_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingRepository::new(db);

    assert_eq!(repo.get_language(111, "en").await?, "en");

    Ok(())
}
