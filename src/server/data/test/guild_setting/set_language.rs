use super::*;

/// Tests setting the language for a new guild.
///
/// Expected: the language is read back
#[tokio::test]
async fn stores_language() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingRepository::new(db);
    repo.set_language(111, "ja").await?;

    assert_eq!(repo.get_language(111, "en").await?, "ja");

    Ok(())
}

/// Tests changing an existing language.
///
/// Expected: the newer language replaces the older one, other guilds untouched
#[tokio::test]
async fn replaces_existing_language() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_setting(db, "111", "ko").await?;
    factory::create_guild_setting(db, "222", "de").await?;

    let repo = GuildSettingRepository::new(db);
    repo.set_language(111, "fr").await?;

    assert_eq!(repo.get_language(111, "en").await?, "fr");
    assert_eq!(repo.get_language(222, "en").await?, "de");

    Ok(())
}
