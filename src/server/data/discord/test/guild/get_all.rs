use super::*;

/// Tests listing every synced guild ordered by name.
///
/// Expected: Ok with all guilds in name order
#[tokio::test]
async fn lists_guilds_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("222")
        .name("Zeta Club")
        .build()
        .await?;
    factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("111")
        .name("Alpha Club")
        .build()
        .await?;

    let repo = DiscordGuildRepository::new(db);
    let guilds = repo.get_all().await?;

    assert_eq!(guilds.len(), 2);
    assert_eq!(guilds[0].name, "Alpha Club");
    assert_eq!(guilds[1].name, "Zeta Club");

    Ok(())
}

/// Tests listing guilds before any sync happened.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_without_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordGuildRepository::new(db);
    let guilds = repo.get_all().await?;

    assert!(guilds.is_empty());

    Ok(())
}
