use super::*;

/// Tests deleting a guild when the bot is removed.
///
/// Expected: Ok with the guild and its channels gone
#[tokio::test]
async fn deletes_guild_and_cascades_channels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .with_table(entity::prelude::DiscordGuildChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("123456789")
        .build()
        .await?;
    factory::create_guild_channel(db, &guild.guild_id).await?;
    factory::create_guild_channel(db, &guild.guild_id).await?;

    let repo = DiscordGuildRepository::new(db);
    repo.delete(123456789).await?;

    assert!(repo.find_by_guild_id(123456789).await?.is_none());

    let channels = entity::prelude::DiscordGuildChannel::find().count(db).await?;
    assert_eq!(channels, 0);

    Ok(())
}

/// Tests deleting a guild the bot never synced.
///
/// Expected: Ok, deleting nothing
#[tokio::test]
async fn succeeds_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordGuildRepository::new(db);
    repo.delete(999999999).await?;

    Ok(())
}
