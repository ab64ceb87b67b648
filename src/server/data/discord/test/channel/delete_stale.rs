use super::*;

/// Tests the sync sweep dropping channels Discord no longer reports.
///
/// Expected: Ok with only the kept channels surviving
#[tokio::test]
async fn removes_channels_missing_from_keep_list() -> Result<(), DbErr> {
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
    for channel_id in ["111", "222", "333"] {
        factory::discord_guild_channel::GuildChannelFactory::new(db, &guild.guild_id)
            .channel_id(channel_id)
            .build()
            .await?;
    }

    let repo = DiscordGuildChannelRepository::new(db);
    repo.delete_stale(123456789, &[111, 333]).await?;

    assert!(repo.find_by_channel_id(111).await?.is_some());
    assert!(repo.find_by_channel_id(222).await?.is_none());
    assert!(repo.find_by_channel_id(333).await?.is_some());

    Ok(())
}

/// Tests the sweep with an empty keep list.
///
/// Channels of other guilds must not be touched.
///
/// Expected: Ok with all of the guild's channels removed
#[tokio::test]
async fn removes_all_channels_when_keep_is_empty() -> Result<(), DbErr> {
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
    factory::discord_guild_channel::GuildChannelFactory::new(db, &guild.guild_id)
        .channel_id("111")
        .build()
        .await?;

    let other = factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("987654321")
        .build()
        .await?;
    factory::discord_guild_channel::GuildChannelFactory::new(db, &other.guild_id)
        .channel_id("444")
        .build()
        .await?;

    let repo = DiscordGuildChannelRepository::new(db);
    repo.delete_stale(123456789, &[]).await?;

    assert!(repo.get_by_guild_id(123456789).await?.is_empty());
    assert!(repo.find_by_channel_id(444).await?.is_some());

    Ok(())
}
