use super::*;

/// Tests listing a guild's channels ordered by name.
///
/// Expected: Ok with only that guild's channels in name order
#[tokio::test]
async fn lists_channels_ordered_by_name() -> Result<(), DbErr> {
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
        .name("zeta-talk")
        .build()
        .await?;
    factory::discord_guild_channel::GuildChannelFactory::new(db, &guild.guild_id)
        .channel_id("222")
        .name("alpha-talk")
        .build()
        .await?;

    let other = factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("987654321")
        .build()
        .await?;
    factory::create_guild_channel(db, &other.guild_id).await?;

    let repo = DiscordGuildChannelRepository::new(db);
    let channels = repo.get_by_guild_id(123456789).await?;

    assert_eq!(channels.len(), 2);
    assert_eq!(channels[0].name, "alpha-talk");
    assert_eq!(channels[1].name, "zeta-talk");

    Ok(())
}
