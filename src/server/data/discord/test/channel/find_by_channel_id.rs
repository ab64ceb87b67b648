use super::*;

/// Tests looking up a synced channel by its Discord ID.
///
/// Expected: Ok(Some) for a synced channel, Ok(None) otherwise
#[tokio::test]
async fn finds_synced_channel() -> Result<(), DbErr> {
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
        .channel_id("555666777")
        .name("party-ranks")
        .build()
        .await?;

    let repo = DiscordGuildChannelRepository::new(db);

    let channel = repo.find_by_channel_id(555666777).await?;
    let channel = channel.expect("channel should be synced");
    assert_eq!(channel.channel_id, 555666777);
    assert_eq!(channel.guild_id, 123456789);
    assert_eq!(channel.name, "party-ranks");

    assert!(repo.find_by_channel_id(999999999).await?.is_none());

    Ok(())
}
