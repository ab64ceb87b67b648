use super::*;

/// Tests deleting a channel removed on Discord.
///
/// Expected: Ok with the channel gone and its siblings untouched
#[tokio::test]
async fn deletes_single_channel() -> Result<(), DbErr> {
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
    factory::discord_guild_channel::GuildChannelFactory::new(db, &guild.guild_id)
        .channel_id("222")
        .build()
        .await?;

    let repo = DiscordGuildChannelRepository::new(db);
    repo.delete(111).await?;

    assert!(repo.find_by_channel_id(111).await?.is_none());
    assert!(repo.find_by_channel_id(222).await?.is_some());

    Ok(())
}
