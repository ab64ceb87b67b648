use super::*;

/// Tests upserting a new channel.
///
/// Expected: Ok with the channel created under its guild
#[tokio::test]
async fn upserts_new_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .with_table(entity::prelude::DiscordGuildChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("123456789")
        .build()
        .await?;

    let repo = DiscordGuildChannelRepository::new(db);
    let channel = repo.upsert(123456789, 555666777, "party-ranks").await?;

    assert_eq!(channel.guild_id, 123456789);
    assert_eq!(channel.channel_id, 555666777);
    assert_eq!(channel.name, "party-ranks");

    Ok(())
}

/// Tests upserting a channel that was renamed on Discord.
///
/// Expected: Ok with the name refreshed and no duplicate row
#[tokio::test]
async fn updates_existing_channel() -> Result<(), DbErr> {
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
        .name("old-name")
        .build()
        .await?;

    let repo = DiscordGuildChannelRepository::new(db);
    let channel = repo.upsert(123456789, 555666777, "new-name").await?;

    assert_eq!(channel.name, "new-name");

    let count = entity::prelude::DiscordGuildChannel::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
