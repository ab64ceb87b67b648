use super::*;

/// Tests looking up a synced guild by its Discord ID.
///
/// Expected: Ok(Some) for a synced guild, Ok(None) otherwise
#[tokio::test]
async fn finds_synced_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("123456789")
        .name("Rank Lounge")
        .build()
        .await?;

    let repo = DiscordGuildRepository::new(db);

    let guild = repo.find_by_guild_id(123456789).await?;
    let guild = guild.expect("guild should be synced");
    assert_eq!(guild.guild_id, 123456789);
    assert_eq!(guild.name, "Rank Lounge");

    assert!(repo.find_by_guild_id(999999999).await?.is_none());

    Ok(())
}
