use super::*;

/// Tests upserting a new Discord guild.
///
/// Expected: Ok with the guild created
#[tokio::test]
async fn upserts_new_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordGuildRepository::new(db);
    let guild = repo.upsert(123456789, "Rank Lounge").await?;

    assert_eq!(guild.guild_id, 123456789);
    assert_eq!(guild.name, "Rank Lounge");

    Ok(())
}

/// Tests upserting a guild the bot already knows.
///
/// Expected: Ok with the name refreshed and no duplicate row
#[tokio::test]
async fn updates_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("123456789")
        .name("Old Name")
        .build()
        .await?;

    let repo = DiscordGuildRepository::new(db);
    let guild = repo.upsert(123456789, "New Name").await?;

    assert_eq!(guild.name, "New Name");

    let count = entity::prelude::DiscordGuild::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
