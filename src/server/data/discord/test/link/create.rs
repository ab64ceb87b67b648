use super::*;

/// Tests linking a party rank to a synced channel.
///
/// Expected: Ok with the link row stored
#[tokio::test]
async fn creates_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_discord_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;
    let guild = factory::create_guild(db).await?;
    factory::discord_guild_channel::GuildChannelFactory::new(db, &guild.guild_id)
        .channel_id("555666777")
        .build()
        .await?;

    let repo = PartyRankChannelRepository::new(db);
    let link = repo.create(party_rank.id, 555666777).await?;

    assert_eq!(link.party_rank_id, party_rank.id);
    assert_eq!(link.channel_id, "555666777");

    Ok(())
}

/// Tests linking to a channel the bot never synced.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unsynced_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_discord_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;

    let repo = PartyRankChannelRepository::new(db);
    let result = repo.create(party_rank.id, 999999999).await;

    assert!(result.is_err());

    Ok(())
}
