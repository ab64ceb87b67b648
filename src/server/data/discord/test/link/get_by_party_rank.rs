use super::*;

/// Tests listing a party rank's channel links with channel details attached.
///
/// Expected: Ok with the links carrying guild, channel, and name
#[tokio::test]
async fn lists_links_with_channel_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_discord_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;
    let guild = factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("123456789")
        .build()
        .await?;
    factory::discord_guild_channel::GuildChannelFactory::new(db, &guild.guild_id)
        .channel_id("111")
        .name("rank-announcements")
        .build()
        .await?;
    factory::discord_guild_channel::GuildChannelFactory::new(db, &guild.guild_id)
        .channel_id("222")
        .name("general")
        .build()
        .await?;

    let repo = PartyRankChannelRepository::new(db);
    repo.create(party_rank.id, 111).await?;
    repo.create(party_rank.id, 222).await?;

    let links = repo.get_by_party_rank(party_rank.id).await?;

    assert_eq!(links.len(), 2);
    assert_eq!(links[0].party_rank_id, party_rank.id);
    assert_eq!(links[0].guild_id, 123456789);
    assert_eq!(links[0].channel_id, 111);
    assert_eq!(links[0].channel_name, "rank-announcements");
    assert_eq!(links[1].channel_id, 222);
    assert_eq!(links[1].channel_name, "general");

    Ok(())
}

/// Tests listing links for a party rank without any.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_without_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_discord_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;

    let repo = PartyRankChannelRepository::new(db);
    let links = repo.get_by_party_rank(party_rank.id).await?;

    assert!(links.is_empty());

    Ok(())
}
