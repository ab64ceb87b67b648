use super::*;

/// Tests looking up a link by party rank and channel.
///
/// Expected: Ok(Some) for a linked pair, Ok(None) otherwise
#[tokio::test]
async fn finds_existing_link() -> Result<(), DbErr> {
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
    let created = repo.create(party_rank.id, 555666777).await?;

    let found = repo.find(party_rank.id, 555666777).await?;
    let found = found.expect("link should exist");
    assert_eq!(found.id, created.id);

    assert!(repo.find(party_rank.id, 999999999).await?.is_none());

    Ok(())
}
