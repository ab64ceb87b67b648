use super::*;

/// Tests unlinking a channel by link ID.
///
/// Expected: Ok with the link gone afterwards
#[tokio::test]
async fn deletes_link() -> Result<(), DbErr> {
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

    repo.delete(link.id).await?;

    assert!(repo.get_by_id(link.id).await?.is_none());
    assert!(repo.find(party_rank.id, 555666777).await?.is_none());

    Ok(())
}
