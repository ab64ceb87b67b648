use super::*;

/// Tests the dedup check across kinds and channels.
///
/// Expected: Ok(true) only for the recorded (party rank, channel, kind)
#[tokio::test]
async fn reports_recorded_messages_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_discord_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;

    let repo = PartyRankMessageRepository::new(db);
    repo.record(party_rank.id, 555, 9001, MessageKind::StatusOngoing)
        .await?;

    assert!(repo.exists(party_rank.id, 555, MessageKind::StatusOngoing).await?);
    assert!(!repo.exists(party_rank.id, 555, MessageKind::StatusRating).await?);
    assert!(!repo.exists(party_rank.id, 556, MessageKind::StatusOngoing).await?);

    Ok(())
}
