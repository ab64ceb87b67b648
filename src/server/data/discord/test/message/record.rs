use super::*;

/// Tests recording a fresh post.
///
/// Expected: Ok with the message row stored
#[tokio::test]
async fn records_new_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_discord_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;

    let repo = PartyRankMessageRepository::new(db);
    let message = repo
        .record(party_rank.id, 555, 9001, MessageKind::Results)
        .await?;

    assert_eq!(message.party_rank_id, party_rank.id);
    assert_eq!(message.channel_id, "555");
    assert_eq!(message.message_id, "9001");
    assert_eq!(message.kind, "results");

    Ok(())
}

/// Tests recording a repost of the same kind to the same channel.
///
/// Expected: Ok with the message ID replaced in place, leaving a single row
#[tokio::test]
async fn replaces_message_id_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_discord_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;

    let repo = PartyRankMessageRepository::new(db);
    let first = repo
        .record(party_rank.id, 555, 9001, MessageKind::Reminder)
        .await?;
    let second = repo
        .record(party_rank.id, 555, 9002, MessageKind::Reminder)
        .await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.message_id, "9002");

    let rows = entity::prelude::PartyRankMessage::find().count(db).await?;
    assert_eq!(rows, 1);

    Ok(())
}
