use super::*;

fn list_all_param() -> GetPartyRanksParam {
    GetPartyRanksParam {
        page: 0,
        per_page: 10,
        status: None,
        created_by: None,
        member_of: None,
    }
}

/// Tests the unfiltered listing with creator names and counts.
///
/// Expected: Ok with all contests, newest first, carrying counts
#[tokio::test]
async fn lists_party_ranks_with_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, party_rank) = factory::helpers::create_party_rank_with_creator(db).await?;
    factory::create_rank_item(db, party_rank.id, creator.id).await?;
    factory::create_rank_item(db, party_rank.id, creator.id).await?;

    let repo = PartyRankRepository::new(db);
    let (rows, total, total_pages) = repo.get_paginated(list_all_param()).await?;

    assert_eq!(total, 1);
    assert_eq!(total_pages, 1);
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.party_rank.id, party_rank.id);
    assert_eq!(row.creator_name, creator.username);
    assert_eq!(row.member_count, 1);
    assert_eq!(row.item_count, 2);

    Ok(())
}

/// Tests the status filter.
///
/// Expected: Ok with only contests in the requested status
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let _registration = factory::create_party_rank(db, creator.id).await?;
    let rating = factory::party_rank::PartyRankFactory::new(db, creator.id)
        .status("rating")
        .build()
        .await?;

    let repo = PartyRankRepository::new(db);
    let (rows, total, _) = repo
        .get_paginated(GetPartyRanksParam {
            status: Some(PartyRankStatus::Rating),
            ..list_all_param()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(rows[0].party_rank.id, rating.id);

    Ok(())
}

/// Tests the member_of filter.
///
/// Expected: Ok with only contests the user belongs to
#[tokio::test]
async fn filters_by_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_creator, joined) = factory::helpers::create_party_rank_with_creator(db).await?;
    let (_other_creator, _other) = factory::helpers::create_party_rank_with_creator(db).await?;

    let outsider = factory::create_user(db).await?;
    factory::create_member(db, joined.id, outsider.id).await?;

    let repo = PartyRankRepository::new(db);
    let (rows, total, _) = repo
        .get_paginated(GetPartyRanksParam {
            member_of: Some(outsider.id),
            ..list_all_param()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(rows[0].party_rank.id, joined.id);

    Ok(())
}

/// Tests page slicing and the total counts.
///
/// Expected: Ok with per_page rows on the first page and correct totals
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_party_rank_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    for _ in 0..5 {
        factory::create_party_rank(db, creator.id).await?;
    }

    let repo = PartyRankRepository::new(db);
    let (rows, total, total_pages) = repo
        .get_paginated(GetPartyRanksParam {
            per_page: 2,
            ..list_all_param()
        })
        .await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(total, 5);
    assert_eq!(total_pages, 3);

    Ok(())
}
