use super::*;

/// Tests fetching several users by ID in one query.
///
/// Expected: Ok with exactly the requested users
#[tokio::test]
async fn returns_requested_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let _third = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.find_by_ids(&[first.id, second.id]).await?;

    assert_eq!(users.len(), 2);
    assert!(users.iter().any(|u| u.id == first.id));
    assert!(users.iter().any(|u| u.id == second.id));

    Ok(())
}

/// Tests the empty-input fast path.
///
/// Expected: Ok with an empty vector and no query issued
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.find_by_ids(&[]).await?;

    assert!(users.is_empty());

    Ok(())
}
