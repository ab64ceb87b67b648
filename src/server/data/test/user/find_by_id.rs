use super::*;

/// Tests finding a user by database ID.
///
/// Expected: Ok(Some(user)) with matching fields
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(created.id).await?;

    assert!(found.is_some());
    let user = found.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.discord_id, created.discord_id);
    assert_eq!(user.username, created.username);

    Ok(())
}

/// Tests lookup of a user ID that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(999999).await?;

    assert!(found.is_none());

    Ok(())
}
