use super::*;

/// Tests creating a new user.
///
/// Verifies that the user repository successfully creates a new user record
/// with the specified Discord ID, username, and avatar URL.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .upsert(UpsertUserParam {
            discord_id: "123456789".to_string(),
            username: "rank_enjoyer".to_string(),
            avatar_url: Some("https://cdn.discordapp.com/avatars/123456789/abc.png".to_string()),
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.discord_id, "123456789");
    assert_eq!(user.username, "rank_enjoyer");
    assert_eq!(
        user.avatar_url.as_deref(),
        Some("https://cdn.discordapp.com/avatars/123456789/abc.png")
    );

    Ok(())
}

/// Tests refreshing an existing user's profile on a repeat login.
///
/// Verifies that upserting the same Discord ID again updates the username,
/// avatar URL, and last login without creating a second row.
///
/// Expected: Ok with the same row updated in place
#[tokio::test]
async fn refreshes_profile_on_relogin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let first = repo
        .upsert(UpsertUserParam {
            discord_id: "123456789".to_string(),
            username: "old_name".to_string(),
            avatar_url: None,
        })
        .await?;

    let second = repo
        .upsert(UpsertUserParam {
            discord_id: "123456789".to_string(),
            username: "new_name".to_string(),
            avatar_url: Some("https://cdn.discordapp.com/avatars/123456789/def.png".to_string()),
        })
        .await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.username, "new_name");
    assert!(second.avatar_url.is_some());
    assert!(second.last_login >= first.last_login);

    use sea_orm::{EntityTrait, PaginatorTrait};
    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
