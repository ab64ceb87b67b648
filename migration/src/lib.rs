pub use sea_orm_migration::prelude::*;

mod m20260705_000001_create_user_table;
mod m20260705_000002_create_party_rank_table;
mod m20260705_000003_create_rank_item_table;
mod m20260705_000004_create_party_rank_member_table;
mod m20260705_000005_create_party_rank_moderator_table;
mod m20260705_000006_create_item_rating_table;
mod m20260706_000007_create_discord_guild_table;
mod m20260706_000008_create_discord_guild_channel_table;
mod m20260706_000009_create_party_rank_channel_table;
mod m20260706_000010_create_party_rank_message_table;
mod m20260707_000011_create_media_file_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260705_000001_create_user_table::Migration),
            Box::new(m20260705_000002_create_party_rank_table::Migration),
            Box::new(m20260705_000003_create_rank_item_table::Migration),
            Box::new(m20260705_000004_create_party_rank_member_table::Migration),
            Box::new(m20260705_000005_create_party_rank_moderator_table::Migration),
            Box::new(m20260705_000006_create_item_rating_table::Migration),
            Box::new(m20260706_000007_create_discord_guild_table::Migration),
            Box::new(m20260706_000008_create_discord_guild_channel_table::Migration),
            Box::new(m20260706_000009_create_party_rank_channel_table::Migration),
            Box::new(m20260706_000010_create_party_rank_message_table::Migration),
            Box::new(m20260707_000011_create_media_file_table::Migration),
        ]
    }
}
