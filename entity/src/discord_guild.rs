use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "discord_guild")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    pub name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::discord_guild_channel::Entity")]
    DiscordGuildChannel,
}

impl Related<super::discord_guild_channel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordGuildChannel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
