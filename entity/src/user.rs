use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub discord_id: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub last_login: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::item_rating::Entity")]
    ItemRating,
    #[sea_orm(has_many = "super::media_file::Entity")]
    MediaFile,
    #[sea_orm(has_many = "super::party_rank::Entity")]
    PartyRank,
    #[sea_orm(has_many = "super::party_rank_member::Entity")]
    PartyRankMember,
    #[sea_orm(has_many = "super::party_rank_moderator::Entity")]
    PartyRankModerator,
    #[sea_orm(has_many = "super::rank_item::Entity")]
    RankItem,
}

impl Related<super::item_rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemRating.def()
    }
}

impl Related<super::media_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaFile.def()
    }
}

impl Related<super::party_rank::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyRank.def()
    }
}

impl Related<super::party_rank_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyRankMember.def()
    }
}

impl Related<super::party_rank_moderator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyRankModerator.def()
    }
}

impl Related<super::rank_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RankItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
