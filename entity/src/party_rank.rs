use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "party_rank")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub creator_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub status: String,
    pub items_per_member: i32,
    pub allow_comments: bool,
    pub show_authors_on_results: bool,
    pub deadline_submissions: Option<DateTimeUtc>,
    pub deadline_ratings: Option<DateTimeUtc>,
    pub finished_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::party_rank_channel::Entity")]
    PartyRankChannel,
    #[sea_orm(has_many = "super::party_rank_member::Entity")]
    PartyRankMember,
    #[sea_orm(has_many = "super::party_rank_message::Entity")]
    PartyRankMessage,
    #[sea_orm(has_many = "super::party_rank_moderator::Entity")]
    PartyRankModerator,
    #[sea_orm(has_many = "super::rank_item::Entity")]
    RankItem,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::party_rank_channel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyRankChannel.def()
    }
}

impl Related<super::party_rank_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyRankMember.def()
    }
}

impl Related<super::party_rank_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyRankMessage.def()
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

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
