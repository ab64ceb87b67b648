use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "party_rank_message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub party_rank_id: i32,
    pub channel_id: String,
    pub message_id: String,
    pub kind: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::party_rank::Entity",
        from = "Column::PartyRankId",
        to = "super::party_rank::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PartyRank,
}

impl Related<super::party_rank::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyRank.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
