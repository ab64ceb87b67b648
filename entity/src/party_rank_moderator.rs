use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "party_rank_moderator")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub party_rank_id: i32,
    pub user_id: i32,
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
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::party_rank::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyRank.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
