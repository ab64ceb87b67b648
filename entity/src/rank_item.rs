use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "rank_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub party_rank_id: i32,
    pub author_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub media_kind: String,
    pub media_url: String,
    pub start_seconds: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::item_rating::Entity")]
    ItemRating,
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
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::item_rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemRating.def()
    }
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
