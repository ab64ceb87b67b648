use crate::server::{
    data::rank_item::RankItemRepository,
    model::rank_item::{CreateRankItemParam, MediaKind, UpdateRankItemParam},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod counts;
mod create;
mod delete;
mod delete_by_author;
mod get_by_id;
mod get_by_party_rank;
mod get_by_party_rank_with_authors;
mod update;
