use crate::server::data::item_rating::ItemRatingRepository;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod count_rated_by_user;
mod delete_by_user_for_party_rank;
mod get_by_user_for_party_rank;
mod get_for_party_rank_with_users;
mod upsert;
