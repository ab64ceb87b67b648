use crate::server::data::party_rank_moderator::PartyRankModeratorRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_party_rank;
mod is_moderator;
