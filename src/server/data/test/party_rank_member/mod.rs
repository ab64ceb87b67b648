use crate::server::data::party_rank_member::PartyRankMemberRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_party_rank;
mod create;
mod delete;
mod find_membership;
mod get_by_party_rank;
mod set_favorite;
