use crate::server::data::discord::link::PartyRankChannelRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find;
mod get_by_party_rank;
