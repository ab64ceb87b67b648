use crate::server::{
    data::party_rank::PartyRankRepository,
    model::party_rank::{
        CreatePartyRankParam, GetPartyRanksParam, PartyRankStatus, UpdatePartyRankParam,
    },
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_due_ratings;
mod find_due_submissions;
mod find_rating_ending_within;
mod get_by_id;
mod get_paginated;
mod set_status;
mod update;
