use crate::server::{data::discord::message::PartyRankMessageRepository, model::discord::MessageKind};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod exists;
mod record;
