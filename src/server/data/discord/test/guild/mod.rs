use crate::server::data::discord::guild::DiscordGuildRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_guild_id;
mod get_all;
mod upsert;
