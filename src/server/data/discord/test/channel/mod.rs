use crate::server::data::discord::channel::DiscordGuildChannelRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod delete_stale;
mod find_by_channel_id;
mod get_by_guild_id;
mod upsert;
