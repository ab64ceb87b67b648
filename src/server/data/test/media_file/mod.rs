use crate::server::{data::media_file::MediaFileRepository, model::media::CreateMediaFileParam};
use entity::prelude::{MediaFile, User};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_by_uploader;
