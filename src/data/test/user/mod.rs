use crate::data::user::UserRepository;
use crate::model::user::{CreateUserParams, UpdateUserParams, UserRole};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::user::create_customer;

mod create;
mod delete;
mod get_all;
mod update;
