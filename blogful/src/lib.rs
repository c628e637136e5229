pub mod config;
pub mod storage;
pub mod data;
pub mod util;
mod lib_constants;
pub mod bin_constants;
pub mod hasher;
pub mod logging;
pub mod pagination;
pub mod listing;
pub mod authorization;
pub mod user_db;
pub mod rendering;
#[macro_use] mod error_exit;
