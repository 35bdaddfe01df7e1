pub mod add;
pub mod analyze;
pub mod backup;
pub mod check;
pub mod config;
pub mod db;
pub mod del;
pub mod demo;
pub mod details;
pub mod export;
pub mod init;
pub mod list;
pub mod log;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database, creating/upgrading the schema if needed.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database_path())?;
    init_db(&pool.conn)?;
    Ok(pool)
}
