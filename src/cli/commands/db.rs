use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::hlog_quiet;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats::print_db_info;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

fn integrity_check(pool: &DbPool) -> AppResult<()> {
    info("Running integrity check…");

    let result: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if result == "ok" {
        success("Integrity check passed.");
    } else {
        error(format!("Integrity check failed: {}", result));
    }
    Ok(())
}

/// Database maintenance. Flags combine and run in the order
/// migrate, info, check, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    let db_path = cfg.database_path();
    let mut pool = DbPool::new(&db_path)?;

    if *migrate {
        info("Running migrations…");
        run_pending_migrations(&pool.conn)?;
        hlog_quiet(&pool.conn, "migrate", "", "Pending migrations executed");
        success("Migration completed.");
    }

    if *show_info {
        print_db_info(&mut pool, &db_path)?;
    }

    if *check {
        integrity_check(&pool)?;
    }

    if *vacuum {
        info("Running VACUUM…");
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    Ok(())
}
