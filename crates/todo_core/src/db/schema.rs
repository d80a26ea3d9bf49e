//! `kv_entries` schema bootstrap.
//!
//! # Invariants
//! - After [`ensure_schema`] the table exists and `user_version` equals
//!   [`SCHEMA_VERSION`].
//! - The table DDL is idempotent, so a stamped file that lost its table is
//!   repaired on the next open.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// Schema revision written to `PRAGMA user_version`.
pub const SCHEMA_VERSION: u32 = 1;

const KV_ENTRIES_DDL: &str = include_str!("kv_entries.sql");

/// Creates the key-value table if needed and stamps the schema version.
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the file was written by a newer binary.
pub fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    let found: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if found > SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: found,
            latest_supported: SCHEMA_VERSION,
        });
    }

    let tx = conn.transaction()?;
    tx.execute_batch(KV_ENTRIES_DDL)?;
    if found < SCHEMA_VERSION {
        tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }
    tx.commit()?;

    if found < SCHEMA_VERSION {
        info!("event=db_schema module=db status=ok from={found} to={SCHEMA_VERSION}");
    }
    Ok(())
}
