// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key/value CRUD operations. Every write replaces the whole value.

use rusqlite::{OptionalExtension, params};
use wikoo_core::WikooError;

use crate::database::{Database, map_tr_err};

/// Fetch the value stored under `key`.
pub async fn get(db: &Database, key: &str) -> Result<Option<String>, WikooError> {
    let key = key.to_string();
    db.connection()
        .call(move |conn| -> Result<Option<String>, rusqlite::Error> {
            conn.query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
        })
        .await
        .map_err(map_tr_err)
}

/// Insert or replace the value under `key`.
pub async fn put(db: &Database, key: &str, value: &str) -> Result<(), WikooError> {
    let key = key.to_string();
    let value = value.to_string();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO kv_store (key, value, updated_at)
                 VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
                 ON CONFLICT(key) DO UPDATE SET
                     value = excluded.value,
                     updated_at = excluded.updated_at",
                params![key, value],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Delete `key`. Returns whether a row existed.
pub async fn delete(db: &Database, key: &str) -> Result<bool, WikooError> {
    let key = key.to_string();
    db.connection()
        .call(move |conn| -> Result<bool, rusqlite::Error> {
            let n = conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
            Ok(n > 0)
        })
        .await
        .map_err(map_tr_err)
}

/// Delete every key. Returns the number of rows removed.
pub async fn delete_all(db: &Database) -> Result<usize, WikooError> {
    db.connection()
        .call(|conn| -> Result<usize, rusqlite::Error> {
            conn.execute("DELETE FROM kv_store", [])
        })
        .await
        .map_err(map_tr_err)
}

/// All stored keys, sorted.
pub async fn keys(db: &Database) -> Result<Vec<String>, WikooError> {
    db.connection()
        .call(|conn| -> Result<Vec<String>, rusqlite::Error> {
            let mut stmt = conn.prepare("SELECT key FROM kv_store ORDER BY key")?;
            let rows = stmt.query_map([], |row| row.get(0))?;
            rows.collect()
        })
        .await
        .map_err(map_tr_err)
}
