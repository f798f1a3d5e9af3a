// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the KeyValueStore trait.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use wikoo_config::model::StorageConfig;
use wikoo_core::{AdapterType, HealthStatus, KeyValueStore, PluginAdapter, WikooError};

use crate::database::{Database, map_tr_err};
use crate::queries;

/// SQLite-backed key/value store.
///
/// The database is opened lazily on the first call to
/// [`KeyValueStore::initialize`]; later calls are no-ops.
pub struct SqliteStore {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStore {
    /// The connection is not opened until [`KeyValueStore::initialize`] is called.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Wrap an already-open database.
    pub fn from_database(config: StorageConfig, db: Database) -> Self {
        Self {
            config,
            db: OnceCell::new_with(Some(db)),
        }
    }

    fn db(&self) -> Result<&Database, WikooError> {
        self.db.get().ok_or_else(|| WikooError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl PluginAdapter for SqliteStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Store
    }

    async fn health_check(&self) -> Result<HealthStatus, WikooError> {
        let Ok(db) = self.db() else {
            return Ok(HealthStatus::Unhealthy("not initialized".into()));
        };
        db.connection()
            .call(|conn| -> Result<i64, rusqlite::Error> {
                conn.query_row("SELECT 1", [], |row| row.get(0))
            })
            .await
            .map_err(map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), WikooError> {
        if let Some(db) = self.db.get() {
            if self.config.wal_mode {
                db.checkpoint().await?;
                debug!("shutdown: WAL checkpoint complete");
            }
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn initialize(&self) -> Result<(), WikooError> {
        let path = self.config.database_path.clone();
        let wal_mode = self.config.wal_mode;
        self.db
            .get_or_try_init(|| async move { Database::open(&path, wal_mode).await })
            .await?;
        debug!(path = %self.config.database_path, "sqlite store initialized");
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<String>, WikooError> {
        queries::kv::get(self.db()?, key).await
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), WikooError> {
        queries::kv::put(self.db()?, key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), WikooError> {
        queries::kv::delete(self.db()?, key).await.map(|_| ())
    }

    async fn clear(&self) -> Result<(), WikooError> {
        let removed = queries::kv::delete_all(self.db()?).await?;
        debug!(removed, "store cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn make_config(path: &std::path::Path) -> StorageConfig {
        StorageConfig {
            database_path: path.to_string_lossy().into_owned(),
            wal_mode: true,
        }
    }

    #[tokio::test]
    async fn identifies_as_store_adapter() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::new(make_config(&dir.path().join("id.db")));
        assert_eq!(store.name(), "sqlite");
        assert_eq!(store.version(), semver::Version::new(0, 1, 0));
        assert_eq!(store.adapter_type(), AdapterType::Store);
    }

    #[tokio::test]
    async fn initialize_creates_file_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("init.db");
        let store = SqliteStore::new(make_config(&path));

        store.initialize().await.unwrap();
        store.initialize().await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn operations_fail_before_initialize() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::new(make_config(&dir.path().join("x.db")));
        assert!(store.load("k").await.is_err());
        assert_eq!(
            store.health_check().await.unwrap(),
            HealthStatus::Unhealthy("not initialized".into())
        );
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("persist.db");

        let store = SqliteStore::new(make_config(&path));
        store.initialize().await.unwrap();
        store.save("wikoo_language", "ta").await.unwrap();
        store.shutdown().await.unwrap();
        drop(store);

        let reopened = SqliteStore::new(make_config(&path));
        reopened.initialize().await.unwrap();
        assert_eq!(
            reopened.load("wikoo_language").await.unwrap().as_deref(),
            Some("ta")
        );
        assert_eq!(reopened.health_check().await.unwrap(), HealthStatus::Healthy);
    }

    #[tokio::test]
    async fn remove_and_clear() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::new(make_config(&dir.path().join("rm.db")));
        store.initialize().await.unwrap();

        store.save("a", "1").await.unwrap();
        store.save("b", "2").await.unwrap();
        store.remove("a").await.unwrap();
        store.remove("missing").await.unwrap();
        assert_eq!(store.load("a").await.unwrap(), None);

        store.clear().await.unwrap();
        assert_eq!(store.load("b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn wraps_an_open_database_without_initialize() {
        let db = Database::open_in_memory().await.unwrap();
        let store = SqliteStore::from_database(
            StorageConfig {
                database_path: ":memory:".into(),
                wal_mode: false,
            },
            db,
        );
        assert_eq!(store.health_check().await.unwrap(), HealthStatus::Healthy);

        store.save("lang", "ta").await.unwrap();
        store.initialize().await.unwrap();
        assert_eq!(store.load("lang").await.unwrap().as_deref(), Some("ta"));
        store.shutdown().await.unwrap();
    }
}
