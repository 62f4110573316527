use std::path::Path;

use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

#[cfg(test)]
use mockall::automock;

use crate::config::{METADATA_BUCKET, METADATA_KEY, db_dir, db_path};
use crate::db::error::DbError;
use crate::db::types::Metadata;

/// Read access to the database metadata record
#[cfg_attr(test, automock)]
pub trait MetadataReader {
    /// Read the current metadata snapshot
    fn get_metadata(&self) -> Result<Metadata, DbError>;
}

/// Handle to the vulnerability database under a cache root
///
/// The connection is released when the handle is dropped or closed.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the database under `cache_dir`, creating an empty one when absent
    pub fn open(cache_dir: &Path) -> Result<Self, DbError> {
        let db_path = db_path(cache_dir);
        info!("Opening vulnerability database at {:?}", db_path);

        std::fs::create_dir_all(db_dir(cache_dir))?;
        let conn = Connection::open(&db_path)?;
        debug!("Database connection established");

        let store = Self { conn };
        store.create_schema()?;
        Ok(store)
    }

    fn create_schema(&self) -> Result<(), DbError> {
        self.conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                bucket TEXT NOT NULL,
                key TEXT NOT NULL,
                value BLOB NOT NULL,
                PRIMARY KEY (bucket, key)
            )
            "#,
            [],
        )?;
        Ok(())
    }

    /// Raw value of a key, or `None` when the key is absent
    fn get(&self, bucket: &str, key: &str) -> Result<Option<Vec<u8>>, DbError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE bucket = ?1 AND key = ?2",
                (bucket, key),
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&self, bucket: &str, key: &str, value: &[u8]) -> Result<(), DbError> {
        self.conn.execute(
            r#"
            INSERT INTO kv (bucket, key, value) VALUES (?1, ?2, ?3)
            ON CONFLICT(bucket, key) DO UPDATE SET value = excluded.value
            "#,
            (bucket, key, value),
        )?;
        Ok(())
    }

    /// Read the metadata record. An absent record reads as empty input.
    pub fn get_metadata(&self) -> Result<Metadata, DbError> {
        let bytes = self
            .get(METADATA_BUCKET, METADATA_KEY)?
            .unwrap_or_default();
        if bytes.is_empty() {
            debug!("Metadata record is empty");
            return Err(DbError::UnexpectedEndOfInput);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Overwrite the metadata record
    pub fn set_metadata(&self, metadata: &Metadata) -> Result<(), DbError> {
        let bytes = serde_json::to_vec(metadata)?;
        self.put(METADATA_BUCKET, METADATA_KEY, &bytes)?;
        debug!("Stored metadata version {}", metadata.version);
        Ok(())
    }

    /// Close the database, surfacing any error from the final flush
    pub fn close(self) -> Result<(), DbError> {
        self.conn.close().map_err(|(_, e)| DbError::Database(e))
    }
}

impl MetadataReader for Store {
    fn get_metadata(&self) -> Result<Metadata, DbError> {
        Store::get_metadata(self)
    }
}
