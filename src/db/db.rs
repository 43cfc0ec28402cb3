use crate::db::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "dayrep.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the application database in the data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(&db_file_path)
    }

    /// Opens a database file, applying pending migrations.
    pub fn open(path: &Path) -> Result<Db> {
        let mut conn = Self::open_without_migrations(path)?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    /// Raw connection, for inspecting the schema version before upgrading.
    pub fn open_without_migrations(path: &Path) -> Result<Connection> {
        let conn = Connection::open(path)?;
        tracing::debug!(path = %path.display(), "database opened");
        Ok(conn)
    }

    pub fn default_path() -> Result<std::path::PathBuf> {
        Ok(DataStorage::new().get_path(DB_FILE_NAME)?)
    }
}
