use super::migrations::init_with_migrations;
use crate::libs::config::DatabaseConfig;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the configured database and brings its schema up to date.
    pub fn new(config: &DatabaseConfig) -> Result<Db> {
        let mut conn = Self::new_without_migrations(config)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Plain connection, used to inspect migration state without applying it.
    pub fn new_without_migrations(config: &DatabaseConfig) -> Result<Connection> {
        let db_file_path = config.resolve_path()?;
        let conn = Connection::open(&db_file_path)?;
        msg_debug!(Message::DatabaseOpened(db_file_path.display().to_string()));

        Ok(conn)
    }
}
