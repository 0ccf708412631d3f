use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use rusqlite::Connection;

use super::courses::StoreError;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".course-catalog";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "courses.sqlite";

/// Open the course database file, creating the data directory on first use,
/// and return a live connection. SQLite creates the file itself when it does
/// not exist yet, so the create-tables mode works on a fresh machine.
pub fn open_connection() -> Result<Connection, StoreError> {
    let db_path = db_path()?;

    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).map_err(StoreError::DataDir)?;
    }

    Connection::open(&db_path).map_err(StoreError::Open)
}

/// Resolve the absolute path to the SQLite database inside the user's home.
fn db_path() -> Result<PathBuf, StoreError> {
    let base_dirs = BaseDirs::new().ok_or(StoreError::NoHomeDir)?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}
