//! The structured record store boundary. The rest of the program only ever
//! asks for three capabilities (create the table, persist one record, run a
//! filtered scan), so that surface is captured in the [`CourseStore`] trait
//! and the embedded SQLite implementation stays swappable behind it.

use rusqlite::{params, Connection};
use thiserror::Error;

use crate::models::CourseRecord;

use super::connection::open_connection;

/// Name of the single table this program manages.
const TABLE: &str = "Courses";

/// Closed CourseID range applied to every search scan. This reproduces a
/// fixed constraint of the original system: courses with an id past the upper
/// bound exist in the table but are never returned by a search.
const SCAN_ID_MIN: i64 = 0;
const SCAN_ID_MAX: i64 = 10;

/// Failures raised at the store boundary. The search mode collapses all of
/// these into a single "No results found" message; the create-tables and
/// insert-data modes propagate them unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not locate home directory")]
    NoHomeDir,
    #[error("failed to create data directory: {0}")]
    DataDir(#[source] std::io::Error),
    #[error("failed to open course database: {0}")]
    Open(#[source] rusqlite::Error),
    #[error("course database operation failed: {0}")]
    Sql(#[from] rusqlite::Error),
}

/// The three capabilities the program consumes from the external store.
pub trait CourseStore {
    /// Declare the `Courses` table keyed by the composite primary key
    /// `(CourseID, Subject)`. Fails if the table already exists.
    fn create_table(&self) -> Result<(), StoreError>;

    /// Persist one record, overwriting any row with the same key pair.
    fn put_course(&self, record: &CourseRecord) -> Result<(), StoreError>;

    /// Return every record matching the subject/catalog pair whose CourseID
    /// falls inside the fixed scan range, in CourseID order.
    fn scan_courses(
        &self,
        subject: &str,
        catalog_nbr: &str,
    ) -> Result<Vec<CourseRecord>, StoreError>;
}

/// SQLite-backed store. The connection is constructed explicitly and the
/// struct is handed to whichever mode needs it; there is no process-wide
/// client handle.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the store at its default on-disk location.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self::new(open_connection()?))
    }

    /// Wrap an existing connection. Used by tests to run against an
    /// in-memory database.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl CourseStore for SqliteStore {
    fn create_table(&self) -> Result<(), StoreError> {
        // Deliberately no IF NOT EXISTS: re-running --create-tables against
        // an already provisioned store is an error that must propagate.
        self.conn.execute(
            &format!(
                "CREATE TABLE {TABLE} (
                    CourseID INTEGER NOT NULL,
                    Subject TEXT NOT NULL,
                    CatalogNbr TEXT NOT NULL,
                    Title TEXT NOT NULL,
                    NumCredits INTEGER NOT NULL,
                    PRIMARY KEY (CourseID, Subject)
                )"
            ),
            [],
        )?;
        Ok(())
    }

    fn put_course(&self, record: &CourseRecord) -> Result<(), StoreError> {
        self.conn.execute(
            &format!(
                "INSERT OR REPLACE INTO {TABLE}
                 (CourseID, Subject, CatalogNbr, Title, NumCredits)
                 VALUES (?1, ?2, ?3, ?4, ?5)"
            ),
            params![
                record.course_id,
                record.subject,
                record.catalog_nbr,
                record.title,
                record.num_credits,
            ],
        )?;
        Ok(())
    }

    fn scan_courses(
        &self,
        subject: &str,
        catalog_nbr: &str,
    ) -> Result<Vec<CourseRecord>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT CourseID, Subject, CatalogNbr, Title, NumCredits
             FROM {TABLE}
             WHERE CourseID BETWEEN ?1 AND ?2
               AND Subject = ?3
               AND CatalogNbr = ?4
             ORDER BY CourseID"
        ))?;

        let records = stmt
            .query_map(
                params![SCAN_ID_MIN, SCAN_ID_MAX, subject, catalog_nbr],
                |row| {
                    Ok(CourseRecord {
                        course_id: row.get(0)?,
                        subject: row.get(1)?,
                        catalog_nbr: row.get(2)?,
                        title: row.get(3)?,
                        num_credits: row.get(4)?,
                    })
                },
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }
}
