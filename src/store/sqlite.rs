use log::{debug, info};
use rusqlite::{params, Connection};

use crate::core::award::{AwardRecord, StoredAward};
use crate::core::config::DatabaseLocation;
use crate::core::error::AwardError;

const CREATE_AWARDS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS awards (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        year INTEGER NOT NULL,
        title TEXT NOT NULL,
        studios TEXT NOT NULL,
        producers TEXT NOT NULL,
        winner INTEGER NOT NULL
    );
";

const INSERT_AWARD: &str = "
    INSERT INTO awards (year, title, studios, producers, winner)
    VALUES (?1, ?2, ?3, ?4, ?5)
";

/// Read access to the stored award records
#[cfg_attr(test, mockall::automock)]
pub trait AwardRepository: Send {
    /// Snapshot of every stored record, ordered by id
    fn records(&self) -> Result<Vec<StoredAward>, AwardError>;

    /// Number of stored records
    fn count(&self) -> Result<usize, AwardError>;
}

/// SQLite-backed award store
pub struct SqliteAwardStore {
    conn: Connection,
}

impl SqliteAwardStore {
    /// Open the store at the given location and make sure the schema exists
    pub fn open(location: &DatabaseLocation) -> Result<Self, AwardError> {
        let conn = match location {
            DatabaseLocation::InMemory => Connection::open_in_memory()?,
            DatabaseLocation::File(path) => Connection::open(path)?,
        };
        info!("Opened award database ({:?})", location);

        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Open a fresh in-memory store
    pub fn in_memory() -> Result<Self, AwardError> {
        Self::open(&DatabaseLocation::InMemory)
    }

    /// Create the awards table if it is missing
    pub fn init_schema(&self) -> Result<(), AwardError> {
        self.conn.execute_batch(CREATE_AWARDS_TABLE)?;
        Ok(())
    }

    /// Insert a single record and return its id
    pub fn insert(&self, record: &AwardRecord) -> Result<i64, AwardError> {
        self.conn.execute(
            INSERT_AWARD,
            params![record.year, record.title, record.studios, record.producers, record.winner],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Replace every stored record with `records` in one transaction
    pub fn replace_all(&mut self, records: &[AwardRecord]) -> Result<usize, AwardError> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM awards", [])?;
        {
            let mut stmt = tx.prepare(INSERT_AWARD)?;
            for record in records {
                stmt.execute(params![
                    record.year,
                    record.title,
                    record.studios,
                    record.producers,
                    record.winner
                ])?;
            }
        }
        tx.commit()?;

        debug!("Replaced {} award records with {}", removed, records.len());
        Ok(records.len())
    }

    /// Remove all records
    pub fn clear(&self) -> Result<usize, AwardError> {
        Ok(self.conn.execute("DELETE FROM awards", [])?)
    }
}

impl AwardRepository for SqliteAwardStore {
    fn records(&self) -> Result<Vec<StoredAward>, AwardError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, year, title, studios, producers, winner FROM awards ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(StoredAward {
                id: row.get(0)?,
                record: AwardRecord {
                    year: row.get(1)?,
                    title: row.get(2)?,
                    studios: row.get(3)?,
                    producers: row.get(4)?,
                    winner: row.get(5)?,
                },
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    fn count(&self) -> Result<usize, AwardError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM awards", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
