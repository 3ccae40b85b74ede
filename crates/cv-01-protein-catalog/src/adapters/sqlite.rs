//! SQLite Query Executor
//!
//! Runs compiled queries against a read-only SQLite catalog. Every call
//! opens a fresh read-only connection on the blocking pool and is bounded
//! by the configured timeout; no session state survives between calls.

use async_trait::async_trait;
use rusqlite::types::Value as SqliteValue;
use rusqlite::{Connection, OpenFlags, Row};
use shared_types::{CofactorEntry, DiseaseEntry, OrganismEntry, ProteinRecord, SqlValue};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::debug;

use crate::domain::CompiledQuery;
use crate::error::StoreError;
use crate::ports::ProteinStore;

/// Default upper bound on one store call
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(30);

const DISEASE_LIST_SQL: &str = "SELECT diseaseId, diseaseName FROM disease";
const COFACTOR_LIST_SQL: &str = "SELECT cofactorId, cofactorName FROM cofactor";
const ORGANISM_LIST_SQL: &str =
    "SELECT CAST(organismId AS TEXT), nameScientific, nameCommon, taxonomy FROM organism";

/// Read-only SQLite adapter
#[derive(Clone, Debug)]
pub struct SqliteProteinStore {
    path: PathBuf,
    query_timeout: Duration,
}

impl SqliteProteinStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Builder-style method to set the per-call timeout
    pub fn with_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `work` against a fresh read-only connection, off the async
    /// executor and under the timeout.
    async fn with_connection<T, F>(&self, work: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
    {
        let path = self.path.clone();
        let task = tokio::task::spawn_blocking(move || {
            let connection = open_read_only(&path)?;
            work(&connection)
        });

        match timeout(self.query_timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_err)) => Err(StoreError::Query(format!("query task failed: {}", join_err))),
            Err(_) => Err(StoreError::Timeout {
                millis: self.query_timeout.as_millis() as u64,
            }),
        }
    }
}

/// Opens an SQLite connection that can never write.
fn open_read_only(path: &Path) -> Result<Connection, StoreError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    Connection::open_with_flags(path, flags)
        .map_err(|err| StoreError::Connection(format!("{}: {}", path.display(), err)))
}

fn to_sqlite(value: &SqlValue) -> SqliteValue {
    match value {
        SqlValue::Bool(b) => SqliteValue::Integer(i64::from(*b)),
        SqlValue::Integer(i) => SqliteValue::Integer(*i),
        SqlValue::Real(r) => SqliteValue::Real(*r),
        SqlValue::Text(s) => SqliteValue::Text(s.clone()),
    }
}

fn split_list(raw: Option<String>) -> Vec<String> {
    let mut items: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    items.sort();
    items.dedup();
    items
}

fn flag(row: &Row<'_>, idx: usize) -> rusqlite::Result<bool> {
    Ok(row.get::<_, Option<i64>>(idx)?.unwrap_or(0) != 0)
}

/// Maps a row selected with `RECORD_COLUMNS` into a record.
fn map_record_row(row: &Row<'_>) -> rusqlite::Result<ProteinRecord> {
    Ok(ProteinRecord {
        entry_id: row.get(0)?,
        sequence: row.get(1)?,
        sequence_length: row.get(2)?,
        neff: row.get(3)?,
        organism_id: row.get(4)?,
        struct_helix: row.get(5)?,
        struct_turn: row.get(6)?,
        struct_strand: row.get(7)?,
        has_substrate: flag(row, 8)?,
        has_ptm: flag(row, 9)?,
        has_pdb: flag(row, 10)?,
        has_disease: flag(row, 11)?,
        cath_classes: split_list(row.get(12)?),
        enzyme_classes: split_list(row.get(13)?),
        disease_ids: split_list(row.get(14)?),
        cofactor_ids: split_list(row.get(15)?),
        matrix: None,
    })
}

fn query_rows<T, F>(connection: &Connection, sql: &str, map: F) -> Result<Vec<T>, StoreError>
where
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = connection
        .prepare(sql)
        .map_err(|err| StoreError::Query(err.to_string()))?;
    let rows = stmt
        .query_map([], map)
        .map_err(|err| StoreError::Query(err.to_string()))?;
    rows.collect::<rusqlite::Result<Vec<T>>>()
        .map_err(|err| StoreError::Corrupt(err.to_string()))
}

#[async_trait]
impl ProteinStore for SqliteProteinStore {
    async fn fetch_records(&self, query: &CompiledQuery) -> Result<Vec<ProteinRecord>, StoreError> {
        if query.placeholder_count() != query.params().len() {
            return Err(StoreError::Query(format!(
                "{} placeholders but {} bound values",
                query.placeholder_count(),
                query.params().len()
            )));
        }

        let sql = query.sql();
        let params: Vec<SqliteValue> = query.params().iter().map(to_sqlite).collect();
        let started = Instant::now();

        let records = self
            .with_connection(move |connection| {
                let mut stmt = connection
                    .prepare(&sql)
                    .map_err(|err| StoreError::Query(err.to_string()))?;
                let rows = stmt
                    .query_map(rusqlite::params_from_iter(params.iter()), map_record_row)
                    .map_err(|err| StoreError::Query(err.to_string()))?;
                rows.collect::<rusqlite::Result<Vec<_>>>()
                    .map_err(|err| StoreError::Corrupt(err.to_string()))
            })
            .await?;

        debug!(
            rows = records.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Catalog query finished"
        );
        Ok(records)
    }

    async fn fetch_diseases(&self) -> Result<Vec<DiseaseEntry>, StoreError> {
        self.with_connection(|connection| {
            query_rows(connection, DISEASE_LIST_SQL, |row| {
                Ok(DiseaseEntry {
                    disease_id: row.get(0)?,
                    disease_name: row.get(1)?,
                })
            })
        })
        .await
    }

    async fn fetch_cofactors(&self) -> Result<Vec<CofactorEntry>, StoreError> {
        self.with_connection(|connection| {
            query_rows(connection, COFACTOR_LIST_SQL, |row| {
                Ok(CofactorEntry {
                    cofactor_id: row.get(0)?,
                    cofactor_name: row.get(1)?,
                })
            })
        })
        .await
    }

    async fn fetch_organisms(&self) -> Result<Vec<OrganismEntry>, StoreError> {
        self.with_connection(|connection| {
            query_rows(connection, ORGANISM_LIST_SQL, |row| {
                Ok(OrganismEntry {
                    organism_id: row.get(0)?,
                    name_scientific: row.get(1)?,
                    name_common: row.get(2)?,
                    taxonomy: row.get(3)?,
                })
            })
        })
        .await
    }
}

/// Schema used by fixtures. The catalog itself never runs DDL.
pub const FIXTURE_SCHEMA: &str = "
CREATE TABLE organism (
    organismId INTEGER PRIMARY KEY,
    nameScientific TEXT,
    nameCommon TEXT,
    taxonomy TEXT
);
CREATE TABLE entry (
    entryId TEXT PRIMARY KEY,
    sequence TEXT NOT NULL,
    sequenceLength INTEGER NOT NULL,
    neff REAL,
    organismId INTEGER REFERENCES organism(organismId),
    structHelix REAL,
    structTurn REAL,
    structStrand REAL,
    hasSubstrate INTEGER NOT NULL DEFAULT 0,
    hasPTM INTEGER NOT NULL DEFAULT 0,
    hasPDB INTEGER NOT NULL DEFAULT 0,
    hasDisease INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE cath_class (
    entryId TEXT REFERENCES entry(entryId),
    cath_1 INTEGER, cath_2 INTEGER, cath_3 INTEGER, cath_4 INTEGER
);
CREATE TABLE enzyme_class (
    entryId TEXT REFERENCES entry(entryId),
    enzyme_1 INTEGER, enzyme_2 INTEGER, enzyme_3 INTEGER, enzyme_4 INTEGER
);
CREATE TABLE disease (
    diseaseId TEXT PRIMARY KEY,
    diseaseName TEXT NOT NULL
);
CREATE TABLE entry_disease (
    entryId TEXT REFERENCES entry(entryId),
    diseaseId TEXT REFERENCES disease(diseaseId)
);
CREATE TABLE cofactor (
    cofactorId TEXT PRIMARY KEY,
    cofactorName TEXT NOT NULL
);
CREATE TABLE entry_cofactor (
    entryId TEXT REFERENCES entry(entryId),
    cofactorId TEXT REFERENCES cofactor(cofactorId)
);
";
