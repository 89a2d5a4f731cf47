//! Course database façade.
//!
//! [`CourseManager`] owns a [`CourseStore`] and adds the conveniences a
//! front end wants: building records from loose fields, loading course files,
//! and falling back to an empty record when a lookup misses.

use std::path::Path;

use crate::{
    error::{IngestError, StoreError},
    parser::parse_chunk,
    record::CourseRecord,
    store::CourseStore,
};

static EMPTY_RECORD: CourseRecord = CourseRecord::EMPTY;

#[derive(Debug, Clone)]
pub struct CourseManager {
    store: CourseStore,
}

impl Default for CourseManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseManager {
    pub fn new() -> Self {
        Self {
            store: CourseStore::default(),
        }
    }

    pub fn with_capacity(estimated_count: usize) -> Result<Self, StoreError> {
        Ok(Self {
            store: CourseStore::new(estimated_count)?,
        })
    }

    pub fn add(
        &mut self,
        course_id: impl Into<String>,
        crn: i32,
        credits: i32,
        room: impl Into<String>,
        instructor: impl Into<String>,
    ) {
        self.insert(CourseRecord::new(crn, course_id, credits, room, instructor));
    }

    pub fn insert(&mut self, record: CourseRecord) {
        self.store.insert(record);
    }

    /// Returns the record for `crn`, or the empty record if none is stored.
    pub fn get(&self, crn: i32) -> &CourseRecord {
        match self.store.get(crn) {
            Ok(record) => record,
            Err(error) => {
                tracing::warn!(crn, %error, "lookup missed, returning empty course");
                &EMPTY_RECORD
            }
        }
    }

    pub fn try_get(&self, crn: i32) -> Result<&CourseRecord, StoreError> {
        self.store.get(crn)
    }

    /// Loads every course in `path`, returning how many lines were parsed.
    /// Nothing is inserted if any line is malformed.
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> Result<usize, IngestError> {
        let path = path.as_ref();
        let contents = std::fs::read(path).map_err(|error| IngestError::io(path, error))?;
        let records = parse_chunk(&contents, 1)?;
        Ok(self.load(path, records))
    }

    /// Async counterpart of [`read_file`](Self::read_file).
    pub async fn read_file_async(&mut self, path: impl AsRef<Path>) -> Result<usize, IngestError> {
        let path = path.as_ref();
        let records = crate::tokio::read_records(path).await?;
        Ok(self.load(path, records))
    }

    fn load(&mut self, path: &Path, records: Vec<CourseRecord>) -> usize {
        let parsed = records.len();
        let before = self.store.len();
        for record in records {
            self.store.insert(record);
        }
        tracing::info!(
            path = %path.display(),
            parsed,
            inserted = self.store.len() - before,
            "course file loaded"
        );
        parsed
    }

    /// Rendering of every stored course, in enumeration order.
    pub fn show_all(&self) -> Vec<String> {
        self.store.records().map(ToString::to_string).collect()
    }

    pub fn store(&self) -> &CourseStore {
        &self.store
    }
}
