//! In-memory record store.
//!
//! The store is filled once from a CSV source before the server starts and is
//! never mutated afterwards, so it can be shared across request handlers
//! behind a plain `Arc` without any locking.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{error, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::models::Student;

const REQUIRED_COLUMNS: [&str; 2] = ["studentId", "class"];

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    students: Vec<Student>,
}

impl RecordStore {
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// Loads the roster from `path`.
    ///
    /// Never fails: a missing or unusable source is logged and yields an
    /// empty store so the service can still start.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(store) => {
                info!(path = %path.display(), records = store.len(), "loaded student records");
                store
            }
            Err(err) => {
                error!(
                    path = %path.display(),
                    error = %err,
                    "student data source unavailable, serving an empty roster"
                );
                Self::default()
            }
        }
    }

    pub fn try_load(path: &Path) -> StoreResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Parses CSV with a header row naming at least `studentId` and `class`.
    ///
    /// Each required column must appear exactly once. Column order is free
    /// and extra columns are ignored. Rows that do not decode into a
    /// [`Student`] are skipped with a warning; only I/O failures and a bad
    /// header abort the load.
    pub fn from_reader<R: Read>(reader: R) -> StoreResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?;
        for column in REQUIRED_COLUMNS {
            match headers.iter().filter(|header| *header == column).count() {
                0 => return Err(StoreError::MissingColumn(column)),
                1 => {}
                _ => return Err(StoreError::DuplicateColumn(column)),
            }
        }

        let mut students = Vec::new();
        for row in reader.deserialize::<Student>() {
            match row {
                Ok(student) if student.class.is_empty() => {
                    warn!(student_id = student.student_id, "skipping row with empty class");
                }
                Ok(student) => students.push(student),
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    let line = err.position().map(|pos| pos.line());
                    warn!(line = ?line, error = %err, "skipping malformed row");
                }
            }
        }

        Ok(Self { students })
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn all(&self) -> &[Student] {
        &self.students
    }

    /// Returns the records whose class equals any of `classes`, in load order.
    ///
    /// An empty `classes` slice means no filtering. Matching is exact and
    /// case-sensitive; repeated filter values do not duplicate records.
    pub fn filter_by_class(&self, classes: &[String]) -> Vec<Student> {
        if classes.is_empty() {
            return self.students.clone();
        }

        let wanted: HashSet<&str> = classes.iter().map(String::as_str).collect();
        self.students
            .iter()
            .filter(|student| wanted.contains(student.class.as_str()))
            .cloned()
            .collect()
    }
}
