//! In-memory station index.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::domain::{LineCode, StationId, StationRecord};

use super::error::StationError;

/// Immutable snapshot of all station records.
///
/// Records keep the order they were loaded in; the resolver relies on that
/// order to break distance ties.
#[derive(Debug, Clone, Default)]
pub struct StationIndex {
    records: Vec<StationRecord>,
    by_id: HashMap<StationId, usize>,
}

impl StationIndex {
    /// Build an index, rejecting duplicate ids.
    pub fn from_records(records: Vec<StationRecord>) -> Result<Self, StationError> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if by_id.insert(record.id.clone(), i).is_some() {
                return Err(StationError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records, by_id })
    }

    /// Parse a JSON array of station records.
    pub fn from_json(json: &str) -> Result<Self, StationError> {
        let records: Vec<StationRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Load a JSON array of station records from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| StationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let index = Self::from_json(&contents)?;
        info!(path = %path.display(), stations = index.len(), "loaded station records");
        Ok(index)
    }

    /// All records, in load order.
    pub fn records(&self) -> &[StationRecord] {
        &self.records
    }

    /// Records claiming membership of `line`, in load order.
    pub fn for_line(&self, line: &LineCode) -> Vec<&StationRecord> {
        self.records.iter().filter(|s| s.serves(line)).collect()
    }

    /// Look up a record by id.
    pub fn get(&self, id: &StationId) -> Option<&StationRecord> {
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
