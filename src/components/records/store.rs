use tracing::{debug, error, info, warn};

use super::{
    filter,
    kind::RecordKind,
    record::{Fields, Record},
};
use crate::components::error::{DeskError, Result};

/// The records of one kind, in insertion order.
#[derive(Debug, Clone)]
pub struct RecordStore {
    kind: RecordKind,
    records: Vec<Record>,
    next_ordinal: u64, // Only moves forward, so deleted ids are never handed out again
    revision: u64,     // Bumped on every successful mutation
}

impl RecordStore {
    pub fn new(kind: RecordKind) -> Self {
        RecordStore {
            kind,
            records: Vec::new(),
            next_ordinal: 1,
            revision: 0,
        }
    }

    pub fn with_records(kind: RecordKind, records: Vec<Record>) -> Result<Self> {
        let mut store = RecordStore::new(kind);
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    pub fn kind(&self) -> &RecordKind {
        &self.kind
    }

    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| DeskError::not_found(&self.kind.name, id))
    }

    fn ids_exhausted(&self, ordinal: u64) -> DeskError {
        error!(kind = %self.kind.name, ordinal, "id counter exhausted");
        DeskError::IdsExhausted {
            kind: self.kind.name.clone(),
            id: self.kind.format_id(ordinal),
        }
    }

    /// Hands out the next sequential id for this kind.
    pub fn next_id(&mut self) -> Result<String> {
        let ordinal = self.next_ordinal;
        self.next_ordinal = ordinal
            .checked_add(1)
            .ok_or_else(|| self.ids_exhausted(ordinal))?;
        Ok(self.kind.format_id(ordinal))
    }

    pub fn insert(&mut self, record: Record) -> Result<Record> {
        if self.get(&record.id).is_some() {
            error!(kind = %self.kind.name, id = %record.id, "duplicate record id on insert");
            return Err(DeskError::DuplicateId {
                kind: self.kind.name.clone(),
                id: record.id,
            });
        }
        self.kind.validate_fields(&record.fields, true)?;

        // Seeded ids push the counter past them
        if let Some(ordinal) = self.kind.parse_ordinal(&record.id) {
            let next = ordinal
                .checked_add(1)
                .ok_or_else(|| self.ids_exhausted(ordinal))?;
            self.next_ordinal = self.next_ordinal.max(next);
        }

        self.records.push(record.clone());
        self.revision += 1;
        info!(kind = %self.kind.name, id = %record.id, "record inserted");
        Ok(record)
    }

    /// Overwrites every field named in `patch`; the id never changes.
    pub fn update_by_id(&mut self, id: &str, patch: Fields) -> Result<Record> {
        let index = match self.position(id) {
            Ok(index) => index,
            Err(e) => {
                warn!(kind = %self.kind.name, id, "update of missing record");
                return Err(e);
            }
        };
        self.kind.validate_fields(&patch, false)?;

        let record = &mut self.records[index];
        for (name, value) in patch.iter() {
            record.set_field(name, value.clone());
        }
        let updated = record.clone();
        self.revision += 1;
        info!(kind = %self.kind.name, id, fields = patch.len(), "record updated");
        Ok(updated)
    }

    pub fn delete_by_id(&mut self, id: &str) -> Result<Record> {
        let index = match self.position(id) {
            Ok(index) => index,
            Err(e) => {
                warn!(kind = %self.kind.name, id, "delete of missing record");
                return Err(e);
            }
        };
        let removed = self.records.remove(index);
        self.revision += 1;
        info!(kind = %self.kind.name, id, "record deleted");
        Ok(removed)
    }

    /// Free-text search over the kind's searchable fields.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let results = filter::filter(&self.records, query, &self.kind.searchable);
        debug!(kind = %self.kind.name, query, matches = results.len(), "search");
        results
    }
}
