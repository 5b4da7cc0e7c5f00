use serde::Serialize;

use super::{
    record::{Record, STATUS_FIELD},
    store::RecordStore,
};

pub fn count<'a, I, P>(records: I, predicate: P) -> usize
where
    I: IntoIterator<Item = &'a Record>,
    P: Fn(&Record) -> bool,
{
    records.into_iter().filter(|r| predicate(*r)).count()
}

/// Records lacking `field` are never counted.
pub fn count_where<'a, I>(records: I, field: &str, value: &str) -> usize
where
    I: IntoIterator<Item = &'a Record>,
{
    count(records, |r| {
        r.get_field(field)
            .map(|v| v.to_string() == value)
            .unwrap_or(false)
    })
}

pub fn count_status<'a, I>(records: I, status: &str) -> usize
where
    I: IntoIterator<Item = &'a Record>,
{
    count_where(records, STATUS_FIELD, status)
}

/// Missing, NaN and non-numeric values add nothing.
pub fn sum<'a, I>(records: I, field: &str) -> f64
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|r| r.get_field(field).and_then(|v| v.as_f64()))
        .sum()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub value: String,
    pub count: usize,
    pub ratio: f64, // count / records carrying the field
}

/// Distribution of the distinct values of `field`, in first-seen order.
pub fn breakdown<'a, I>(records: I, field: &str) -> Vec<Share>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in records.into_iter().filter_map(|r| r.get_field(field)) {
        let key = value.to_string();
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }

    let total: usize = counts.iter().map(|(_, n)| n).sum();
    counts
        .into_iter()
        .map(|(value, count)| Share {
            value,
            count,
            ratio: count as f64 / total as f64,
        })
        .collect()
}

/// Highest values of a numeric field first; ties keep input order.
pub fn top_by<'a, I>(records: I, field: &str, limit: usize) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut ranked: Vec<(&Record, f64)> = records
        .into_iter()
        .map(|r| (r, r.get_field(field).and_then(|v| v.as_f64()).unwrap_or(0.0)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().take(limit).map(|(r, _)| r).collect()
}

/// Newest records first.
pub fn recent(records: &[Record], limit: usize) -> Vec<&Record> {
    records.iter().rev().take(limit).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSum {
    pub field: String,
    pub total: f64,
}

/// Stat-card figures for one store, stamped with the revision they were
/// computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub kind: String,
    pub total: usize,
    pub by_status: Vec<StatusCount>,
    pub sums: Vec<FieldSum>,
    pub revision: u64,
}

impl Summary {
    pub fn compute(store: &RecordStore) -> Self {
        let kind = store.kind();
        let records = store.list();
        Summary {
            kind: kind.name.clone(),
            total: records.len(),
            by_status: kind
                .statuses
                .iter()
                .map(|status| StatusCount {
                    status: status.clone(),
                    count: count_status(records, status),
                })
                .collect(),
            sums: kind
                .summed
                .iter()
                .map(|field| FieldSum {
                    field: field.clone(),
                    total: sum(records, field),
                })
                .collect(),
            revision: store.revision(),
        }
    }

    /// True once the store has been mutated since this summary was taken.
    pub fn is_stale(&self, store: &RecordStore) -> bool {
        self.kind != store.kind().name || self.revision != store.revision()
    }

    pub fn status_count(&self, status: &str) -> usize {
        self.by_status
            .iter()
            .find(|s| s.status == status)
            .map(|s| s.count)
            .unwrap_or(0)
    }

    pub fn sum_of(&self, field: &str) -> f64 {
        self.sums
            .iter()
            .find(|s| s.field == field)
            .map(|s| s.total)
            .unwrap_or(0.0)
    }
}
