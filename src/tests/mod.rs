#![allow(dead_code)]

use crate::components::records::seed;
use crate::{fine_kind, Desk, FormSession, Record, RecordStore};

mod config;
mod form;
mod store;

// Two fines: F001 (150, Pending) and F002 (75, Paid)
pub fn setup_fines() -> RecordStore {
    RecordStore::with_records(fine_kind(), seed::fines().into_iter().take(2).collect()).unwrap()
}

pub fn setup_desk() -> Desk {
    Desk::with_demo_data().unwrap()
}

pub fn fine_record(id: &str, vehicle: &str, amount: i64, status: &str) -> Record {
    Record::new(id)
        .with_field("vehicleNumber", vehicle)
        .with_field("violationType", "Speeding")
        .with_field("amount", amount)
        .with_field("status", status)
        .with_field("date", "2024-02-01")
        .with_field("location", "Main St")
}

// Create-mode session with every required fine field staged
pub fn staged_fine(vehicle: &str, amount: &str) -> FormSession {
    let mut session = FormSession::start(fine_kind(), None);
    session.set_field("vehicleNumber", vehicle).unwrap();
    session.set_field("violationType", "Speeding").unwrap();
    session.set_field("amount", amount).unwrap();
    session.set_field("location", "Main St").unwrap();
    session
}

pub fn ids(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}
