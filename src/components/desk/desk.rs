use tracing::info;

use crate::components::{
    error::{DeskError, Result},
    records::{
        kind::{fine_kind, toll_kind, vehicle_kind},
        seed,
        store::RecordStore,
    },
};

/// Caller-owned session state: one store per record kind.
#[derive(Debug, Clone)]
pub struct Desk {
    pub fines: RecordStore,
    pub tolls: RecordStore,
    pub vehicles: RecordStore,
}

impl Default for Desk {
    fn default() -> Self {
        Desk::new()
    }
}

impl Desk {
    pub fn new() -> Self {
        Desk {
            fines: RecordStore::new(fine_kind()),
            tolls: RecordStore::new(toll_kind()),
            vehicles: RecordStore::new(vehicle_kind()),
        }
    }

    pub fn with_demo_data() -> Result<Self> {
        let desk = Desk {
            fines: RecordStore::with_records(fine_kind(), seed::fines())?,
            tolls: RecordStore::with_records(toll_kind(), seed::tolls())?,
            vehicles: RecordStore::with_records(vehicle_kind(), seed::vehicles())?,
        };
        info!(
            fines = desk.fines.len(),
            tolls = desk.tolls.len(),
            vehicles = desk.vehicles.len(),
            "desk seeded with demo data"
        );
        Ok(desk)
    }

    /// Accepts the collection name or its singular, in any case.
    pub fn store(&self, name: &str) -> Result<&RecordStore> {
        match name.to_lowercase().as_str() {
            "fines" | "fine" => Ok(&self.fines),
            "tolls" | "toll" => Ok(&self.tolls),
            "vehicles" | "vehicle" => Ok(&self.vehicles),
            _ => Err(DeskError::UnknownKind(name.to_string())),
        }
    }

    pub fn store_mut(&mut self, name: &str) -> Result<&mut RecordStore> {
        match name.to_lowercase().as_str() {
            "fines" | "fine" => Ok(&mut self.fines),
            "tolls" | "toll" => Ok(&mut self.tolls),
            "vehicles" | "vehicle" => Ok(&mut self.vehicles),
            _ => Err(DeskError::UnknownKind(name.to_string())),
        }
    }

    pub fn stores(&self) -> [&RecordStore; 3] {
        [&self.fines, &self.tolls, &self.vehicles]
    }
}
