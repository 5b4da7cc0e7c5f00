use serde::Serialize;

use super::{desk::Desk, format::format_percent};
use crate::components::{
    error::{DeskError, Result},
    records::{
        aggregate::{count, count_status, sum},
        record::Record,
    },
};

/// Figures behind the dashboard metric cards, recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub total_fines: usize,
    pub active_violations: usize, // Pending and Overdue fines
    pub outstanding_amount: f64,
    pub collection_rate: String, // Paid amount over all fine amounts
    pub toll_revenue: f64,
    pub active_tolls: usize,
    pub tolls_in_maintenance: usize,
    pub registered_vehicles: usize,
    pub suspended_vehicles: usize,
}

/// Fine totals for one plate, joined from the fine store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleFines {
    pub plate: String,
    pub active_fines: usize,
    pub total_fines: f64,
    pub last_violation: Option<String>,
}

impl VehicleFines {
    pub fn last_violation_label(&self) -> &str {
        self.last_violation.as_deref().unwrap_or("Never")
    }
}

fn is_unpaid(record: &Record) -> bool {
    matches!(record.status(), Some("Pending") | Some("Overdue"))
}

impl Desk {
    pub fn overview(&self) -> Overview {
        let fines = self.fines.list();
        let tolls = self.tolls.list();
        let vehicles = self.vehicles.list();

        let total_amount = sum(fines, "amount");
        let paid: Vec<&Record> = fines.iter().filter(|f| f.status() == Some("Paid")).collect();
        let unpaid: Vec<&Record> = fines.iter().filter(|f| is_unpaid(f)).collect();

        Overview {
            total_fines: fines.len(),
            active_violations: unpaid.len(),
            outstanding_amount: sum(unpaid.iter().copied(), "amount"),
            collection_rate: format_percent(sum(paid.iter().copied(), "amount"), total_amount),
            toll_revenue: sum(tolls, "dailyRevenue"),
            active_tolls: count_status(tolls, "Active"),
            tolls_in_maintenance: count_status(tolls, "Maintenance"),
            registered_vehicles: vehicles.len(),
            suspended_vehicles: count_status(vehicles, "Suspended"),
        }
    }

    pub fn vehicle_fines(&self, plate: &str) -> VehicleFines {
        let fines: Vec<&Record> = self
            .fines
            .list()
            .iter()
            .filter(|f| f.get_str("vehicleNumber") == Some(plate))
            .collect();

        VehicleFines {
            plate: plate.to_string(),
            active_fines: count(fines.iter().copied(), is_unpaid),
            total_fines: sum(fines.iter().copied(), "amount"),
            // ISO dates order lexically
            last_violation: fines
                .iter()
                .filter_map(|f| f.get_str("date"))
                .max()
                .map(str::to_string),
        }
    }

    pub fn vehicle_fines_by_id(&self, vehicle_id: &str) -> Result<VehicleFines> {
        let vehicle = self
            .vehicles
            .get(vehicle_id)
            .ok_or_else(|| DeskError::not_found(&self.vehicles.kind().name, vehicle_id))?;
        let plate = vehicle.get_str("plateNumber").unwrap_or_default();
        Ok(self.vehicle_fines(plate))
    }

    /// One row per registered vehicle, in store order.
    pub fn fine_ledger(&self) -> Vec<VehicleFines> {
        self.vehicles
            .list()
            .iter()
            .filter_map(|v| v.get_str("plateNumber"))
            .map(|plate| self.vehicle_fines(plate))
            .collect()
    }
}
