//! Sample records the dashboard starts with.

use super::record::Record;

fn fine(
    id: &str,
    vehicle: &str,
    violation: &str,
    amount: i64,
    status: &str,
    date: &str,
    location: &str,
) -> Record {
    Record::new(id)
        .with_field("vehicleNumber", vehicle)
        .with_field("violationType", violation)
        .with_field("amount", amount)
        .with_field("status", status)
        .with_field("date", date)
        .with_field("location", location)
}

#[allow(clippy::too_many_arguments)]
fn toll(
    id: &str,
    name: &str,
    location: &str,
    rate: f64,
    status: &str,
    revenue: i64,
    vehicles: i64,
    toll_type: &str,
) -> Record {
    Record::new(id)
        .with_field("name", name)
        .with_field("location", location)
        .with_field("rate", rate)
        .with_field("status", status)
        .with_field("dailyRevenue", revenue)
        .with_field("vehicles", vehicles)
        .with_field("type", toll_type)
}

fn vehicle(
    id: &str,
    plate: &str,
    owner: &str,
    model: &str,
    status: &str,
    phone: &str,
    address: &str,
) -> Record {
    Record::new(id)
        .with_field("plateNumber", plate)
        .with_field("owner", owner)
        .with_field("model", model)
        .with_field("status", status)
        .with_field("phone", phone)
        .with_field("address", address)
}

pub fn fines() -> Vec<Record> {
    vec![
        fine("F001", "ABC-123", "Speeding", 150, "Pending", "2024-01-15", "Highway 101"),
        fine("F002", "XYZ-789", "Parking", 75, "Paid", "2024-01-14", "Downtown"),
        fine("F003", "DEF-456", "Red Light", 200, "Pending", "2024-01-13", "Main St & 1st"),
        fine("F004", "GHI-321", "No Seat Belt", 100, "Paid", "2024-01-12", "Park Ave"),
        fine("F005", "JKL-654", "Speeding", 175, "Overdue", "2024-01-10", "Highway 205"),
    ]
}

pub fn tolls() -> Vec<Record> {
    vec![
        toll("T001", "Highway 101 North", "Mile 45.2", 5.50, "Active", 2340, 156, "Highway"),
        toll("T002", "Bridge Crossing", "Downtown Bridge", 3.25, "Active", 1890, 98, "Bridge"),
        toll("T003", "Downtown Tunnel", "City Center", 4.75, "Active", 3450, 203, "Tunnel"),
        toll("T004", "Express Lane", "Highway 205", 6.00, "Maintenance", 0, 0, "Express"),
        toll("T005", "Airport Access", "Terminal Road", 8.50, "Active", 4250, 98, "Airport"),
    ]
}

pub fn vehicles() -> Vec<Record> {
    vec![
        vehicle(
            "V001",
            "ABC-123",
            "John Smith",
            "Toyota Camry 2020",
            "Active",
            "(555) 123-4567",
            "123 Main St, City",
        ),
        vehicle(
            "V002",
            "XYZ-789",
            "Sarah Johnson",
            "Honda Civic 2019",
            "Suspended",
            "(555) 987-6543",
            "456 Oak Ave, City",
        ),
        vehicle(
            "V003",
            "DEF-456",
            "Mike Wilson",
            "Ford F-150 2021",
            "Active",
            "(555) 456-7890",
            "789 Pine St, City",
        ),
        vehicle(
            "V004",
            "GHI-321",
            "Emily Davis",
            "BMW X3 2022",
            "Active",
            "(555) 321-6547",
            "321 Elm St, City",
        ),
        vehicle(
            "V005",
            "JKL-654",
            "Robert Brown",
            "Tesla Model 3 2023",
            "Warning",
            "(555) 654-3210",
            "654 Maple Ave, City",
        ),
    ]
}
