#[path = "desk.rs"]
pub mod desk;

#[path = "dashboard.rs"]
pub mod dashboard;

#[path = "format.rs"]
pub mod format;
