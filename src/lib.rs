//! In-memory record collections for a traffic-enforcement back office:
//! fines, tolls and vehicles with search, form-driven create/edit, delete
//! and derived dashboard figures.

pub mod components;

#[cfg(test)]
mod tests;

pub use components::config::DeskConfig;
pub use components::desk::dashboard::{Overview, VehicleFines};
pub use components::desk::desk::Desk;
pub use components::desk::format::{format_currency, format_percent};
pub use components::error::{DeskError, Result, ValidationError, ValidationReason};
pub use components::records::aggregate::{self, Summary};
pub use components::records::filter::filter;
pub use components::records::form::{FormSession, SessionMode, SessionState};
pub use components::records::kind::{fine_kind, toll_kind, vehicle_kind, FieldType, RecordKind};
pub use components::records::record::{Fields, Record};
pub use components::records::store::RecordStore;
pub use components::records::value_type::ValueType;
pub use components::shell::{Notification, OutputFormat, Shell, Variant};
