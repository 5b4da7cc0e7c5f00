use super::record::{Fields, STATUS_FIELD};
use super::value_type::ValueType;
use crate::components::error::{ValidationError, ValidationReason};

/// Width of the zero-padded ordinal in generated ids (`F001`).
pub const ID_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    Status, // One of the kind's status values
}

impl FieldType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Integer | FieldType::Float)
    }

    pub fn name(&self) -> &'static str {
        match self {
            FieldType::String => "STRING",
            FieldType::Integer => "INTEGER",
            FieldType::Float => "FLOAT",
            FieldType::Boolean => "BOOLEAN",
            FieldType::Status => "STATUS",
        }
    }

    /// Converts raw form input (already trimmed) into a typed value.
    pub fn parse_input(
        &self,
        raw: &str,
        statuses: &[String],
    ) -> Result<ValueType, ValidationReason> {
        match self {
            FieldType::String => Ok(ValueType::Str(raw.to_string())),
            FieldType::Integer => {
                if let Ok(i) = raw.parse::<i64>() {
                    return Ok(ValueType::Int(i));
                }
                // `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive
                match raw.parse::<f64>() {
                    Ok(f)
                        if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 =>
                    {
                        Ok(ValueType::Int(f as i64))
                    }
                    _ => Err(ValidationReason::InvalidNumber),
                }
            }
            FieldType::Float => match raw.parse::<f64>() {
                Ok(f) if f.is_finite() => Ok(ValueType::Float(f)),
                _ => Err(ValidationReason::InvalidNumber),
            },
            FieldType::Boolean => match raw {
                "true" => Ok(ValueType::Bool(true)),
                "false" => Ok(ValueType::Bool(false)),
                _ => Err(ValidationReason::InvalidType),
            },
            FieldType::Status => {
                if statuses.iter().any(|s| s == raw) {
                    Ok(ValueType::Str(raw.to_string()))
                } else {
                    Err(ValidationReason::InvalidStatus)
                }
            }
        }
    }

    pub fn check_value(
        &self,
        value: &ValueType,
        statuses: &[String],
    ) -> Result<(), ValidationReason> {
        match (self, value) {
            (FieldType::String, ValueType::Str(_))
            | (FieldType::Integer, ValueType::Int(_))
            | (FieldType::Float, ValueType::Float(_) | ValueType::Int(_))
            | (FieldType::Boolean, ValueType::Bool(_)) => Ok(()),
            (FieldType::Status, ValueType::Str(s)) if statuses.contains(s) => Ok(()),
            (FieldType::Status, _) => Err(ValidationReason::InvalidStatus),
            _ => Err(ValidationReason::InvalidType),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldDefault {
    Value(ValueType),
    Today, // ISO date of the commit day
}

impl FieldDefault {
    pub fn resolve(&self) -> ValueType {
        match self {
            FieldDefault::Value(v) => v.clone(),
            FieldDefault::Today => {
                ValueType::Str(chrono::Utc::now().format("%Y-%m-%d").to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
    pub default: Option<FieldDefault>,
}

impl FieldSpec {
    pub fn required(name: &str, field_type: FieldType) -> Self {
        FieldSpec {
            name: name.to_string(),
            field_type,
            required: true,
            default: None,
        }
    }

    pub fn optional(name: &str, field_type: FieldType) -> Self {
        FieldSpec {
            required: false,
            ..FieldSpec::required(name, field_type)
        }
    }

    pub fn with_default(mut self, default: FieldDefault) -> Self {
        self.default = Some(default);
        self
    }
}

/// Describes one entity kind: its fields, status values and id scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordKind {
    pub name: String,      // Collection name, e.g. "fines"
    pub label: String,     // Singular display label, e.g. "Fine"
    pub id_prefix: String, // Prefix of generated ids
    pub fields: Vec<FieldSpec>,
    pub searchable: Vec<String>, // Fields matched by free-text search
    pub summed: Vec<String>,     // Numeric fields totalled in summaries
    pub statuses: Vec<String>,
    pub default_status: String,
}

impl RecordKind {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn format_id(&self, ordinal: u64) -> String {
        format!("{}{:0width$}", self.id_prefix, ordinal, width = ID_WIDTH)
    }

    /// Ordinal of an id carrying this kind's prefix, if it has one.
    pub fn parse_ordinal(&self, id: &str) -> Option<u64> {
        id.strip_prefix(self.id_prefix.as_str())
            .filter(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
    }

    /// Checks every value against its field. With `complete`, required
    /// fields and the status must be present as well.
    pub fn validate_fields(&self, fields: &Fields, complete: bool) -> Result<(), ValidationError> {
        for (name, value) in fields.iter() {
            let spec = self
                .field(name)
                .ok_or_else(|| ValidationError::new(name, ValidationReason::UnknownField))?;
            spec.field_type
                .check_value(value, &self.statuses)
                .map_err(|reason| ValidationError::new(name, reason))?;
        }

        if complete {
            for spec in &self.fields {
                let needed = spec.required || spec.name == STATUS_FIELD;
                if needed && !fields.contains(&spec.name) {
                    return Err(ValidationError::new(&spec.name, ValidationReason::Missing));
                }
            }
        }

        Ok(())
    }
}

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn status_field(default: &str) -> FieldSpec {
    FieldSpec::optional(STATUS_FIELD, FieldType::Status)
        .with_default(FieldDefault::Value(ValueType::Str(default.to_string())))
}

pub fn fine_kind() -> RecordKind {
    RecordKind {
        name: "fines".to_string(),
        label: "Fine".to_string(),
        id_prefix: "F".to_string(),
        fields: vec![
            FieldSpec::required("vehicleNumber", FieldType::String),
            FieldSpec::required("violationType", FieldType::String),
            FieldSpec::required("amount", FieldType::Integer),
            status_field("Pending"),
            FieldSpec::optional("date", FieldType::String).with_default(FieldDefault::Today),
            FieldSpec::required("location", FieldType::String),
        ],
        searchable: names(&["vehicleNumber", "violationType", "location"]),
        summed: names(&["amount"]),
        statuses: names(&["Pending", "Paid", "Overdue"]),
        default_status: "Pending".to_string(),
    }
}

pub fn toll_kind() -> RecordKind {
    RecordKind {
        name: "tolls".to_string(),
        label: "Toll".to_string(),
        id_prefix: "T".to_string(),
        fields: vec![
            FieldSpec::required("name", FieldType::String),
            FieldSpec::required("location", FieldType::String),
            FieldSpec::required("rate", FieldType::Float),
            status_field("Active"),
            FieldSpec::optional("dailyRevenue", FieldType::Integer)
                .with_default(FieldDefault::Value(ValueType::Int(0))),
            FieldSpec::optional("vehicles", FieldType::Integer)
                .with_default(FieldDefault::Value(ValueType::Int(0))),
            FieldSpec::required("type", FieldType::String),
        ],
        searchable: names(&["name", "location", "type"]),
        summed: names(&["dailyRevenue", "vehicles"]),
        statuses: names(&["Active", "Maintenance"]),
        default_status: "Active".to_string(),
    }
}

pub fn vehicle_kind() -> RecordKind {
    RecordKind {
        name: "vehicles".to_string(),
        label: "Vehicle".to_string(),
        id_prefix: "V".to_string(),
        fields: vec![
            FieldSpec::required("plateNumber", FieldType::String),
            FieldSpec::required("owner", FieldType::String),
            FieldSpec::required("model", FieldType::String),
            status_field("Active"),
            FieldSpec::required("phone", FieldType::String),
            FieldSpec::required("address", FieldType::String),
        ],
        searchable: names(&["plateNumber", "owner", "model"]),
        summed: Vec::new(),
        statuses: names(&["Active", "Warning", "Suspended"]),
        default_status: "Active".to_string(),
    }
}
