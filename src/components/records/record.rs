use std::fmt::{self, Formatter};

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use super::value_type::ValueType;

pub const STATUS_FIELD: &str = "status";

/// Named values in the order they were first set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    entries: Vec<(String, ValueType)>,
}

impl Fields {
    pub fn new() -> Self {
        Fields {
            entries: Vec::new(),
        }
    }

    /// Overwrites in place when the field exists, appends otherwise.
    pub fn set(&mut self, name: &str, value: ValueType) {
        match self.entries.iter_mut().find(|(k, _)| k == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ValueType> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValueType)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<ValueType>> FromIterator<(K, V)> for Fields {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut fields = Fields::new();
        for (k, v) in iter {
            let key: String = k.into();
            fields.set(&key, v.into());
        }
        fields
    }
}

// Serialized as a JSON object, keeping field order
impl Serialize for Fields {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Fields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = Fields;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("A map of field names to values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = Fields::new();
                while let Some((key, value)) = map.next_entry::<String, ValueType>()? {
                    fields.set(&key, value);
                }
                Ok(fields)
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,     // Unique within its store, never reassigned
    pub fields: Fields, // Kind-specific values, status included
}

impl Record {
    pub fn new(id: &str) -> Self {
        Record {
            id: id.to_string(),
            fields: Fields::new(),
        }
    }

    pub fn with_field(mut self, field: &str, value: impl Into<ValueType>) -> Self {
        self.set_field(field, value.into());
        self
    }

    pub fn set_field(&mut self, field: &str, value: ValueType) {
        self.fields.set(field, value);
    }

    pub fn get_field(&self, field: &str) -> Option<&ValueType> {
        self.fields.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get_field(field).and_then(ValueType::as_str)
    }

    pub fn status(&self) -> Option<&str> {
        self.get_str(STATUS_FIELD)
    }
}
