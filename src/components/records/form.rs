use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use super::{
    kind::RecordKind,
    record::{Fields, Record},
    store::RecordStore,
};
use crate::components::error::{DeskError, Result, ValidationError, ValidationReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Empty,
    Editing,
    Committed,
    Cancelled,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Empty => "Empty",
            SessionState::Editing => "Editing",
            SessionState::Committed => "Committed",
            SessionState::Cancelled => "Cancelled",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMode {
    Create,
    Edit { target: String },
}

/// Staged input for creating or editing one record.
///
/// A session moves `Empty -> Editing -> {Committed, Cancelled}`. Failed
/// commits leave it in `Editing` with the staged values intact, so the caller
/// can correct a field and commit again.
#[derive(Debug, Clone)]
pub struct FormSession {
    kind: RecordKind,
    state: SessionState,
    mode: SessionMode,
    staged: Vec<(String, String)>, // Raw input per field, in kind order
}

impl FormSession {
    pub fn new(kind: RecordKind) -> Self {
        FormSession {
            kind,
            state: SessionState::Empty,
            mode: SessionMode::Create,
            staged: Vec::new(),
        }
    }

    /// Opens a session directly in `Editing`: edit mode when `initial` is
    /// given, create mode otherwise.
    pub fn start(kind: RecordKind, initial: Option<&Record>) -> Self {
        let mut session = FormSession::new(kind);
        session.open(initial);
        session
    }

    pub fn begin(&mut self, initial: Option<&Record>) -> Result<()> {
        self.expect_state(SessionState::Empty)?;
        self.open(initial);
        Ok(())
    }

    fn open(&mut self, initial: Option<&Record>) {
        self.staged = self
            .kind
            .fields
            .iter()
            .map(|spec| {
                let raw = initial
                    .and_then(|r| r.get_field(&spec.name))
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                (spec.name.clone(), raw)
            })
            .collect();
        self.mode = match initial {
            Some(record) => SessionMode::Edit {
                target: record.id.clone(),
            },
            None => SessionMode::Create,
        };
        self.state = SessionState::Editing;
        debug!(kind = %self.kind.name, mode = ?self.mode, "form session opened");
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    pub fn kind(&self) -> &RecordKind {
        &self.kind
    }

    pub fn staged(&self, name: &str) -> Option<&str> {
        self.staged
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn expect_state(&self, expected: SessionState) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(DeskError::InvalidState {
                expected: expected.to_string(),
                actual: self.state.to_string(),
            })
        }
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        self.expect_state(SessionState::Editing)?;
        match self.staged.iter_mut().find(|(k, _)| k == name) {
            Some((_, raw)) => {
                *raw = value.to_string();
                Ok(())
            }
            None => Err(ValidationError::new(name, ValidationReason::UnknownField).into()),
        }
    }

    /// Validates the staged input and writes it through to `store`.
    pub fn commit(&mut self, store: &mut RecordStore) -> Result<Record> {
        self.expect_state(SessionState::Editing)?;
        if store.kind().name != self.kind.name {
            return Err(DeskError::KindMismatch {
                expected: self.kind.name.clone(),
                actual: store.kind().name.clone(),
            });
        }

        let fields = match self.validate() {
            Ok(fields) => fields,
            Err(e) => {
                warn!(
                    kind = %self.kind.name,
                    field = %e.field,
                    reason = %e.reason,
                    "form rejected"
                );
                return Err(e.into());
            }
        };

        let record = match &self.mode {
            SessionMode::Create => {
                // Re-check before taking an id so a rejected insert burns none
                self.kind.validate_fields(&fields, true)?;
                let mut record = Record::new(&store.next_id()?);
                record.fields = fields;
                store.insert(record)?
            }
            SessionMode::Edit { target } => store.update_by_id(target, fields)?,
        };

        self.state = SessionState::Committed;
        self.staged.clear();
        Ok(record)
    }

    pub fn cancel(&mut self) {
        if self.state == SessionState::Committed {
            return;
        }
        self.staged.clear();
        self.state = SessionState::Cancelled;
        debug!(kind = %self.kind.name, "form session cancelled");
    }

    fn validate(&self) -> std::result::Result<Fields, ValidationError> {
        let creating = self.mode == SessionMode::Create;
        let mut fields = Fields::new();

        for spec in &self.kind.fields {
            let raw = self
                .staged(&spec.name)
                .map(str::trim)
                .filter(|raw| !raw.is_empty());

            match raw {
                Some(raw) => {
                    let value = spec
                        .field_type
                        .parse_input(raw, &self.kind.statuses)
                        .map_err(|reason| ValidationError::new(&spec.name, reason))?;
                    fields.set(&spec.name, value);
                }
                None if spec.required => {
                    return Err(ValidationError::new(&spec.name, ValidationReason::Missing));
                }
                // Edits keep the stored value for blank optional fields
                None if creating => {
                    if let Some(default) = &spec.default {
                        fields.set(&spec.name, default.resolve());
                    }
                }
                None => {}
            }
        }

        Ok(fields)
    }
}
