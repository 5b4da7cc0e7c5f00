use crate::{
    fine_kind,
    tests::{setup_desk, setup_fines, staged_fine},
    toll_kind, DeskError, FormSession, RecordStore, SessionMode, SessionState, ValidationError,
    ValidationReason, ValueType,
};

fn expect_validation(err: DeskError, field: &str, reason: ValidationReason) {
    assert_eq!(err, DeskError::Validation(ValidationError::new(field, reason)));
}

#[test]
fn test_create_assigns_next_id_and_defaults() {
    let mut store = setup_fines();
    let mut session = staged_fine("JKL-000", "200");
    assert_eq!(session.state(), SessionState::Editing);
    assert_eq!(session.mode(), &SessionMode::Create);

    let record = session.commit(&mut store).unwrap();

    assert_eq!(record.id, "F003");
    assert_eq!(record.status(), Some("Pending"));
    assert_eq!(record.get_field("amount"), Some(&ValueType::Int(200)));
    assert_eq!(
        record.get_str("date"),
        Some(chrono::Utc::now().format("%Y-%m-%d").to_string().as_str())
    );
    assert_eq!(store.len(), 3);
    assert_eq!(store.get("F003"), Some(&record));
    assert_eq!(session.state(), SessionState::Committed);
}

#[test]
fn test_create_trims_values() {
    let mut store = setup_fines();
    let mut session = staged_fine("  JKL-000 ", " 200 ");
    session.set_field("status", " Paid").unwrap();

    let record = session.commit(&mut store).unwrap();

    assert_eq!(record.get_str("vehicleNumber"), Some("JKL-000"));
    assert_eq!(record.get_field("amount"), Some(&ValueType::Int(200)));
    assert_eq!(record.status(), Some("Paid"));
}

#[test]
fn test_missing_required_field_is_rejected() {
    let mut store = setup_fines();
    let revision = store.revision();

    let mut session = FormSession::start(fine_kind(), None);
    session.set_field("vehicleNumber", "JKL-000").unwrap();
    session.set_field("violationType", "Speeding").unwrap();
    session.set_field("amount", "200").unwrap();

    let err = session.commit(&mut store).unwrap_err();
    expect_validation(err, "location", ValidationReason::Missing);
    assert_eq!(store.len(), 2);
    assert_eq!(store.revision(), revision);

    // Session stays open with its input, so it can be corrected
    assert_eq!(session.state(), SessionState::Editing);
    assert_eq!(session.staged("amount"), Some("200"));
    session.set_field("location", "Main St").unwrap();
    let record = session.commit(&mut store).unwrap();
    assert_eq!(record.id, "F003");
}

#[test]
fn test_first_missing_field_in_kind_order_is_reported() {
    let mut store = setup_fines();
    let mut session = FormSession::start(fine_kind(), None);

    let err = session.commit(&mut store).unwrap_err();
    expect_validation(err, "vehicleNumber", ValidationReason::Missing);
}

#[test]
fn test_whitespace_only_required_value_is_missing() {
    let mut store = setup_fines();
    let mut session = staged_fine("JKL-000", "200");
    session.set_field("violationType", "   ").unwrap();

    let err = session.commit(&mut store).unwrap_err();
    expect_validation(err, "violationType", ValidationReason::Missing);
}

#[test]
fn test_invalid_number_is_rejected() {
    let mut store = setup_fines();

    for raw in ["abc", "12abc", "200.5", "NaN"] {
        let mut session = staged_fine("JKL-000", raw);
        let err = session.commit(&mut store).unwrap_err();
        expect_validation(err, "amount", ValidationReason::InvalidNumber);
    }
    assert_eq!(store.len(), 2);

    // Rejected commits burn no ids
    let record = staged_fine("JKL-000", "200.0").commit(&mut store).unwrap();
    assert_eq!(record.id, "F003");
    assert_eq!(record.get_field("amount"), Some(&ValueType::Int(200)));
}

#[test]
fn test_out_of_range_integer_is_rejected() {
    let mut store = setup_fines();

    for raw in ["1e30", "-1e30", "9223372036854775808", "inf"] {
        let mut session = staged_fine("X-1", raw);
        let err = session.commit(&mut store).unwrap_err();
        expect_validation(err, "amount", ValidationReason::InvalidNumber);
    }
    assert_eq!(store.len(), 2);

    let record = staged_fine("X-1", "1e3").commit(&mut store).unwrap();
    assert_eq!(record.get_field("amount"), Some(&ValueType::Int(1000)));

    let record = staged_fine("X-1", "9223372036854775807").commit(&mut store).unwrap();
    assert_eq!(record.get_field("amount"), Some(&ValueType::Int(i64::MAX)));
}

#[test]
fn test_invalid_status_is_rejected() {
    let mut store = setup_fines();
    let mut session = staged_fine("JKL-000", "200");

    session.set_field("status", "Closed").unwrap();
    let err = session.commit(&mut store).unwrap_err();
    expect_validation(err, "status", ValidationReason::InvalidStatus);

    session.set_field("status", "paid").unwrap();
    let err = session.commit(&mut store).unwrap_err();
    expect_validation(err, "status", ValidationReason::InvalidStatus);

    assert_eq!(store.len(), 2);
}

#[test]
fn test_unknown_field_is_rejected_when_staged() {
    let mut session = FormSession::start(fine_kind(), None);

    let err = session.set_field("colour", "red").unwrap_err();
    expect_validation(err, "colour", ValidationReason::UnknownField);
    assert_eq!(session.state(), SessionState::Editing);
}

#[test]
fn test_toll_create_applies_numeric_defaults() {
    let mut store = RecordStore::new(toll_kind());
    let mut session = FormSession::start(toll_kind(), None);
    session.set_field("name", "River Gate").unwrap();
    session.set_field("location", "Route 9").unwrap();
    session.set_field("rate", "2.75").unwrap();
    session.set_field("type", "Bridge").unwrap();

    let record = session.commit(&mut store).unwrap();

    assert_eq!(record.id, "T001");
    assert_eq!(record.get_field("rate"), Some(&ValueType::Float(2.75)));
    assert_eq!(record.get_field("dailyRevenue"), Some(&ValueType::Int(0)));
    assert_eq!(record.get_field("vehicles"), Some(&ValueType::Int(0)));
    assert_eq!(record.status(), Some("Active"));
}

#[test]
fn test_edit_prefills_and_updates_in_place() {
    let mut store = setup_fines();
    let current = store.get("F001").cloned().unwrap();

    let mut session = FormSession::start(fine_kind(), Some(&current));
    assert_eq!(
        session.mode(),
        &SessionMode::Edit {
            target: "F001".to_string()
        }
    );
    assert_eq!(session.staged("amount"), Some("150"));
    assert_eq!(session.staged("location"), Some("Highway 101"));

    session.set_field("status", "Paid").unwrap();
    let record = session.commit(&mut store).unwrap();

    assert_eq!(record.id, "F001");
    assert_eq!(record.status(), Some("Paid"));
    assert_eq!(record.get_field("amount"), Some(&ValueType::Int(150)));
    assert_eq!(record.get_str("date"), Some("2024-01-15"));
    assert_eq!(store.len(), 2);
    assert_eq!(store.list()[0], record);
}

#[test]
fn test_edit_keeps_stored_value_for_blank_optional_field() {
    let mut store = setup_fines();
    let current = store.get("F002").cloned().unwrap();

    let mut session = FormSession::start(fine_kind(), Some(&current));
    session.set_field("date", "").unwrap();
    let record = session.commit(&mut store).unwrap();

    assert_eq!(record.get_str("date"), Some("2024-01-14"));
}

#[test]
fn test_edit_of_deleted_record() {
    let mut store = setup_fines();
    let current = store.get("F002").cloned().unwrap();
    let mut session = FormSession::start(fine_kind(), Some(&current));

    store.delete_by_id("F002").unwrap();
    let err = session.commit(&mut store).unwrap_err();

    assert_eq!(err, DeskError::not_found("fines", "F002"));
    assert_eq!(session.state(), SessionState::Editing);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_commit_into_other_kind_is_rejected() {
    let mut desk = setup_desk();
    let mut session = staged_fine("JKL-000", "200");

    let err = session.commit(&mut desk.tolls).unwrap_err();

    assert_eq!(
        err,
        DeskError::KindMismatch {
            expected: "fines".to_string(),
            actual: "tolls".to_string()
        }
    );
    assert_eq!(desk.tolls.len(), 5);
}

#[test]
fn test_session_state_transitions() {
    let mut store = setup_fines();
    let mut session = FormSession::new(fine_kind());
    assert_eq!(session.state(), SessionState::Empty);

    // Nothing can be staged before the session is opened
    let err = session.set_field("amount", "10").unwrap_err();
    assert!(matches!(err, DeskError::InvalidState { .. }));
    assert!(session.commit(&mut store).is_err());

    session.begin(None).unwrap();
    assert_eq!(session.state(), SessionState::Editing);
    assert!(matches!(
        session.begin(None),
        Err(DeskError::InvalidState { .. })
    ));

    session.set_field("vehicleNumber", "JKL-000").unwrap();
    session.set_field("violationType", "Parking").unwrap();
    session.set_field("amount", "40").unwrap();
    session.set_field("location", "Downtown").unwrap();
    session.commit(&mut store).unwrap();
    assert_eq!(session.state(), SessionState::Committed);

    // Committed is terminal
    assert!(session.set_field("amount", "50").is_err());
    assert!(session.commit(&mut store).is_err());
    session.cancel();
    assert_eq!(session.state(), SessionState::Committed);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_cancel_discards_staged_values() {
    let mut store = setup_fines();
    let mut session = staged_fine("JKL-000", "200");

    session.cancel();

    assert_eq!(session.state(), SessionState::Cancelled);
    assert_eq!(session.staged("vehicleNumber"), None);
    let err = session.commit(&mut store).unwrap_err();
    assert_eq!(
        err,
        DeskError::InvalidState {
            expected: "Editing".to_string(),
            actual: "Cancelled".to_string()
        }
    );
    assert_eq!(store.len(), 2);

    // A cancelled create does not consume an id
    let record = staged_fine("JKL-000", "200").commit(&mut store).unwrap();
    assert_eq!(record.id, "F003");
}
