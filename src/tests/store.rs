use crate::{
    fine_kind,
    tests::{fine_record, setup_fines},
    DeskError, Fields, Record, RecordStore, ValidationReason, ValueType,
};
use proptest::prelude::*;

#[test]
fn test_seeded_store_lists_in_insertion_order() {
    let store = setup_fines();
    assert_eq!(store.len(), 2);
    assert_eq!(store.list()[0].id, "F001");
    assert_eq!(store.list()[1].id, "F002");
    assert_eq!(store.get("F002").and_then(|r| r.status()), Some("Paid"));
    assert!(store.get("F003").is_none());
}

#[test]
fn test_next_id_follows_seeded_ids() {
    let mut store = setup_fines();
    assert_eq!(store.next_id().unwrap(), "F003");
    assert_eq!(store.next_id().unwrap(), "F004");
}

#[test]
fn test_insert_appends_record() {
    let mut store = setup_fines();
    let revision = store.revision();

    let id = store.next_id().unwrap();
    let inserted = store.insert(fine_record(&id, "QRS-111", 90, "Pending")).unwrap();

    assert_eq!(inserted.id, "F003");
    assert_eq!(store.len(), 3);
    assert_eq!(store.list().last().map(|r| r.id.as_str()), Some("F003"));
    assert_eq!(store.revision(), revision + 1);
}

#[test]
fn test_insert_duplicate_id_is_rejected() {
    let mut store = setup_fines();
    let revision = store.revision();

    let err = store
        .insert(fine_record("F001", "QRS-111", 90, "Pending"))
        .unwrap_err();

    assert_eq!(
        err,
        DeskError::DuplicateId {
            kind: "fines".to_string(),
            id: "F001".to_string()
        }
    );
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("F001").and_then(|r| r.get_str("vehicleNumber")), Some("ABC-123"));
    assert_eq!(store.revision(), revision);
}

#[test]
fn test_insert_rejects_incomplete_or_mistyped_records() {
    let mut store = RecordStore::new(fine_kind());

    let missing_location = Record::new("F001")
        .with_field("vehicleNumber", "ABC-123")
        .with_field("violationType", "Speeding")
        .with_field("amount", 150i64)
        .with_field("status", "Pending");
    match store.insert(missing_location) {
        Err(DeskError::Validation(e)) => {
            assert_eq!(e.field, "location");
            assert_eq!(e.reason, ValidationReason::Missing);
        }
        other => panic!("Expected missing location, got {:?}", other),
    }

    let bad_status = fine_record("F001", "ABC-123", 150, "Closed");
    match store.insert(bad_status) {
        Err(DeskError::Validation(e)) => assert_eq!(e.reason, ValidationReason::InvalidStatus),
        other => panic!("Expected invalid status, got {:?}", other),
    }

    let text_amount = fine_record("F001", "ABC-123", 150, "Pending").with_field("amount", "lots");
    match store.insert(text_amount) {
        Err(DeskError::Validation(e)) => {
            assert_eq!(e.field, "amount");
            assert_eq!(e.reason, ValidationReason::InvalidType);
        }
        other => panic!("Expected invalid type, got {:?}", other),
    }

    let extra_field = fine_record("F001", "ABC-123", 150, "Pending").with_field("colour", "red");
    match store.insert(extra_field) {
        Err(DeskError::Validation(e)) => assert_eq!(e.reason, ValidationReason::UnknownField),
        other => panic!("Expected unknown field, got {:?}", other),
    }

    assert!(store.is_empty());
    assert_eq!(store.revision(), 0);
}

#[test]
fn test_update_overwrites_named_fields_only() {
    let mut store = setup_fines();

    let mut patch = Fields::new();
    patch.set("amount", ValueType::Int(180));
    patch.set("status", ValueType::from("Overdue"));
    let updated = store.update_by_id("F001", patch).unwrap();

    assert_eq!(updated.id, "F001");
    assert_eq!(updated.get_field("amount"), Some(&ValueType::Int(180)));
    assert_eq!(updated.status(), Some("Overdue"));
    assert_eq!(updated.get_str("location"), Some("Highway 101"));
    assert_eq!(store.get("F001"), Some(&updated));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_update_keeps_field_order() {
    let mut store = setup_fines();
    let before: Vec<String> = store.list()[0].fields.names().map(String::from).collect();

    let mut patch = Fields::new();
    patch.set("location", ValueType::from("Highway 1"));
    store.update_by_id("F001", patch).unwrap();

    let after: Vec<String> = store.list()[0].fields.names().map(String::from).collect();
    assert_eq!(before, after);
}

#[test]
fn test_update_missing_record() {
    let mut store = setup_fines();
    let revision = store.revision();

    let mut patch = Fields::new();
    patch.set("status", ValueType::from("Paid"));
    let err = store.update_by_id("F999", patch).unwrap_err();

    assert_eq!(err, DeskError::not_found("fines", "F999"));
    assert_eq!(err.to_string(), "Record F999 not found in fines");
    assert_eq!(store.revision(), revision);
}

#[test]
fn test_update_with_invalid_value_leaves_record_untouched() {
    let mut store = setup_fines();
    let before = store.get("F001").cloned().unwrap();

    let mut patch = Fields::new();
    patch.set("amount", ValueType::Int(10));
    patch.set("status", ValueType::from("Closed"));
    let err = store.update_by_id("F001", patch).unwrap_err();

    assert!(err.is_validation());
    assert_eq!(store.get("F001"), Some(&before));
}

#[test]
fn test_delete_removes_record() {
    let mut store = setup_fines();

    let removed = store.delete_by_id("F001").unwrap();

    assert_eq!(removed.id, "F001");
    assert_eq!(store.len(), 1);
    assert!(store.get("F001").is_none());
    assert_eq!(store.list()[0].id, "F002");
}

#[test]
fn test_delete_missing_record() {
    let mut store = setup_fines();

    let err = store.delete_by_id("F999").unwrap_err();

    assert!(matches!(err, DeskError::NotFound { ref id, .. } if id == "F999"));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_deleted_ids_are_not_reused() {
    let mut store = setup_fines();

    let id = store.next_id().unwrap();
    store.insert(fine_record(&id, "QRS-111", 90, "Pending")).unwrap();
    store.delete_by_id("F003").unwrap();
    assert_eq!(store.len(), 2);

    assert_eq!(store.next_id().unwrap(), "F004");
}

#[test]
fn test_largest_ordinal_is_rejected() {
    let mut store = setup_fines();
    let revision = store.revision();

    let err = store
        .insert(fine_record("F18446744073709551615", "QRS-111", 90, "Pending"))
        .unwrap_err();

    assert_eq!(
        err,
        DeskError::IdsExhausted {
            kind: "fines".to_string(),
            id: "F18446744073709551615".to_string()
        }
    );
    assert_eq!(store.len(), 2);
    assert_eq!(store.revision(), revision);
    assert_eq!(store.next_id().unwrap(), "F003");
}

#[test]
fn test_next_id_stops_when_ids_run_out() {
    let mut store = setup_fines();

    store
        .insert(fine_record("F18446744073709551614", "QRS-111", 90, "Pending"))
        .unwrap();

    let err = store.next_id().unwrap_err();
    assert!(matches!(err, DeskError::IdsExhausted { ref id, .. } if id == "F18446744073709551615"));
    // The counter does not move on failure
    assert!(store.next_id().is_err());
    assert_eq!(store.len(), 3);
}

#[test]
fn test_search_uses_kind_searchable_fields() {
    let store = setup_fines();

    let by_location: Vec<String> = store.search("downtown").iter().map(|r| r.id.clone()).collect();
    assert_eq!(by_location, vec!["F002"]);

    // Status is not searchable
    assert!(store.search("pending").is_empty());
}

proptest! {
    #[test]
    fn prop_insert_then_delete_restores_records(
        vehicle in "[A-Z]{3}-[0-9]{3}",
        amount in 0i64..10_000,
    ) {
        let mut store = setup_fines();
        let before = store.list().to_vec();

        let id = store.next_id().unwrap();
        store.insert(fine_record(&id, &vehicle, amount, "Pending")).unwrap();
        prop_assert_eq!(store.len(), before.len() + 1);
        store.delete_by_id(&id).unwrap();

        prop_assert_eq!(store.list(), before.as_slice());
        prop_assert_ne!(store.next_id().unwrap(), id);
    }
}
