//! Cross-module tests: whole payloads driven through the schemas and the
//! orchestrator the way the forms and API functions do it.

use serde_json::{json, Value};

use crate::{
    format_currency, format_validation_errors, parse_cost, validate_data, validate_or_throw,
    ClientCreateSchema, ClientUpdateSchema, PcCreateSchema, Schema, SessionCreateSchema, Validated,
};

fn client_payload() -> Value {
    json!({
        "phone": "+380671234567",
        "full_name": "Олена Коваль",
        "birth": "2001-09-30"
    })
}

fn session_payload() -> Value {
    json!({
        "pc_id": 12,
        "client_phone": "+380671234567",
        "Time": "2024-06-10T16:30:00",
        "Duration": { "hours": 1, "minutes": 45 },
        "Cost": "90.00 ₴"
    })
}

#[test]
fn valid_payload_round_trips_unchanged() {
    let client = match validate_data(&ClientCreateSchema, &client_payload()) {
        Validated::Valid(client) => client,
        Validated::Invalid(errors) => panic!("unexpected errors: {errors:?}"),
    };
    assert_eq!(serde_json::to_value(&client).unwrap(), client_payload());
}

#[test]
fn validation_is_idempotent() {
    // re-validating a validated record is a fixed point
    let first = validate_or_throw(&ClientCreateSchema, &client_payload()).unwrap();
    let reencoded = serde_json::to_value(&first).unwrap();
    let second = validate_or_throw(&ClientCreateSchema, &reencoded).unwrap();
    assert_eq!(first, second);
}

#[test]
fn session_idempotence_covers_union_fields() {
    let first = validate_or_throw(&SessionCreateSchema, &session_payload()).unwrap();
    let reencoded = serde_json::to_value(&first).unwrap();
    let second = validate_or_throw(&SessionCreateSchema, &reencoded).unwrap();
    assert_eq!(first, second);
}

#[test]
fn validated_session_cost_normalizes_for_display() {
    let session = validate_or_throw(&SessionCreateSchema, &session_payload()).unwrap();
    assert_eq!(parse_cost(&session.cost), 90.0);
    assert_eq!(format_currency(&session.cost), "90.00 ₴");
}

#[test]
fn missing_field_yields_exactly_that_path() {
    let mut payload = client_payload();
    payload.as_object_mut().unwrap().remove("birth");
    let errors = validate_or_throw(&ClientCreateSchema, &payload).unwrap_err().errors;
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["birth"], vec!["Required"]);
}

#[test]
fn update_accepts_empty_patch_create_does_not() {
    assert!(validate_data(&ClientUpdateSchema, &json!({})).is_valid());
    assert!(!validate_data(&ClientCreateSchema, &json!({})).is_valid());
}

#[test]
fn formatted_errors_count_matches_message_total() {
    let errors = validate_or_throw(
        &PcCreateSchema,
        &json!({
            "cpu": "",
            "ram": -2.5,
            "videocard": "RTX 3060",
            "hard_disc": "1TB",
            "usb_amout": 4,
            "os": "Windows 11",
            "buy_date": "2023-08-15"
        }),
    )
    .unwrap_err()
    .errors;

    let total: usize = errors.values().map(Vec::len).sum();
    let formatted = format_validation_errors(&errors);
    assert_eq!(formatted.lines().count(), total);
    // cpu: one violated rule; ram: int and positive both fire
    assert_eq!(errors["cpu"].len(), 1);
    assert_eq!(errors["ram"].len(), 2);
}

#[test]
fn schema_names_surface_in_errors() {
    assert_eq!(ClientCreateSchema.name(), "ClientCreate");
    let err = validate_or_throw(&SessionCreateSchema, &json!({})).unwrap_err();
    assert!(err.to_string().starts_with("SessionCreate validation failed"));
}

#[test]
fn non_object_input_fails_at_root() {
    let result = validate_data(&ClientCreateSchema, &json!([1, 2, 3]));
    let errors = result.errors().unwrap().clone();
    assert_eq!(errors[""], vec!["Expected object, received array"]);
}
