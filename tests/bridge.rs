//! Wire load/save

use rightsmap::bridge::{load, save};
use rightsmap::*;
use serde_json::json;

#[test]
fn test_round_trip_is_identity() {
    let payload = json!({
        "csr_agents": {"rights": 15, "idents": null},
        "orders": {"rights": 3, "idents": ["100", "200"]},
        "user": {"rights": 5, "idents": []}
    });
    let mapping = load(payload.clone()).unwrap();
    assert_eq!(save(&mapping).unwrap(), payload);
}

#[test]
fn test_round_trip_through_editor() {
    let payload = json!({"calendly": {"rights": 1, "idents": null}});
    let ed = RightsEditor::new(Domain::Agent, load(payload.clone()).unwrap());
    assert_eq!(save(&ed.current_value()).unwrap(), payload);
}

#[test]
fn test_load_empty_and_missing_idents() {
    assert!(load(json!({})).unwrap().is_empty());
    let m = load(json!({"user": {"rights": 2}})).unwrap();
    assert_eq!(m["user"], Entry::new(UPDATE));
}

#[test]
fn test_load_rejects_bad_shapes() {
    assert!(load(json!([1, 2])).is_err());
    assert!(load(json!({"user": {"rights": "all"}})).is_err());
    assert!(load(json!({"user": {"rights": 1, "idents": "1,2"}})).is_err());
}

#[test]
fn test_scenario_after_edits() {
    let mut ed = RightsEditor::new(Domain::User, load(json!({"user": {"rights": 5, "idents": null}})).unwrap());
    ed.set_idents("user", "1001,1002");
    assert_eq!(
        save(&ed.current_value()).unwrap(),
        json!({"user": {"rights": 5, "idents": ["1001", "1002"]}})
    );
}
