//! Unit tests for API types serialization/deserialization.

#![allow(clippy::unwrap_used, clippy::panic)]

use giraffe::api::{ClassifyRequest, ClassifyResponse, HealthResponse, StageJson};
use giraffe_core::{ClassificationError, GiraffeError, StageId, ValidationError, stage_table};

// =============================================================================
// HEALTH RESPONSE TESTS
// =============================================================================

#[test]
fn test_health_response_default() {
    let health = HealthResponse::default();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

#[test]
fn test_health_response_deserialization() {
    let json = r#"{"status":"healthy","version":"1.0.0"}"#;
    let health: HealthResponse = serde_json::from_str(json).unwrap();

    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, "1.0.0");
}

// =============================================================================
// STAGE JSON TESTS
// =============================================================================

#[test]
fn test_stage_json_from_record() {
    let stage = StageJson::from(StageId::Newborn.record());

    assert_eq!(stage.id, "newborn");
    assert_eq!(stage.name, "Newborn/Calf");
    assert_eq!(stage.giraffe_age_range, "Birth - 1 year");
    assert_eq!(stage.foot_length_min, 8.9);
    assert_eq!(stage.foot_length_max, 12.1);
    assert_eq!(stage.weight.metric, "45 - 100 kg");
    assert!(stage.image_url.ends_with(".png"));
}

#[test]
fn test_stage_json_roundtrip_every_stage() {
    for record in stage_table() {
        let stage = StageJson::from(record);
        let json = serde_json::to_string(&stage).unwrap();
        let back: StageJson = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stage);
    }
}

#[test]
fn test_core_record_serializes_with_lowercase_id() {
    let json = serde_json::to_value(StageId::Adult.record()).unwrap();
    assert_eq!(json["id"], "adult");
    assert_eq!(json["foot_length"]["low"], 17.1);
    assert_eq!(json["fun_facts"].as_array().map(Vec::len), Some(3));
}

// =============================================================================
// CLASSIFY REQUEST/RESPONSE TESTS
// =============================================================================

#[test]
fn test_classify_request_deserialization() {
    let request: ClassifyRequest = serde_json::from_str(r#"{"foot_length":" 16.5 "}"#).unwrap();
    assert_eq!(request.foot_length, " 16.5 ");
}

#[test]
fn test_classify_response_success_omits_error_fields() {
    let response = ClassifyResponse::success(StageId::Juvenile.record());
    let json = serde_json::to_string(&response).unwrap();

    assert!(json.contains("\"success\":true"));
    assert!(json.contains("\"id\":\"juvenile\""));
    assert!(!json.contains("error_kind"));
}

#[test]
fn test_classify_response_failure_kinds() {
    let cases = [
        (
            GiraffeError::from(ValidationError::EmptyOrNonNumeric),
            "empty_or_non_numeric",
        ),
        (
            GiraffeError::from(ValidationError::OutOfBounds { value: 1.0 }),
            "out_of_bounds",
        ),
        (
            GiraffeError::from(ClassificationError::UnmappedValue { value: 1.0 }),
            "unmapped_value",
        ),
    ];

    for (err, kind) in cases {
        let response = ClassifyResponse::failure(&err);
        assert!(!response.success);
        assert!(response.stage.is_none());
        assert_eq!(response.error_kind.as_deref(), Some(kind));
        assert!(response.error.is_some());
    }
}
