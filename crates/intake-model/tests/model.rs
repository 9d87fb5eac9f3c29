use std::str::FromStr;

use intake_model::{FieldType, MappingSuggestion, MatchKind, SchemaError, TargetField, validate_fields};

const ALL_TYPES: [FieldType; 10] = [
    FieldType::Text,
    FieldType::Email,
    FieldType::Phone,
    FieldType::Name,
    FieldType::Id,
    FieldType::Date,
    FieldType::Number,
    FieldType::Address,
    FieldType::Url,
    FieldType::Boolean,
];

#[test]
fn field_type_as_str_round_trips() {
    for field_type in ALL_TYPES {
        let parsed = FieldType::from_str(field_type.as_str()).expect("canonical name parses");
        assert_eq!(parsed, field_type, "{field_type} should round-trip");
    }
}

#[test]
fn field_type_parse_is_case_insensitive() {
    assert_eq!(FieldType::from_str("EMAIL").unwrap(), FieldType::Email);
    assert_eq!(FieldType::from_str(" Phone ").unwrap(), FieldType::Phone);
}

#[test]
fn field_type_parse_accepts_aliases() {
    assert_eq!(FieldType::from_str("string").unwrap(), FieldType::Text);
    assert_eq!(FieldType::from_str("identifier").unwrap(), FieldType::Id);
    assert_eq!(FieldType::from_str("datetime").unwrap(), FieldType::Date);
    assert_eq!(FieldType::from_str("numeric").unwrap(), FieldType::Number);
    assert_eq!(FieldType::from_str("bool").unwrap(), FieldType::Boolean);
}

#[test]
fn field_type_parse_rejects_unknown_names() {
    let err = FieldType::from_str("geolocation").unwrap_err();
    assert_eq!(
        err,
        SchemaError::UnknownFieldType {
            value: "geolocation".to_string(),
        }
    );
}

#[test]
fn field_type_serde_uses_snake_names() {
    let json = serde_json::to_string(&FieldType::Email).unwrap();
    assert_eq!(json, "\"email\"");
    let parsed: FieldType = serde_json::from_str("\"boolean\"").unwrap();
    assert_eq!(parsed, FieldType::Boolean);
}

#[test]
fn match_kind_serde_wire_names() {
    assert_eq!(serde_json::to_string(&MatchKind::Exact).unwrap(), "\"exact\"");
    assert_eq!(
        serde_json::to_string(&MatchKind::SnakeCase).unwrap(),
        "\"snake_case\""
    );
    assert_eq!(
        serde_json::to_string(&MatchKind::CamelCase).unwrap(),
        "\"camel_case\""
    );
    assert_eq!(serde_json::to_string(&MatchKind::Fuzzy).unwrap(), "\"fuzzy\"");
    assert_eq!(MatchKind::CamelCase.as_str(), "camel_case");
}

#[test]
fn target_field_serde_uses_type_key_and_defaults_required() {
    let field: TargetField =
        serde_json::from_str(r#"{"id":"email","name":"Email","type":"email"}"#)
            .expect("deserialize field without required flag");
    assert_eq!(field.field_type, FieldType::Email);
    assert!(!field.required, "required should default to false");

    let json = serde_json::to_string(&field).unwrap();
    assert!(json.contains("\"type\":\"email\""), "got {json}");
}

#[test]
fn required_builder_sets_flag() {
    let field = TargetField::new("id", "Id", FieldType::Id).required();
    assert!(field.required);
    let field = TargetField::new("id", "Id", FieldType::Id);
    assert!(!field.required);
}

#[test]
fn validate_fields_accepts_unique_ids() {
    let fields = vec![
        TargetField::new("email", "Email", FieldType::Email),
        TargetField::new("phone", "Phone", FieldType::Phone),
    ];
    assert!(validate_fields(&fields).is_ok());
    assert!(validate_fields(&[]).is_ok());
}

#[test]
fn validate_fields_rejects_duplicate_ids() {
    let fields = vec![
        TargetField::new("email", "Email", FieldType::Email),
        TargetField::new("email", "Backup Email", FieldType::Email),
    ];
    assert_eq!(
        validate_fields(&fields).unwrap_err(),
        SchemaError::DuplicateFieldId {
            id: "email".to_string(),
        }
    );
}

#[test]
fn validate_fields_rejects_empty_ids() {
    let fields = vec![TargetField::new("", "Email", FieldType::Email)];
    assert_eq!(validate_fields(&fields).unwrap_err(), SchemaError::EmptyFieldId);
}

#[test]
fn schema_error_messages() {
    let err = SchemaError::UnknownFieldType {
        value: "blob".to_string(),
    };
    assert_eq!(err.to_string(), "unknown field type: blob");
    let err = SchemaError::DuplicateFieldId {
        id: "email".to_string(),
    };
    assert_eq!(err.to_string(), "duplicate field id: email");
}
