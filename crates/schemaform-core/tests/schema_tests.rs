//! Schema and rule integration tests.

use proptest::prelude::*;
use rstest::{fixture, rstest};
use schemaform_core::{File, Rule, Schema, Shape, Value, rules};
use serde_json::json;

#[fixture]
fn signup_schema() -> Schema {
	Schema::builder()
		.field(
			"name",
			rules::string()
				.min_len(3)
				.message("Name must be at least 3 characters"),
		)
		.field(
			"email",
			rules::string().email().message("Invalid email address"),
		)
		.field(
			"age",
			rules::number()
				.coerce()
				.min(18.0)
				.message("Must be at least 18 years old"),
		)
		.field(
			"bio",
			rules::string()
				.max_len(100)
				.message("Bio must be 100 characters or less"),
		)
		.field(
			"avatar",
			rules::file()
				.non_empty()
				.message("Image is required")
				.mime_prefix("image/")
				.message("Must be an image"),
		)
		.build()
}

#[rstest]
#[case("name", Value::from("AB"), Some("Name must be at least 3 characters"))]
#[case("name", Value::from("Alice"), None)]
#[case("email", Value::from("invalid-email"), Some("Invalid email address"))]
#[case("email", Value::from("valid@email.com"), None)]
#[case("age", Value::from("17"), Some("Must be at least 18 years old"))]
#[case("age", Value::from("18"), None)]
#[case("bio", Value::from("a".repeat(101)), Some("Bio must be 100 characters or less"))]
#[case("avatar", Value::File(File::empty()), Some("Image is required"))]
#[case(
	"avatar",
	Value::File(File::new("invalid.pdf", "application/pdf", b"PDF content".to_vec())),
	Some("Must be an image")
)]
#[case(
	"avatar",
	Value::File(File::new("valid-image.png", "image/png", b"foo".to_vec())),
	None
)]
fn test_signup_fields(
	signup_schema: Schema,
	#[case] field: &str,
	#[case] value: Value,
	#[case] expected: Option<&str>,
) {
	let result = signup_schema
		.validate_field(field, &value)
		.expect("field is declared");
	match expected {
		Some(message) => assert_eq!(result.unwrap_err().first_message(), Some(message)),
		None => assert!(result.is_ok()),
	}
}

#[rstest]
fn test_unknown_field_is_not_validated(signup_schema: Schema) {
	assert!(signup_schema.validate_field("nickname", &Value::Null).is_none());
	assert_eq!(signup_schema.shape_of("avatar"), Some(Shape::SingleFile));
}

#[rstest]
fn test_list_of_objects_rule() {
	let todos = rules::array(
		rules::object()
			.field("id", rules::number().int())
			.field("title", rules::string().min_len(1))
			.field("done", rules::boolean()),
	);
	let value = Value::from(json!([
		{"id": 1, "title": "write", "done": false},
		{"id": 2, "title": "ship", "done": true}
	]));
	assert_eq!(
		todos.validate(&value).unwrap().to_json().unwrap(),
		json!([
			{"id": 1, "title": "write", "done": false},
			{"id": 2, "title": "ship", "done": true}
		])
	);
}

#[fixture]
fn profile_rule() -> rules::ObjectRule {
	rules::object()
		.field("id", rules::number().int())
		.field("nick", rules::string().optional())
		.field("tags", rules::array(rules::string()))
		.field("scores", rules::array(rules::number()).optional())
}

#[rstest]
#[case(json!({"id": 1, "nick": "", "tags": []}))]
#[case(json!({"id": 1, "nick": null, "tags": ["a", "b"]}))]
#[case(json!({"id": 1, "tags": ["a"], "scores": [1, 2.5]}))]
#[case(json!({"id": 1, "tags": []}))]
fn test_validated_response_data_round_trips(
	profile_rule: rules::ObjectRule,
	#[case] input: serde_json::Value,
) {
	let parsed = profile_rule.validate(&Value::from(input.clone())).unwrap();
	assert_eq!(parsed.to_json().unwrap(), input);
}

#[rstest]
fn test_scalar_array_member_reports_element_path(profile_rule: rules::ObjectRule) {
	let err = profile_rule
		.validate(&Value::from(json!({"id": 1, "tags": ["a", 2]})))
		.unwrap_err();
	assert_eq!(err.issues()[0].dotted_path(), "tags.1");
	assert_eq!(err.first_message(), Some("Expected string, received number"));
}

proptest! {
	#[test]
	fn prop_string_length_bounds(s in "\\PC{0,40}") {
		let rule = rules::string().min_len(3).max_len(20);
		let len = s.chars().count();
		prop_assert_eq!(rule.validate(&Value::from(s.as_str())).is_ok(), (3..=20).contains(&len));
	}

	#[test]
	fn prop_coerced_number_matches_parse(n in -1_000_000i64..1_000_000) {
		let rule = rules::number().coerce().min(0.0);
		let result = rule.validate(&Value::from(n.to_string()));
		prop_assert_eq!(result.is_ok(), n >= 0);
		if let Ok(parsed) = result {
			prop_assert_eq!(parsed, n as f64);
		}
	}

	#[test]
	fn prop_file_count_bounds(count in 0usize..8) {
		let rule = rules::files().min_count(1).max_count(5);
		let files = vec![Value::File(File::new("a.png", "image/png", vec![1])); count];
		prop_assert_eq!(rule.validate(&Value::Array(files)).is_ok(), (1..=5).contains(&count));
	}
}
