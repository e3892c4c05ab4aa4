//! Array rule.

use super::{Check, type_mismatch};
use crate::error::{Issue, ValidationError};
use crate::rule::Rule;
use crate::value::Value;

#[derive(Debug, Clone)]
enum ArrayCheck {
	MinLen(usize),
	MaxLen(usize),
}

/// Validates every element of an array with one rule. Output: [`Value::Array`]
/// of the parsed elements.
///
/// # Examples
///
/// ```
/// use schemaform_core::{Rule, Value, rules};
/// use serde_json::json;
///
/// let tags = rules::array(rules::string().min_len(1)).min_len(1);
/// assert!(tags.validate(&Value::from(json!(["rust", "forms"]))).is_ok());
/// assert!(tags.validate(&Value::from(json!([]))).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ArrayRule<R> {
	element: R,
	checks: Vec<Check<ArrayCheck>>,
	type_message: Option<String>,
}

impl<R> ArrayRule<R>
where
	R: Rule,
	R::Output: Into<Value>,
{
	/// Creates a rule validating each element with `element`.
	pub fn new(element: R) -> Self {
		Self {
			element,
			checks: Vec::new(),
			type_message: None,
		}
	}

	/// Requires at least `n` elements.
	pub fn min_len(mut self, n: usize) -> Self {
		self.checks.push(Check::new(ArrayCheck::MinLen(n)));
		self
	}

	/// Allows at most `n` elements.
	pub fn max_len(mut self, n: usize) -> Self {
		self.checks.push(Check::new(ArrayCheck::MaxLen(n)));
		self
	}

	/// Replaces the message of the most recently added check.
	///
	/// Before any check is added, replaces the type-mismatch message.
	pub fn message(mut self, message: impl Into<String>) -> Self {
		match self.checks.last_mut() {
			Some(check) => check.message = Some(message.into()),
			None => self.type_message = Some(message.into()),
		}
		self
	}
}

impl<R> Rule for ArrayRule<R>
where
	R: Rule,
	R::Output: Into<Value>,
{
	type Output = Value;

	fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
		let Value::Array(items) = value else {
			return Err(type_mismatch("array", value, self.type_message.as_deref()));
		};

		let mut errors = ValidationError::default();
		for check in &self.checks {
			let failed = match check.kind {
				ArrayCheck::MinLen(n) => (items.len() < n).then(|| {
					check.message_or(|| format!("Array must contain at least {} element(s)", n))
				}),
				ArrayCheck::MaxLen(n) => (items.len() > n).then(|| {
					check.message_or(|| format!("Array must contain at most {} element(s)", n))
				}),
			};
			if let Some(message) = failed {
				errors.push(Issue::new(message));
			}
		}

		let mut parsed = Vec::with_capacity(items.len());
		for (index, item) in items.iter().enumerate() {
			match self.element.validate(item) {
				Ok(v) => parsed.push(v.into()),
				Err(err) => errors.extend(err.prefixed(index.to_string())),
			}
		}

		if errors.is_empty() {
			Ok(Value::Array(parsed))
		} else {
			Err(errors)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::{number, object, string};
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_element_failures_are_indexed() {
		let rule = ArrayRule::new(
			object()
				.field("id", number())
				.field("title", string().min_len(1)),
		);
		let value = Value::from(json!([
			{"id": 1, "title": "a"},
			{"id": 2, "title": ""}
		]));
		let err = rule.validate(&value).unwrap_err();
		assert_eq!(err.issues()[0].dotted_path(), "1.title");
	}

	#[rstest]
	fn test_scalar_elements() {
		let rule = ArrayRule::new(number().int());
		let parsed = rule.validate(&Value::from(json!([1, 2, 3]))).unwrap();
		assert_eq!(parsed.to_json().unwrap(), json!([1, 2, 3]));

		let err = rule.validate(&Value::from(json!([1, "two"]))).unwrap_err();
		assert_eq!(err.issues()[0].dotted_path(), "1");
		assert_eq!(err.first_message(), Some("Expected number, received string"));
	}

	#[rstest]
	#[case(json!([]), Some("need one"))]
	#[case(json!(["a", "b", "c"]), Some("Array must contain at most 2 element(s)"))]
	#[case(json!(["a"]), None)]
	fn test_length_bounds(#[case] input: serde_json::Value, #[case] expected: Option<&str>) {
		let rule = ArrayRule::new(string())
			.min_len(1)
			.message("need one")
			.max_len(2);
		let result = rule.validate(&Value::from(input));
		assert_eq!(result.err().and_then(|e| e.first_message().map(str::to_string)).as_deref(), expected);
	}

	#[rstest]
	fn test_type_message_override() {
		let rule = ArrayRule::new(string()).message("Tags must be a list");
		let err = rule.validate(&Value::from("rust")).unwrap_err();
		assert_eq!(err.first_message(), Some("Tags must be a list"));
	}
}
