//! Boolean rule.

use super::type_mismatch;
use crate::error::ValidationError;
use crate::rule::Rule;
use crate::value::Value;

/// Validates booleans. Output: `bool`.
///
/// With [`BooleanRule::coerce`], the text a checkbox reports is accepted:
/// `"true"`, `"on"`, `"1"` read as `true`; `"false"`, `"off"`, `"0"`, and
/// blank text as `false`.
#[derive(Debug, Clone, Default)]
pub struct BooleanRule {
	coerce: bool,
	required_true: Option<String>,
	type_message: Option<String>,
}

impl BooleanRule {
	/// Creates a rule accepting any boolean.
	pub fn new() -> Self {
		Self::default()
	}

	/// Reads checkbox-style text as a boolean.
	pub fn coerce(mut self) -> Self {
		self.coerce = true;
		self
	}

	/// Requires the value to be `true` (e.g. "accept the terms").
	pub fn must_be_true(mut self, message: impl Into<String>) -> Self {
		self.required_true = Some(message.into());
		self
	}

	/// Replaces the type-mismatch message.
	pub fn message(mut self, message: impl Into<String>) -> Self {
		self.type_message = Some(message.into());
		self
	}

	fn read(&self, value: &Value) -> Option<bool> {
		match value {
			Value::Bool(b) => Some(*b),
			Value::Text(s) if self.coerce => match s.trim().to_ascii_lowercase().as_str() {
				"true" | "on" | "1" => Some(true),
				"false" | "off" | "0" | "" => Some(false),
				_ => None,
			},
			_ => None,
		}
	}
}

impl Rule for BooleanRule {
	type Output = bool;

	fn validate(&self, value: &Value) -> Result<bool, ValidationError> {
		let b = self
			.read(value)
			.ok_or_else(|| type_mismatch("boolean", value, self.type_message.as_deref()))?;
		match &self.required_true {
			Some(message) if !b => Err(ValidationError::new(message.clone())),
			_ => Ok(b),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("on", Some(true))]
	#[case("0", Some(false))]
	#[case("maybe", None)]
	fn test_coerce(#[case] input: &str, #[case] expected: Option<bool>) {
		let result = BooleanRule::new().coerce().validate(&Value::from(input));
		assert_eq!(result.ok(), expected);
	}

	#[rstest]
	fn test_must_be_true() {
		let rule = BooleanRule::new().coerce().must_be_true("You must accept the terms");
		let err = rule.validate(&Value::from("off")).unwrap_err();
		assert_eq!(err.first_message(), Some("You must accept the terms"));
		assert!(rule.validate(&Value::Bool(true)).unwrap());
	}
}
