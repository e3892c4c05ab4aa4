//! Rule combinators: refinement, optionality, and typed deserialization.

use crate::error::{Issue, ValidationError};
use crate::rule::{Rule, Shape};
use crate::value::Value;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Runs a custom check after the inner rule succeeds. See [`Rule::refine`].
pub struct Refine<R, F> {
	inner: R,
	check: F,
	message: String,
}

impl<R, F> Refine<R, F> {
	pub(crate) fn new(inner: R, check: F, message: String) -> Self {
		Self {
			inner,
			check,
			message,
		}
	}
}

impl<R, F> Rule for Refine<R, F>
where
	R: Rule,
	F: Fn(&R::Output) -> bool + Send + Sync,
{
	type Output = R::Output;

	fn validate(&self, value: &Value) -> Result<R::Output, ValidationError> {
		let output = self.inner.validate(value)?;
		if (self.check)(&output) {
			Ok(output)
		} else {
			Err(ValidationError::new(self.message.clone()))
		}
	}

	fn shape(&self) -> Shape {
		self.inner.shape()
	}
}

/// Treats [`Value::Null`] as absent. See [`Rule::optional`].
pub struct Optional<R> {
	inner: R,
	blank_as_none: bool,
}

impl<R> Optional<R> {
	pub(crate) fn new(inner: R) -> Self {
		Self {
			inner,
			blank_as_none: false,
		}
	}

	/// Also treats empty text as absent, the way an untouched form control
	/// reports "no value".
	pub fn blank_as_none(mut self) -> Self {
		self.blank_as_none = true;
		self
	}
}

impl<R: Rule> Rule for Optional<R> {
	type Output = Option<R::Output>;

	fn validate(&self, value: &Value) -> Result<Self::Output, ValidationError> {
		match value {
			Value::Null => Ok(None),
			Value::Text(s) if self.blank_as_none && s.is_empty() => Ok(None),
			other => self.inner.validate(other).map(Some),
		}
	}

	fn shape(&self) -> Shape {
		self.inner.shape()
	}
}

/// Deserializes the inner rule's output into `T`. See [`Rule::typed`].
pub struct Typed<R, T> {
	inner: R,
	_marker: PhantomData<fn() -> T>,
}

impl<R, T> Typed<R, T> {
	pub(crate) fn new(inner: R) -> Self {
		Self {
			inner,
			_marker: PhantomData,
		}
	}
}

impl<R, T> Rule for Typed<R, T>
where
	R: Rule<Output = Value>,
	T: DeserializeOwned,
{
	type Output = T;

	fn validate(&self, value: &Value) -> Result<T, ValidationError> {
		let parsed = self.inner.validate(value)?;
		let json = parsed
			.to_json()
			.map_err(|e| ValidationError::new(e.to_string()))?;
		serde_json::from_value(json).map_err(|e| {
			ValidationError::from_issues(vec![Issue::new(format!("Invalid structure: {}", e))])
		})
	}

	fn shape(&self) -> Shape {
		self.inner.shape()
	}
}

#[cfg(test)]
mod tests {
	use crate::rule::Rule;
	use crate::rules::{number, object, string};
	use crate::value::Value;
	use rstest::rstest;
	use serde::Deserialize;
	use serde_json::json;

	#[derive(Debug, Deserialize, PartialEq)]
	struct Todo {
		id: u32,
		name: String,
	}

	#[rstest]
	fn test_typed_deserializes_validated_value() {
		let rule = object()
			.field("id", number().int())
			.field("name", string())
			.typed::<Todo>();
		let todo = rule
			.validate(&Value::from(json!({"id": 1, "name": "foo"})))
			.unwrap();
		assert_eq!(
			todo,
			Todo {
				id: 1,
				name: "foo".into()
			}
		);
	}

	#[rstest]
	fn test_typed_reports_rule_issues_before_deserializing() {
		let rule = object().field("id", number()).typed::<Todo>();
		let err = rule
			.validate(&Value::from(json!({"id": "x", "name": "foo"})))
			.unwrap_err();
		assert_eq!(err.issues()[0].dotted_path(), "id");
	}

	#[rstest]
	fn test_optional_keeps_empty_text() {
		let rule = string().optional();
		assert_eq!(rule.validate(&Value::Null).unwrap(), None);
		assert_eq!(rule.validate(&Value::from("")).unwrap(), Some(String::new()));
	}

	#[rstest]
	fn test_blank_as_none_accepts_blank() {
		let rule = string().email().optional().blank_as_none();
		assert_eq!(rule.validate(&Value::from("")).unwrap(), None);
		assert_eq!(rule.validate(&Value::Null).unwrap(), None);
		assert!(rule.validate(&Value::from("nope")).is_err());
	}

	#[rstest]
	fn test_refine_runs_after_inner_success() {
		let rule = string().min_len(1).refine(|s| s != "admin", "That name is reserved");
		assert_eq!(
			rule.validate(&Value::from("admin")).unwrap_err().first_message(),
			Some("That name is reserved")
		);
		assert_eq!(
			rule.validate(&Value::from("")).unwrap_err().first_message(),
			Some("This field must be at least 1 characters long")
		);
	}
}
