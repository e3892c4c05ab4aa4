//! Object rule.

use super::type_mismatch;
use crate::error::ValidationError;
use crate::rule::Rule;
use crate::value::Value;
use indexmap::IndexMap;
use std::sync::Arc;

/// Validates a structured object member by member. Output: [`Value`] holding
/// only the declared members, in declaration order.
///
/// Undeclared members are dropped unless [`ObjectRule::passthrough`] is set.
/// A missing member is validated as [`Value::Null`], so optional members are
/// expressed with [`Rule::optional`]; one that is missing from the input is
/// left out of the output too.
///
/// # Examples
///
/// ```
/// use schemaform_core::{Rule, Value, rules};
/// use serde_json::json;
///
/// let rule = rules::object()
///     .field("id", rules::number())
///     .field("name", rules::string().min_len(1));
/// let value = Value::from(json!({"id": 1, "name": "foo"}));
/// assert_eq!(rule.validate(&value).unwrap().to_json().unwrap(), json!({"id": 1, "name": "foo"}));
/// ```
#[derive(Clone, Default)]
pub struct ObjectRule {
	members: IndexMap<String, Arc<dyn MemberRule>>,
	passthrough: bool,
	type_message: Option<String>,
}

/// Member rules keep their parsed output so the object can rebuild itself.
trait MemberRule: Send + Sync {
	fn validate_member(&self, value: &Value) -> Result<Value, ValidationError>;
}

struct Member<R>(R);

impl<R> MemberRule for Member<R>
where
	R: Rule,
	R::Output: Into<Value>,
{
	fn validate_member(&self, value: &Value) -> Result<Value, ValidationError> {
		self.0.validate(value).map(Into::into)
	}
}

impl std::fmt::Debug for ObjectRule {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ObjectRule")
			.field("members", &self.members.keys().collect::<Vec<_>>())
			.field("passthrough", &self.passthrough)
			.finish()
	}
}

impl ObjectRule {
	/// Creates a rule with no declared members.
	pub fn new() -> Self {
		Self::default()
	}

	/// Declares a member. Redeclaring a name replaces its rule in place.
	pub fn field<R>(mut self, name: impl Into<String>, rule: R) -> Self
	where
		R: Rule + 'static,
		R::Output: Into<Value>,
	{
		self.members.insert(name.into(), Arc::new(Member(rule)));
		self
	}

	/// Keeps undeclared members in the output.
	pub fn passthrough(mut self) -> Self {
		self.passthrough = true;
		self
	}

	/// Replaces the type-mismatch message.
	pub fn message(mut self, message: impl Into<String>) -> Self {
		self.type_message = Some(message.into());
		self
	}
}

impl Rule for ObjectRule {
	type Output = Value;

	fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
		let Value::Object(input) = value else {
			return Err(type_mismatch("object", value, self.type_message.as_deref()));
		};

		let mut output = IndexMap::with_capacity(self.members.len());
		let mut errors = ValidationError::default();
		for (name, rule) in &self.members {
			let present = input.get(name);
			match rule.validate_member(present.unwrap_or(&Value::Null)) {
				// An absent member that validated to nothing stays absent.
				Ok(Value::Null) if present.is_none() => {}
				Ok(parsed) => {
					output.insert(name.clone(), parsed);
				}
				Err(err) => errors.extend(err.prefixed(name.clone())),
			}
		}
		if self.passthrough {
			for (name, member) in input {
				if !self.members.contains_key(name) {
					output.insert(name.clone(), member.clone());
				}
			}
		}

		if errors.is_empty() {
			Ok(Value::Object(output))
		} else {
			Err(errors)
		}
	}
}
