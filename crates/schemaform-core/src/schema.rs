//! Named field rules.
//!
//! A [`Schema`] maps field names to rules. Form bindings look fields up by
//! the control's `name` attribute; names the schema does not declare are
//! ignored there.

use crate::error::ValidationError;
use crate::rule::{FieldRule, Rule, Shape};
use crate::value::Value;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// An ordered mapping from field name to rule.
///
/// Cloning is cheap; rules are shared.
///
/// # Examples
///
/// ```
/// use schemaform_core::{Schema, Value, rules};
///
/// let schema = Schema::builder()
///     .field("name", rules::string().min_len(3))
///     .field("email", rules::string().email())
///     .build();
///
/// assert_eq!(schema.names().collect::<Vec<_>>(), vec!["name", "email"]);
/// assert!(schema.validate_field("name", &Value::from("AB")).unwrap().is_err());
/// assert!(schema.validate_field("unknown", &Value::Null).is_none());
/// ```
#[derive(Clone, Default)]
pub struct Schema {
	fields: IndexMap<String, Arc<dyn FieldRule>>,
}

impl Schema {
	/// Starts building a schema.
	pub fn builder() -> SchemaBuilder {
		SchemaBuilder::default()
	}

	/// Returns the rule declared for `name`.
	pub fn get(&self, name: &str) -> Option<&Arc<dyn FieldRule>> {
		self.fields.get(name)
	}

	/// Returns `true` if `name` is declared.
	pub fn contains(&self, name: &str) -> bool {
		self.fields.contains_key(name)
	}

	/// Iterates over declared names in declaration order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	/// Iterates over `(name, rule)` pairs in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn FieldRule>)> {
		self.fields.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Returns the input shape the rule for `name` expects.
	pub fn shape_of(&self, name: &str) -> Option<Shape> {
		self.fields.get(name).map(|rule| rule.expected_shape())
	}

	/// Validates `value` against the rule for `name`.
	///
	/// Returns `None` when `name` is not declared.
	pub fn validate_field(&self, name: &str, value: &Value) -> Option<Result<(), ValidationError>> {
		self.fields.get(name).map(|rule| rule.check(value))
	}
}

impl fmt::Debug for Schema {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Schema")
			.field("fields", &self.fields.keys().collect::<Vec<_>>())
			.finish()
	}
}

/// Builder for [`Schema`].
#[derive(Default)]
pub struct SchemaBuilder {
	fields: IndexMap<String, Arc<dyn FieldRule>>,
}

impl SchemaBuilder {
	/// Declares `name` with `rule`. Redeclaring a name replaces its rule in place.
	pub fn field<R>(mut self, name: impl Into<String>, rule: R) -> Self
	where
		R: Rule + 'static,
	{
		self.fields.insert(name.into(), Arc::new(rule));
		self
	}

	/// Declares `name` with an already type-erased rule.
	pub fn field_rule(mut self, name: impl Into<String>, rule: Arc<dyn FieldRule>) -> Self {
		self.fields.insert(name.into(), rule);
		self
	}

	pub fn build(self) -> Schema {
		Schema {
			fields: self.fields,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules;
	use rstest::rstest;

	#[rstest]
	fn test_redeclared_field_keeps_position() {
		let schema = Schema::builder()
			.field("a", rules::string())
			.field("b", rules::number())
			.field("a", rules::number())
			.build();
		assert_eq!(schema.names().collect::<Vec<_>>(), vec!["a", "b"]);
		assert!(schema.validate_field("a", &Value::Number(1.0)).unwrap().is_ok());
	}

	#[rstest]
	fn test_shape_of_reports_rule_shape() {
		let schema = Schema::builder()
			.field("avatar", rules::file())
			.field("photos", rules::files())
			.field("name", rules::string())
			.build();
		assert_eq!(schema.shape_of("avatar"), Some(Shape::SingleFile));
		assert_eq!(schema.shape_of("photos"), Some(Shape::MultiFile));
		assert_eq!(schema.shape_of("name"), Some(Shape::Scalar));
		assert_eq!(schema.shape_of("missing"), None);
	}
}
