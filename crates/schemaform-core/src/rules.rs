//! Built-in rule engine.
//!
//! Small, composable rules covering the field kinds an HTML form produces and
//! the structures a JSON API returns. Every check takes an optional custom
//! message; the defaults follow the wording of the server-side validators.
//!
//! ## Example
//!
//! ```
//! use schemaform_core::{Rule, Value, rules};
//!
//! let name = rules::string().min_len(3).message("Name must be at least 3 characters");
//! let err = name.validate(&Value::from("AB")).unwrap_err();
//! assert_eq!(err.first_message(), Some("Name must be at least 3 characters"));
//! ```

mod array;
mod boolean;
mod combinators;
mod file;
mod number;
mod object;
mod string;

pub use array::ArrayRule;
pub use boolean::BooleanRule;
pub use combinators::{Optional, Refine, Typed};
pub use file::{FileListRule, FileRule};
pub use number::NumberRule;
pub use object::ObjectRule;
pub use string::StringRule;

use crate::error::ValidationError;
use crate::value::Value;

/// Starts a string rule.
pub fn string() -> StringRule {
	StringRule::new()
}

/// Starts a number rule.
pub fn number() -> NumberRule {
	NumberRule::new()
}

/// Starts a boolean rule.
pub fn boolean() -> BooleanRule {
	BooleanRule::new()
}

/// Starts a single-file rule.
pub fn file() -> FileRule {
	FileRule::new()
}

/// Starts a multi-file rule.
pub fn files() -> FileListRule {
	FileListRule::new()
}

/// Starts an object rule with no declared members.
pub fn object() -> ObjectRule {
	ObjectRule::new()
}

/// Starts an array rule whose elements must satisfy `element`.
pub fn array<R>(element: R) -> ArrayRule<R>
where
	R: crate::Rule,
	R::Output: Into<Value>,
{
	ArrayRule::new(element)
}

/// A pending check with an optional message override.
///
/// Shared by the rule builders: a check is pushed with its default message
/// and `message()` replaces the message of the most recently added check.
#[derive(Debug, Clone)]
pub(crate) struct Check<K> {
	pub(crate) kind: K,
	pub(crate) message: Option<String>,
}

impl<K> Check<K> {
	pub(crate) fn new(kind: K) -> Self {
		Self {
			kind,
			message: None,
		}
	}

	pub(crate) fn message_or(&self, default: impl FnOnce() -> String) -> String {
		self.message.clone().unwrap_or_else(default)
	}
}

pub(crate) fn type_mismatch(expected: &str, value: &Value, custom: Option<&str>) -> ValidationError {
	match custom {
		Some(message) => ValidationError::new(message),
		None => ValidationError::new(format!(
			"Expected {}, received {}",
			expected,
			value.kind()
		)),
	}
}
