//! Number rule.

use super::{Check, type_mismatch};
use crate::error::{Issue, ValidationError};
use crate::rule::Rule;
use crate::value::Value;

#[derive(Debug, Clone)]
enum NumberCheck {
	Min(f64),
	Max(f64),
	Int,
}

/// Validates numbers. Output: `f64`.
///
/// Form controls always report text, so number inputs usually want
/// [`NumberRule::coerce`], which parses text before checking.
#[derive(Debug, Clone, Default)]
pub struct NumberRule {
	checks: Vec<Check<NumberCheck>>,
	coerce: bool,
	type_message: Option<String>,
}

impl NumberRule {
	/// Creates a rule accepting any finite number.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses text values (surrounding whitespace ignored) as numbers.
	///
	/// Blank text does not parse.
	pub fn coerce(mut self) -> Self {
		self.coerce = true;
		self
	}

	/// Requires a value of at least `min`.
	pub fn min(mut self, min: f64) -> Self {
		self.checks.push(Check::new(NumberCheck::Min(min)));
		self
	}

	/// Requires a value of at most `max`.
	pub fn max(mut self, max: f64) -> Self {
		self.checks.push(Check::new(NumberCheck::Max(max)));
		self
	}

	/// Requires an integral value.
	pub fn int(mut self) -> Self {
		self.checks.push(Check::new(NumberCheck::Int));
		self
	}

	/// Replaces the message of the most recently added check.
	pub fn message(mut self, message: impl Into<String>) -> Self {
		match self.checks.last_mut() {
			Some(check) => check.message = Some(message.into()),
			None => self.type_message = Some(message.into()),
		}
		self
	}

	fn read(&self, value: &Value) -> Option<f64> {
		match value {
			Value::Number(n) if n.is_finite() => Some(*n),
			Value::Text(s) if self.coerce => {
				let s = s.trim();
				if s.is_empty() {
					return None;
				}
				s.parse::<f64>().ok().filter(|n| n.is_finite())
			}
			_ => None,
		}
	}
}

impl Rule for NumberRule {
	type Output = f64;

	fn validate(&self, value: &Value) -> Result<f64, ValidationError> {
		let Some(n) = self.read(value) else {
			return Err(type_mismatch("number", value, self.type_message.as_deref()));
		};

		let mut errors = ValidationError::default();
		for check in &self.checks {
			let failed = match check.kind {
				NumberCheck::Min(min) => (n < min).then(|| {
					check.message_or(|| format!("Ensure this value is greater than or equal to {}", min))
				}),
				NumberCheck::Max(max) => (n > max).then(|| {
					check.message_or(|| format!("Ensure this value is less than or equal to {}", max))
				}),
				NumberCheck::Int => (n.fract() != 0.0)
					.then(|| check.message_or(|| "Enter a whole number".to_string())),
			};
			if let Some(message) = failed {
				errors.push(Issue::new(message));
			}
		}

		if errors.is_empty() { Ok(n) } else { Err(errors) }
	}
}
