//! String rule.

use super::{Check, type_mismatch};
use crate::error::{Issue, ValidationError};
use crate::rule::Rule;
use crate::value::Value;
use regex::Regex;
use std::sync::LazyLock;

// Simple email pattern; thorough checks belong on the server.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// HTTP/HTTPS URL with an optional port, path, query, and fragment.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^https?://[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9\-]*[a-zA-Z0-9])?)*(:[0-9]{1,5})?(/[^\s?#]*)?(\?[^\s#]*)?(#[^\s]*)?$",
	)
	.expect("URL_REGEX: invalid regex pattern")
});

#[derive(Debug, Clone)]
enum StringCheck {
	MinLen(usize),
	MaxLen(usize),
	Email,
	Url,
	Pattern(Regex),
}

/// Validates text. Output: the (optionally trimmed) string.
///
/// Length checks count characters, not bytes.
#[derive(Debug, Clone, Default)]
pub struct StringRule {
	checks: Vec<Check<StringCheck>>,
	trim: bool,
	type_message: Option<String>,
}

impl StringRule {
	/// Creates a rule accepting any text.
	pub fn new() -> Self {
		Self::default()
	}

	/// Trims surrounding whitespace before running checks.
	pub fn trim(mut self) -> Self {
		self.trim = true;
		self
	}

	/// Requires at least `n` characters.
	pub fn min_len(mut self, n: usize) -> Self {
		self.checks.push(Check::new(StringCheck::MinLen(n)));
		self
	}

	/// Requires at most `n` characters.
	pub fn max_len(mut self, n: usize) -> Self {
		self.checks.push(Check::new(StringCheck::MaxLen(n)));
		self
	}

	/// Requires at least one character.
	pub fn non_empty(self) -> Self {
		self.min_len(1)
	}

	/// Requires an email address.
	pub fn email(mut self) -> Self {
		self.checks.push(Check::new(StringCheck::Email));
		self
	}

	/// Requires an HTTP or HTTPS URL.
	pub fn url(mut self) -> Self {
		self.checks.push(Check::new(StringCheck::Url));
		self
	}

	/// Requires a match of `pattern`.
	pub fn pattern(mut self, pattern: Regex) -> Self {
		self.checks.push(Check::new(StringCheck::Pattern(pattern)));
		self
	}

	/// Replaces the message of the most recently added check.
	///
	/// Called before any check, it replaces the type-mismatch message.
	pub fn message(mut self, message: impl Into<String>) -> Self {
		match self.checks.last_mut() {
			Some(check) => check.message = Some(message.into()),
			None => self.type_message = Some(message.into()),
		}
		self
	}
}

impl Rule for StringRule {
	type Output = String;

	fn validate(&self, value: &Value) -> Result<String, ValidationError> {
		let Value::Text(raw) = value else {
			return Err(type_mismatch("string", value, self.type_message.as_deref()));
		};
		let text = if self.trim { raw.trim() } else { raw.as_str() };
		let len = text.chars().count();

		let mut errors = ValidationError::default();
		for check in &self.checks {
			let failed = match &check.kind {
				StringCheck::MinLen(n) => (len < *n).then(|| {
					check.message_or(|| format!("This field must be at least {} characters long", n))
				}),
				StringCheck::MaxLen(n) => (len > *n).then(|| {
					check.message_or(|| format!("This field must be at most {} characters long", n))
				}),
				StringCheck::Email => (!EMAIL_REGEX.is_match(text))
					.then(|| check.message_or(|| "Enter a valid email address".to_string())),
				StringCheck::Url => (!URL_REGEX.is_match(text))
					.then(|| check.message_or(|| "Enter a valid URL".to_string())),
				StringCheck::Pattern(re) => (!re.is_match(text))
					.then(|| check.message_or(|| "Enter a valid value".to_string())),
			};
			if let Some(message) = failed {
				errors.push(Issue::new(message));
			}
		}

		if errors.is_empty() {
			Ok(text.to_string())
		} else {
			Err(errors)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("AB", false)]
	#[case("ABC", true)]
	#[case("äöü", true)]
	fn test_min_len_counts_chars(#[case] input: &str, #[case] ok: bool) {
		let rule = StringRule::new().min_len(3);
		assert_eq!(rule.validate(&Value::from(input)).is_ok(), ok);
	}

	#[rstest]
	fn test_collects_all_failures_in_order() {
		let rule = StringRule::new()
			.min_len(5)
			.message("too short")
			.email()
			.message("invalid email address");
		let err = rule.validate(&Value::from("ab")).unwrap_err();
		assert_eq!(err.messages(), vec!["too short", "invalid email address"]);
	}

	#[rstest]
	#[case("valid@email.com", true)]
	#[case("invalid-email", false)]
	#[case("a b@c.de", false)]
	fn test_email(#[case] input: &str, #[case] ok: bool) {
		let rule = StringRule::new().email();
		assert_eq!(rule.validate(&Value::from(input)).is_ok(), ok);
	}

	#[rstest]
	fn test_type_mismatch_message() {
		let err = StringRule::new().validate(&Value::Number(1.0)).unwrap_err();
		assert_eq!(err.first_message(), Some("Expected string, received number"));

		let err = StringRule::new()
			.message("name is required")
			.validate(&Value::Null)
			.unwrap_err();
		assert_eq!(err.first_message(), Some("name is required"));
	}

	#[rstest]
	fn test_trim_applies_before_checks() {
		let rule = StringRule::new().trim().non_empty();
		assert!(rule.validate(&Value::from("   ")).is_err());
		assert_eq!(rule.validate(&Value::from(" x ")).unwrap(), "x");
	}

	#[rstest]
	#[case("https://example.com/path?q=1", true)]
	#[case("ftp://example.com", false)]
	fn test_url(#[case] input: &str, #[case] ok: bool) {
		assert_eq!(StringRule::new().url().validate(&Value::from(input)).is_ok(), ok);
	}
}
