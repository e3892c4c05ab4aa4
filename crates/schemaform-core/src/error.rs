//! Structured validation failures.

use std::fmt;

/// A single failed check.
///
/// `path` locates the offending value inside nested data (empty for the
/// value passed to the rule itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
	/// Keys and indices leading to the offending value.
	pub path: Vec<String>,
	/// Human-readable message.
	pub message: String,
}

impl Issue {
	/// Creates an issue at the root of the validated value.
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			path: Vec::new(),
			message: message.into(),
		}
	}

	/// Returns the path joined with dots, e.g. `items.0.name`.
	pub fn dotted_path(&self) -> String {
		self.path.join(".")
	}
}

impl fmt::Display for Issue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.path.is_empty() {
			write!(f, "{}", self.message)
		} else {
			write!(f, "{}: {}", self.dotted_path(), self.message)
		}
	}
}

/// Failure returned by a rule: an ordered list of issues.
///
/// Rules never produce an empty list themselves, but the type allows it so a
/// custom rule may fail without a message. Consumers reading the first message
/// must treat `None` as "nothing to show".
#[derive(Debug, Clone, PartialEq, Eq, Default, thiserror::Error)]
#[error("{}", summarize(.issues))]
pub struct ValidationError {
	issues: Vec<Issue>,
}

impl ValidationError {
	/// Creates an error holding a single root-level message.
	///
	/// # Examples
	///
	/// ```
	/// use schemaform_core::ValidationError;
	///
	/// let err = ValidationError::new("Name must be at least 3 characters");
	/// assert_eq!(err.first_message(), Some("Name must be at least 3 characters"));
	/// ```
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			issues: vec![Issue::new(message)],
		}
	}

	/// Creates an error from a list of issues.
	pub fn from_issues(issues: Vec<Issue>) -> Self {
		Self { issues }
	}

	/// Returns the issues in the order checks failed.
	pub fn issues(&self) -> &[Issue] {
		&self.issues
	}

	/// Returns the messages in order.
	pub fn messages(&self) -> Vec<&str> {
		self.issues.iter().map(|i| i.message.as_str()).collect()
	}

	/// Returns the first message, if any.
	pub fn first_message(&self) -> Option<&str> {
		self.issues.first().map(|i| i.message.as_str())
	}

	/// Returns `true` if there are no issues.
	pub fn is_empty(&self) -> bool {
		self.issues.is_empty()
	}

	/// Appends an issue.
	pub fn push(&mut self, issue: Issue) {
		self.issues.push(issue);
	}

	/// Appends every issue of `other`.
	pub fn extend(&mut self, other: ValidationError) {
		self.issues.extend(other.issues);
	}

	/// Prefixes every issue path with `segment`.
	///
	/// Used by container rules when reporting failures of their members.
	pub fn prefixed(mut self, segment: impl Into<String>) -> Self {
		let segment = segment.into();
		for issue in &mut self.issues {
			issue.path.insert(0, segment.clone());
		}
		self
	}
}

fn summarize(issues: &[Issue]) -> String {
	match issues {
		[] => "validation failed".to_string(),
		[only] => format!("validation failed: {}", only),
		many => format!(
			"validation failed with {} issues: {}",
			many.len(),
			many.iter()
				.map(Issue::to_string)
				.collect::<Vec<_>>()
				.join("; ")
		),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_prefixed_nests_paths() {
		let err = ValidationError::new("Expected number")
			.prefixed("id")
			.prefixed("0");
		assert_eq!(err.issues()[0].dotted_path(), "0.id");
		assert_eq!(err.to_string(), "validation failed: 0.id: Expected number");
	}

	#[rstest]
	fn test_display_many_issues() {
		let mut err = ValidationError::new("first");
		err.push(Issue::new("second"));
		assert_eq!(
			err.to_string(),
			"validation failed with 2 issues: first; second"
		);
		assert_eq!(err.messages(), vec!["first", "second"]);
	}

	#[rstest]
	fn test_empty_error_has_no_first_message() {
		let err = ValidationError::from_issues(Vec::new());
		assert!(err.is_empty());
		assert_eq!(err.first_message(), None);
	}
}
