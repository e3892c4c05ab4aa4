//! File rules.

use super::{Check, type_mismatch};
use crate::error::{Issue, ValidationError};
use crate::rule::{Rule, Shape};
use crate::value::{File, Value};

#[derive(Debug, Clone)]
enum FileCheck {
	NonEmpty,
	MaxSize(usize),
	MimePrefix(String),
}

fn run_file_checks(checks: &[Check<FileCheck>], file: &File) -> Vec<Issue> {
	checks
		.iter()
		.filter_map(|check| {
			let failed = match &check.kind {
				FileCheck::NonEmpty => file.size() == 0,
				FileCheck::MaxSize(max) => file.size() > *max,
				FileCheck::MimePrefix(prefix) => !file.mime_type().starts_with(prefix.as_str()),
			};
			failed.then(|| {
				Issue::new(check.message_or(|| match &check.kind {
					FileCheck::NonEmpty => "The submitted file is empty".to_string(),
					FileCheck::MaxSize(max) => {
						format!("File is too large (max {} bytes)", max)
					}
					FileCheck::MimePrefix(prefix) => format!("File type must be {}*", prefix),
				}))
			})
		})
		.collect()
}

/// Validates a single file. Output: [`File`]. Advertises [`Shape::SingleFile`].
///
/// The "no file" sentinel ([`Value::Null`]) fails the type check.
#[derive(Debug, Clone, Default)]
pub struct FileRule {
	checks: Vec<Check<FileCheck>>,
	type_message: Option<String>,
}

impl FileRule {
	/// Creates a rule accepting any file.
	pub fn new() -> Self {
		Self::default()
	}

	/// Rejects zero-byte files.
	pub fn non_empty(mut self) -> Self {
		self.checks.push(Check::new(FileCheck::NonEmpty));
		self
	}

	/// Rejects files larger than `bytes`.
	pub fn max_size(mut self, bytes: usize) -> Self {
		self.checks.push(Check::new(FileCheck::MaxSize(bytes)));
		self
	}

	/// Requires a MIME type starting with `prefix` (e.g. `"image/"`).
	pub fn mime_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.checks.push(Check::new(FileCheck::MimePrefix(prefix.into())));
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
}

impl Rule for FileRule {
	type Output = File;

	fn validate(&self, value: &Value) -> Result<File, ValidationError> {
		let Value::File(file) = value else {
			return Err(type_mismatch("file", value, self.type_message.as_deref()));
		};
		let issues = run_file_checks(&self.checks, file);
		if issues.is_empty() {
			Ok(file.clone())
		} else {
			Err(ValidationError::from_issues(issues))
		}
	}

	fn shape(&self) -> Shape {
		Shape::SingleFile
	}
}

/// Validates an ordered sequence of files. Output: `Vec<File>`.
/// Advertises [`Shape::MultiFile`].
///
/// Accepts an array of file values or a raw file list.
#[derive(Debug, Clone, Default)]
pub struct FileListRule {
	min_count: Option<Check<usize>>,
	max_count: Option<Check<usize>>,
	each: Vec<Check<FileCheck>>,
	last: Option<Slot>,
	type_message: Option<String>,
}

#[derive(Debug, Clone, Copy)]
enum Slot {
	Min,
	Max,
	Each,
}

impl FileListRule {
	/// Creates a rule accepting any number of files.
	pub fn new() -> Self {
		Self::default()
	}

	/// Requires at least `n` files.
	pub fn min_count(mut self, n: usize) -> Self {
		self.min_count = Some(Check::new(n));
		self.last = Some(Slot::Min);
		self
	}

	/// Allows at most `n` files.
	pub fn max_count(mut self, n: usize) -> Self {
		self.max_count = Some(Check::new(n));
		self.last = Some(Slot::Max);
		self
	}

	/// Rejects zero-byte files.
	pub fn each_non_empty(mut self) -> Self {
		self.each.push(Check::new(FileCheck::NonEmpty));
		self.last = Some(Slot::Each);
		self
	}

	/// Rejects files larger than `bytes`.
	pub fn each_max_size(mut self, bytes: usize) -> Self {
		self.each.push(Check::new(FileCheck::MaxSize(bytes)));
		self.last = Some(Slot::Each);
		self
	}

	/// Requires every MIME type to start with `prefix`.
	pub fn each_mime_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.each
			.push(Check::new(FileCheck::MimePrefix(prefix.into())));
		self.last = Some(Slot::Each);
		self
	}

	/// Replaces the message of the most recently added check.
	pub fn message(mut self, message: impl Into<String>) -> Self {
		let message = Some(message.into());
		match self.last {
			Some(Slot::Min) => {
				if let Some(check) = self.min_count.as_mut() {
					check.message = message;
				}
			}
			Some(Slot::Max) => {
				if let Some(check) = self.max_count.as_mut() {
					check.message = message;
				}
			}
			Some(Slot::Each) => {
				if let Some(check) = self.each.last_mut() {
					check.message = message;
				}
			}
			None => self.type_message = message,
		}
		self
	}

	fn read(value: &Value) -> Option<Vec<File>> {
		match value {
			Value::FileList(list) => Some(list.iter().cloned().collect()),
			Value::Array(items) => items
				.iter()
				.map(|item| item.as_file().cloned())
				.collect::<Option<Vec<_>>>(),
			_ => None,
		}
	}
}

impl Rule for FileListRule {
	type Output = Vec<File>;

	fn validate(&self, value: &Value) -> Result<Vec<File>, ValidationError> {
		let files = Self::read(value)
			.ok_or_else(|| type_mismatch("array of files", value, self.type_message.as_deref()))?;

		let mut errors = ValidationError::default();
		if let Some(check) = &self.min_count
			&& files.len() < check.kind
		{
			errors.push(Issue::new(check.message_or(|| {
				format!("Select at least {} file(s)", check.kind)
			})));
		}
		if let Some(check) = &self.max_count
			&& files.len() > check.kind
		{
			errors.push(Issue::new(check.message_or(|| {
				format!("Select at most {} file(s)", check.kind)
			})));
		}
		for (index, file) in files.iter().enumerate() {
			let issues = run_file_checks(&self.each, file);
			if !issues.is_empty() {
				errors.extend(ValidationError::from_issues(issues).prefixed(index.to_string()));
			}
		}

		if errors.is_empty() {
			Ok(files)
		} else {
			Err(errors)
		}
	}

	fn shape(&self) -> Shape {
		Shape::MultiFile
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::FileList;
	use rstest::rstest;

	fn png() -> File {
		File::new("valid-image.png", "image/png", b"foo".to_vec())
	}

	fn pdf() -> File {
		File::new("invalid.pdf", "application/pdf", b"PDF content".to_vec())
	}

	#[rstest]
	fn test_single_file_checks_run_in_order() {
		let rule = FileRule::new()
			.non_empty()
			.message("Image is required")
			.mime_prefix("image/")
			.message("Must be an image");

		assert_eq!(rule.validate(&Value::File(png())).unwrap(), png());

		let err = rule.validate(&Value::File(File::empty())).unwrap_err();
		assert_eq!(err.messages(), vec!["Image is required", "Must be an image"]);

		let err = rule.validate(&Value::File(pdf())).unwrap_err();
		assert_eq!(err.first_message(), Some("Must be an image"));
	}

	#[rstest]
	fn test_single_file_rejects_no_file_sentinel() {
		let err = FileRule::new().validate(&Value::Null).unwrap_err();
		assert_eq!(err.first_message(), Some("Expected file, received null"));
		assert_eq!(FileRule::new().shape(), Shape::SingleFile);
	}

	#[rstest]
	fn test_file_list_accepts_array_and_raw_list() {
		let rule = FileListRule::new().min_count(1);
		let array = Value::Array(vec![Value::File(png()), Value::File(pdf())]);
		assert_eq!(rule.validate(&array).unwrap(), vec![png(), pdf()]);

		let raw = Value::FileList(FileList::from(vec![png()]));
		assert_eq!(rule.validate(&raw).unwrap(), vec![png()]);
		assert_eq!(rule.shape(), Shape::MultiFile);
	}

	#[rstest]
	fn test_file_list_reports_element_paths() {
		let rule = FileListRule::new()
			.each_mime_prefix("image/")
			.message("Must be an image");
		let value = Value::Array(vec![Value::File(png()), Value::File(pdf())]);
		let err = rule.validate(&value).unwrap_err();
		assert_eq!(err.issues()[0].dotted_path(), "1");
		assert_eq!(err.first_message(), Some("Must be an image"));
	}

	#[rstest]
	fn test_file_list_counts() {
		let rule = FileListRule::new()
			.min_count(1)
			.message("Pick a file")
			.max_count(2);
		let err = rule.validate(&Value::Array(Vec::new())).unwrap_err();
		assert_eq!(err.first_message(), Some("Pick a file"));

		let three = Value::Array(vec![Value::File(png()); 3]);
		let err = rule.validate(&three).unwrap_err();
		assert_eq!(err.first_message(), Some("Select at most 2 file(s)"));
	}
}
