//! Input values handed to rules.
//!
//! A [`Value`] is what a rule validates. Form controls produce text, file
//! handles, or file lists; the fetcher produces values decoded from JSON.
//! Both sides meet in the same enum so one rule can serve either.

use indexmap::IndexMap;
use std::fmt;

/// Error raised when a [`Value`] cannot be represented as JSON.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
	/// File handles have no JSON form.
	#[error("file values cannot be converted to JSON")]
	FileNotRepresentable,
	/// JSON numbers cannot hold NaN or infinities.
	#[error("non-finite number {0} cannot be converted to JSON")]
	NonFiniteNumber(f64),
}

/// A browser-style file handle.
///
/// Mirrors what a file control exposes for each selected file: a name, a
/// MIME type, and the raw contents.
#[derive(Clone, PartialEq, Eq)]
pub struct File {
	name: String,
	mime_type: String,
	contents: Vec<u8>,
}

impl File {
	/// Creates a file handle.
	///
	/// # Examples
	///
	/// ```
	/// use schemaform_core::File;
	///
	/// let file = File::new("avatar.png", "image/png", b"foo".to_vec());
	/// assert_eq!(file.size(), 3);
	/// assert!(file.mime_type().starts_with("image/"));
	/// ```
	pub fn new(
		name: impl Into<String>,
		mime_type: impl Into<String>,
		contents: impl Into<Vec<u8>>,
	) -> Self {
		Self {
			name: name.into(),
			mime_type: mime_type.into(),
			contents: contents.into(),
		}
	}

	/// Creates a zero-byte file with no name and no type.
	///
	/// This is what a browser reports for an empty selection slot.
	pub fn empty() -> Self {
		Self::new("", "", Vec::new())
	}

	/// Returns the file name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the MIME type (may be empty).
	pub fn mime_type(&self) -> &str {
		&self.mime_type
	}

	/// Returns the raw contents.
	pub fn contents(&self) -> &[u8] {
		&self.contents
	}

	/// Returns the size in bytes.
	pub fn size(&self) -> usize {
		self.contents.len()
	}
}

impl fmt::Debug for File {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("File")
			.field("name", &self.name)
			.field("mime_type", &self.mime_type)
			.field("size", &self.contents.len())
			.finish()
	}
}

/// The raw, ordered file list exposed by a file control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
	files: Vec<File>,
}

impl FileList {
	/// Creates an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the number of files.
	pub fn len(&self) -> usize {
		self.files.len()
	}

	/// Returns `true` if no file is selected.
	pub fn is_empty(&self) -> bool {
		self.files.is_empty()
	}

	/// Returns the file at `index`, if any.
	pub fn item(&self, index: usize) -> Option<&File> {
		self.files.get(index)
	}

	/// Iterates over the files in selection order.
	pub fn iter(&self) -> std::slice::Iter<'_, File> {
		self.files.iter()
	}

	/// Consumes the list, returning the files in selection order.
	pub fn into_vec(self) -> Vec<File> {
		self.files
	}
}

impl From<Vec<File>> for FileList {
	fn from(files: Vec<File>) -> Self {
		Self { files }
	}
}

impl FromIterator<File> for FileList {
	fn from_iter<I: IntoIterator<Item = File>>(iter: I) -> Self {
		Self {
			files: iter.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a FileList {
	type Item = &'a File;
	type IntoIter = std::slice::Iter<'a, File>;

	fn into_iter(self) -> Self::IntoIter {
		self.files.iter()
	}
}

/// A value submitted to a rule.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
	/// No value. Also the "no file" sentinel for single-file fields.
	#[default]
	Null,
	/// A boolean.
	Bool(bool),
	/// A number.
	Number(f64),
	/// Text, as read from a form control or a JSON string.
	Text(String),
	/// An ordered sequence.
	Array(Vec<Value>),
	/// An ordered map of named values.
	Object(IndexMap<String, Value>),
	/// A single file handle.
	File(File),
	/// The raw file list of a file control.
	FileList(FileList),
}

impl Value {
	/// Returns a short name for the variant, used in type-mismatch messages.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Bool(_) => "boolean",
			Value::Number(_) => "number",
			Value::Text(_) => "string",
			Value::Array(_) => "array",
			Value::Object(_) => "object",
			Value::File(_) => "file",
			Value::FileList(_) => "file list",
		}
	}

	/// Returns `true` for [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Returns the text, if this is [`Value::Text`].
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Value::Text(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the number, if this is [`Value::Number`].
	pub fn as_number(&self) -> Option<f64> {
		match self {
			Value::Number(n) => Some(*n),
			_ => None,
		}
	}

	/// Returns the file, if this is [`Value::File`].
	pub fn as_file(&self) -> Option<&File> {
		match self {
			Value::File(f) => Some(f),
			_ => None,
		}
	}

	/// Converts this value into JSON.
	///
	/// Files have no JSON form and yield [`ValueError::FileNotRepresentable`].
	pub fn to_json(&self) -> Result<serde_json::Value, ValueError> {
		Ok(match self {
			Value::Null => serde_json::Value::Null,
			Value::Bool(b) => serde_json::Value::Bool(*b),
			Value::Number(n) => number_to_json(*n)?,
			Value::Text(s) => serde_json::Value::String(s.clone()),
			Value::Array(items) => serde_json::Value::Array(
				items
					.iter()
					.map(Value::to_json)
					.collect::<Result<Vec<_>, _>>()?,
			),
			Value::Object(map) => {
				let mut out = serde_json::Map::with_capacity(map.len());
				for (key, value) in map {
					out.insert(key.clone(), value.to_json()?);
				}
				serde_json::Value::Object(out)
			}
			Value::File(_) | Value::FileList(_) => return Err(ValueError::FileNotRepresentable),
		})
	}
}

// Integral values go back out as JSON integers so `1` round-trips as `1`, not `1.0`.
fn number_to_json(n: f64) -> Result<serde_json::Value, ValueError> {
	if !n.is_finite() {
		return Err(ValueError::NonFiniteNumber(n));
	}
	if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
		return Ok(serde_json::Value::from(n as i64));
	}
	serde_json::Number::from_f64(n)
		.map(serde_json::Value::Number)
		.ok_or(ValueError::NonFiniteNumber(n))
}

impl From<serde_json::Value> for Value {
	fn from(json: serde_json::Value) -> Self {
		match json {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(b) => Value::Bool(b),
			serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
			serde_json::Value::String(s) => Value::Text(s),
			serde_json::Value::Array(items) => {
				Value::Array(items.into_iter().map(Value::from).collect())
			}
			serde_json::Value::Object(map) => Value::Object(
				map.into_iter()
					.map(|(key, value)| (key, Value::from(value)))
					.collect(),
			),
		}
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Value::Text(s.to_string())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Value::Text(s)
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Value::Bool(b)
	}
}

impl From<f64> for Value {
	fn from(n: f64) -> Self {
		Value::Number(n)
	}
}

impl From<i64> for Value {
	fn from(n: i64) -> Self {
		Value::Number(n as f64)
	}
}

impl From<File> for Value {
	fn from(file: File) -> Self {
		Value::File(file)
	}
}

impl From<FileList> for Value {
	fn from(list: FileList) -> Self {
		Value::FileList(list)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(items: Vec<T>) -> Self {
		Value::Array(items.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Value::Null, Into::into)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_json_object_converts_members() {
		let value = Value::from(json!({"name": "foo", "tags": ["a"]}));
		let Value::Object(map) = &value else {
			panic!("expected object, got {:?}", value);
		};
		assert_eq!(map.get("name"), Some(&Value::Text("foo".into())));
		assert_eq!(
			map.get("tags"),
			Some(&Value::Array(vec![Value::Text("a".into())]))
		);
	}

	#[rstest]
	fn test_integral_numbers_return_as_integers() {
		let value = Value::from(json!({"id": 1, "ratio": 0.5}));
		assert_eq!(value.to_json().unwrap(), json!({"id": 1, "ratio": 0.5}));
	}

	#[rstest]
	fn test_file_has_no_json_form() {
		let value = Value::File(File::new("a.txt", "text/plain", b"a".to_vec()));
		assert_eq!(value.to_json(), Err(ValueError::FileNotRepresentable));
	}

	#[rstest]
	#[case(Value::Null, "null")]
	#[case(Value::Text("x".into()), "string")]
	#[case(Value::FileList(FileList::new()), "file list")]
	fn test_kind_names(#[case] value: Value, #[case] expected: &str) {
		assert_eq!(value.kind(), expected);
	}

	#[rstest]
	fn test_file_debug_hides_contents() {
		let file = File::new("a.bin", "application/octet-stream", vec![0u8; 4]);
		let debug = format!("{:?}", file);
		assert!(debug.contains("size: 4"));
		assert!(!debug.contains("contents"));
	}
}
