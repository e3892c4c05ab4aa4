//! Events delivered to bound controls.
//!
//! A [`FieldEvent`] carries a snapshot of the control that fired it (its
//! name, kind, current text, checked state, and selected files) plus a shared
//! "default prevented" flag. Clones of an event refer to the same flag, so a
//! callback observing a clone sees what the handler already did.

use schemaform_core::FileList;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// The `type` attribute of an `<input>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputType {
	#[default]
	Text,
	Email,
	Password,
	Number,
	Checkbox,
	Radio,
	File,
	/// Any other type, kept verbatim.
	Other(String),
}

impl InputType {
	pub fn as_str(&self) -> &str {
		match self {
			InputType::Text => "text",
			InputType::Email => "email",
			InputType::Password => "password",
			InputType::Number => "number",
			InputType::Checkbox => "checkbox",
			InputType::Radio => "radio",
			InputType::File => "file",
			InputType::Other(other) => other,
		}
	}

	/// Returns `true` for controls whose value only counts when checked.
	pub fn is_checkable(&self) -> bool {
		matches!(self, InputType::Checkbox | InputType::Radio)
	}
}

impl From<&str> for InputType {
	fn from(s: &str) -> Self {
		match s.to_ascii_lowercase().as_str() {
			"text" => InputType::Text,
			"email" => InputType::Email,
			"password" => InputType::Password,
			"number" => InputType::Number,
			"checkbox" => InputType::Checkbox,
			"radio" => InputType::Radio,
			"file" => InputType::File,
			other => InputType::Other(other.to_string()),
		}
	}
}

impl fmt::Display for InputType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The kind of control an event came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
	Input(InputType),
	Textarea,
}

impl Default for ControlKind {
	fn default() -> Self {
		ControlKind::Input(InputType::Text)
	}
}

/// Snapshot of the control an event targets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventTarget {
	/// The control's `name` attribute.
	pub name: String,
	pub control: ControlKind,
	/// The control's current text value.
	pub value: String,
	pub checked: bool,
	/// Selected files; `None` for controls without a file list.
	pub files: Option<FileList>,
}

impl EventTarget {
	/// Creates a target for a text input named `name`.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	pub fn with_control(mut self, control: ControlKind) -> Self {
		self.control = control;
		self
	}

	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.value = value.into();
		self
	}

	pub fn with_checked(mut self, checked: bool) -> Self {
		self.checked = checked;
		self
	}

	pub fn with_files(mut self, files: impl Into<FileList>) -> Self {
		self.files = Some(files.into());
		self
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
	Blur,
	Change,
	Submit,
}

/// An event delivered to a form component.
#[derive(Clone)]
pub struct FieldEvent {
	kind: EventKind,
	target: EventTarget,
	default_prevented: Rc<Cell<bool>>,
}

impl FieldEvent {
	pub fn new(kind: EventKind, target: EventTarget) -> Self {
		Self {
			kind,
			target,
			default_prevented: Rc::new(Cell::new(false)),
		}
	}

	pub fn blur(target: EventTarget) -> Self {
		Self::new(EventKind::Blur, target)
	}

	pub fn change(target: EventTarget) -> Self {
		Self::new(EventKind::Change, target)
	}

	pub fn submit(target: EventTarget) -> Self {
		Self::new(EventKind::Submit, target)
	}

	pub fn kind(&self) -> EventKind {
		self.kind
	}

	pub fn target(&self) -> &EventTarget {
		&self.target
	}

	/// Suppresses the host's default action for this event.
	pub fn prevent_default(&self) {
		self.default_prevented.set(true);
	}

	pub fn is_default_prevented(&self) -> bool {
		self.default_prevented.get()
	}
}

impl fmt::Debug for FieldEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldEvent")
			.field("kind", &self.kind)
			.field("target", &self.target)
			.field("default_prevented", &self.default_prevented.get())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("checkbox", InputType::Checkbox)]
	#[case("FILE", InputType::File)]
	#[case("date", InputType::Other("date".into()))]
	fn test_input_type_from_str(#[case] raw: &str, #[case] expected: InputType) {
		assert_eq!(InputType::from(raw), expected);
	}

	#[rstest]
	fn test_clones_share_default_prevented() {
		let event = FieldEvent::blur(EventTarget::new("name"));
		let observed = event.clone();
		event.prevent_default();
		assert!(observed.is_default_prevented());
	}
}
