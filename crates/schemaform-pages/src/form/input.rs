//! `<input>` bound to one schema field.

use super::Attributes;
use super::error::ConfigurationError;
use super::family::FamilyId;
use super::scope::FormScope;
use super::validate::FieldHandlers;
use crate::callback::Callback;
use crate::component::{ElementView, IntoView, View};
use crate::event::{ControlKind, EventTarget, FieldEvent, InputType};
use schemaform_core::FileList;
use std::cell::RefCell;

const RESERVED: &[&str] = &["name", "type", "value", "checked"];

/// An unbound `<input>`. Create one with `FormFamily::input`.
#[derive(Debug, Clone)]
pub struct Input {
	family: FamilyId,
	name: String,
	input_type: InputType,
	attrs: Attributes,
	value: String,
	checked: bool,
	handlers: FieldHandlers,
}

impl Input {
	pub(crate) fn new(family: FamilyId, name: impl Into<String>) -> Self {
		Self {
			family,
			name: name.into(),
			input_type: InputType::default(),
			attrs: Attributes::default(),
			value: String::new(),
			checked: false,
			handlers: FieldHandlers::default(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn input_type(mut self, input_type: impl Into<InputType>) -> Self {
		self.input_type = input_type.into();
		self
	}

	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.attrs.set("placeholder", placeholder);
		self
	}

	pub fn required(mut self, required: bool) -> Self {
		self.attrs.toggle("required", required);
		self
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.attrs.toggle("disabled", disabled);
		self
	}

	pub fn multiple(mut self, multiple: bool) -> Self {
		self.attrs.toggle("multiple", multiple);
		self
	}

	/// Sets the file types a file control offers (e.g. `"image/*"`).
	pub fn accept(mut self, accept: impl Into<String>) -> Self {
		self.attrs.set("accept", accept);
		self
	}

	/// Sets any other native attribute. `name`, `type`, `value`, and
	/// `checked` are owned by the binding and ignored when rendering.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.set(name, value);
		self
	}

	/// Sets the initial text value.
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = value.into();
		self
	}

	/// Sets the initial checked state of a checkbox or radio.
	pub fn checked(mut self, checked: bool) -> Self {
		self.checked = checked;
		self
	}

	/// Runs `f` after the blur validation.
	pub fn on_blur(mut self, f: impl Fn(FieldEvent) + 'static) -> Self {
		self.handlers.on_blur = Some(Callback::new(f));
		self
	}

	/// Runs `f` after the change handling.
	pub fn on_change(mut self, f: impl Fn(FieldEvent) + 'static) -> Self {
		self.handlers.on_change = Some(Callback::new(f));
		self
	}

	/// Binds to the scope of the enclosing form.
	///
	/// # Errors
	///
	/// [`ConfigurationError::OutsideForm`] without a scope,
	/// [`ConfigurationError::ForeignScope`] for a scope from another family.
	pub fn bind(self, scope: Option<&FormScope>) -> Result<BoundInput, ConfigurationError> {
		let scope = scope.ok_or_else(|| ConfigurationError::OutsideForm {
			component: "Input",
			field: self.name.clone(),
		})?;
		if scope.family() != self.family {
			return Err(ConfigurationError::ForeignScope {
				component: "Input",
				field: self.name,
			});
		}

		let files = (self.input_type == InputType::File).then(FileList::new);
		Ok(BoundInput {
			scope: scope.clone(),
			control: RefCell::new(ControlState {
				value: self.value,
				checked: self.checked,
				files,
			}),
			name: self.name,
			input_type: self.input_type,
			attrs: self.attrs,
			handlers: self.handlers,
		})
	}
}

#[derive(Debug, Clone)]
struct ControlState {
	value: String,
	checked: bool,
	files: Option<FileList>,
}

/// An `<input>` bound to a mounted form.
///
/// Holds the native control state. The `set_*` methods model user edits and
/// fire a change event; [`BoundInput::blur`] models focus leaving the control.
#[derive(Debug)]
pub struct BoundInput {
	scope: FormScope,
	name: String,
	input_type: InputType,
	attrs: Attributes,
	control: RefCell<ControlState>,
	handlers: FieldHandlers,
}

impl BoundInput {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn input_type(&self) -> &InputType {
		&self.input_type
	}

	pub fn scope(&self) -> &FormScope {
		&self.scope
	}

	pub fn value(&self) -> String {
		self.control.borrow().value.clone()
	}

	pub fn checked(&self) -> bool {
		self.control.borrow().checked
	}

	pub fn files(&self) -> Option<FileList> {
		self.control.borrow().files.clone()
	}

	/// The field's stored error, if any.
	pub fn error(&self) -> Option<String> {
		self.scope.error(&self.name)
	}

	/// Snapshot of the control as an event target.
	pub fn target(&self) -> EventTarget {
		let control = self.control.borrow();
		EventTarget {
			name: self.name.clone(),
			control: ControlKind::Input(self.input_type.clone()),
			value: control.value.clone(),
			checked: control.checked,
			files: control.files.clone(),
		}
	}

	/// Replaces the text value and fires a change event.
	pub fn set_value(&self, value: impl Into<String>) -> FieldEvent {
		self.control.borrow_mut().value = value.into();
		self.fire_change()
	}

	/// Replaces the checked state and fires a change event.
	pub fn set_checked(&self, checked: bool) -> FieldEvent {
		self.control.borrow_mut().checked = checked;
		self.fire_change()
	}

	/// Replaces the file selection and fires a change event.
	pub fn set_files(&self, files: impl Into<FileList>) -> FieldEvent {
		let files: FileList = files.into();
		{
			let mut control = self.control.borrow_mut();
			control.value = files
				.item(0)
				.map(|f| f.name().to_string())
				.unwrap_or_default();
			control.files = Some(files);
		}
		self.fire_change()
	}

	/// Fires a blur event.
	pub fn blur(&self) -> FieldEvent {
		let event = FieldEvent::blur(self.target());
		self.handle_blur(&event);
		event
	}

	pub fn handle_blur(&self, event: &FieldEvent) {
		self.handlers.blur(&self.scope, event);
	}

	pub fn handle_change(&self, event: &FieldEvent) {
		self.handlers.change(&self.scope, event);
	}

	fn fire_change(&self) -> FieldEvent {
		let event = FieldEvent::change(self.target());
		self.handle_change(&event);
		event
	}

	pub fn render(&self) -> View {
		let control = self.control.borrow();
		let mut el = ElementView::new("input")
			.attr("type", self.input_type.as_str().to_string())
			.attr("name", self.name.clone());
		if self.input_type != InputType::File && !control.value.is_empty() {
			el = el.attr("value", control.value.clone());
		}
		if self.input_type.is_checkable() && control.checked {
			el = el.attr("checked", "");
		}
		el.attrs_from(self.attrs.iter_except(RESERVED)).into_view()
	}
}
