//! `<textarea>` bound to one schema field.

use super::Attributes;
use super::error::ConfigurationError;
use super::family::FamilyId;
use super::scope::FormScope;
use super::validate::FieldHandlers;
use crate::callback::Callback;
use crate::component::{ElementView, IntoView, View};
use crate::event::{ControlKind, EventTarget, FieldEvent};
use std::cell::RefCell;

const RESERVED: &[&str] = &["name", "value"];

/// An unbound `<textarea>`. Create one with `FormFamily::textarea`.
#[derive(Debug, Clone)]
pub struct Textarea {
	family: FamilyId,
	name: String,
	attrs: Attributes,
	value: String,
	handlers: FieldHandlers,
}

impl Textarea {
	pub(crate) fn new(family: FamilyId, name: impl Into<String>) -> Self {
		Self {
			family,
			name: name.into(),
			attrs: Attributes::default(),
			value: String::new(),
			handlers: FieldHandlers::default(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.attrs.set("placeholder", placeholder);
		self
	}

	pub fn rows(mut self, rows: u32) -> Self {
		self.attrs.set("rows", rows.to_string());
		self
	}

	pub fn cols(mut self, cols: u32) -> Self {
		self.attrs.set("cols", cols.to_string());
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

	/// Sets any other native attribute. `name` is owned by the binding.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.set(name, value);
		self
	}

	/// Sets the initial text.
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = value.into();
		self
	}

	pub fn on_blur(mut self, f: impl Fn(FieldEvent) + 'static) -> Self {
		self.handlers.on_blur = Some(Callback::new(f));
		self
	}

	pub fn on_change(mut self, f: impl Fn(FieldEvent) + 'static) -> Self {
		self.handlers.on_change = Some(Callback::new(f));
		self
	}

	/// Binds to the scope of the enclosing form.
	///
	/// # Errors
	///
	/// See [`Input::bind`](super::Input::bind).
	pub fn bind(self, scope: Option<&FormScope>) -> Result<BoundTextarea, ConfigurationError> {
		let scope = scope.ok_or_else(|| ConfigurationError::OutsideForm {
			component: "Textarea",
			field: self.name.clone(),
		})?;
		if scope.family() != self.family {
			return Err(ConfigurationError::ForeignScope {
				component: "Textarea",
				field: self.name,
			});
		}
		Ok(BoundTextarea {
			scope: scope.clone(),
			name: self.name,
			attrs: self.attrs,
			value: RefCell::new(self.value),
			handlers: self.handlers,
		})
	}
}

/// A `<textarea>` bound to a mounted form. Always validated as raw text.
#[derive(Debug)]
pub struct BoundTextarea {
	scope: FormScope,
	name: String,
	attrs: Attributes,
	value: RefCell<String>,
	handlers: FieldHandlers,
}

impl BoundTextarea {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn scope(&self) -> &FormScope {
		&self.scope
	}

	pub fn value(&self) -> String {
		self.value.borrow().clone()
	}

	pub fn error(&self) -> Option<String> {
		self.scope.error(&self.name)
	}

	pub fn target(&self) -> EventTarget {
		EventTarget::new(self.name.clone())
			.with_control(ControlKind::Textarea)
			.with_value(self.value.borrow().clone())
	}

	/// Replaces the text and fires a change event.
	pub fn set_value(&self, value: impl Into<String>) -> FieldEvent {
		*self.value.borrow_mut() = value.into();
		let event = FieldEvent::change(self.target());
		self.handle_change(&event);
		event
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

	pub fn render(&self) -> View {
		ElementView::new("textarea")
			.attr("name", self.name.clone())
			.attrs_from(self.attrs.iter_except(RESERVED))
			.child(self.value.borrow().clone())
			.into_view()
	}
}
