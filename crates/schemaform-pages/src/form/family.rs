//! Component families.

use super::component::{Form, Group};
use super::error_message::ErrorMessage;
use super::input::Input;
use super::textarea::Textarea;
use schemaform_core::Schema;
use std::borrow::Cow;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_FAMILY_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one [`create_form_binding`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FamilyId(u64);

impl FamilyId {
	fn next() -> Self {
		Self(NEXT_FAMILY_ID.fetch_add(1, Ordering::Relaxed))
	}
}

/// A `Form` plus the field components bound to one schema.
///
/// Families never share state: components from one family fail to bind
/// inside a form from another, even when both use the same schema.
#[derive(Debug, Clone)]
pub struct FormFamily {
	id: FamilyId,
	schema: Arc<Schema>,
}

/// Creates a component family for `schema`.
pub fn create_form_binding(schema: Schema) -> FormFamily {
	FormFamily::new(schema)
}

impl FormFamily {
	pub fn new(schema: Schema) -> Self {
		let id = FamilyId::next();
		tracing::debug!(family = ?id, fields = schema.len(), "created form binding");
		Self {
			id,
			schema: Arc::new(schema),
		}
	}

	pub fn id(&self) -> FamilyId {
		self.id
	}

	pub fn schema(&self) -> &Schema {
		&self.schema
	}

	/// Starts a `<form>`.
	pub fn form(&self) -> Form {
		Form::new(self.id, Arc::clone(&self.schema))
	}

	/// Starts an `<input>` bound to `name`.
	pub fn input(&self, name: impl Into<String>) -> Input {
		Input::new(self.id, name)
	}

	/// Starts a `<textarea>` bound to `name`.
	pub fn textarea(&self, name: impl Into<String>) -> Textarea {
		Textarea::new(self.id, name)
	}

	/// Starts an error display for `name`.
	pub fn error_message(&self, name: impl Into<String>) -> ErrorMessage {
		ErrorMessage::new(self.id, name)
	}

	/// Starts a plain wrapper element for laying out children.
	pub fn group(&self, tag: impl Into<Cow<'static, str>>) -> Group {
		Group::new(tag)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_each_binding_gets_a_fresh_identity() {
		let schema = Schema::builder().build();
		let a = create_form_binding(schema.clone());
		let b = create_form_binding(schema);
		assert_ne!(a.id(), b.id());
		assert_eq!(a.clone().id(), a.id());
	}
}
