//! Per-form validation state and the handle that carries it.

use super::family::FamilyId;
use indexmap::IndexMap;
use schemaform_core::Schema;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Current error message per field.
///
/// A field with no entry has no error; clearing an error removes the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState {
	errors: IndexMap<String, String>,
}

impl ValidationState {
	pub fn get(&self, name: &str) -> Option<&str> {
		self.errors.get(name).map(String::as_str)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.errors.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	/// Iterates over `(field, message)` in the order errors were first recorded.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	fn set(&mut self, name: &str, message: &str) {
		self.errors.insert(name.to_string(), message.to_string());
	}

	fn remove(&mut self, name: &str) -> Option<String> {
		self.errors.shift_remove(name)
	}
}

/// Handle to the validation state of one mounted form.
///
/// Created by `Form::mount` and handed to every descendant; clones refer to
/// the same state.
#[derive(Clone)]
pub struct FormScope {
	inner: Rc<ScopeInner>,
}

struct ScopeInner {
	family: FamilyId,
	schema: Arc<Schema>,
	state: RefCell<ValidationState>,
}

impl FormScope {
	pub(crate) fn new(family: FamilyId, schema: Arc<Schema>) -> Self {
		Self {
			inner: Rc::new(ScopeInner {
				family,
				schema,
				state: RefCell::new(ValidationState::default()),
			}),
		}
	}

	/// The family whose `Form` created this scope.
	pub fn family(&self) -> FamilyId {
		self.inner.family
	}

	pub fn schema(&self) -> &Schema {
		&self.inner.schema
	}

	/// Returns the stored error for `name`.
	pub fn error(&self, name: &str) -> Option<String> {
		self.inner.state.borrow().get(name).map(str::to_string)
	}

	pub fn has_error(&self, name: &str) -> bool {
		self.inner.state.borrow().contains(name)
	}

	/// Returns a snapshot of the whole state.
	pub fn errors(&self) -> ValidationState {
		self.inner.state.borrow().clone()
	}

	pub fn is_valid(&self) -> bool {
		self.inner.state.borrow().is_empty()
	}

	/// Returns `true` if both handles refer to the same mounted form.
	pub fn same_scope(&self, other: &FormScope) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}

	pub(crate) fn record_error(&self, name: &str, message: &str) {
		tracing::trace!(field = name, message, "recording field error");
		self.inner.state.borrow_mut().set(name, message);
	}

	pub(crate) fn clear_error(&self, name: &str) {
		if self.inner.state.borrow_mut().remove(name).is_some() {
			tracing::trace!(field = name, "cleared field error");
		}
	}
}

impl fmt::Debug for FormScope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormScope")
			.field("family", &self.inner.family)
			.field("state", &self.inner.state.borrow())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn scope() -> FormScope {
		crate::form::create_form_binding(Schema::builder().build())
			.form()
			.mount()
			.unwrap()
			.scope()
			.clone()
	}

	#[rstest]
	fn test_clearing_removes_the_key(scope: FormScope) {
		scope.record_error("name", "too short");
		assert_eq!(scope.error("name").as_deref(), Some("too short"));
		assert!(!scope.is_valid());

		scope.clear_error("name");
		assert!(!scope.errors().contains("name"));
		assert!(scope.is_valid());
	}

	#[rstest]
	fn test_clones_share_state(scope: FormScope) {
		let other = scope.clone();
		other.record_error("email", "invalid");
		assert!(scope.has_error("email"));
		assert!(scope.same_scope(&other));
	}
}
