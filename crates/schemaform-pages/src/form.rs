//! Schema-bound form components.
//!
//! [`create_form_binding`] turns a [`Schema`](schemaform_core::Schema) into a
//! [`FormFamily`]: a factory for a `Form` and the field components that
//! validate against that schema. Every mounted `Form` owns exactly one
//! [`ValidationState`], shared with its descendants through an explicit
//! [`FormScope`] handle.
//!
//! ## Architecture
//!
//! ```text
//! create_form_binding(schema)
//!         │
//!         ▼
//!    FormFamily ──▶ Form ─── children: Input / Textarea / ErrorMessage / Group
//!                    │
//!                    │ mount()
//!                    ▼
//!               MountedForm ── FormScope (Rc) ── ValidationState
//!                    │               ▲
//!                    ├─ BoundInput ──┤ blur: validate
//!                    ├─ BoundTextarea┤ change: revalidate if errored
//!                    └─ BoundErrorMessage (reads)
//! ```
//!
//! ## Example
//!
//! ```
//! use schemaform_core::{Schema, rules};
//! use schemaform_pages::create_form_binding;
//!
//! let family = create_form_binding(
//!     Schema::builder()
//!         .field("name", rules::string().min_len(3).message("Name must be at least 3 characters"))
//!         .build(),
//! );
//!
//! let form = family
//!     .form()
//!     .child(family.input("name").placeholder("Name"))
//!     .child(family.error_message("name"))
//!     .mount()
//!     .unwrap();
//!
//! let name = form.input("name").unwrap();
//! name.set_value("AB");
//! name.blur();
//! assert_eq!(form.error("name").as_deref(), Some("Name must be at least 3 characters"));
//!
//! name.set_value("Alice");
//! assert_eq!(form.error("name"), None);
//! ```

mod component;
mod error;
mod error_message;
mod family;
mod input;
mod scope;
mod textarea;
mod validate;

pub use component::{Form, FormChild, Group, MountedChild, MountedForm, MountedGroup};
pub use error::ConfigurationError;
pub use error_message::{
	BoundErrorMessage, ERROR_MESSAGE_STYLESHEET, ErrorMessage, ErrorVariant, Position,
};
pub use family::{FamilyId, FormFamily, create_form_binding};
pub use input::{BoundInput, Input};
pub use scope::{FormScope, ValidationState};
pub use textarea::{BoundTextarea, Textarea};

/// Ordered native attributes. Setting an existing name replaces it in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Attributes(Vec<(String, String)>);

impl Attributes {
	pub(crate) fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		match self.0.iter_mut().find(|(k, _)| *k == name) {
			Some(slot) => slot.1 = value,
			None => self.0.push((name, value)),
		}
	}

	/// Sets `name` as a boolean attribute, or removes it.
	pub(crate) fn toggle(&mut self, name: &str, on: bool) {
		if on {
			self.set(name, "");
		} else {
			self.0.retain(|(k, _)| k != name);
		}
	}

	pub(crate) fn get(&self, name: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|(k, _)| k == name)
			.map(|(_, v)| v.as_str())
	}

	/// Iterates in insertion order, skipping the attributes a binding owns.
	pub(crate) fn iter_except<'a>(
		&'a self,
		reserved: &'a [&'a str],
	) -> impl Iterator<Item = (String, String)> + 'a {
		self.0
			.iter()
			.filter(move |(k, _)| !reserved.contains(&k.as_str()))
			.cloned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_attributes_replace_in_place() {
		let mut attrs = Attributes::default();
		attrs.set("id", "a");
		attrs.set("class", "x");
		attrs.set("id", "b");
		attrs.toggle("required", true);
		let collected: Vec<_> = attrs.iter_except(&["class"]).collect();
		assert_eq!(
			collected,
			vec![
				("id".to_string(), "b".to_string()),
				("required".to_string(), String::new())
			]
		);
		attrs.toggle("required", false);
		assert_eq!(attrs.get("required"), None);
	}
}
