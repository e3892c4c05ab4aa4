//! Field validation dispatch shared by inputs and textareas.

use super::scope::FormScope;
use crate::callback::Callback;
use crate::event::{ControlKind, EventTarget, FieldEvent, InputType};
use schemaform_core::{FileList, Shape, Value};
use tracing::{debug, trace};

/// Caller callbacks attached to a field component.
#[derive(Debug, Clone, Default)]
pub(crate) struct FieldHandlers {
	pub(crate) on_blur: Option<Callback>,
	pub(crate) on_change: Option<Callback>,
}

impl FieldHandlers {
	/// Validates unconditionally, then runs the caller's blur callback.
	pub(crate) fn blur(&self, scope: &FormScope, event: &FieldEvent) {
		event.prevent_default();
		validate_target(scope, event.target());
		if let Some(on_blur) = &self.on_blur {
			on_blur.call(event.clone());
		}
	}

	/// Revalidates only a field that currently holds an error, then runs the
	/// caller's change callback.
	pub(crate) fn change(&self, scope: &FormScope, event: &FieldEvent) {
		event.prevent_default();
		let name = &event.target().name;
		if scope.has_error(name) {
			validate_target(scope, event.target());
		} else {
			trace!(field = %name, "change without stored error; not revalidating");
		}
		if let Some(on_change) = &self.on_change {
			on_change.call(event.clone());
		}
	}
}

/// Validates the control described by `target` and updates `scope`.
///
/// Fields the schema does not declare are left alone. On failure only the
/// first message is stored; a failure without messages changes nothing.
pub(crate) fn validate_target(scope: &FormScope, target: &EventTarget) {
	let Some(rule) = scope.schema().get(&target.name) else {
		debug!(field = %target.name, "field not declared in schema; skipping validation");
		return;
	};

	let value = match (&target.control, &target.files) {
		(ControlKind::Input(InputType::File), Some(files)) => {
			select_file_value(files, rule.expected_shape())
		}
		(ControlKind::Input(input_type), _) if input_type.is_checkable() => {
			if !target.checked {
				trace!(field = %target.name, "unchecked {}; not validating", input_type);
				return;
			}
			Value::Text(target.value.clone())
		}
		_ => Value::Text(target.value.clone()),
	};

	match rule.check(&value) {
		Ok(()) => scope.clear_error(&target.name),
		Err(err) => match err.first_message() {
			Some(message) => scope.record_error(&target.name, message),
			None => debug!(field = %target.name, "validation failed without a message"),
		},
	}
}

/// Hands a file selection over in the shape the rule expects.
pub(crate) fn select_file_value(files: &FileList, shape: Shape) -> Value {
	match shape {
		Shape::MultiFile => Value::Array(files.iter().cloned().map(Value::File).collect()),
		Shape::SingleFile => files.item(0).cloned().map_or(Value::Null, Value::File),
		Shape::Scalar => Value::FileList(files.clone()),
	}
}
