//! Binding errors.

/// A field component used outside the scope it belongs to.
///
/// These are programmer errors: they are returned when a component is bound,
/// never while handling user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
	/// Bound without an enclosing `Form`.
	#[error("{component} for field `{field}` must be inside the Form component")]
	OutsideForm {
		component: &'static str,
		field: String,
	},
	/// Bound inside a `Form` created by a different form binding.
	#[error("{component} for field `{field}` belongs to a different form binding than its Form")]
	ForeignScope {
		component: &'static str,
		field: String,
	},
}

impl ConfigurationError {
	/// Returns the field name of the offending component.
	pub fn field(&self) -> &str {
		match self {
			ConfigurationError::OutsideForm { field, .. }
			| ConfigurationError::ForeignScope { field, .. } => field,
		}
	}
}
