//! The rule capability.
//!
//! A [`Rule`] validates a [`Value`] and either returns the parsed output or a
//! [`ValidationError`]. Rules may also advertise the [`Shape`] of input they
//! expect, which form bindings use to decide how raw file selections are
//! handed over.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  blanket impl  ┌───────────────┐
//! │ Rule<Output> │ ─────────────▶ │ dyn FieldRule │ ──▶ Schema (heterogeneous)
//! └──────────────┘                └───────────────┘
//!        │
//!        └──▶ fetch_validated (typed Output)
//! ```

use crate::error::ValidationError;
use crate::rules::{Optional, Refine, Typed};
use crate::value::Value;
use serde::de::DeserializeOwned;

/// Expected input shape advertised by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shape {
	/// Text, number, boolean, or structured data.
	#[default]
	Scalar,
	/// One file (or the "no file" sentinel).
	SingleFile,
	/// An ordered sequence of files.
	MultiFile,
}

/// Validates a value and produces a typed output.
pub trait Rule: Send + Sync {
	/// The parsed value on success.
	type Output;

	/// Validates `value`.
	fn validate(&self, value: &Value) -> Result<Self::Output, ValidationError>;

	/// Returns the input shape this rule expects.
	fn shape(&self) -> Shape {
		Shape::Scalar
	}

	/// Adds a custom check run after this rule succeeds.
	///
	/// # Examples
	///
	/// ```
	/// use schemaform_core::{Rule, Value, rules};
	///
	/// let rule = rules::file().refine(|f| f.size() > 0, "Image is required");
	/// let err = rule.validate(&Value::File(schemaform_core::File::empty())).unwrap_err();
	/// assert_eq!(err.first_message(), Some("Image is required"));
	/// ```
	fn refine<F>(self, check: F, message: impl Into<String>) -> Refine<Self, F>
	where
		Self: Sized,
		F: Fn(&Self::Output) -> bool + Send + Sync,
	{
		Refine::new(self, check, message.into())
	}

	/// Accepts [`Value::Null`] as `None`.
	///
	/// Form fields that report an empty control as `""` want
	/// [`Optional::blank_as_none`] as well.
	fn optional(self) -> Optional<Self>
	where
		Self: Sized,
	{
		Optional::new(self)
	}

	/// Deserializes the validated value into `T` through JSON.
	///
	/// The rule's own checks run first; deserialization failures become issues.
	fn typed<T>(self) -> Typed<Self, T>
	where
		Self: Sized + Rule<Output = Value>,
		T: DeserializeOwned,
	{
		Typed::new(self)
	}
}

/// Object-safe view of a [`Rule`] with its output erased.
///
/// Every [`Rule`] implements this, so schemas can hold rules with different
/// output types side by side.
pub trait FieldRule: Send + Sync {
	/// Validates `value`, discarding the parsed output.
	fn check(&self, value: &Value) -> Result<(), ValidationError>;

	/// Returns the input shape this rule expects.
	fn expected_shape(&self) -> Shape;
}

impl<R: Rule> FieldRule for R {
	fn check(&self, value: &Value) -> Result<(), ValidationError> {
		self.validate(value).map(|_| ())
	}

	fn expected_shape(&self) -> Shape {
		self.shape()
	}
}

impl<R: Rule + ?Sized> Rule for Box<R> {
	type Output = R::Output;

	fn validate(&self, value: &Value) -> Result<Self::Output, ValidationError> {
		(**self).validate(value)
	}

	fn shape(&self) -> Shape {
		(**self).shape()
	}
}

impl<R: Rule + ?Sized> Rule for std::sync::Arc<R> {
	type Output = R::Output;

	fn validate(&self, value: &Value) -> Result<Self::Output, ValidationError> {
		(**self).validate(value)
	}

	fn shape(&self) -> Shape {
		(**self).shape()
	}
}

/// A rule built from a closure.
///
/// # Examples
///
/// ```
/// use schemaform_core::{Rule, ValidationError, Value, rule_fn};
///
/// let even = rule_fn(|v: &Value| match v.as_number() {
///     Some(n) if n % 2.0 == 0.0 => Ok(n),
///     _ => Err(ValidationError::new("Expected an even number")),
/// });
/// assert!(even.validate(&Value::Number(4.0)).is_ok());
/// ```
pub fn rule_fn<F, T>(f: F) -> FnRule<F>
where
	F: Fn(&Value) -> Result<T, ValidationError> + Send + Sync,
{
	FnRule { f, shape: Shape::Scalar }
}

/// Rule wrapping a closure. See [`rule_fn`].
pub struct FnRule<F> {
	f: F,
	shape: Shape,
}

impl<F> FnRule<F> {
	/// Overrides the advertised input shape.
	pub fn with_shape(mut self, shape: Shape) -> Self {
		self.shape = shape;
		self
	}
}

impl<F, T> Rule for FnRule<F>
where
	F: Fn(&Value) -> Result<T, ValidationError> + Send + Sync,
{
	type Output = T;

	fn validate(&self, value: &Value) -> Result<T, ValidationError> {
		(self.f)(value)
	}

	fn shape(&self) -> Shape {
		self.shape
	}
}
