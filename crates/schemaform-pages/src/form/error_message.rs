//! Error display for one schema field.

use super::Attributes;
use super::error::ConfigurationError;
use super::family::FamilyId;
use super::scope::FormScope;
use crate::component::{ElementView, IntoView, View};

/// Styles for the classes [`ErrorMessage`] emits.
pub const ERROR_MESSAGE_STYLESHEET: &str = r#".error-message {
  color: #d32f2f;
  font-size: 0.875rem;
  line-height: 1.25rem;
}
.error-message.top-middle,
.error-message.bottom-middle,
.error-message.top-left,
.error-message.bottom-left {
  position: absolute;
  padding: 0.25rem 0.5rem;
  border-radius: 0.25rem;
  white-space: nowrap;
  z-index: 10;
}
.error-message.top-middle {
  bottom: 100%;
  left: 50%;
  transform: translateX(-50%);
}
.error-message.bottom-middle {
  top: 100%;
  left: 50%;
  transform: translateX(-50%);
}
.error-message.top-left {
  bottom: 100%;
  left: 0;
}
.error-message.bottom-left {
  top: 100%;
  left: 0;
}
.error-message.error {
  color: #ffffff;
  background-color: #d32f2f;
}
.error-message.warning {
  color: #3e2723;
  background-color: #ffb300;
}
"#;

const BASE_CLASS: &str = "error-message";

/// Where a positioned error message sits relative to its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
	TopMiddle,
	BottomMiddle,
	TopLeft,
	#[default]
	BottomLeft,
}

impl Position {
	pub fn class_name(self) -> &'static str {
		match self {
			Position::TopMiddle => "top-middle",
			Position::BottomMiddle => "bottom-middle",
			Position::TopLeft => "top-left",
			Position::BottomLeft => "bottom-left",
		}
	}
}

/// Colour scheme of a positioned error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorVariant {
	#[default]
	Error,
	Warning,
}

impl ErrorVariant {
	pub fn class_name(self) -> &'static str {
		match self {
			ErrorVariant::Error => "error",
			ErrorVariant::Warning => "warning",
		}
	}
}

/// An unbound error display. Create one with `FormFamily::error_message`.
///
/// Renders nothing while the field has no error and no fallback content.
#[derive(Debug, Clone)]
pub struct ErrorMessage {
	family: FamilyId,
	name: String,
	default_styling: bool,
	position: Position,
	variant: ErrorVariant,
	class: Option<String>,
	attrs: Attributes,
	fallback: Option<View>,
}

impl ErrorMessage {
	pub(crate) fn new(family: FamilyId, name: impl Into<String>) -> Self {
		Self {
			family,
			name: name.into(),
			default_styling: true,
			position: Position::default(),
			variant: ErrorVariant::default(),
			class: None,
			attrs: Attributes::default(),
			fallback: None,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Chooses between the plain style (the default) and the positioned
	/// style driven by [`position`](Self::position) and
	/// [`variant`](Self::variant).
	pub fn default_styling(mut self, on: bool) -> Self {
		self.default_styling = on;
		self
	}

	pub fn position(mut self, position: Position) -> Self {
		self.position = position;
		self
	}

	pub fn variant(mut self, variant: ErrorVariant) -> Self {
		self.variant = variant;
		self
	}

	/// Appends a caller class after the generated ones.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.attrs.set("id", id);
		self
	}

	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.set(name, value);
		self
	}

	/// Content shown while the field has no error.
	pub fn fallback(mut self, content: impl IntoView) -> Self {
		self.fallback = Some(content.into_view()).filter(|v| !v.is_empty());
		self
	}

	/// Binds to the scope of the enclosing form.
	///
	/// # Errors
	///
	/// See [`Input::bind`](super::Input::bind).
	pub fn bind(self, scope: Option<&FormScope>) -> Result<BoundErrorMessage, ConfigurationError> {
		let scope = scope.ok_or_else(|| ConfigurationError::OutsideForm {
			component: "ErrorMessage",
			field: self.name.clone(),
		})?;
		if scope.family() != self.family {
			return Err(ConfigurationError::ForeignScope {
				component: "ErrorMessage",
				field: self.name,
			});
		}
		Ok(BoundErrorMessage {
			scope: scope.clone(),
			config: self,
		})
	}

	fn class_list(&self) -> String {
		let mut classes = vec![BASE_CLASS];
		if !self.default_styling {
			classes.push(self.position.class_name());
			classes.push(self.variant.class_name());
		}
		if let Some(class) = self.class.as_deref().filter(|c| !c.is_empty()) {
			classes.push(class);
		}
		classes.join(" ")
	}
}

/// An error display bound to a mounted form.
#[derive(Debug)]
pub struct BoundErrorMessage {
	scope: FormScope,
	config: ErrorMessage,
}

impl BoundErrorMessage {
	pub fn name(&self) -> &str {
		&self.config.name
	}

	/// The stored error for the field.
	pub fn message(&self) -> Option<String> {
		self.scope.error(&self.config.name)
	}

	pub fn is_visible(&self) -> bool {
		self.content().is_some()
	}

	/// A stored error wins over the fallback even when it is empty, and an
	/// empty error shows nothing.
	fn content(&self) -> Option<View> {
		match (self.message(), &self.config.fallback) {
			(Some(message), _) if message.is_empty() => None,
			(Some(message), _) => Some(View::text(message)),
			(None, Some(fallback)) => Some(fallback.clone()),
			(None, None) => None,
		}
	}

	/// Renders a `<div>` with the stored error (or the fallback), or
	/// [`View::Empty`] when there is nothing to show.
	pub fn render(&self) -> View {
		let Some(content) = self.content() else {
			return View::Empty;
		};
		ElementView::new("div")
			.attr("class", self.config.class_list())
			.attrs_from(self.config.attrs.iter_except(&["class"]))
			.child(content)
			.into_view()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::form::create_form_binding;
	use rstest::{fixture, rstest};
	use schemaform_core::{Schema, rules};

	#[fixture]
	fn family() -> crate::form::FormFamily {
		create_form_binding(
			Schema::builder()
				.field("email", rules::string().email().message("Invalid email address"))
				.build(),
		)
	}

	#[rstest]
	#[case(true, Position::TopMiddle, ErrorVariant::Warning, None, "error-message")]
	#[case(true, Position::BottomLeft, ErrorVariant::Error, Some("hint"), "error-message hint")]
	#[case(false, Position::default(), ErrorVariant::default(), None, "error-message bottom-left error")]
	#[case(false, Position::TopMiddle, ErrorVariant::Warning, Some("x"), "error-message top-middle warning x")]
	fn test_class_list(
		family: crate::form::FormFamily,
		#[case] default_styling: bool,
		#[case] position: Position,
		#[case] variant: ErrorVariant,
		#[case] class: Option<&str>,
		#[case] expected: &str,
	) {
		let mut message = family
			.error_message("email")
			.default_styling(default_styling)
			.position(position)
			.variant(variant);
		if let Some(class) = class {
			message = message.class(class);
		}
		assert_eq!(message.class_list(), expected);
	}

	#[rstest]
	fn test_renders_nothing_without_error_or_fallback(family: crate::form::FormFamily) {
		let form = family.form().mount().unwrap();
		let message = family.error_message("email").bind(Some(form.scope())).unwrap();
		assert!(message.render().is_empty());
		assert!(!message.is_visible());
	}

	#[rstest]
	fn test_error_takes_precedence_over_fallback(family: crate::form::FormFamily) {
		let form = family.form().mount().unwrap();
		let message = family
			.error_message("email")
			.fallback("We never share your email")
			.bind(Some(form.scope()))
			.unwrap();
		assert_eq!(
			message.render().render_to_string(),
			"<div class=\"error-message\">We never share your email</div>"
		);

		form.scope().record_error("email", "Invalid email address");
		assert_eq!(
			message.render().render_to_string(),
			"<div class=\"error-message\">Invalid email address</div>"
		);
	}

	#[rstest]
	fn test_empty_stored_error_renders_nothing(family: crate::form::FormFamily) {
		let form = family.form().mount().unwrap();
		let message = family
			.error_message("email")
			.fallback("We never share your email")
			.bind(Some(form.scope()))
			.unwrap();

		form.scope().record_error("email", "");
		assert_eq!(message.message().as_deref(), Some(""));
		assert!(message.render().is_empty());
		assert!(!message.is_visible());
	}

	#[rstest]
	fn test_stylesheet_covers_emitted_classes() {
		for class in [
			Position::TopMiddle.class_name(),
			Position::BottomMiddle.class_name(),
			Position::TopLeft.class_name(),
			Position::BottomLeft.class_name(),
			ErrorVariant::Error.class_name(),
			ErrorVariant::Warning.class_name(),
		] {
			assert!(ERROR_MESSAGE_STYLESHEET.contains(&format!(".error-message.{}", class)));
		}
	}
}
