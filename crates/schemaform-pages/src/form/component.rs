//! The `<form>` component and its composition tree.

use super::Attributes;
use super::error::ConfigurationError;
use super::error_message::{BoundErrorMessage, ErrorMessage};
use super::family::FamilyId;
use super::input::{BoundInput, Input};
use super::scope::{FormScope, ValidationState};
use super::textarea::{BoundTextarea, Textarea};
use crate::callback::Callback;
use crate::component::{ElementView, IntoView, View};
use crate::event::{EventTarget, FieldEvent};
use schemaform_core::Schema;
use std::borrow::Cow;
use std::sync::Arc;

/// A child of a [`Form`] or [`Group`].
#[derive(Debug, Clone)]
pub enum FormChild {
	Input(Input),
	Textarea(Textarea),
	ErrorMessage(ErrorMessage),
	Group(Group),
	/// Static content such as labels or buttons.
	View(View),
}

impl FormChild {
	fn bind(self, scope: &FormScope) -> Result<MountedChild, ConfigurationError> {
		Ok(match self {
			FormChild::Input(input) => MountedChild::Input(input.bind(Some(scope))?),
			FormChild::Textarea(textarea) => MountedChild::Textarea(textarea.bind(Some(scope))?),
			FormChild::ErrorMessage(message) => {
				MountedChild::ErrorMessage(message.bind(Some(scope))?)
			}
			FormChild::Group(group) => MountedChild::Group(MountedGroup {
				tag: group.tag,
				attrs: group.attrs,
				children: bind_all(group.children, scope)?,
			}),
			FormChild::View(view) => MountedChild::View(view),
		})
	}
}

fn bind_all(
	children: Vec<FormChild>,
	scope: &FormScope,
) -> Result<Vec<MountedChild>, ConfigurationError> {
	children.into_iter().map(|child| child.bind(scope)).collect()
}

impl From<Input> for FormChild {
	fn from(input: Input) -> Self {
		FormChild::Input(input)
	}
}

impl From<Textarea> for FormChild {
	fn from(textarea: Textarea) -> Self {
		FormChild::Textarea(textarea)
	}
}

impl From<ErrorMessage> for FormChild {
	fn from(message: ErrorMessage) -> Self {
		FormChild::ErrorMessage(message)
	}
}

impl From<Group> for FormChild {
	fn from(group: Group) -> Self {
		FormChild::Group(group)
	}
}

impl From<View> for FormChild {
	fn from(view: View) -> Self {
		FormChild::View(view)
	}
}

impl From<ElementView> for FormChild {
	fn from(element: ElementView) -> Self {
		FormChild::View(element.into_view())
	}
}

impl From<&'static str> for FormChild {
	fn from(text: &'static str) -> Self {
		FormChild::View(View::text(text))
	}
}

impl From<String> for FormChild {
	fn from(text: String) -> Self {
		FormChild::View(View::text(text))
	}
}

/// A plain wrapper element (e.g. a `<div>` around a label and its input).
#[derive(Debug, Clone)]
pub struct Group {
	tag: Cow<'static, str>,
	attrs: Attributes,
	children: Vec<FormChild>,
}

impl Group {
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Attributes::default(),
			children: Vec::new(),
		}
	}

	pub fn class(self, class: impl Into<String>) -> Self {
		self.attr("class", class)
	}

	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.set(name, value);
		self
	}

	pub fn child(mut self, child: impl Into<FormChild>) -> Self {
		self.children.push(child.into());
		self
	}
}

/// An unmounted `<form>`. Create one with `FormFamily::form`.
#[derive(Debug, Clone)]
pub struct Form {
	family: FamilyId,
	schema: Arc<Schema>,
	attrs: Attributes,
	on_submit: Option<Callback>,
	children: Vec<FormChild>,
}

impl Form {
	pub(crate) fn new(family: FamilyId, schema: Arc<Schema>) -> Self {
		Self {
			family,
			schema,
			attrs: Attributes::default(),
			on_submit: None,
			children: Vec::new(),
		}
	}

	/// Sets any native form attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.set(name, value);
		self
	}

	pub fn id(self, id: impl Into<String>) -> Self {
		self.attr("id", id)
	}

	pub fn class(self, class: impl Into<String>) -> Self {
		self.attr("class", class)
	}

	pub fn action(self, action: impl Into<String>) -> Self {
		self.attr("action", action)
	}

	pub fn method(self, method: impl Into<String>) -> Self {
		self.attr("method", method)
	}

	/// Disables the host's built-in constraint validation.
	pub fn no_validate(mut self, on: bool) -> Self {
		self.attrs.toggle("novalidate", on);
		self
	}

	/// Runs `f` when the form is submitted.
	pub fn on_submit(mut self, f: impl Fn(FieldEvent) + 'static) -> Self {
		self.on_submit = Some(Callback::new(f));
		self
	}

	pub fn child(mut self, child: impl Into<FormChild>) -> Self {
		self.children.push(child.into());
		self
	}

	pub fn children<I, C>(mut self, children: I) -> Self
	where
		I: IntoIterator<Item = C>,
		C: Into<FormChild>,
	{
		self.children.extend(children.into_iter().map(Into::into));
		self
	}

	/// Creates a fresh, empty validation state and binds every descendant
	/// to it.
	///
	/// # Errors
	///
	/// [`ConfigurationError::ForeignScope`] if a descendant was created by a
	/// different family.
	pub fn mount(self) -> Result<MountedForm, ConfigurationError> {
		let scope = FormScope::new(self.family, self.schema);
		let children = bind_all(self.children, &scope)?;
		tracing::debug!(family = ?scope.family(), children = children.len(), "mounted form");
		Ok(MountedForm {
			scope,
			attrs: self.attrs,
			on_submit: self.on_submit,
			children,
		})
	}
}

/// A bound descendant of a [`MountedForm`].
#[derive(Debug)]
pub enum MountedChild {
	Input(BoundInput),
	Textarea(BoundTextarea),
	ErrorMessage(BoundErrorMessage),
	Group(MountedGroup),
	View(View),
}

/// A bound [`Group`].
#[derive(Debug)]
pub struct MountedGroup {
	tag: Cow<'static, str>,
	attrs: Attributes,
	children: Vec<MountedChild>,
}

impl MountedGroup {
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	pub fn children(&self) -> &[MountedChild] {
		&self.children
	}

	pub fn render(&self) -> View {
		ElementView::new(self.tag.clone())
			.attrs_from(self.attrs.iter_except(&[]))
			.children(self.children.iter().map(MountedChild::render))
			.into_view()
	}
}

impl MountedChild {
	pub fn render(&self) -> View {
		match self {
			MountedChild::Input(input) => input.render(),
			MountedChild::Textarea(textarea) => textarea.render(),
			MountedChild::ErrorMessage(message) => message.render(),
			MountedChild::Group(group) => group.render(),
			MountedChild::View(view) => view.clone(),
		}
	}

	fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a MountedChild)) {
		visit(self);
		if let MountedChild::Group(group) = self {
			for child in &group.children {
				child.walk(visit);
			}
		}
	}
}

/// A `<form>` with its own validation state.
///
/// The state lives as long as the form or any clone of its [`FormScope`].
#[derive(Debug)]
pub struct MountedForm {
	scope: FormScope,
	attrs: Attributes,
	on_submit: Option<Callback>,
	children: Vec<MountedChild>,
}

impl MountedForm {
	/// The handle shared with every descendant.
	pub fn scope(&self) -> &FormScope {
		&self.scope
	}

	pub fn error(&self, name: &str) -> Option<String> {
		self.scope.error(name)
	}

	/// Snapshot of the current validation state.
	pub fn errors(&self) -> ValidationState {
		self.scope.errors()
	}

	pub fn is_valid(&self) -> bool {
		self.scope.is_valid()
	}

	/// Visits every bound descendant depth-first in document order.
	pub fn descendants(&self) -> Vec<&MountedChild> {
		let mut found = Vec::new();
		for child in &self.children {
			child.walk(&mut |c| found.push(c));
		}
		found
	}

	/// The first input named `name`.
	pub fn input(&self, name: &str) -> Option<&BoundInput> {
		self.inputs(name).into_iter().next()
	}

	/// Every input named `name` (e.g. a radio group).
	pub fn inputs(&self, name: &str) -> Vec<&BoundInput> {
		self.descendants()
			.into_iter()
			.filter_map(|c| match c {
				MountedChild::Input(input) if input.name() == name => Some(input),
				_ => None,
			})
			.collect()
	}

	pub fn textarea(&self, name: &str) -> Option<&BoundTextarea> {
		self.descendants().into_iter().find_map(|c| match c {
			MountedChild::Textarea(textarea) if textarea.name() == name => Some(textarea),
			_ => None,
		})
	}

	pub fn error_message(&self, name: &str) -> Option<&BoundErrorMessage> {
		self.descendants().into_iter().find_map(|c| match c {
			MountedChild::ErrorMessage(message) if message.name() == name => Some(message),
			_ => None,
		})
	}

	/// Forwards a submit event to the caller's handler.
	///
	/// Submission performs no validation of its own.
	pub fn submit(&self) -> FieldEvent {
		let target = EventTarget::new(self.attrs.get("name").unwrap_or_default());
		let event = FieldEvent::submit(target);
		match &self.on_submit {
			Some(on_submit) => on_submit.call(event.clone()),
			None => tracing::trace!("submit without handler"),
		}
		event
	}

	pub fn render(&self) -> View {
		ElementView::new("form")
			.attrs_from(self.attrs.iter_except(&[]))
			.children(self.children.iter().map(MountedChild::render))
			.into_view()
	}
}
