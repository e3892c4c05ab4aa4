//! The view tree form components render into.
//!
//! Rendering is string-only: [`View`] implements [`fmt::Display`] and writes
//! escaped HTML, which [`View::render_to_string`] collects.

use std::borrow::Cow;
use std::fmt::{self, Write};

type Text = Cow<'static, str>;

const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Renderable content: an element, a text node, siblings without a wrapper,
/// or nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
	Element(ElementView),
	Text(Text),
	Fragment(Vec<View>),
	Empty,
}

/// An element with ordered attributes and child views.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementView {
	tag: Text,
	attrs: Vec<(Text, Text)>,
	children: Vec<View>,
}

impl ElementView {
	pub fn new(tag: impl Into<Text>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Appends an attribute. An empty value renders as a bare boolean
	/// attribute (`required`, `checked`).
	pub fn attr(mut self, name: impl Into<Text>, value: impl Into<Text>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	pub fn attrs_from<I, K, V>(mut self, attrs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<Text>,
		V: Into<Text>,
	{
		for (name, value) in attrs {
			self = self.attr(name, value);
		}
		self
	}

	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
		self.children
			.extend(children.into_iter().map(IntoView::into_view));
		self
	}

	fn is_void(&self) -> bool {
		VOID_ELEMENTS.contains(&&*self.tag)
	}

	fn write_html(&self, out: &mut impl Write) -> fmt::Result {
		write!(out, "<{}", self.tag)?;
		for (name, value) in &self.attrs {
			if value.is_empty() {
				write!(out, " {}", name)?;
			} else {
				write!(out, " {}=\"", name)?;
				write_escaped(out, value)?;
				out.write_char('"')?;
			}
		}
		if self.is_void() {
			return out.write_str(" />");
		}
		out.write_char('>')?;
		for child in &self.children {
			child.write_html(out)?;
		}
		write!(out, "</{}>", self.tag)
	}
}

impl View {
	pub fn element(tag: impl Into<Text>) -> ElementView {
		ElementView::new(tag)
	}

	pub fn text(content: impl Into<Text>) -> Self {
		View::Text(content.into())
	}

	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		View::Fragment(children.into_iter().map(IntoView::into_view).collect())
	}

	pub fn is_empty(&self) -> bool {
		matches!(self, View::Empty)
	}

	/// The concatenated, unescaped text of every text node below this view.
	pub fn text_content(&self) -> String {
		match self {
			View::Element(el) => el.children.iter().map(View::text_content).collect(),
			View::Fragment(children) => children.iter().map(View::text_content).collect(),
			View::Text(text) => text.to_string(),
			View::Empty => String::new(),
		}
	}

	pub fn render_to_string(&self) -> String {
		self.to_string()
	}

	fn write_html(&self, out: &mut impl Write) -> fmt::Result {
		match self {
			View::Element(el) => el.write_html(out),
			View::Text(text) => write_escaped(out, text),
			View::Fragment(children) => children.iter().try_for_each(|c| c.write_html(out)),
			View::Empty => Ok(()),
		}
	}
}

impl fmt::Display for View {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.write_html(f)
	}
}

/// Conversion into a [`View`], accepted wherever a child is expected.
pub trait IntoView {
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::text(self)
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::text(self)
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		self.map_or(View::Empty, IntoView::into_view)
	}
}

fn write_escaped(out: &mut impl Write, s: &str) -> fmt::Result {
	for c in s.chars() {
		match c {
			'&' => out.write_str("&amp;")?,
			'<' => out.write_str("&lt;")?,
			'>' => out.write_str("&gt;")?,
			'"' => out.write_str("&quot;")?,
			'\'' => out.write_str("&#x27;")?,
			_ => out.write_char(c)?,
		}
	}
	Ok(())
}
