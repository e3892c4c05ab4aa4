//! View tree produced by the form components.
//!
//! Components render into a [`View`], which the host either serializes with
//! [`View::render_to_string`] or walks to build real DOM nodes.

pub mod view;

pub use view::{ElementView, IntoView, View};
