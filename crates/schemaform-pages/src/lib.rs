//! # schemaform-pages
//!
//! Form components bound to a validation schema.
//!
//! ## Overview
//!
//! - [`create_form_binding`] derives a [`FormFamily`] from a schema: `Form`,
//!   `Input`, `Textarea`, and `ErrorMessage` components that share one
//!   validation state per mounted form
//! - fields validate on blur, and revalidate on change only while they hold
//!   an error
//! - components render into a [`View`] tree
//!
//! ## Modules
//!
//! - [`form`]: the component factory, scope, and validation state
//! - [`event`]: events delivered to bound controls
//! - [`component`]: the view tree
//! - [`callback`]: caller callbacks

pub mod callback;
pub mod component;
pub mod event;
pub mod form;

pub use callback::Callback;
pub use component::{ElementView, IntoView, View};
pub use event::{ControlKind, EventKind, EventTarget, FieldEvent, InputType};
pub use form::{
	BoundErrorMessage, BoundInput, BoundTextarea, ConfigurationError, ERROR_MESSAGE_STYLESHEET,
	ErrorMessage, ErrorVariant, FamilyId, Form, FormChild, FormFamily, FormScope, Group, Input,
	MountedChild, MountedForm, MountedGroup, Position, Textarea, ValidationState,
	create_form_binding,
};
