//! Form components bound to a schema
//!
//! Re-exports `schemaform-pages`: a [`FormFamily`] created from a
//! [`Schema`](crate::Schema) hands out `Form`, `Input`, `Textarea`, and
//! `ErrorMessage` builders that share one validation state per mounted form.

pub use schemaform_pages::*;
