//! # Schemaform
//!
//! Schema-bound form components and a fetch helper that validates
//! responses against the same rules.
//!
//! ## Feature Flags
//!
//! - `pages` - Form components sharing per-form validation state
//! - `fetch` - HTTP fetch helper returning validated, typed data
//! - `full` (default) - Both of the above
//!
//! ## Example
//!
//! ```rust
//! use schemaform::{Rule, Schema, rules};
//!
//! let schema = Schema::builder()
//!     .field("name", rules::string().min_len(3))
//!     .field("age", rules::number().coerce().min(18.0))
//!     .build();
//!
//! assert!(schema.validate_field("name", &"Al".into()).unwrap().is_err());
//! assert!(rules::string().validate(&"Alice".into()).is_ok());
//! ```

pub use schemaform_core::*;

#[cfg(feature = "fetch")]
pub mod fetch;
#[cfg(feature = "pages")]
pub mod pages;
