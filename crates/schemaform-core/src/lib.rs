//! # schemaform-core
//!
//! The rule capability shared by form bindings and the validating fetcher.
//!
//! ## Overview
//!
//! - [`Value`]: the input a rule validates (text, numbers, JSON structures,
//!   file handles, file lists)
//! - [`Rule`]: validates a value into a typed output or a [`ValidationError`]
//! - [`Schema`]: an ordered mapping from field name to rule
//! - [`rules`]: built-in rules and combinators
//!
//! ## Example
//!
//! ```
//! use schemaform_core::{Rule, Schema, Value, rules};
//!
//! let schema = Schema::builder()
//!     .field("name", rules::string().min_len(3).message("Name must be at least 3 characters"))
//!     .field("age", rules::number().coerce().min(18.0).message("Must be at least 18"))
//!     .build();
//!
//! let err = schema.validate_field("age", &Value::from("17")).unwrap().unwrap_err();
//! assert_eq!(err.first_message(), Some("Must be at least 18"));
//! ```

pub mod error;
pub mod rule;
pub mod rules;
pub mod schema;
pub mod value;

pub use error::{Issue, ValidationError};
pub use rule::{FieldRule, FnRule, Rule, Shape, rule_fn};
pub use schema::{Schema, SchemaBuilder};
pub use value::{File, FileList, Value, ValueError};
