//! HTTP fetch helper validating JSON responses
//!
//! Re-exports `schemaform-fetch`. See [`fetch_validated`] for the one-call
//! entry point and [`Fetcher`] for a configured client.

pub use schemaform_fetch::*;
