//! # schemaform-fetch
//!
//! An HTTP fetch helper that validates JSON responses against a
//! [`Rule`](schemaform_core::Rule) and returns typed data or a tagged error.
//!
//! ## Architecture
//!
//! ```text
//! fetch_validated(target, rule, options)
//!         │
//!         ▼
//!  RequestTarget::resolve ──▶ Transport::send ──▶ status check ──▶ JSON ──▶ rule
//!    (ClientConfig)            (reqwest)           NetworkError     Parse    Validation
//!                                  ▲
//!                    AbortSignal / timeout race
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use schemaform_core::rules;
//! use schemaform_fetch::{ClientConfig, Fetcher, RequestOptions};
//!
//! # async fn run() -> Result<(), schemaform_fetch::FetchError> {
//! let fetcher = Fetcher::new(
//!     ClientConfig::new().with_base_url("https://api.example.com/".parse().unwrap()),
//! )?;
//! let todo = rules::object()
//!     .field("id", rules::number())
//!     .field("name", rules::string());
//!
//! let data = fetcher
//!     .fetch_validated("todos/1", &todo, RequestOptions::new())
//!     .await?;
//! println!("{:?}", data);
//! # Ok(())
//! # }
//! ```

pub mod abort;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod options;
pub mod transport;

pub use abort::{AbortController, AbortSignal};
pub use config::ClientConfig;
pub use error::{FetchError, FetchResult, NetworkError};
pub use fetcher::{Fetcher, fetch_validated};
pub use options::{
	Body, Credentials, HttpRequest, Method, RequestDescriptor, RequestOptions, RequestTarget,
};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
