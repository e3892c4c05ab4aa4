//! Client configuration.

use std::time::Duration;
use url::Url;

/// Settings shared by every request a [`Fetcher`](crate::Fetcher) sends.
///
/// # Examples
///
/// ```
/// use schemaform_fetch::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_base_url("https://api.example.com/v1/".parse().unwrap())
///     .with_default_header("accept", "application/json")
///     .with_timeout(Duration::from_secs(10));
/// assert_eq!(config.timeout, Some(Duration::from_secs(10)));
/// ```
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct ClientConfig {
	/// Base for relative targets. Without one, targets must be absolute.
	pub base_url: Option<Url>,

	/// Headers sent with every request; per-request headers of the same name
	/// win.
	pub default_headers: Vec<(String, String)>,

	/// Timeout applied when a request sets none.
	pub timeout: Option<Duration>,

	/// `User-Agent` header value.
	pub user_agent: String,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			base_url: None,
			default_headers: Vec::new(),
			timeout: Some(Duration::from_secs(30)),
			user_agent: concat!("schemaform-fetch/", env!("CARGO_PKG_VERSION")).to_string(),
		}
	}
}

impl ClientConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_base_url(mut self, base_url: Url) -> Self {
		self.base_url = Some(base_url);
		self
	}

	pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.default_headers.push((name.into(), value.into()));
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	/// Removes the default timeout.
	pub fn without_timeout(mut self) -> Self {
		self.timeout = None;
		self
	}

	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();
		self
	}
}
