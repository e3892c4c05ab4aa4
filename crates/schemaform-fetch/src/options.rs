//! Request targets and per-request options.

use crate::abort::AbortSignal;
use crate::config::ClientConfig;
use crate::error::NetworkError;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
	#[default]
	Get,
	Post,
	Put,
	Patch,
	Delete,
	Head,
	Options,
}

impl Method {
	pub fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
			Method::Patch => "PATCH",
			Method::Delete => "DELETE",
			Method::Head => "HEAD",
			Method::Options => "OPTIONS",
		}
	}
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Whether the request carries ambient credentials (cookies, auth).
///
/// Passed to the transport unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Credentials {
	Omit,
	#[default]
	SameOrigin,
	Include,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Body {
	#[default]
	Empty,
	Json(serde_json::Value),
	Text(String),
	Bytes(Vec<u8>),
}

impl Body {
	/// The `Content-Type` implied by the body, if any.
	pub fn content_type(&self) -> Option<&'static str> {
		match self {
			Body::Empty | Body::Bytes(_) => None,
			Body::Json(_) => Some("application/json"),
			Body::Text(_) => Some("text/plain; charset=utf-8"),
		}
	}
}

/// Per-request options. Unset fields fall back to the request descriptor,
/// then to the client configuration.
///
/// # Examples
///
/// ```
/// use schemaform_fetch::{Method, RequestOptions};
/// use serde_json::json;
///
/// let options = RequestOptions::new()
///     .method(Method::Post)
///     .header("x-request-id", "42")
///     .json(json!({"name": "foo"}));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
	pub(crate) method: Option<Method>,
	pub(crate) headers: Vec<(String, String)>,
	pub(crate) body: Option<Body>,
	pub(crate) credentials: Option<Credentials>,
	pub(crate) signal: Option<AbortSignal>,
	pub(crate) timeout: Option<Duration>,
}

impl RequestOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn method(mut self, method: Method) -> Self {
		self.method = Some(method);
		self
	}

	/// Adds a header. A later header with the same name (case-insensitive)
	/// replaces an earlier one.
	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		set_header(&mut self.headers, name.into(), value.into());
		self
	}

	pub fn json(mut self, value: serde_json::Value) -> Self {
		self.body = Some(Body::Json(value));
		self
	}

	/// Serializes `value` as the JSON body.
	pub fn json_from<T: Serialize>(self, value: &T) -> Result<Self, serde_json::Error> {
		Ok(self.json(serde_json::to_value(value)?))
	}

	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.body = Some(Body::Text(text.into()));
		self
	}

	pub fn bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
		self.body = Some(Body::Bytes(bytes.into()));
		self
	}

	pub fn credentials(mut self, credentials: Credentials) -> Self {
		self.credentials = Some(credentials);
		self
	}

	/// Aborts the request when `signal` fires.
	pub fn signal(mut self, signal: AbortSignal) -> Self {
		self.signal = Some(signal);
		self
	}

	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	/// Fills unset fields from `base`; headers from both are kept, ours win.
	fn overlay(self, base: RequestOptions) -> RequestOptions {
		let mut headers = base.headers;
		for (name, value) in self.headers {
			set_header(&mut headers, name, value);
		}
		RequestOptions {
			method: self.method.or(base.method),
			headers,
			body: self.body.or(base.body),
			credentials: self.credentials.or(base.credentials),
			signal: self.signal.or(base.signal),
			timeout: self.timeout.or(base.timeout),
		}
	}
}

fn set_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
	match headers
		.iter_mut()
		.find(|(k, _)| k.eq_ignore_ascii_case(&name))
	{
		Some(slot) => *slot = (name, value),
		None => headers.push((name, value)),
	}
}

/// A URL bundled with its own options.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
	url: String,
	options: RequestOptions,
}

impl RequestDescriptor {
	pub fn new(url: impl Into<String>, options: RequestOptions) -> Self {
		Self {
			url: url.into(),
			options,
		}
	}

	pub fn url(&self) -> &str {
		&self.url
	}
}

/// What to fetch: a URL string, a parsed URL, or a descriptor.
#[derive(Debug, Clone)]
pub enum RequestTarget {
	Url(String),
	Parsed(Url),
	Descriptor(RequestDescriptor),
}

impl From<&str> for RequestTarget {
	fn from(url: &str) -> Self {
		RequestTarget::Url(url.to_string())
	}
}

impl From<String> for RequestTarget {
	fn from(url: String) -> Self {
		RequestTarget::Url(url)
	}
}

impl From<&String> for RequestTarget {
	fn from(url: &String) -> Self {
		RequestTarget::Url(url.clone())
	}
}

impl From<Url> for RequestTarget {
	fn from(url: Url) -> Self {
		RequestTarget::Parsed(url)
	}
}

impl From<RequestDescriptor> for RequestTarget {
	fn from(descriptor: RequestDescriptor) -> Self {
		RequestTarget::Descriptor(descriptor)
	}
}

/// A fully resolved request ready for the transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
	pub method: Method,
	pub url: Url,
	pub headers: Vec<(String, String)>,
	pub body: Body,
	pub credentials: Credentials,
}

/// The parts of a resolved request the fetcher handles itself.
pub(crate) struct Resolved {
	pub(crate) request: HttpRequest,
	pub(crate) signal: Option<AbortSignal>,
	pub(crate) timeout: Option<Duration>,
}

impl RequestTarget {
	pub(crate) fn resolve(
		self,
		config: &ClientConfig,
		options: RequestOptions,
	) -> Result<Resolved, NetworkError> {
		let (url, options) = match self {
			RequestTarget::Url(raw) => (parse_url(config, &raw)?, options),
			RequestTarget::Parsed(url) => (url, options),
			RequestTarget::Descriptor(descriptor) => (
				parse_url(config, &descriptor.url)?,
				options.overlay(descriptor.options),
			),
		};

		let mut headers = config.default_headers.clone();
		if !headers
			.iter()
			.any(|(k, _)| k.eq_ignore_ascii_case("user-agent"))
		{
			headers.push(("user-agent".to_string(), config.user_agent.clone()));
		}
		let body = options.body.unwrap_or_default();
		if let Some(content_type) = body.content_type() {
			set_header(&mut headers, "content-type".to_string(), content_type.to_string());
		}
		for (name, value) in options.headers {
			set_header(&mut headers, name, value);
		}

		Ok(Resolved {
			request: HttpRequest {
				method: options.method.unwrap_or_default(),
				url,
				headers,
				body,
				credentials: options.credentials.unwrap_or_default(),
			},
			signal: options.signal,
			timeout: options.timeout.or(config.timeout),
		})
	}
}

fn parse_url(config: &ClientConfig, raw: &str) -> Result<Url, NetworkError> {
	let parsed = match &config.base_url {
		Some(base) => base.join(raw),
		None => Url::parse(raw),
	};
	parsed.map_err(|e| NetworkError::InvalidUrl {
		url: raw.to_string(),
		reason: e.to_string(),
	})
}
