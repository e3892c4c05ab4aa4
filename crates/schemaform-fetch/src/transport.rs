//! The HTTP capability the fetcher delegates to.

use crate::config::ClientConfig;
use crate::error::{FetchError, NetworkError};
use crate::options::{Body, Credentials, HttpRequest, Method};
use async_trait::async_trait;

/// A received response with its body fully read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
	pub status: u16,
	pub status_text: String,
	pub headers: Vec<(String, String)>,
	pub body: Vec<u8>,
}

impl HttpResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Sends a request and reads the response.
///
/// Implementations report any failure to obtain a response as a
/// [`NetworkError`]; non-2xx statuses are still responses.
#[async_trait]
pub trait Transport: Send + Sync {
	async fn send(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
	client: reqwest::Client,
}

impl ReqwestTransport {
	/// Builds a client honouring the configured timeout and user agent.
	pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
		let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
		if let Some(timeout) = config.timeout {
			builder = builder.timeout(timeout);
		}
		let client = builder
			.build()
			.map_err(|e| FetchError::Client(e.to_string()))?;
		Ok(Self { client })
	}

	/// Wraps an existing client.
	pub fn from_client(client: reqwest::Client) -> Self {
		Self { client }
	}
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
	match method {
		Method::Get => reqwest::Method::GET,
		Method::Post => reqwest::Method::POST,
		Method::Put => reqwest::Method::PUT,
		Method::Patch => reqwest::Method::PATCH,
		Method::Delete => reqwest::Method::DELETE,
		Method::Head => reqwest::Method::HEAD,
		Method::Options => reqwest::Method::OPTIONS,
	}
}

fn map_reqwest_error(e: reqwest::Error) -> NetworkError {
	if e.is_timeout() {
		NetworkError::Timeout
	} else {
		NetworkError::Transport(e.to_string())
	}
}

#[async_trait]
impl Transport for ReqwestTransport {
	async fn send(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
		let HttpRequest {
			method,
			url,
			headers,
			body,
			credentials,
		} = request;

		// Native clients keep no ambient cookie jar, so every mode sends the
		// same request.
		if credentials != Credentials::default() {
			tracing::trace!(?credentials, "credentials mode has no effect on this transport");
		}

		let mut req = self.client.request(to_reqwest_method(method), url);
		for (name, value) in headers {
			req = req.header(name, value);
		}
		req = match body {
			Body::Empty => req,
			Body::Json(value) => req.json(&value),
			Body::Text(text) => req.body(text),
			Body::Bytes(bytes) => req.body(bytes),
		};

		let response = req.send().await.map_err(map_reqwest_error)?;
		let status = response.status();
		let headers = response
			.headers()
			.iter()
			.filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
			.collect();
		let body = response.bytes().await.map_err(map_reqwest_error)?.to_vec();

		Ok(HttpResponse {
			status: status.as_u16(),
			status_text: status.canonical_reason().unwrap_or_default().to_string(),
			headers,
			body,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(200, true)]
	#[case(204, true)]
	#[case(304, false)]
	#[case(404, false)]
	fn test_is_success(#[case] status: u16, #[case] expected: bool) {
		let response = HttpResponse {
			status,
			status_text: String::new(),
			headers: Vec::new(),
			body: Vec::new(),
		};
		assert_eq!(response.is_success(), expected);
	}
}
