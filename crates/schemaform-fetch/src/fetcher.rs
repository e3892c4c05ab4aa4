//! The validating fetch pipeline.

use crate::config::ClientConfig;
use crate::error::{FetchError, NetworkError};
use crate::options::{RequestOptions, RequestTarget, Resolved};
use crate::transport::{HttpResponse, ReqwestTransport, Transport};
use schemaform_core::{Rule, Value};
use std::fmt;
use std::sync::{Arc, LazyLock};
use tracing::{debug, warn};

/// Sends requests and validates their JSON responses.
///
/// Each call runs one sequential pipeline: request, status check, JSON
/// parse, rule validation. Every failure is returned, never raised.
#[derive(Clone)]
pub struct Fetcher {
	config: ClientConfig,
	transport: Arc<dyn Transport>,
}

impl fmt::Debug for Fetcher {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Fetcher")
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}

impl Fetcher {
	/// Creates a fetcher backed by `reqwest`.
	pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
		let transport = ReqwestTransport::new(&config)?;
		Ok(Self::with_transport(config, transport))
	}

	/// Creates a fetcher over a custom transport.
	pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
		Self {
			config,
			transport: Arc::new(transport),
		}
	}

	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Fetches `target` and validates the JSON body with `rule`.
	///
	/// # Errors
	///
	/// - [`FetchError::Network`] when no response arrives, the status is not
	///   2xx, the request is aborted, or it times out
	/// - [`FetchError::Parse`] when the body is not JSON
	/// - [`FetchError::Validation`] when the body does not satisfy `rule`
	pub async fn fetch_validated<R>(
		&self,
		target: impl Into<RequestTarget>,
		rule: &R,
		options: RequestOptions,
	) -> Result<R::Output, FetchError>
	where
		R: Rule + ?Sized,
	{
		let response = self.send(target.into(), options).await?;

		let json: serde_json::Value = serde_json::from_slice(&response.body).map_err(|e| {
			warn!(error = %e, "response body is not valid JSON");
			FetchError::Parse(e)
		})?;

		rule.validate(&Value::from(json)).map_err(|e| {
			warn!(issues = e.issues().len(), error = %e, "response failed validation");
			FetchError::Validation(e)
		})
	}

	async fn send(
		&self,
		target: RequestTarget,
		options: RequestOptions,
	) -> Result<HttpResponse, NetworkError> {
		let Resolved {
			request,
			signal,
			timeout,
		} = target.resolve(&self.config, options).inspect_err(|e| {
			warn!(error = %e, "could not resolve request target");
		})?;
		let method = request.method;
		let url = request.url.clone();
		debug!(%method, %url, "sending request");

		let exchange = async {
			match timeout {
				Some(limit) => tokio::time::timeout(limit, self.transport.send(request))
					.await
					.map_err(|_| NetworkError::Timeout)?,
				None => self.transport.send(request).await,
			}
		};

		let result = match signal {
			Some(signal) if signal.is_aborted() => Err(NetworkError::Aborted),
			Some(signal) => tokio::select! {
				biased;
				_ = signal.aborted() => Err(NetworkError::Aborted),
				result = exchange => result,
			},
			None => exchange.await,
		};

		let response = result.inspect_err(|e| warn!(%method, %url, error = %e, "request failed"))?;
		if !response.is_success() {
			let err = NetworkError::Status {
				status: response.status,
				status_text: response.status_text,
			};
			warn!(%method, %url, error = %err, "non-success status");
			return Err(err);
		}
		debug!(%method, %url, status = response.status, bytes = response.body.len(), "received response");
		Ok(response)
	}
}

static DEFAULT_FETCHER: LazyLock<Result<Fetcher, String>> =
	LazyLock::new(|| Fetcher::new(ClientConfig::default()).map_err(|e| e.to_string()));

/// Fetches `target` with a shared default [`Fetcher`] and validates the JSON
/// body with `rule`.
///
/// # Examples
///
/// ```no_run
/// use schemaform_core::{Rule, rules};
/// use schemaform_fetch::{RequestOptions, fetch_validated};
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize)]
/// struct Todo {
///     id: u32,
///     name: String,
/// }
///
/// # async fn run() {
/// let rule = rules::object()
///     .field("id", rules::number())
///     .field("name", rules::string())
///     .typed::<Todo>();
///
/// match fetch_validated("https://example.com/todos/1", &rule, RequestOptions::new()).await {
///     Ok(todo) => println!("{} {}", todo.id, todo.name),
///     Err(e) if e.is_validation() => eprintln!("unexpected data: {e}"),
///     Err(e) => eprintln!("request failed: {e}"),
/// }
/// # }
/// ```
pub async fn fetch_validated<R>(
	target: impl Into<RequestTarget>,
	rule: &R,
	options: RequestOptions,
) -> Result<R::Output, FetchError>
where
	R: Rule + ?Sized,
{
	match &*DEFAULT_FETCHER {
		Ok(fetcher) => fetcher.fetch_validated(target, rule, options).await,
		Err(message) => Err(FetchError::Client(message.clone())),
	}
}
