//! Fetch errors.

use schemaform_core::ValidationError;

/// The request did not produce a successful response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
	/// The server answered with a non-2xx status.
	#[error("{status}: {status_text}.")]
	Status { status: u16, status_text: String },
	/// The transport rejected the request (connection refused, DNS, TLS...).
	#[error("request failed: {0}")]
	Transport(String),
	/// The target could not be turned into an absolute URL.
	#[error("invalid URL `{url}`: {reason}")]
	InvalidUrl { url: String, reason: String },
	/// The caller's abort signal fired first.
	#[error("The operation was aborted.")]
	Aborted,
	/// The request outlived its timeout.
	#[error("request timed out")]
	Timeout,
}

/// Why [`fetch_validated`](crate::fetch_validated) failed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
	#[error(transparent)]
	Network(#[from] NetworkError),
	/// The body was not JSON.
	#[error("failed to parse response body: {0}")]
	Parse(#[from] serde_json::Error),
	/// The body was JSON but did not satisfy the rule.
	#[error("response did not match the expected shape: {0}")]
	Validation(#[from] ValidationError),
	/// The HTTP client could not be constructed.
	#[error("failed to build HTTP client: {0}")]
	Client(String),
}

impl FetchError {
	/// Returns `true` when the response arrived but its data was rejected.
	pub fn is_validation(&self) -> bool {
		matches!(self, FetchError::Validation(_))
	}

	/// Returns the structured validation detail, if that is what failed.
	pub fn as_validation(&self) -> Option<&ValidationError> {
		match self {
			FetchError::Validation(err) => Some(err),
			_ => None,
		}
	}

	pub fn as_network(&self) -> Option<&NetworkError> {
		match self {
			FetchError::Network(err) => Some(err),
			_ => None,
		}
	}
}

pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(NetworkError::Status { status: 404, status_text: "Not Found".into() }, "404: Not Found.")]
	#[case(NetworkError::Aborted, "The operation was aborted.")]
	#[case(NetworkError::Transport("connection refused".into()), "request failed: connection refused")]
	fn test_network_error_display(#[case] err: NetworkError, #[case] expected: &str) {
		assert_eq!(FetchError::from(err).to_string(), expected);
	}

	#[rstest]
	fn test_validation_accessors() {
		let err = FetchError::from(ValidationError::new("Expected number, received string"));
		assert!(err.is_validation());
		assert_eq!(
			err.as_validation().and_then(|v| v.first_message()),
			Some("Expected number, received string")
		);
		assert!(err.as_network().is_none());
	}
}
