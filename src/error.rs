//! Crate-level error types shared by the throttle gate, transports, and the submission client.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, serialization).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The admission wait was cancelled before a slot was granted.
	#[error("Throttle wait was cancelled before a request slot was granted.")]
	ThrottleCancelled,
	/// Registry answered with a status other than 200.
	#[error("Registry returned an unexpected response status: {status}.")]
	UnexpectedStatus {
		/// HTTP status code returned by the registry.
		status: u16,
	},
}
impl Error {
	/// Returns the HTTP status carried by [`Error::UnexpectedStatus`], if any.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::UnexpectedStatus { status } => Some(*status),
			_ => None,
		}
	}
}
impl From<crate::throttle::ThrottleError> for Error {
	fn from(e: crate::throttle::ThrottleError) -> Self {
		match e {
			crate::throttle::ThrottleError::Cancelled => Self::ThrottleCancelled,
		}
	}
}

/// Configuration and validation failures raised while assembling a client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Registry descriptor failed validation.
	#[error(transparent)]
	Descriptor(#[from] crate::registry::RegistryDescriptorError),
	/// Rate limit configuration is unusable.
	#[error(transparent)]
	RateLimit(#[from] crate::throttle::RateLimitError),
	/// Endpoint URL could not be derived from the base URL.
	#[error("Registry endpoint URL is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO, payload encoding).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the registry.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Request payload could not be serialized.
	#[error("Document payload could not be serialized at `{path}`.", path = .source.path())]
	Serialize {
		/// Structured serialization failure, including the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the registry.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
