//! Transport primitives for registry submissions.
//!
//! The module exposes [`DocumentTransport`] alongside [`OutboundRequest`] and
//! [`ResponseMetadata`] so downstream crates can plug in custom HTTP stacks (or test doubles)
//! without touching the throttling or payload logic. Transports only move bytes and report the
//! response status; the client decides what a status means.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")]
use reqwest::{
	header::{AUTHORIZATION, CONTENT_TYPE},
	redirect::Policy,
};
// self
use crate::{_prelude::*, auth::TokenSecret, error::TransportError};
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Boxed future returned by [`DocumentTransport::post`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<ResponseMetadata, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of posting a serialized document.
///
/// Implementations must be `Send + Sync + 'static` so one transport can sit behind the
/// [`Arc`] shared by every clone of a client. Exactly one HTTP request must be issued per
/// [`post`](DocumentTransport::post) call; retries are the caller's concern.
pub trait DocumentTransport
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` as an authenticated JSON POST and reports the response status.
	///
	/// Any HTTP response, including error statuses, resolves to `Ok`; only failures below the
	/// HTTP layer (connect, TLS, timeout, I/O) resolve to [`TransportError`].
	fn post(&self, request: OutboundRequest) -> TransportFuture<'_>;
}
impl<T> DocumentTransport for Arc<T>
where
	T: ?Sized + DocumentTransport,
{
	fn post(&self, request: OutboundRequest) -> TransportFuture<'_> {
		(**self).post(request)
	}
}

/// Fully resolved request handed to a [`DocumentTransport`].
#[derive(Clone, Debug)]
pub struct OutboundRequest {
	/// Endpoint URL including the `pg` query parameter.
	pub url: Url,
	/// Bearer token for the `Authorization` header.
	pub token: TokenSecret,
	/// Serialized JSON body.
	pub body: Vec<u8>,
}
impl OutboundRequest {
	/// Content type of every registry submission body.
	pub const CONTENT_TYPE: &'static str = "application/json";
}

/// Metadata captured from the registry response.
///
/// Additional metadata fields may be added in future releases, so downstream code
/// should construct values using field names instead of struct update syntax.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseMetadata {
	/// HTTP status code returned by the registry.
	pub status: u16,
}
impl ResponseMetadata {
	/// Status the registry uses to acknowledge a created document.
	pub const ACCEPTED: u16 = 200;

	/// Returns `true` when the registry accepted the document.
	pub fn is_accepted(&self) -> bool {
		self.status == Self::ACCEPTED
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// The registry answers create-document calls directly, so redirects are never followed; a
/// redirect status surfaces as an unexpected status instead of a silently rewritten request.
/// Configure any custom [`ReqwestClient`] the same way.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Builds a transport with redirect following disabled.
	pub fn new() -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().redirect(Policy::none()).build()?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl DocumentTransport for ReqwestTransport {
	fn post(&self, request: OutboundRequest) -> TransportFuture<'_> {
		Box::pin(send_json(self.0.clone(), request))
	}
}

#[cfg(feature = "reqwest")]
async fn send_json(
	client: ReqwestClient,
	request: OutboundRequest,
) -> Result<ResponseMetadata, TransportError> {
	let OutboundRequest { url, token, body } = request;
	// The body is never read; only the status matters.
	let response = client
		.post(url)
		.header(CONTENT_TYPE, OutboundRequest::CONTENT_TYPE)
		.header(AUTHORIZATION, token.bearer())
		.body(body)
		.send()
		.await?;

	Ok(ResponseMetadata { status: response.status().as_u16() })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	struct FixedStatus(u16);
	impl DocumentTransport for FixedStatus {
		fn post(&self, _request: OutboundRequest) -> TransportFuture<'_> {
			let status = self.0;

			Box::pin(async move { Ok(ResponseMetadata { status }) })
		}
	}

	#[tokio::test]
	async fn arc_wrapped_transports_delegate() {
		let transport: Arc<dyn DocumentTransport> = Arc::new(FixedStatus(201));
		let request = OutboundRequest {
			url: Url::parse("https://registry.example.com/lk/documents/create?pg=clothes")
				.expect("Test URL should parse."),
			token: TokenSecret::new("token"),
			body: b"{}".to_vec(),
		};
		let meta = transport.post(request).await.expect("Fixed transport never fails.");

		assert_eq!(meta.status, 201);
		assert!(!meta.is_accepted());
	}
}
