//! Submission client that gates, assembles, and dispatches registry documents.

mod submit;

// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	http::DocumentTransport,
	registry::RegistryDescriptor,
	throttle::ThrottleGate,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestRegistryClient = RegistryClient<ReqwestTransport>;

/// Submits documents to a single registry while honoring its rate budget.
///
/// The client owns the transport, descriptor, and API token, and holds a handle to a
/// [`ThrottleGate`]. Clones share the same gate, so every clone counts against one budget.
/// Use [`RegistryClient::with_gate`] to make independently configured clients share a gate.
pub struct RegistryClient<T>
where
	T: ?Sized + DocumentTransport,
{
	/// Transport used for every outbound submission.
	pub transport: Arc<T>,
	/// Registry descriptor that defines the endpoint and rate budget.
	pub descriptor: RegistryDescriptor,
	token: TokenSecret,
	gate: Arc<ThrottleGate>,
}
impl<T> RegistryClient<T>
where
	T: ?Sized + DocumentTransport,
{
	/// Creates a client that reuses the caller-provided transport.
	///
	/// A fresh gate is created from [`RegistryDescriptor::rate_limit`].
	pub fn with_transport(
		descriptor: RegistryDescriptor,
		token: TokenSecret,
		transport: impl Into<Arc<T>>,
	) -> Self {
		let gate = Arc::new(ThrottleGate::new(descriptor.rate_limit));

		Self { transport: transport.into(), descriptor, token, gate }
	}

	/// Replaces the gate, e.g. to share one budget between several clients.
	pub fn with_gate(mut self, gate: Arc<ThrottleGate>) -> Self {
		self.gate = gate;

		self
	}

	/// Gate every submission passes through.
	pub fn gate(&self) -> &Arc<ThrottleGate> {
		&self.gate
	}
}
#[cfg(feature = "reqwest")]
impl RegistryClient<ReqwestTransport> {
	/// Creates a new client for the provided descriptor and API token.
	///
	/// The client provisions its own reqwest-backed transport with redirects disabled.
	pub fn new(descriptor: RegistryDescriptor, token: TokenSecret) -> Result<Self> {
		let transport = ReqwestTransport::new()?;

		Ok(Self::with_transport(descriptor, token, transport))
	}
}
impl<T> Clone for RegistryClient<T>
where
	T: ?Sized + DocumentTransport,
{
	fn clone(&self) -> Self {
		Self {
			transport: self.transport.clone(),
			descriptor: self.descriptor.clone(),
			token: self.token.clone(),
			gate: self.gate.clone(),
		}
	}
}
impl<T> Debug for RegistryClient<T>
where
	T: ?Sized + DocumentTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RegistryClient")
			.field("descriptor", &self.descriptor)
			.field("token", &self.token)
			.field("gate", &self.gate)
			.finish()
	}
}
