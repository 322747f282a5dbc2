//! Shared fixtures for integration tests.

#![allow(dead_code)]

// std
use std::{
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
	time::Duration,
};
// crates.io
use parking_lot::Mutex;
use time::macros;
use tokio::time::Instant;
// self
use crpt_submit::{
	auth::TokenSecret,
	client::RegistryClient,
	error::TransportError,
	http::{DocumentTransport, OutboundRequest, ReqwestTransport, ResponseMetadata, TransportFuture},
	registry::RegistryDescriptor,
	reqwest::Client as ReqwestClient,
	schema::{Document, DocumentDescription, Product, ProductionType},
	throttle::RateLimit,
	url::Url,
};

pub const TOKEN: &str = "test-registry-token";

pub fn rate(limit: usize, window_ms: u64) -> RateLimit {
	RateLimit::new(limit, Duration::from_millis(window_ms))
		.expect("Rate limit fixture should be valid.")
}

/// Builds a reqwest transport that accepts the self-signed certificates produced by `httpmock`.
pub fn test_reqwest_transport() -> ReqwestTransport {
	let client = ReqwestClient::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.redirect(crpt_submit::reqwest::redirect::Policy::none())
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestTransport::with_client(client)
}

pub fn descriptor(base_url: &str, rate_limit: RateLimit) -> RegistryDescriptor {
	RegistryDescriptor::builder()
		.base_url(Url::parse(base_url).expect("Failed to parse test registry base URL."))
		.rate_limit(rate_limit)
		.build()
		.expect("Failed to build test registry descriptor.")
}

/// Constructs a reqwest-backed client pointed at `base_url`.
pub fn build_reqwest_test_client(
	base_url: &str,
	rate_limit: RateLimit,
) -> RegistryClient<ReqwestTransport> {
	RegistryClient::with_transport(
		descriptor(base_url, rate_limit),
		TokenSecret::new(TOKEN),
		test_reqwest_transport(),
	)
}

/// Returns a fully populated introduce-goods document.
pub fn sample_document() -> Document {
	let product = Product::builder()
		.certificate_document("CONFORMITY_CERTIFICATE")
		.certificate_document_date(macros::date!(2024-01-15))
		.certificate_document_number("RU-C-001")
		.owner_inn("7700000001")
		.producer_inn("7700000002")
		.production_date(macros::date!(2024-02-01))
		.tnved_code("6109100000")
		.uit_code("010460043993125621JgXJ5.T")
		.build();

	Document::builder()
		.description(DocumentDescription::new("7700000001"))
		.id("doc-0001")
		.status("DRAFT")
		.doc_type("LP_INTRODUCE_GOODS")
		.owner_inn("7700000001")
		.participant_inn("7700000001")
		.producer_inn("7700000002")
		.production_date(macros::date!(2024-02-01))
		.production_type(ProductionType::OwnProduction)
		.product(product)
		.reg_date(macros::date!(2024-02-02))
		.reg_number("REG-42")
		.build()
		.expect("Failed to build sample document.")
}

/// In-process transport that answers with a fixed status and records what it was sent.
#[derive(Default)]
pub struct StubTransport {
	status: u16,
	calls: AtomicUsize,
	sent: Mutex<Vec<(Instant, OutboundRequest)>>,
}
impl StubTransport {
	pub fn answering(status: u16) -> Arc<Self> {
		Arc::new(Self { status, ..Default::default() })
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	pub fn sent_at(&self) -> Vec<Instant> {
		self.sent.lock().iter().map(|(at, _)| *at).collect()
	}

	pub fn last_request(&self) -> Option<OutboundRequest> {
		self.sent.lock().last().map(|(_, request)| request.clone())
	}
}
impl DocumentTransport for StubTransport {
	fn post(&self, request: OutboundRequest) -> TransportFuture<'_> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.sent.lock().push((Instant::now(), request));

		let status = self.status;

		Box::pin(async move { Ok(ResponseMetadata { status }) })
	}
}

/// Transport that always fails below the HTTP layer.
pub struct BrokenTransport;
impl DocumentTransport for BrokenTransport {
	fn post(&self, _request: OutboundRequest) -> TransportFuture<'_> {
		Box::pin(async move {
			Err(TransportError::from(std::io::Error::new(
				std::io::ErrorKind::ConnectionReset,
				"connection reset by peer",
			)))
		})
	}
}

pub fn stub_client(
	transport: Arc<StubTransport>,
	rate_limit: RateLimit,
) -> RegistryClient<StubTransport> {
	RegistryClient::with_transport(
		descriptor("https://registry.example.com/api/v3", rate_limit),
		TokenSecret::new(TOKEN),
		transport,
	)
}
