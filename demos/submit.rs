//! Submits a few documents through a two-per-second budget against a local mock registry,
//! showing the gate spacing out the third request.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use time::macros;
use tokio::time::Instant;
// self
use crpt_submit::{
	auth::TokenSecret,
	client::RegistryClient,
	http::ReqwestTransport,
	registry::RegistryDescriptor,
	reqwest::{Client, redirect::Policy},
	schema::{Document, DocumentDescription, Product, ProductGroup, ProductionType},
	throttle::RateLimit,
	url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let create_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v3/lk/documents/create")
				.query_param("pg", "clothes")
				.header("authorization", "Bearer demo-token");
			then.status(200);
		})
		.await;
	let descriptor = RegistryDescriptor::builder()
		.base_url(Url::parse(&format!("https://{}/api/v3", server.address()))?)
		.rate_limit(RateLimit::per_second(2)?)
		.build()?;
	let transport = ReqwestTransport::with_client(
		Client::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.redirect(Policy::none())
			.build()?,
	);
	let client = <RegistryClient<ReqwestTransport>>::with_transport(
		descriptor,
		TokenSecret::new("demo-token"),
		Arc::new(transport),
	);
	let start = Instant::now();

	for idx in 1..=3 {
		client.submit(ProductGroup::Clothes, demo_document(idx)?, "ZGVtby1zaWduYXR1cmU=").await?;

		println!("Document #{idx} accepted after {:?}.", start.elapsed());
	}

	create_mock.assert_calls_async(3).await;

	Ok(())
}

fn demo_document(idx: u32) -> Result<Document> {
	let product = Product::builder()
		.owner_inn("7700000001")
		.producer_inn("7700000001")
		.production_date(macros::date!(2024-03-01))
		.tnved_code("6109100000")
		.uit_code(format!("0104600439931256{idx:05}"))
		.build();
	let document = Document::builder()
		.description(DocumentDescription::new("7700000001"))
		.id(format!("demo-{idx}"))
		.status("DRAFT")
		.doc_type("LP_INTRODUCE_GOODS")
		.owner_inn("7700000001")
		.participant_inn("7700000001")
		.producer_inn("7700000001")
		.production_date(macros::date!(2024-03-01))
		.production_type(ProductionType::OwnProduction)
		.product(product)
		.reg_date(macros::date!(2024-03-02))
		.build()?;

	Ok(document)
}
