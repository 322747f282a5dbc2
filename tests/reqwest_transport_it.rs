mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use common::*;
use crpt_submit::{
	error::{Error, TransportError},
	schema::{ProductGroup, SubmissionRequest},
};

// The mock server negotiates TLS on its single port, so the root is spelled out as HTTPS.
fn api_root(server: &MockServer) -> String {
	format!("https://{}/api/v3", server.address())
}

#[tokio::test]
async fn submission_posts_authenticated_json() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&api_root(&server), rate(10, 1_000));
	let expected_body = serde_json::to_value(SubmissionRequest::introduce_goods(
		ProductGroup::Clothes,
		sample_document(),
		"detached-signature",
	))
	.expect("Expected request body should serialize.");
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v3/lk/documents/create")
				.query_param("pg", "clothes")
				.header("content-type", "application/json")
				.header("authorization", format!("Bearer {TOKEN}"))
				.json_body(expected_body.clone());
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"value\":\"b3c2ffb6-1b4e-4a6b-9c4f-2f6c1f6b1a70\"}");
		})
		.await;

	client
		.submit(ProductGroup::Clothes, sample_document(), "detached-signature")
		.await
		.expect("Registry accepted the document, so submit should succeed.");

	mock.assert_async().await;

	assert_eq!(client.gate().len(), 1);
}

#[tokio::test]
async fn non_200_statuses_surface_with_their_code() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&api_root(&server), rate(10, 1_000));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v3/lk/documents/create");
			then.status(401)
				.header("content-type", "application/json")
				.body(json!({ "error_message": "token expired" }).to_string());
		})
		.await;
	let err = client
		.submit(ProductGroup::Clothes, sample_document(), "detached-signature")
		.await
		.expect_err("A 401 response must not be treated as success.");

	assert!(matches!(err, Error::UnexpectedStatus { status: 401 }));

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn created_is_not_accepted() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&api_root(&server), rate(10, 1_000));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v3/lk/documents/create");
			then.status(201);
		})
		.await;
	let err = client
		.submit(ProductGroup::Clothes, sample_document(), "detached-signature")
		.await
		.expect_err("Only HTTP 200 counts as success.");

	assert_eq!(err.status(), Some(201));

	mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_registry_is_a_transport_failure() {
	// Port 1 is reserved and refuses connections on loopback.
	let client = build_reqwest_test_client("https://127.0.0.1:1/api/v3", rate(10, 1_000));
	let err = client
		.submit(ProductGroup::Clothes, sample_document(), "detached-signature")
		.await
		.expect_err("Connection failures must surface to the caller.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
	assert_eq!(client.gate().len(), 1, "Failed calls still consume their admission.");
}
