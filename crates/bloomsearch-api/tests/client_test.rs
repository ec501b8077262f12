// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::time::Duration;

use bloomsearch_api::{BloomreachClient, BloomreachError, Credentials};
use bloomsearch_core::{FetchWindow, SearchBackend, SearchQuery, SearchRequest};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BloomreachClient {
	BloomreachClient::new(Credentials::new("6702", "example_com"))
		.unwrap()
		.with_base_url(format!("{}/api/v1/core/", server.uri()))
}

fn request(term: &str, start: u64, rows: u32) -> SearchRequest {
	SearchRequest {
		query: SearchQuery::parse(term).unwrap(),
		window: FetchWindow { start, rows },
	}
}

#[tokio::test]
async fn sends_expected_query_parameters() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/v1/core/"))
		.and(query_param("q", "red shoes"))
		.and(query_param("start", "12"))
		.and(query_param("rows", "6"))
		.and(query_param("account_id", "6702"))
		.and(query_param("domain_key", "example_com"))
		.and(query_param("search_type", "keyword"))
		.and(query_param("request_type", "search"))
		.and(query_param("fl", "pid,title,introduction,url"))
		.and(query_param("_br_uid_2", "1234567890"))
		.and(query_param("request_id", "123456"))
		.and(query_param("url", "www.example.com"))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_string(r#"{"response": {"numFound": 0, "start": 12, "docs": []}}"#),
		)
		.expect(1)
		.mount(&server)
		.await;

	let response = client_for(&server)
		.search(&request("red shoes", 12, 6))
		.await
		.unwrap();
	assert_eq!(response.num_found, 0);
}

#[tokio::test]
async fn raw_query_uses_percent_escapes_and_literal_field_commas() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/v1/core/"))
		.and(|req: &wiremock::Request| {
			req.url.query()
				== Some(
					"fl=pid,title,introduction,url&_br_uid_2=1234567890&search_type=keyword\
					 &start=0&rows=6&request_id=123456&account_id=6702&domain_key=example_com\
					 &request_type=search&url=www.example.com&q=red%20shoes",
				)
		})
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_string(r#"{"response": {"numFound": 0, "start": 0, "docs": []}}"#),
		)
		.expect(1)
		.mount(&server)
		.await;

	client_for(&server)
		.search(&request("red shoes", 0, 6))
		.await
		.unwrap();
}

#[tokio::test]
async fn parses_successful_response() {
	let server = MockServer::start().await;
	let body = r#"{
		"response": {
			"numFound": 14,
			"start": 0,
			"docs": [
				{"pid": "1", "title": "Trail Runner", "introduction": "<b>Grip</b>", "url": "/p/1"}
			]
		},
		"did_you_mean": ["trail runners"]
	}"#;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_string(body))
		.mount(&server)
		.await;

	let response = client_for(&server)
		.search(&request("trail", 0, 6))
		.await
		.unwrap();
	assert_eq!(response.num_found, 14);
	assert_eq!(response.docs[0].title, "Trail Runner");
	assert_eq!(response.suggestion(), Some("trail runners"));
}

#[tokio::test]
async fn surfaces_keyword_redirect() {
	let server = MockServer::start().await;
	let body = r#"{
		"response": {"numFound": 3, "docs": []},
		"keywordRedirect": {"original query": "returns", "redirected url": "/help/returns"}
	}"#;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_string(body))
		.mount(&server)
		.await;

	let response = client_for(&server)
		.search(&request("returns", 0, 6))
		.await
		.unwrap();
	assert_eq!(response.redirect_target(), Some("/help/returns"));
}

#[tokio::test]
async fn server_error_is_not_retried() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(500).set_body_string("boom"))
		.expect(1)
		.mount(&server)
		.await;

	let err = client_for(&server)
		.search(&request("shoes", 0, 6))
		.await
		.unwrap_err();
	match err {
		BloomreachError::ApiError { status, message } => {
			assert_eq!(status, 500);
			assert_eq!(message, "boom");
		}
		other => panic!("unexpected error: {other:?}"),
	}
}

#[tokio::test]
async fn unauthorized_is_mapped() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(401))
		.mount(&server)
		.await;

	let err = client_for(&server)
		.search(&request("shoes", 0, 6))
		.await
		.unwrap_err();
	assert!(matches!(err, BloomreachError::Unauthorized));
}

#[tokio::test]
async fn rate_limit_is_mapped() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(429))
		.mount(&server)
		.await;

	let err = client_for(&server)
		.search(&request("shoes", 0, 6))
		.await
		.unwrap_err();
	assert!(matches!(err, BloomreachError::RateLimited));
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_string("not json"))
		.mount(&server)
		.await;

	let err = client_for(&server)
		.search(&request("shoes", 0, 6))
		.await
		.unwrap_err();
	assert!(matches!(err, BloomreachError::InvalidResponse(_)));
}

#[tokio::test]
async fn slow_response_times_out() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_string(r#"{"response": {"numFound": 0}}"#)
				.set_delay(Duration::from_secs(2)),
		)
		.mount(&server)
		.await;

	let client = BloomreachClient::with_timeout(
		Credentials::new("6702", "example_com"),
		Duration::from_millis(100),
	)
	.unwrap()
	.with_base_url(server.uri());

	let err = client
		.search(&request("shoes", 0, 6))
		.await
		.unwrap_err();
	assert!(matches!(err, BloomreachError::Timeout));
}

#[tokio::test]
async fn works_through_the_backend_trait() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(
			ResponseTemplate::new(200).set_body_string(r#"{"response": {"numFound": 7}}"#),
		)
		.mount(&server)
		.await;

	let client = client_for(&server);
	let backend: &dyn SearchBackend<Error = BloomreachError> = &client;
	let response = backend.search(&request("shoes", 0, 6)).await.unwrap();
	assert_eq!(response.num_found, 7);
}
