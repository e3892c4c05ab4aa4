//! Fetcher against a live mock HTTP server.

use rstest::{fixture, rstest};
use schemaform_core::Rule;
use schemaform_core::rules::{self, ObjectRule, Typed};
use schemaform_fetch::{
	ClientConfig, FetchError, Fetcher, Method, NetworkError, RequestDescriptor, RequestOptions,
	fetch_validated,
};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

#[derive(Debug, Deserialize, PartialEq)]
struct Todo {
	id: u32,
	name: String,
}

type TodoRule = Typed<ObjectRule, Todo>;

#[fixture]
fn todo_rule() -> TodoRule {
	rules::object()
		.field("id", rules::number().int())
		.field("name", rules::string())
		.typed::<Todo>()
}

#[fixture]
fn fetcher() -> Fetcher {
	Fetcher::new(ClientConfig::new()).unwrap()
}

fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

#[rstest]
#[tokio::test]
async fn test_returns_typed_data_on_success(todo_rule: TodoRule) {
	init_tracing();
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/todos/1")
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(r#"{"id":1,"name":"foo"}"#)
		.expect(1)
		.create_async()
		.await;

	let url = format!("{}/todos/1", server.url());
	let todo = fetch_validated(url, &todo_rule, RequestOptions::new())
		.await
		.unwrap();

	assert_eq!(
		todo,
		Todo {
			id: 1,
			name: "foo".into()
		}
	);
	mock.assert_async().await;
}

#[rstest]
#[tokio::test]
async fn test_non_ok_status_reports_status_and_text(todo_rule: TodoRule) {
	let mut server = mockito::Server::new_async().await;
	let _mock = server
		.mock("GET", "/missing")
		.with_status(404)
		.with_body("not here")
		.create_async()
		.await;

	let fetcher = Fetcher::new(ClientConfig::new().with_base_url(server.url().parse().unwrap())).unwrap();
	let err = fetcher
		.fetch_validated("/missing", &todo_rule, RequestOptions::new())
		.await
		.unwrap_err();

	assert_eq!(err.to_string(), "404: Not Found.");
	assert_eq!(
		err.as_network(),
		Some(&NetworkError::Status {
			status: 404,
			status_text: "Not Found".into()
		})
	);
}

#[rstest]
#[tokio::test]
async fn test_invalid_data_is_validation_error(
	fetcher: Fetcher,
	todo_rule: TodoRule,
) {
	let mut server = mockito::Server::new_async().await;
	let _mock = server
		.mock("GET", "/todos/1")
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(r#"{"id":"mock-a7e6c42b-4918-8976-55676e20d4a4","name":"foo"}"#)
		.create_async()
		.await;

	let err = fetcher
		.fetch_validated(
			format!("{}/todos/1", server.url()),
			&todo_rule,
			RequestOptions::new(),
		)
		.await
		.unwrap_err();

	assert!(err.is_validation());
	let detail = err.as_validation().unwrap();
	assert_eq!(detail.messages(), vec!["Expected number, received string"]);
	assert_eq!(detail.issues()[0].path, vec!["id".to_string()]);
}

#[rstest]
#[tokio::test]
async fn test_non_json_body_is_parse_error(
	fetcher: Fetcher,
	todo_rule: TodoRule,
) {
	let mut server = mockito::Server::new_async().await;
	let _mock = server
		.mock("GET", "/")
		.with_status(200)
		.with_body("<!doctype html>")
		.create_async()
		.await;

	let err = fetcher
		.fetch_validated(server.url(), &todo_rule, RequestOptions::new())
		.await
		.unwrap_err();
	assert!(matches!(err, FetchError::Parse(_)));
}

#[rstest]
#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error(todo_rule: TodoRule) {
	let port = {
		let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
		listener.local_addr().unwrap().port()
	};

	let err = fetch_validated(
		format!("http://127.0.0.1:{}/todos/1", port),
		&todo_rule,
		RequestOptions::new().timeout(Duration::from_secs(5)),
	)
	.await
	.unwrap_err();
	assert!(matches!(
		err,
		FetchError::Network(NetworkError::Transport(_))
	));
}

#[rstest]
#[tokio::test]
async fn test_invalid_url_is_rejected_before_sending(todo_rule: TodoRule) {
	let err = fetch_validated("not a url", &todo_rule, RequestOptions::new())
		.await
		.unwrap_err();
	assert!(matches!(
		err,
		FetchError::Network(NetworkError::InvalidUrl { .. })
	));
}

#[rstest]
#[tokio::test]
async fn test_descriptor_sends_method_headers_and_body() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/todos")
		.match_header("authorization", "Bearer token")
		.match_header("x-client", "schemaform")
		.match_header("content-type", "application/json")
		.match_body(mockito::Matcher::Json(json!({"name": "foo"})))
		.with_status(201)
		.with_header("content-type", "application/json")
		.with_body(r#"{"id":7,"name":"foo"}"#)
		.expect(1)
		.create_async()
		.await;

	let fetcher = Fetcher::new(
		ClientConfig::new()
			.with_base_url(server.url().parse().unwrap())
			.with_default_header("x-client", "schemaform"),
	)
	.unwrap();
	let descriptor = RequestDescriptor::new(
		"/todos",
		RequestOptions::new()
			.method(Method::Post)
			.header("authorization", "Bearer token"),
	);
	let created = fetcher
		.fetch_validated(
			descriptor,
			&rules::object().field("id", rules::number()),
			RequestOptions::new().json(json!({"name": "foo"})),
		)
		.await
		.unwrap();

	assert_eq!(created.to_json().unwrap(), json!({"id": 7}));
	mock.assert_async().await;
}
