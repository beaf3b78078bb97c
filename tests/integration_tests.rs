//! Integration tests using wiremock to simulate the API endpoint.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use voipms::{BaseResponse, Client, Error, StatusReport};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct BalanceBody {
    #[serde(flatten)]
    base: BaseResponse,
    balance: String,
}

impl StatusReport for BalanceBody {
    fn api_status(&self) -> Option<&str> {
        self.base.api_status()
    }
}

fn test_client(mock_server: &MockServer) -> Client {
    Client::builder()
        .endpoint(mock_server.uri())
        .unwrap()
        .credentials("user@example.com", "secret")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_successful_get_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("method", "getBalance"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "balance": "10.00",
            })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let response = client.get::<BalanceBody>("getBalance", &[]).await.unwrap();

    assert_eq!(response.data.balance, "10.00");
    assert_eq!(response.data.base.status, "success");
    assert_eq!(response.status.as_u16(), 200);
    assert!(response.raw_body.contains("10.00"));
}

#[tokio::test]
async fn test_get_appends_credentials_and_method() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("api_username", "user@example.com"))
        .and(query_param("api_password", "secret"))
        .and(query_param("method", "getCDR"))
        .and(query_param("date_from", "2024-03-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .get::<BaseResponse>("getCDR", &[("date_from", "2024-03-01")])
        .await
        .unwrap();

    // Caller parameters come first, the client's own trio last.
    let requests = mock_server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap().to_string();
    assert!(query.find("date_from").unwrap() < query.find("api_username").unwrap());
    assert!(query.find("api_password").unwrap() < query.find("method").unwrap());
}

#[tokio::test]
async fn test_get_sends_json_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.get::<BaseResponse>("getIP", &[]).await.unwrap();
}

#[tokio::test]
async fn test_reserved_query_parameter_is_rejected() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    for reserved in ["api_username", "api_password", "method"] {
        let result = client
            .get::<serde_json::Value>("getBalance", &[(reserved, "override")])
            .await;

        match result {
            Err(Error::ConfigurationError(message)) => {
                assert!(message.contains(reserved), "message was: {}", message);
            }
            _ => panic!("Expected ConfigurationError, got {:?}", result),
        }
    }

    // The rejection happens before any request is built.
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_api_status_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "no_cdr"})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.get::<BaseResponse>("getCDR", &[]).await;

    match result {
        Err(Error::ApiStatus(status)) => {
            assert_eq!(status, "no_cdr");
            assert_eq!(Error::ApiStatus(status).to_string(), "no_cdr");
        }
        _ => panic!("Expected ApiStatus, got {:?}", result),
    }
}

#[tokio::test]
async fn test_response_without_status_capability_succeeds() {
    let mock_server = MockServer::start().await;

    #[derive(Debug, Deserialize)]
    struct Unchecked {
        note: String,
    }

    impl StatusReport for Unchecked {}

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"note": "anything"})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let response = client.get::<Unchecked>("getNote", &[]).await.unwrap();

    assert_eq!(response.data.note, "anything");
}

#[tokio::test]
async fn test_http_error_takes_precedence_over_body_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"status": "success"})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.get::<BaseResponse>("getBalance", &[]).await;

    match result {
        Err(Error::HttpStatus {
            status,
            raw_response,
            ..
        }) => {
            assert_eq!(status.as_u16(), 500);
            assert!(raw_response.contains("success"));
            assert_eq!(
                Error::HttpStatus {
                    status,
                    raw_response,
                    headers: Default::default(),
                }
                .to_string(),
                "500 Internal Server Error"
            );
        }
        _ => panic!("Expected HttpStatus, got {:?}", result),
    }
}

#[tokio::test]
async fn test_http_error_4xx() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "gone"})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.get::<serde_json::Value>("getBalance", &[]).await;

    match result {
        Err(error @ Error::HttpStatus { .. }) => {
            assert_eq!(error.to_string(), "404 Not Found");
            assert_eq!(error.status().map(|s| s.as_u16()), Some(404));
            assert_eq!(error.raw_response(), Some(r#"{"message":"gone"}"#));
        }
        _ => panic!("Expected HttpStatus, got {:?}", result),
    }
}

#[tokio::test]
async fn test_deserialization_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("invalid json"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.get::<BalanceBody>("getBalance", &[]).await;

    match result {
        Err(Error::DeserializationFailed {
            raw_response,
            serde_error,
            status,
        }) => {
            assert_eq!(status.as_u16(), 200);
            assert_eq!(raw_response, "invalid json");
            assert!(serde_error.contains("expected"));
        }
        _ => panic!("Expected DeserializationFailed, got {:?}", result),
    }
}

#[tokio::test]
async fn test_undecodable_error_page_reports_decode_failure() {
    let mock_server = MockServer::start().await;

    // Proxies and gateways answer with HTML; decoding fails before the
    // status check, and the error keeps both the page and the HTTP status.
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>Not Found</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.get::<BaseResponse>("getBalance", &[]).await;

    match result {
        Err(Error::DeserializationFailed {
            raw_response,
            status,
            ..
        }) => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(raw_response, "<html>Not Found</html>");
        }
        _ => panic!("Expected DeserializationFailed, got {:?}", result),
    }
}

#[tokio::test]
async fn test_successful_post_request() {
    let mock_server = MockServer::start().await;

    #[derive(Serialize)]
    struct DelAccount {
        id: String,
    }

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("delSubAccount"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let response = client
        .post::<_, BaseResponse>(
            "delSubAccount",
            &DelAccount {
                id: "12345".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(response.is_success());

    let requests = mock_server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains(r#"name="api_username""#));
    assert!(body.contains("user@example.com"));
    assert!(body.contains(r#"name="api_password""#));
    assert!(body.contains(r#"name="method""#));
    assert!(body.contains("delSubAccount"));
    assert!(body.contains(r#"name="id""#));
    assert!(body.contains("12345"));
}

#[tokio::test]
async fn test_post_sends_one_part_per_payload_member() {
    let mock_server = MockServer::start().await;

    #[derive(Serialize)]
    struct SetThreshold {
        client: String,
        threshold: String,
        email: String,
    }

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .post::<_, BaseResponse>(
            "setClientThreshold",
            &SetThreshold {
                client: "562921".to_string(),
                threshold: "10.00".to_string(),
                email: "billing@example.com".to_string(),
            },
        )
        .await
        .unwrap();

    // Three payload members plus the credentials and the method name.
    let requests = mock_server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert_eq!(body.matches("Content-Disposition").count(), 6);
}

#[tokio::test]
async fn test_reserved_payload_field_is_rejected() {
    let mock_server = MockServer::start().await;

    #[derive(Serialize)]
    struct Sneaky {
        method: String,
    }

    let client = test_client(&mock_server);
    let result = client
        .post::<_, BaseResponse>(
            "getBalance",
            &Sneaky {
                method: "delSubAccount".to_string(),
            },
        )
        .await;

    match result {
        Err(Error::ConfigurationError(message)) => {
            assert!(message.contains("method"), "message was: {}", message);
        }
        _ => panic!("Expected ConfigurationError, got {:?}", result),
    }
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_string_payload_field_is_rejected() {
    let mock_server = MockServer::start().await;

    #[derive(Serialize)]
    struct BadPayload {
        account: String,
        seconds: u32,
    }

    let client = test_client(&mock_server);
    let result = client
        .post::<_, BaseResponse>(
            "setSubAccount",
            &BadPayload {
                account: "100000_sub".to_string(),
                seconds: 30,
            },
        )
        .await;

    match result {
        Err(Error::SerializationFailed(message)) => {
            assert!(message.contains("seconds"), "message was: {}", message);
        }
        _ => panic!("Expected SerializationFailed, got {:?}", result),
    }
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_connection_error() {
    // Nothing listens on port 1.
    let client = Client::builder()
        .endpoint("http://127.0.0.1:1")
        .unwrap()
        .credentials("user@example.com", "secret")
        .build()
        .unwrap();

    let result = client.get::<BaseResponse>("getBalance", &[]).await;

    match result {
        Err(Error::Network(_)) => {}
        _ => panic!("Expected Network, got {:?}", result),
    }
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "success"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .endpoint(mock_server.uri())
        .unwrap()
        .credentials("user@example.com", "secret")
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let result = client.get::<BaseResponse>("getBalance", &[]).await;

    match result {
        Err(error @ Error::Network(_)) => assert!(error.is_timeout()),
        _ => panic!("Expected Network, got {:?}", result),
    }
}

#[tokio::test]
async fn test_debug_mode_does_not_change_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "balance": "10.00",
            })),
        )
        .mount(&mock_server)
        .await;

    let quiet = test_client(&mock_server);
    let verbose = Client::builder()
        .endpoint(mock_server.uri())
        .unwrap()
        .credentials("user@example.com", "secret")
        .debug(true)
        .build()
        .unwrap();

    let from_quiet = quiet.get::<BalanceBody>("getBalance", &[]).await.unwrap();
    let from_verbose = verbose.get::<BalanceBody>("getBalance", &[]).await.unwrap();

    assert_eq!(from_quiet.data, from_verbose.data);
}

#[tokio::test]
async fn test_response_metadata() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "success"}))
                .insert_header("x-request-id", "abc-123"),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let response = client.get::<BaseResponse>("getBalance", &[]).await.unwrap();

    assert_eq!(response.status.as_u16(), 200);
    // Latency is measured - just verify it exists (can be 0 for very fast responses)
    let _ = response.latency;
    assert!(response.raw_body.contains("success"));
    assert_eq!(response.header("x-request-id"), Some("abc-123"));
}

#[tokio::test]
async fn test_builder_rejects_invalid_endpoint() {
    let result = Client::builder().endpoint("not a url");

    match result {
        Err(Error::InvalidUrl(_)) => {}
        Ok(_) => panic!("Expected InvalidUrl"),
        Err(e) => panic!("Expected InvalidUrl, got {:?}", e),
    }
}

#[tokio::test]
async fn test_builder_requires_credentials() {
    let result = Client::builder()
        .endpoint("https://voip.ms/api/v1/rest.php")
        .unwrap()
        .build();

    match result {
        Err(Error::ConfigurationError(message)) => {
            assert!(message.contains("credentials"), "message was: {}", message);
        }
        _ => panic!("Expected ConfigurationError"),
    }
}
