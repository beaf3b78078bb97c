//! Example demonstrating comprehensive error handling.
//!
//! This example shows how to:
//! - Handle the API's logical status failures
//! - Deal with deserialization failures
//! - Inspect errors with the helper methods
//! - Handle network errors
//!
//! It talks to the live endpoint with deliberately bad credentials, so it
//! runs without an account. Run with: `cargo run --example error_handling`

use serde::Deserialize;
use voipms::{Client, Error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("voipms=info")
        .init();

    let client = Client::builder()
        .endpoint("https://voip.ms/api/v1/rest.php")?
        .credentials("nobody@example.com", "wrong-password")
        .build()?;

    println!("=== Example 1: Logical Status Failures ===");
    // The API answers HTTP 200 and reports the failure in the body.
    match client.get::<voipms::BaseResponse>("getBalance", &[]).await {
        Ok(response) => println!("Unexpected success: {:?}", response.data),
        Err(Error::ApiStatus(status)) => {
            println!("The API rejected the call!");
            println!("  Status string: {}", status);
        }
        Err(e) => println!("Other error: {}", e),
    }
    println!();

    println!("=== Example 2: Handling Deserialization Errors ===");
    // Define a struct that doesn't match what the API sends back
    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct WrongSchema {
        nonexistent_field: String,
    }

    impl voipms::StatusReport for WrongSchema {}

    match client.get::<WrongSchema>("getBalance", &[]).await {
        Ok(_) => println!("Unexpected success"),
        Err(Error::DeserializationFailed {
            raw_response,
            serde_error,
            status,
        }) => {
            println!("Deserialization Failed!");
            println!("  Status: {}", status);
            println!("  Serde error: {}", serde_error);
            println!(
                "  Raw response (first 200 chars): {}",
                raw_response.chars().take(200).collect::<String>()
            );
        }
        Err(e) => println!("Other error: {}", e),
    }
    println!();

    println!("=== Example 3: Using Error Methods ===");
    // Demonstrate error inspection
    let errors = vec![
        Error::HttpStatus {
            status: http::StatusCode::INTERNAL_SERVER_ERROR,
            raw_response: "Server error".to_string(),
            headers: http::HeaderMap::new(),
        },
        Error::ApiStatus("missing_method".to_string()),
        Error::ConfigurationError("Endpoint URL is required".to_string()),
    ];

    for error in errors {
        println!("Error: {}", error);
        println!("  Status code: {:?}", error.status());
        println!("  Raw response: {:?}", error.raw_response());
        println!("  Is timeout: {}", error.is_timeout());
        println!();
    }

    println!("=== Example 4: Handling Network Errors ===");
    // Try to connect to an unreachable host
    let bad_client = Client::builder()
        .endpoint("https://this-domain-does-not-exist-12345.com")?
        .credentials("nobody@example.com", "wrong-password")
        .build()?;

    match bad_client.get::<serde_json::Value>("getIP", &[]).await {
        Ok(_) => println!("Unexpected success"),
        Err(Error::Network(e)) => {
            println!("Network Error!");
            println!("  Error: {}", e);
            println!("  Is timeout: {}", e.is_timeout());
            println!("  Is connect error: {}", e.is_connect());
        }
        Err(e) => println!("Other error: {}", e),
    }

    Ok(())
}
