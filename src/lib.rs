//! # Voipms - A typed client for the VoIP.ms REST API
//!
//! Voipms wraps the VoIP.ms HTTP API in a type-safe client built on top of
//! `reqwest`. It injects the account credentials and method name into every
//! request, validates both the HTTP status and the API's own status field,
//! and preserves raw response data for debugging.
//!
//! ## Quick Start
//!
//! ```no_run
//! use voipms::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), voipms::Error> {
//!     let client = Client::builder()
//!         .endpoint("https://voip.ms/api/v1/rest.php")?
//!         .credentials("user@example.com", "api-password")
//!         .build()?;
//!
//!     // Call a documented operation through its grouping.
//!     let balance = client.general().get_balance(false).await?;
//!     println!("Balance: {}", balance.balance.current_balance);
//!     println!("Request took {:?}", balance.latency);
//!
//!     // Or call any API method directly with your own response type.
//!     let raw = client
//!         .get::<serde_json::Value>("getTransactionHistory", &[("date_from", "2024-03-01")])
//!         .await?;
//!     println!("Raw response: {}", raw.data);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Typed operations** - Groupings for the general, sub account, CDR, and
//!   reseller client methods, each returning a deserialized response struct
//! - **Generic escape hatch** - [`Client::get`] and [`Client::post`] accept
//!   any method name and any `Deserialize` target, so undocumented or new
//!   API methods are still reachable
//! - **Two-stage validation** - A response must carry both an HTTP `200` and
//!   an API status of `"success"` before it is handed back as `Ok`
//! - **Rich error handling** - Errors preserve the raw response body, HTTP
//!   status, and headers for inspection
//! - **Form-encoded writes** - POST payloads are flattened into multipart
//!   form fields the way the API expects, with field names taken from
//!   `serde` attributes
//! - **Automatic logging** - Structured logging with `tracing`, including
//!   optional request/response dumps for debugging
//! - **Connection pooling** - One reusable client with efficient connection
//!   management, cheap to clone and share
//!
//! ## Error Handling
//!
//! A call can fail before the network, on the network, or after it, and the
//! error type distinguishes all of them:
//!
//! ```no_run
//! use voipms::{Client, Error};
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::new("https://voip.ms/api/v1/rest.php", "u", "p")?;
//! match client.get::<serde_json::Value>("getBalance", &[]).await {
//!     Ok(response) => {
//!         println!("Success: {:?}", response.data);
//!     }
//!     Err(Error::ApiStatus(status)) => {
//!         eprintln!("The API rejected the call: {}", status);
//!     }
//!     Err(Error::HttpStatus { status, raw_response, .. }) => {
//!         eprintln!("HTTP error {}: {}", status, raw_response);
//!     }
//!     Err(Error::DeserializationFailed { raw_response, serde_error, status }) => {
//!         eprintln!("Failed to deserialize (status {}):", status);
//!         eprintln!("  Raw response: {}", raw_response);
//!         eprintln!("  Error: {}", serde_error);
//!     }
//!     Err(e) => {
//!         eprintln!("Other error: {}", e);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Debug Logging
//!
//! The client emits `tracing` events for every request. Enabling debug mode
//! additionally dumps full request and response bodies at the `debug` level;
//! note that those dumps include the API credentials.
//!
//! ```no_run
//! use voipms::Client;
//!
//! # fn example() -> Result<(), voipms::Error> {
//! tracing_subscriber::fmt()
//!     .with_env_filter("voipms=debug")
//!     .init();
//!
//! let client = Client::builder()
//!     .endpoint("https://voip.ms/api/v1/rest.php")?
//!     .credentials("user@example.com", "api-password")
//!     .debug(true)
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod api;
mod client;
mod error;
mod form;
mod response;

pub use client::{Client, ClientBuilder};
pub use error::{Error, Result};
pub use form::form_fields;
pub use response::{
    BaseResponse, NumberValueDescription, Response, STATUS_SUCCESS, StatusReport, ValueDescription,
};
