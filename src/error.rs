//! Error types for VoIP.ms API calls.
//!
//! One enum covers every way a call can fail, and any error that saw a
//! server response keeps the raw body, so a misbehaving call can be
//! diagnosed from the error value alone.

use http::{HeaderMap, StatusCode};

/// The main error type for VoIP.ms API calls.
///
/// Every call returns at most one error: the first failure encountered wins
/// and nothing is retried. Each variant maps onto one failure point of a
/// call, from configuration through transport and decoding to the two
/// status checks.
///
/// # Examples
///
/// ```no_run
/// use voipms::{BaseResponse, Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::new("https://voip.ms/api/v1/rest.php", "user", "pass")?;
///
/// match client.get::<BaseResponse>("getIP", &[]).await {
///     Ok(response) => println!("Success: {:?}", response.data),
///     Err(Error::ApiStatus(status)) => {
///         eprintln!("The API rejected the call: {}", status);
///     }
///     Err(Error::HttpStatus { status, raw_response, .. }) => {
///         eprintln!("HTTP error {}: {}", status, raw_response);
///     }
///     Err(Error::DeserializationFailed { raw_response, serde_error, .. }) => {
///         eprintln!("Failed to deserialize. Raw response: {}", raw_response);
///         eprintln!("Serde error: {}", serde_error);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP exchange itself failed: connection refused, DNS lookup,
    /// TLS, timeout, or the body cut off mid-read.
    ///
    /// Wraps the underlying `reqwest::Error`; see [`Error::is_timeout`] for
    /// the common timeout question.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON for the target type.
    ///
    /// Carries the body verbatim next to the decoder's message, so a schema
    /// mismatch can be diagnosed from the error alone. The HTTP status is
    /// kept too: decoding runs before the status checks, so an HTML error
    /// page from a proxy lands here with its real status inside.
    #[error("Failed to deserialize response (status {status}): {serde_error}")]
    DeserializationFailed {
        /// The body that failed to decode, verbatim
        raw_response: String,
        /// What the decoder objected to
        serde_error: String,
        /// The HTTP status code of the exchange
        status: StatusCode,
    },

    /// The server answered with an HTTP status other than 200 OK.
    ///
    /// Displays as the HTTP status line (`"500 Internal Server Error"`).
    /// The body and headers the server sent ride along for inspection.
    #[error("{status}")]
    HttpStatus {
        /// The HTTP status code
        status: StatusCode,
        /// The body that came with the error status
        raw_response: String,
        /// The response headers
        headers: HeaderMap,
    },

    /// The decoded response reported a logical status other than `"success"`.
    ///
    /// The API signals failures such as bad credentials or an unknown method
    /// name inside an HTTP 200 response; the status string it sent is the
    /// entire message (`"invalid_credentials"`, `"ip_not_enabled"`, ...).
    #[error("{0}")]
    ApiStatus(String),

    /// The client or a call was misconfigured.
    ///
    /// Covers missing builder fields and caller-supplied parameters that
    /// collide with `api_username`/`api_password`/`method`.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Failed to encode the POST payload as form fields.
    ///
    /// Payload structs must flatten to named string members; the message
    /// names the first member that did not.
    #[error("Failed to encode form payload: {0}")]
    SerializationFailed(String),

    /// The endpoint URL did not parse.
    ///
    /// Reported by [`ClientBuilder::endpoint`](crate::ClientBuilder::endpoint)
    /// at configuration time; calls never re-validate the URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// The HTTP status code, for the error kinds that reached the HTTP
    /// layer (`HttpStatus` and `DeserializationFailed`).
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::DeserializationFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The raw response body, for the error kinds that carry one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::HttpStatus { raw_response, .. } => Some(raw_response),
            Error::DeserializationFailed { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns `true` if this error was caused by a request timeout.
    ///
    /// Timeouts surface as [`Error::Network`]; this helper saves callers
    /// from digging into the wrapped `reqwest::Error`.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Network(e) if e.is_timeout())
    }
}

/// A specialized `Result` type for VoIP.ms API calls.
///
/// This is a convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
