//! Response envelope types and the wrapper that preserves raw response details.
//!
//! The [`Response`] type wraps the deserialized response data along with
//! metadata about the HTTP exchange. [`StatusReport`] is the capability a
//! decoded response type may implement to expose the API's logical `status`
//! field; [`BaseResponse`] is the common envelope that carries it.

use http::{HeaderMap, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// The logical status string the API reports when a call succeeded.
pub const STATUS_SUCCESS: &str = "success";

/// Capability for decoded responses that carry the API's logical `status`.
///
/// The VoIP.ms API reports call outcomes in-band: an HTTP 200 response whose
/// body says `{"status":"no_cdr", ...}` is a failed call. Response types that
/// carry the field implement this trait, usually by composing
/// [`BaseResponse`] with `#[serde(flatten)]` and delegating, and the client
/// turns any non-`"success"` value into [`Error::ApiStatus`]. Types without
/// the field keep the default implementation and are gated by HTTP status
/// alone.
///
/// [`Error::ApiStatus`]: crate::Error::ApiStatus
///
/// # Examples
///
/// ```
/// use serde::Deserialize;
/// use voipms::{BaseResponse, StatusReport};
///
/// #[derive(Deserialize)]
/// struct IpResponse {
///     #[serde(flatten)]
///     base: BaseResponse,
///     ip: String,
/// }
///
/// impl StatusReport for IpResponse {
///     fn api_status(&self) -> Option<&str> {
///         self.base.api_status()
///     }
/// }
///
/// let decoded: IpResponse =
///     serde_json::from_str(r#"{"status":"success","ip":"127.0.0.1"}"#).unwrap();
/// assert_eq!(decoded.api_status(), Some("success"));
/// assert_eq!(decoded.ip, "127.0.0.1");
/// ```
pub trait StatusReport {
    /// The logical status the API reported, if this response type carries one.
    fn api_status(&self) -> Option<&str> {
        None
    }
}

/// The common response envelope: the logical `status` field alone.
///
/// Useful directly as a target type for calls whose success is all the caller
/// cares about (`setSubAccount`, `addCharge`, ...), and as the flattened base
/// of richer response types.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BaseResponse {
    /// Logical outcome of the call; `"success"` when the call succeeded.
    pub status: String,
}

impl BaseResponse {
    /// Returns `true` if the reported status is `"success"`.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

impl StatusReport for BaseResponse {
    fn api_status(&self) -> Option<&str> {
        Some(&self.status)
    }
}

/// Untyped targets honor a top-level `"status"` member when one is present.
impl StatusReport for serde_json::Value {
    fn api_status(&self) -> Option<&str> {
        self.get("status").and_then(serde_json::Value::as_str)
    }
}

/// A string value with its human-readable description.
///
/// Many listing methods (`getLanguages`, `getCountries`, ...) return arrays
/// of these pairs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValueDescription {
    /// The machine value (`"en"`, `"ulaw"`, ...).
    pub value: String,
    /// The human-readable description (`"English"`, ...).
    pub description: String,
}

/// A numeric value with its human-readable description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NumberValueDescription {
    /// The machine value.
    pub value: serde_json::Number,
    /// The human-readable description.
    pub description: String,
}

/// A decoded API response together with details of the HTTP exchange that
/// produced it: latency, status code, headers, and the raw body.
///
/// Dereferences to the payload, so `response.balance` reads through to the
/// decoded data while `response.latency` stays available alongside it.
///
/// # Examples
///
/// ```no_run
/// use serde::Deserialize;
/// use voipms::{BaseResponse, Client, StatusReport};
///
/// #[derive(Deserialize)]
/// struct IpResponse {
///     #[serde(flatten)]
///     base: BaseResponse,
///     ip: String,
/// }
///
/// impl StatusReport for IpResponse {
///     fn api_status(&self) -> Option<&str> {
///         self.base.api_status()
///     }
/// }
///
/// # async fn example() -> Result<(), voipms::Error> {
/// let client = Client::new("https://voip.ms/api/v1/rest.php", "user", "pass")?;
///
/// let response = client.get::<IpResponse>("getIP", &[]).await?;
///
/// println!("IP: {}", response.data.ip);
/// println!("Request took {:?}", response.latency);
/// println!("Status: {}", response.status);
///
/// // Access raw response for debugging
/// if response.latency > std::time::Duration::from_secs(1) {
///     println!("Slow response body: {}", response.raw_body);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The decoded response payload.
    pub data: T,

    /// The response body exactly as the server sent it.
    ///
    /// Kept because the API occasionally sends more (or differently shaped)
    /// data than a target type captures.
    pub raw_body: String,

    /// The HTTP status code. Always `200 OK` for responses handed back by
    /// [`Client::get`]/[`Client::post`](crate::Client::post).
    ///
    /// [`Client::get`]: crate::Client::get
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// Wall-clock time from sending the request to the fully read body.
    pub latency: Duration,
}

impl<T> Response<T> {
    /// Wraps decoded data with its exchange metadata. The client calls this
    /// after a successful decode; it is public so tests and adapters can
    /// fabricate responses.
    pub fn new(
        data: T,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
    ) -> Self {
        Self {
            data,
            raw_body,
            status,
            headers,
            latency,
        }
    }

    /// Transforms the payload while keeping the exchange metadata intact.
    ///
    /// # Examples
    ///
    /// ```
    /// # use voipms::{BaseResponse, Response};
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response::new(
    ///     BaseResponse { status: "success".to_string() },
    ///     r#"{"status":"success"}"#.to_string(),
    ///     StatusCode::OK,
    ///     HeaderMap::new(),
    ///     Duration::from_millis(100),
    /// );
    ///
    /// let status_only = response.map(|body| body.status);
    /// assert_eq!(status_only.data, "success");
    /// assert_eq!(status_only.status, StatusCode::OK);
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
        }
    }

    /// Looks up a header value by name, as a string.
    ///
    /// Returns `None` when the header is absent or its value is not valid
    /// UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// # use voipms::Response;
    /// # use http::{HeaderMap, HeaderValue, StatusCode};
    /// # use std::time::Duration;
    /// let mut headers = HeaderMap::new();
    /// headers.insert("x-served-by", HeaderValue::from_static("voipms-api-3"));
    ///
    /// let response = Response::new(
    ///     (),
    ///     String::new(),
    ///     StatusCode::OK,
    ///     headers,
    ///     Duration::from_millis(100),
    /// );
    ///
    /// assert_eq!(response.header("x-served-by"), Some("voipms-api-3"));
    /// assert_eq!(response.header("x-missing"), None);
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

impl<T> AsRef<T> for Response<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
