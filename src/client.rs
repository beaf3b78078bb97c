//! HTTP client for the VoIP.ms REST/JSON API.
//!
//! The [`Client`] type is the main entry point for making API calls.
//! Use [`ClientBuilder`] to configure and create clients.

use crate::{
    api::{AccountsApi, CdrApi, ClientsApi, GeneralApi},
    form::form_fields,
    response::{STATUS_SUCCESS, StatusReport},
    Error, Response, Result,
};
use http::{header::CONTENT_TYPE, HeaderValue, StatusCode};
use reqwest::multipart;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// Parameter names the client adds to every call. Callers must not supply
/// them, in the query string or in a POST payload.
const RESERVED_PARAMS: [&str; 3] = ["api_username", "api_password", "method"];

/// An HTTP client for the VoIP.ms API.
///
/// The client holds the endpoint URL, the account credentials and the debug
/// flag, and is immutable after construction. It is designed to be reused:
/// it maintains a connection pool, and cloning shares the same underlying
/// state, so concurrent calls from independent tasks need no synchronization.
///
/// Every remote operation is selected by a *method name* (`"getBalance"`,
/// `"createSubAccount"`, ...) passed alongside either query parameters
/// ([`Client::get`]) or a form payload ([`Client::post`]). The grouped
/// wrappers returned by [`Client::general`], [`Client::accounts`],
/// [`Client::cdr`] and [`Client::clients`] supply those literals for the
/// documented API surface.
///
/// # Examples
///
/// ```no_run
/// use voipms::Client;
///
/// # async fn example() -> Result<(), voipms::Error> {
/// let client = Client::builder()
///     .endpoint("https://voip.ms/api/v1/rest.php")?
///     .credentials("user@example.com", "api password")
///     .build()?;
///
/// let balance = client.general().get_balance(false).await?;
/// println!("Balance: {}", balance.data.balance.current_balance);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    endpoint: Url,
    username: String,
    password: String,
    debug: bool,
    timeout: Option<Duration>,
}

impl Client {
    /// Creates a client with the given endpoint and credentials.
    ///
    /// Equivalent to the builder with no timeout and debug logging off.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use voipms::Client;
    ///
    /// # fn example() -> Result<(), voipms::Error> {
    /// let client = Client::new("https://voip.ms/api/v1/rest.php", "user", "pass")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        endpoint: impl AsRef<str>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::builder()
            .endpoint(endpoint)?
            .credentials(username, password)
            .build()
    }

    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        self.inner.endpoint.as_str()
    }

    /// Methods under the General grouping (balance, servers, localization).
    pub fn general(&self) -> GeneralApi<'_> {
        GeneralApi::new(self)
    }

    /// Methods under the Sub Accounts grouping.
    pub fn accounts(&self) -> AccountsApi<'_> {
        AccountsApi::new(self)
    }

    /// Methods under the Call Detail Records grouping.
    pub fn cdr(&self) -> CdrApi<'_> {
        CdrApi::new(self)
    }

    /// Methods under the Clients (reseller) grouping.
    pub fn clients(&self) -> ClientsApi<'_> {
        ClientsApi::new(self)
    }

    /// Invokes an API method with an HTTP GET.
    ///
    /// Caller-supplied `params` are appended to the query string first,
    /// followed by the mandatory `api_username`, `api_password` and `method`
    /// parameters. The request declares `Content-Type: application/json`
    /// even though it carries no body; the API has always been addressed
    /// that way and some deployments reject anything else.
    ///
    /// The call succeeds only if the server answers 200 OK *and*, when the
    /// decoded `T` reports a logical status (see
    /// [`StatusReport`](crate::StatusReport)), that status is `"success"`.
    ///
    /// # Errors
    ///
    /// * [`Error::ConfigurationError`] if a caller param uses a reserved name
    /// * [`Error::Network`] on connection or timeout failure
    /// * [`Error::DeserializationFailed`] if the body is not valid JSON for `T`
    /// * [`Error::HttpStatus`] if the server answered with a non-200 status
    /// * [`Error::ApiStatus`] if the decoded status is not `"success"`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use serde::Deserialize;
    /// use voipms::{BaseResponse, Client, StatusReport};
    ///
    /// #[derive(Deserialize)]
    /// struct TerminationRates {
    ///     #[serde(flatten)]
    ///     base: BaseResponse,
    /// }
    ///
    /// impl StatusReport for TerminationRates {
    ///     fn api_status(&self) -> Option<&str> {
    ///         self.base.api_status()
    ///     }
    /// }
    ///
    /// # async fn example() -> Result<(), voipms::Error> {
    /// # let client = Client::new("https://voip.ms/api/v1/rest.php", "u", "p")?;
    /// let response = client
    ///     .get::<TerminationRates>("getTerminationRates", &[("route", "value"), ("query", "1")])
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get<T>(&self, method: &str, params: &[(&str, &str)]) -> Result<Response<T>>
    where
        T: DeserializeOwned + StatusReport,
    {
        for (name, _) in params {
            if RESERVED_PARAMS.contains(name) {
                return Err(Error::ConfigurationError(format!(
                    "Query parameter `{}` is reserved for the client",
                    name
                )));
            }
        }

        let mut url = self.inner.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in params {
                pairs.append_pair(name, value);
            }
            pairs.append_pair("api_username", &self.inner.username);
            pairs.append_pair("api_password", &self.inner.password);
            pairs.append_pair("method", method);
        }

        let mut request = self
            .inner
            .http_client
            .get(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = self.call(request.build()?).await?;
        self.check_status(method, response)
    }

    /// Invokes an API method with an HTTP POST.
    ///
    /// The request body is `multipart/form-data` carrying `api_username`,
    /// `api_password` and `method` as plain text fields, followed by one
    /// field per payload member (see [`form_fields`](crate::form_fields) for
    /// the name and value rules).
    ///
    /// The same two-stage success check as [`Client::get`] applies.
    ///
    /// # Errors
    ///
    /// As for [`Client::get`], plus [`Error::SerializationFailed`] if the
    /// payload does not flatten to named string fields.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use serde::Serialize;
    /// use voipms::{BaseResponse, Client};
    ///
    /// #[derive(Serialize)]
    /// struct SetThreshold {
    ///     client: String,
    ///     threshold: String,
    /// }
    ///
    /// # async fn example() -> Result<(), voipms::Error> {
    /// # let client = Client::new("https://voip.ms/api/v1/rest.php", "u", "p")?;
    /// let payload = SetThreshold {
    ///     client: "562921".to_string(),
    ///     threshold: "10.00".to_string(),
    /// };
    ///
    /// let response = client
    ///     .post::<_, BaseResponse>("setClientThreshold", &payload)
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn post<P, T>(&self, method: &str, payload: &P) -> Result<Response<T>>
    where
        P: Serialize,
        T: DeserializeOwned + StatusReport,
    {
        let fields = form_fields(payload)?;
        for (name, _) in &fields {
            if RESERVED_PARAMS.contains(&name.as_str()) {
                return Err(Error::ConfigurationError(format!(
                    "Payload field `{}` is reserved for the client",
                    name
                )));
            }
        }

        if self.inner.debug {
            tracing::debug!(fields = ?fields, "Encoded form payload");
        }

        let mut form = multipart::Form::new()
            .text("api_username", self.inner.username.clone())
            .text("api_password", self.inner.password.clone())
            .text("method", method.to_owned());
        for (name, value) in fields {
            form = form.text(name, value);
        }

        let mut request = self
            .inner
            .http_client
            .post(self.inner.endpoint.clone())
            .multipart(form);
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = self.call(request.build()?).await?;
        self.check_status(method, response)
    }

    /// Performs one HTTP exchange and decodes the JSON body into `T`.
    ///
    /// This is the transport primitive underneath [`Client::get`] and
    /// [`Client::post`]: it sends the prebuilt request, buffers the whole
    /// response body, and decodes it. It does *not* interpret the HTTP
    /// status code or any logical status field; those checks belong to the
    /// callers. The returned [`Response`] carries the decoded data together
    /// with the status, headers, latency and raw body.
    ///
    /// With debug logging enabled, the outgoing request and the buffered
    /// response body are emitted as `tracing` events before the decoder
    /// runs. Decoding always happens from that buffer, so a failed decode
    /// still reports the exact body it saw.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the exchange fails and
    /// [`Error::DeserializationFailed`] if the body is not valid JSON for
    /// `T`.
    pub async fn call<T>(&self, request: reqwest::Request) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let start = Instant::now();
        let method = request.method().clone();
        let url = request.url().clone();

        tracing::debug!(method = %method, url = %url, "Executing HTTP request");
        if self.inner.debug {
            let body = request
                .body()
                .and_then(reqwest::Body::as_bytes)
                .map(String::from_utf8_lossy);
            tracing::debug!(
                headers = ?request.headers(),
                body = %body.as_deref().unwrap_or(""),
                "Outgoing request"
            );
        }

        let response = self.inner.http_client.execute(request).await?;

        let status = response.status();
        let headers = response.headers().clone();
        let raw_body = response.text().await?;
        let latency = start.elapsed();

        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            "Received HTTP response"
        );
        if self.inner.debug {
            tracing::debug!(body = %raw_body, "Response body");
        }

        match serde_json::from_str::<T>(&raw_body) {
            Ok(data) => Ok(Response::new(data, raw_body, status, headers, latency)),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    raw_response = %raw_body,
                    "Failed to deserialize response"
                );

                Err(Error::DeserializationFailed {
                    raw_response: raw_body,
                    serde_error: e.to_string(),
                    status,
                })
            }
        }
    }

    /// Applies the two-stage success check: HTTP status first, then the
    /// logical status the decoded response reports, if any.
    fn check_status<T>(&self, method: &str, response: Response<T>) -> Result<Response<T>>
    where
        T: StatusReport,
    {
        if response.status != StatusCode::OK {
            tracing::warn!(
                method,
                status = response.status.as_u16(),
                "API call failed with an HTTP error"
            );
            let Response {
                raw_body,
                status,
                headers,
                ..
            } = response;
            return Err(Error::HttpStatus {
                status,
                raw_response: raw_body,
                headers,
            });
        }

        if let Some(status) = response.data.api_status() {
            if status != STATUS_SUCCESS {
                tracing::warn!(method, status, "API call failed with a logical error");
                return Err(Error::ApiStatus(status.to_owned()));
            }
        }

        Ok(response)
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use voipms::ClientBuilder;
///
/// # fn example() -> Result<(), voipms::Error> {
/// let client = ClientBuilder::new()
///     .endpoint("https://voip.ms/api/v1/rest.php")?
///     .credentials("user@example.com", "api password")
///     .timeout(Duration::from_secs(30))
///     .debug(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    endpoint: Option<Url>,
    username: Option<String>,
    password: Option<String>,
    debug: bool,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            endpoint: None,
            username: None,
            password: None,
            debug: false,
            timeout: None,
        }
    }

    /// Sets the API endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid. A malformed endpoint is a
    /// configuration mistake and is reported here, at construction, rather
    /// than on every call.
    pub fn endpoint(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.endpoint = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Sets the `api_username`/`api_password` credential pair sent with
    /// every call.
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Enables debug logging of full requests and responses.
    ///
    /// The dumps include the credentials and the raw bodies, emitted as
    /// `tracing` events at DEBUG level. Leave this off anywhere the
    /// subscriber output could be read by someone who should not see them.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets the per-request timeout.
    ///
    /// There is no default; without one, a call waits as long as the
    /// operating system keeps the connection alive.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint or the credentials are missing, or
    /// if the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<Client> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| Error::ConfigurationError("Endpoint URL is required".to_string()))?;
        let username = self
            .username
            .ok_or_else(|| Error::ConfigurationError("API credentials are required".to_string()))?;
        let password = self
            .password
            .ok_or_else(|| Error::ConfigurationError("API credentials are required".to_string()))?;

        let http_client = reqwest::Client::builder().build().map_err(|e| {
            Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                endpoint,
                username,
                password,
                debug: self.debug,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
