//! General account operations: balance, public IP, languages, and servers.

use serde::Deserialize;

use crate::client::Client;
use crate::error::Result;
use crate::response::{BaseResponse, Response, StatusReport, ValueDescription};

/// Wrapper for the general account operations.
///
/// Created by [`Client::general`]. Borrows the client, so it is cheap to
/// construct on the fly for each call.
///
/// # Examples
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), voipms::Error> {
/// let client = voipms::Client::new(
///     "https://voip.ms/api/v1/rest.php",
///     "user@example.com",
///     "api-password",
/// )?;
///
/// let balance = client.general().get_balance(false).await?;
/// println!("current balance: {}", balance.balance.current_balance);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy)]
pub struct GeneralApi<'a> {
    client: &'a Client,
}

impl<'a> GeneralApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Retrieves the account balance.
    ///
    /// When `advanced` is true the response also carries the spent/calls/time
    /// counters, both total and for the current day.
    pub async fn get_balance(&self, advanced: bool) -> Result<Response<BalanceResponse>> {
        let params: &[(&str, &str)] = if advanced { &[("advanced", "1")] } else { &[] };
        self.client.get("getBalance", params).await
    }

    /// Retrieves the IP address the API sees this client connecting from.
    pub async fn get_ip(&self) -> Result<Response<IpResponse>> {
        self.client.get("getIP", &[]).await
    }

    /// Retrieves the languages the service supports, optionally restricted
    /// to a single language code such as `"en"`.
    pub async fn get_languages(
        &self,
        language: Option<&str>,
    ) -> Result<Response<LanguagesResponse>> {
        let mut params = Vec::new();
        if let Some(language) = language {
            params.push(("language", language));
        }
        self.client.get("getLanguages", &params).await
    }

    /// Retrieves the registration servers, optionally restricted to a single
    /// point of presence.
    pub async fn get_servers_info(
        &self,
        server_pop: Option<&str>,
    ) -> Result<Response<ServersInfoResponse>> {
        let mut params = Vec::new();
        if let Some(server_pop) = server_pop {
            params.push(("server_pop", server_pop));
        }
        self.client.get("getServersInfo", &params).await
    }
}

/// Response payload for [`GeneralApi::get_balance`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BalanceResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    pub balance: Balance,
}

impl StatusReport for BalanceResponse {
    fn api_status(&self) -> Option<&str> {
        self.base.api_status()
    }
}

/// Account balance figures. The advanced counters are only present when the
/// balance was requested with `advanced` set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Balance {
    pub current_balance: serde_json::Number,
    pub spent_total: Option<serde_json::Number>,
    pub calls_total: Option<serde_json::Number>,
    pub time_total: Option<String>,
    pub spent_today: Option<serde_json::Number>,
    pub calls_today: Option<serde_json::Number>,
    pub time_today: Option<String>,
}

/// Response payload for [`GeneralApi::get_ip`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IpResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    pub ip: String,
}

impl StatusReport for IpResponse {
    fn api_status(&self) -> Option<&str> {
        self.base.api_status()
    }
}

/// Response payload for [`GeneralApi::get_languages`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LanguagesResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default)]
    pub languages: Vec<ValueDescription>,
}

impl StatusReport for LanguagesResponse {
    fn api_status(&self) -> Option<&str> {
        self.base.api_status()
    }
}

/// Response payload for [`GeneralApi::get_servers_info`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServersInfoResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default)]
    pub servers: Vec<ServerInfo>,
}

impl StatusReport for ServersInfoResponse {
    fn api_status(&self) -> Option<&str> {
        self.base.api_status()
    }
}

/// A registration server as reported by [`GeneralApi::get_servers_info`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerInfo {
    pub server_name: String,
    pub server_shortname: String,
    pub server_hostname: String,
    pub server_ip: String,
    pub server_country: String,
    pub server_pop: String,
}
