//! Call detail records and rate lookups.

use serde::Deserialize;

use crate::client::Client;
use crate::error::Result;
use crate::response::{BaseResponse, Response, StatusReport};

/// Wrapper for the call detail record operations.
///
/// Created by [`Client::cdr`].
#[derive(Clone, Copy)]
pub struct CdrApi<'a> {
    client: &'a Client,
}

impl<'a> CdrApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Retrieves the call detail records matching `query`.
    ///
    /// The service only returns calls whose disposition is among the ones
    /// the query enables, so a query with every flag off matches nothing.
    pub async fn get_cdr(&self, query: &CdrQuery) -> Result<Response<CdrResponse>> {
        self.client.get("getCDR", &query.params()).await
    }

    /// Retrieves the per destination rates of a package. `query` is a
    /// destination search term such as a country name or a dialing prefix.
    pub async fn get_rates(&self, package: &str, query: &str) -> Result<Response<RatesResponse>> {
        self.client
            .get("getRates", &[("package", package), ("query", query)])
            .await
    }
}

/// Query for [`CdrApi::get_cdr`].
///
/// Dates are `YYYY-MM-DD`. The disposition flags select which call outcomes
/// to include; each enabled flag travels as a `"1"` parameter and disabled
/// flags are omitted entirely.
///
/// # Examples
///
/// ```
/// use voipms::api::CdrQuery;
///
/// let query = CdrQuery {
///     date_from: "2024-03-01".to_owned(),
///     date_to: "2024-03-31".to_owned(),
///     answered: true,
///     busy: true,
///     ..CdrQuery::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct CdrQuery {
    pub date_from: String,
    pub date_to: String,
    /// UTC offset of the timestamps to report, such as `"-5"`. Omitted from
    /// the request when `None`.
    pub timezone: Option<String>,
    pub answered: bool,
    pub noanswer: bool,
    pub busy: bool,
    pub failed: bool,
}

impl CdrQuery {
    fn params(&self) -> Vec<(&str, &str)> {
        let mut params = vec![
            ("date_from", self.date_from.as_str()),
            ("date_to", self.date_to.as_str()),
        ];
        if let Some(timezone) = &self.timezone {
            params.push(("timezone", timezone));
        }
        if self.answered {
            params.push(("answered", "1"));
        }
        if self.noanswer {
            params.push(("noanswer", "1"));
        }
        if self.busy {
            params.push(("busy", "1"));
        }
        if self.failed {
            params.push(("failed", "1"));
        }
        params
    }
}

/// Response payload for [`CdrApi::get_cdr`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CdrResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Absent on failure statuses such as `"no_cdr"`.
    #[serde(default)]
    pub cdr: Vec<CdrEntry>,
}

impl StatusReport for CdrResponse {
    fn api_status(&self) -> Option<&str> {
        self.base.api_status()
    }
}

/// A single call detail record. The service reports every column as a
/// string, including durations and monetary amounts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CdrEntry {
    pub date: String,
    pub callerid: String,
    pub destination: String,
    pub description: String,
    pub account: String,
    pub disposition: String,
    pub duration: String,
    pub seconds: String,
    pub rate: String,
    pub total: String,
    pub uniqueid: String,
}

/// Response payload for [`CdrApi::get_rates`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RatesResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default)]
    pub rates: Vec<Rate>,
}

impl StatusReport for RatesResponse {
    fn api_status(&self) -> Option<&str> {
        self.base.api_status()
    }
}

/// A per destination rate within a package.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rate {
    pub destination: String,
    pub prefix: String,
    pub client_increment: String,
    pub client_rate: String,
}
