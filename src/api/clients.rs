//! Reseller client management: listing, packages, billing, and signup.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;
use crate::response::{BaseResponse, Response, StatusReport};

/// Wrapper for the reseller client operations.
///
/// Created by [`Client::clients`]. These calls are only meaningful for
/// accounts with the reseller program enabled; on other accounts the
/// service reports a failure status.
#[derive(Clone, Copy)]
pub struct ClientsApi<'a> {
    client: &'a Client,
}

impl<'a> ClientsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Retrieves all reseller clients, or a single one when `client` holds
    /// its numeric id.
    pub async fn get_clients(&self, client: Option<&str>) -> Result<Response<ClientsResponse>> {
        let mut params = Vec::new();
        if let Some(client) = client {
            params.push(("client", client));
        }
        self.client.get("getClients", &params).await
    }

    /// Retrieves the reseller packages, or a single one when `package`
    /// holds its numeric id.
    pub async fn get_packages(&self, package: Option<&str>) -> Result<Response<PackagesResponse>> {
        let mut params = Vec::new();
        if let Some(package) = package {
            params.push(("package", package));
        }
        self.client.get("getPackages", &params).await
    }

    /// Debits a client's balance.
    pub async fn add_charge(&self, charge: &AddCharge) -> Result<Response<BaseResponse>> {
        self.client.post("addCharge", charge).await
    }

    /// Credits a client's balance.
    pub async fn add_payment(&self, payment: &AddPayment) -> Result<Response<BaseResponse>> {
        self.client.post("addPayment", payment).await
    }

    /// Signs up a new reseller client and reports its numeric id.
    pub async fn signup_client(
        &self,
        signup: &SignupClient,
    ) -> Result<Response<SignupClientResponse>> {
        self.client.post("signupClient", signup).await
    }
}

/// Response payload for [`ClientsApi::get_clients`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default)]
    pub clients: Vec<ClientRecord>,
}

impl StatusReport for ClientsResponse {
    fn api_status(&self) -> Option<&str> {
        self.base.api_status()
    }
}

/// A reseller client record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientRecord {
    pub client: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub company: String,
    pub phone: String,
    pub balance: String,
}

/// Response payload for [`ClientsApi::get_packages`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PackagesResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default)]
    pub packages: Vec<Package>,
}

impl StatusReport for PackagesResponse {
    fn api_status(&self) -> Option<&str> {
        self.base.api_status()
    }
}

/// A reseller package.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package {
    pub package: String,
    pub name: String,
    pub markup: String,
}

/// Payload for [`ClientsApi::add_charge`].
///
/// `test` is `"1"` to validate the charge without applying it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddCharge {
    pub client: String,
    pub charge: String,
    pub description: String,
    pub test: String,
}

/// Payload for [`ClientsApi::add_payment`].
///
/// `test` is `"1"` to validate the payment without applying it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddPayment {
    pub client: String,
    pub payment: String,
    pub description: String,
    pub test: String,
}

/// Payload for [`ClientsApi::signup_client`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignupClient {
    pub firstname: String,
    pub lastname: String,
    pub company: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip: String,
    pub phone_number: String,
    pub email: String,
    pub confirm_email: String,
    pub password: String,
    pub confirm_password: String,
    pub activate: String,
}

/// Response payload for [`ClientsApi::signup_client`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignupClientResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    pub client: String,
}

impl StatusReport for SignupClientResponse {
    fn api_status(&self) -> Option<&str> {
        self.base.api_status()
    }
}
