//! Sub account management: listing, registration status, and lifecycle.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;
use crate::response::{BaseResponse, Response, StatusReport};

/// Wrapper for the sub account operations.
///
/// Created by [`Client::accounts`].
#[derive(Clone, Copy)]
pub struct AccountsApi<'a> {
    client: &'a Client,
}

impl<'a> AccountsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Retrieves all sub accounts, or a single one when `account` names it.
    pub async fn get_sub_accounts(
        &self,
        account: Option<&str>,
    ) -> Result<Response<SubAccountsResponse>> {
        let mut params = Vec::new();
        if let Some(account) = account {
            params.push(("account", account));
        }
        self.client.get("getSubAccounts", &params).await
    }

    /// Retrieves the SIP registration status of a sub account.
    pub async fn get_registration_status(
        &self,
        account: &str,
    ) -> Result<Response<RegistrationStatusResponse>> {
        self.client
            .get("getRegistrationStatus", &[("account", account)])
            .await
    }

    /// Creates a new sub account.
    ///
    /// The service derives the full account name by prefixing the main
    /// account number; the response reports both the numeric id and that
    /// derived name.
    pub async fn create_sub_account(
        &self,
        sub_account: &CreateSubAccount,
    ) -> Result<Response<CreateSubAccountResponse>> {
        self.client.post("createSubAccount", sub_account).await
    }

    /// Updates an existing sub account in place.
    pub async fn set_sub_account(
        &self,
        sub_account: &SetSubAccount,
    ) -> Result<Response<BaseResponse>> {
        self.client.post("setSubAccount", sub_account).await
    }

    /// Deletes the sub account with the given numeric id.
    pub async fn del_sub_account(&self, id: &str) -> Result<Response<BaseResponse>> {
        #[derive(Serialize)]
        struct DelSubAccount<'a> {
            id: &'a str,
        }

        self.client
            .post("delSubAccount", &DelSubAccount { id })
            .await
    }
}

/// Response payload for [`AccountsApi::get_sub_accounts`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubAccountsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default)]
    pub accounts: Vec<SubAccount>,
}

impl StatusReport for SubAccountsResponse {
    fn api_status(&self) -> Option<&str> {
        self.base.api_status()
    }
}

/// A sub account record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubAccount {
    pub id: String,
    pub account: String,
    pub username: String,
    pub protocol: String,
    pub description: String,
    pub auth_type: String,
    pub password: String,
    pub device_type: String,
    pub callerid_number: String,
    pub lock_international: String,
    pub international_route: String,
    pub music_on_hold: String,
    pub allowed_codecs: String,
    pub dtmf_mode: String,
    pub nat: String,
}

/// Response payload for [`AccountsApi::get_registration_status`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegistrationStatusResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    /// `"yes"` when the account currently holds at least one registration.
    pub registered: String,
    #[serde(default)]
    pub registrations: Vec<Registration>,
}

impl StatusReport for RegistrationStatusResponse {
    fn api_status(&self) -> Option<&str> {
        self.base.api_status()
    }
}

/// A single SIP registration held by a sub account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Registration {
    pub server_name: String,
    pub server_shortname: String,
    pub register_ip: String,
    pub register_port: String,
    pub register_next: String,
}

/// Payload for [`AccountsApi::create_sub_account`].
///
/// Every field travels as a form string, so numeric settings such as
/// `auth_type` are spelled the way the service documents them (`"1"` for
/// user/password authentication, and so on).
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSubAccount {
    pub username: String,
    pub protocol: String,
    pub description: String,
    pub auth_type: String,
    pub password: String,
    pub device_type: String,
    pub callerid_number: String,
    pub lock_international: String,
    pub international_route: String,
    pub music_on_hold: String,
    pub allowed_codecs: String,
    pub dtmf_mode: String,
    pub nat: String,
}

/// Response payload for [`AccountsApi::create_sub_account`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateSubAccountResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    pub id: String,
    pub account: String,
}

impl StatusReport for CreateSubAccountResponse {
    fn api_status(&self) -> Option<&str> {
        self.base.api_status()
    }
}

/// Payload for [`AccountsApi::set_sub_account`]. Identifies the account by
/// its numeric id; the username and protocol cannot be changed after
/// creation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetSubAccount {
    pub id: String,
    pub description: String,
    pub auth_type: String,
    pub password: String,
    pub device_type: String,
    pub callerid_number: String,
    pub lock_international: String,
    pub international_route: String,
    pub music_on_hold: String,
    pub allowed_codecs: String,
    pub dtmf_mode: String,
    pub nat: String,
}
