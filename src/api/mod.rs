//! Grouped wrappers over the documented API surface.
//!
//! Each grouping borrows the [`Client`](crate::Client) that created it and
//! maps one Rust method per remote operation: the method supplies the
//! API method-name literal and the payload/response shapes, then delegates
//! to [`Client::get`](crate::Client::get) or
//! [`Client::post`](crate::Client::post). No grouping adds behavior beyond
//! that.

mod accounts;
mod cdr;
mod clients;
mod general;

pub use accounts::{
    AccountsApi, CreateSubAccount, CreateSubAccountResponse, Registration,
    RegistrationStatusResponse, SetSubAccount, SubAccount, SubAccountsResponse,
};
pub use cdr::{CdrApi, CdrEntry, CdrQuery, CdrResponse, Rate, RatesResponse};
pub use clients::{
    AddCharge, AddPayment, ClientRecord, ClientsApi, ClientsResponse, Package, PackagesResponse,
    SignupClient, SignupClientResponse,
};
pub use general::{
    Balance, BalanceResponse, GeneralApi, IpResponse, LanguagesResponse, ServerInfo,
    ServersInfoResponse,
};
