//! Example creating, inspecting and deleting a sub account.
//!
//! This example shows how to:
//! - Send write operations (multipart POST) through a grouping
//! - Enable debug logging of full requests and responses
//! - React to the API's logical status separately from HTTP errors
//!
//! Run with:
//! `VOIPMS_USERNAME=... VOIPMS_PASSWORD=... cargo run --example create_sub_account`

use std::env;
use voipms::api::CreateSubAccount;
use voipms::{Client, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Debug mode dumps full requests and responses, credentials included,
    // so the filter here is only suitable for local experiments.
    tracing_subscriber::fmt()
        .with_env_filter("voipms=debug,create_sub_account=info")
        .init();

    let username = env::var("VOIPMS_USERNAME").expect("VOIPMS_USERNAME is not set");
    let password = env::var("VOIPMS_PASSWORD").expect("VOIPMS_PASSWORD is not set");

    let client = Client::builder()
        .endpoint("https://voip.ms/api/v1/rest.php")?
        .credentials(username, password)
        .debug(true)
        .build()?;

    let sub_account = CreateSubAccount {
        username: "demo_line".to_string(),
        protocol: "1".to_string(),
        description: "Demo line".to_string(),
        auth_type: "1".to_string(),
        password: "uncommonly-long-passphrase".to_string(),
        device_type: "2".to_string(),
        lock_international: "1".to_string(),
        international_route: "1".to_string(),
        music_on_hold: "default".to_string(),
        allowed_codecs: "ulaw;g729".to_string(),
        dtmf_mode: "auto".to_string(),
        nat: "yes".to_string(),
        ..CreateSubAccount::default()
    };

    println!("=== Create ===");
    let created = match client.accounts().create_sub_account(&sub_account).await {
        Ok(response) => {
            println!("Created account {} with id {}", response.account, response.id);
            response
        }
        Err(Error::ApiStatus(status)) => {
            eprintln!("The API refused the account: {}", status);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    println!("=== Inspect ===");
    let listed = client
        .accounts()
        .get_sub_accounts(Some(created.account.as_str()))
        .await?;
    for account in &listed.accounts {
        println!("{}: {}", account.account, account.description);
    }

    println!("=== Delete ===");
    client.accounts().del_sub_account(&created.id).await?;
    println!("Deleted sub account {}", created.id);

    Ok(())
}
