//! Basic example fetching the account balance and some read-only data.
//!
//! This example shows how to:
//! - Create a client from environment credentials
//! - Call documented operations through their groupings
//! - Call an arbitrary API method with a custom response type
//!
//! Run with: `VOIPMS_USERNAME=... VOIPMS_PASSWORD=... cargo run --example balance`

use std::env;
use voipms::{Client, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("voipms=info,balance=info")
        .init();

    let username = env::var("VOIPMS_USERNAME").expect("VOIPMS_USERNAME is not set");
    let password = env::var("VOIPMS_PASSWORD").expect("VOIPMS_PASSWORD is not set");

    let client = Client::builder()
        .endpoint("https://voip.ms/api/v1/rest.php")?
        .credentials(username, password)
        .build()?;

    println!("=== Balance ===");
    let response = client.general().get_balance(true).await?;

    println!("Current balance: {}", response.balance.current_balance);
    if let Some(calls_today) = &response.balance.calls_today {
        println!("Calls today: {}", calls_today);
    }
    println!("Request latency: {:?}", response.latency);
    println!();

    println!("=== Registration Servers ===");
    let response = client.general().get_servers_info(None).await?;

    for server in &response.servers {
        println!(
            "{} ({}) - {}",
            server.server_name, server.server_country, server.server_hostname
        );
    }
    println!();

    println!("=== Raw Method Call ===");
    // Any method the API documents can be called directly.
    let response = client.get::<serde_json::Value>("getIP", &[]).await?;
    println!("API sees us as: {}", response.data["ip"]);

    Ok(())
}
