//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ipstack_client` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing records as JSON
//!
//! All lookup functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ipstack_client::config::Opt;
use ipstack_client::initialization::init_logger_with;
use ipstack_client::{api_error, Client};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine: the key may come from the environment or a flag
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = opt
        .client_builder()
        .build()
        .await
        .context("Failed to create ipstack client")?;

    match lookup(&client, &opt.ips).await {
        Ok(json) => {
            println!("{json}");
            Ok(())
        }
        Err(e) => {
            match e.chain().find_map(api_error) {
                Some(api) => eprintln!(
                    "ipstack error {} ({}): {}",
                    api.code(),
                    api.error_type(),
                    api.info()
                ),
                None => eprintln!("ipstack error: {:#}", e),
            }
            process::exit(1);
        }
    }
}

/// Runs the lookup selected by the number of addresses and renders it.
async fn lookup(client: &Client, ips: &[String]) -> Result<String> {
    let json = match ips {
        [] => {
            let record = client.me(false).await.context("Self lookup failed")?;
            serde_json::to_string_pretty(&*record)?
        }
        [ip] => {
            let record = client
                .ip(ip)
                .await
                .with_context(|| format!("Lookup of {ip} failed"))?;
            serde_json::to_string_pretty(&record)?
        }
        many => {
            let records = client.ips(many).await.context("Batch lookup failed")?;
            serde_json::to_string_pretty(&records)?
        }
    };
    Ok(json)
}
