//! Demo 2: Account Overview
//!
//! Showcases: signed endpoints (price, wallets, movements, deposit address)
//!
//! Run: BFX_API_KEY=... BFX_API_SECRET=... cargo run --bin account_overview

use bitfinex_rest::{BitfinexRestClient, ClientConfig, MovementsQuery};
use colored::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  ACCOUNT OVERVIEW".cyan().bold());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let client = BitfinexRestClient::with_config(ClientConfig::from_env()?)?;
    if !client.has_credentials() {
        eprintln!("{} Set BFX_API_KEY and BFX_API_SECRET to run this demo", "✗".red());
        return Ok(());
    }

    let price = client.get_price(None).await?;
    println!(
        "{} BTC/USD  sell {}  buy {}",
        "✓".green(),
        price.sell.to_string().yellow(),
        price.buy.to_string().yellow()
    );

    println!("\n{}", "Wallets".white().bold());
    let wallets = client.get_wallets().await?;
    // [TYPE, CURRENCY, BALANCE, UNSETTLED_INTEREST, AVAILABLE_BALANCE, ...]
    for wallet in wallets.as_array().into_iter().flatten() {
        println!(
            "  {:<10} {:<6} {:>16}",
            wallet[0].as_str().unwrap_or("-"),
            wallet[1].as_str().unwrap_or("-").cyan(),
            wallet[2]
        );
    }

    println!("\n{}", "Last BTC movements".white().bold());
    let movements = client
        .movements(Some("BTC"), MovementsQuery::new().limit(5))
        .await?;
    // [ID, CURRENCY, CURRENCY_NAME, _, _, MTS_STARTED, MTS_UPDATED, _, _, STATUS, _, _, AMOUNT, ...]
    for movement in movements.as_array().into_iter().flatten() {
        println!(
            "  #{:<12} {:<12} {:>14}",
            movement[0],
            movement[9].as_str().unwrap_or("-"),
            movement[12]
        );
    }

    match client.deposit_address(None, None).await {
        Ok(address) => println!("\n{} Deposit address response: {}", "✓".green(), address),
        Err(e) => println!("\n{} Deposit address unavailable: {}", "✗".red(), e),
    }

    Ok(())
}
