//! Demo 1: Candle Viewer
//!
//! Showcases: public endpoints, no credentials needed
//!
//! Run: cargo run --bin candles -- trade:1D:tETHUSD

use bitfinex_rest::BitfinexRestClient;
use chrono::{TimeZone, Utc};
use colored::*;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

const ROWS: usize = 10;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let candle = std::env::args().nth(1);

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  CANDLE VIEWER".cyan().bold());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let client = BitfinexRestClient::new()?;
    let candles = client.candles(candle.as_deref(), Some("hist")).await?;

    println!(
        "  {:<18} {:>12} {:>12} {:>12} {:>12} {:>14}",
        "TIME".white().bold(),
        "OPEN".white().bold(),
        "CLOSE".white().bold(),
        "HIGH".white().bold(),
        "LOW".white().bold(),
        "VOLUME".white().bold()
    );
    println!("  {}", "─".repeat(86));

    // [MTS, OPEN, CLOSE, HIGH, LOW, VOLUME], newest first
    for row in candles.as_array().into_iter().flatten().take(ROWS) {
        let Some(fields) = row.as_array() else { continue };
        if fields.len() < 6 {
            continue;
        }

        let time = fields[0]
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let open = decimal(&fields[1]);
        let close = decimal(&fields[2]);

        let close_text = match (open, close) {
            (Some(o), Some(c)) if c >= o => c.to_string().green(),
            (_, Some(c)) => c.to_string().red(),
            _ => "-".normal(),
        };

        println!(
            "  {:<18} {:>12} {:>12} {:>12} {:>12} {:>14}",
            time,
            open.map(|d| d.to_string()).unwrap_or_default(),
            close_text,
            fields[3],
            fields[4],
            fields[5]
        );
    }

    Ok(())
}

fn decimal(value: &serde_json::Value) -> Option<Decimal> {
    Decimal::from_str(&value.to_string()).ok()
}
