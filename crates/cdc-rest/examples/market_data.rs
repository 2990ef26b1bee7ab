//! Example: public market data
//!
//! Fetches instruments, tickers and an orderbook. No credentials needed.
//!
//! Run with: cargo run -p cdc-rest --example market_data

use cdc_rest::CdcRestClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("cdc_rest=info".parse()?))
        .init();

    println!("=== Crypto.com Exchange Market Data ===\n");

    let client = CdcRestClient::new()?;

    println!("Fetching instruments...");
    match client.get_instruments().await {
        Ok(instruments) => {
            println!("  {} instruments listed", instruments.len());
            for inst in instruments.iter().take(5) {
                println!(
                    "  {} ({} / {}), price decimals {}",
                    inst.instrument_name, inst.base_currency, inst.quote_currency, inst.price_decimals
                );
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    println!("Fetching BTC_USDT ticker...");
    match client.get_tickers(Some("BTC_USDT")).await {
        Ok(tickers) => {
            for ticker in tickers {
                if let Some(last) = ticker.latest_trade_price {
                    println!("  Last Price: ${}", last);
                }
                if let Some(mid) = ticker.mid_price() {
                    println!("  Mid Price:  ${}", mid);
                }
                println!("  24h Volume: {}", ticker.volume_24h);
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    println!("Fetching BTC_USDT orderbook (depth=5)...");
    match client.get_book("BTC_USDT", Some(5)).await {
        Ok(book) => {
            println!("  Top Bids:");
            for (i, level) in book.bids.iter().take(3).enumerate() {
                if level.len() >= 2 {
                    println!("    {}. ${} x {}", i + 1, level[0], level[1]);
                }
            }
            println!("  Top Asks:");
            for (i, level) in book.asks.iter().take(3).enumerate() {
                if level.len() >= 2 {
                    println!("    {}. ${} x {}", i + 1, level[0], level[1]);
                }
            }
            if let Some(spread) = book.spread() {
                println!("  Spread: ${}", spread);
            }
        }
        Err(e) => println!("  Error: {}", e),
    }

    println!("\nDone!");
    Ok(())
}
