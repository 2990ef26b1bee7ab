//! Example: authenticated account and trading calls
//!
//! Runs against the UAT sandbox. Places a post-only limit order far below the
//! market, lists open orders, then cancels everything on the instrument.
//!
//! Run with: cargo run -p cdc-rest --example rest_trading
//!
//! NOTE: set CDC_API_KEY and CDC_SECRET_KEY to sandbox credentials first.

use cdc_rest::{
    ApiErrorCode, CdcRestClient, ClientConfig, CreateOrderRequest, Credentials, Environment,
    GetOpenOrdersRequest, GetTradesRequest, OrderSide,
};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

const INSTRUMENT: &str = "CRO_USDT";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("cdc_rest=debug".parse()?))
        .init();

    let creds = match Credentials::from_env() {
        Ok(creds) => creds,
        Err(e) => {
            println!("--- Private Endpoints Skipped ---");
            println!("{}", e);
            println!();
            println!("Example:");
            println!("  export CDC_API_KEY='your-api-key'");
            println!("  export CDC_SECRET_KEY='your-secret-key'");
            return Ok(());
        }
    };

    let client = CdcRestClient::with_config(
        ClientConfig::new()
            .with_environment(Environment::UatSandbox)
            .with_credentials(creds),
    )?;

    println!("--- Account ---\n");
    match client.get_account_summary(None).await {
        Ok(accounts) => {
            for account in accounts.iter().filter(|a| !a.balance.is_zero()) {
                println!(
                    "  {}: {} (available {})",
                    account.currency, account.balance, account.available
                );
            }
        }
        Err(e) if e.is(ApiErrorCode::Unauthorized) => {
            println!("  Credentials rejected: {}", e);
            return Ok(());
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    println!("--- Order ---\n");
    let order = CreateOrderRequest::limit(INSTRUMENT, OrderSide::Buy, dec!(100), dec!(0.01))
        .with_client_oid("cdc-rest-example")
        .post_only();

    match client.create_order(&order).await {
        Ok(created) => println!("  Created order {}", created.order_id),
        Err(e) if e.is_rate_limited() => println!("  Rate limited, try again later"),
        Err(e) => println!("  Order rejected: {}", e),
    }

    match client
        .get_open_orders(&GetOpenOrdersRequest::for_instrument(INSTRUMENT))
        .await
    {
        Ok(open) => {
            println!("  {} open orders", open.count);
            for order in &open.order_list {
                println!(
                    "    {} {} {} @ {} ({:?})",
                    order.order_id, order.side, order.quantity, order.price, order.status
                );
            }
        }
        Err(e) => println!("  Error: {}", e),
    }

    match client.cancel_all_orders(INSTRUMENT).await {
        Ok(()) => println!("  Cancel requested for all {} orders", INSTRUMENT),
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    println!("--- Recent Trades ---\n");
    match client
        .get_trades(&GetTradesRequest::for_instrument(INSTRUMENT).page(0, 10))
        .await
    {
        Ok(trades) if trades.is_empty() => println!("  No trades"),
        Ok(trades) => {
            for trade in trades {
                println!(
                    "  {} {} {} @ {} (fee {} {})",
                    trade.trade_id,
                    trade.side,
                    trade.traded_quantity,
                    trade.traded_price,
                    trade.fee,
                    trade.fee_currency
                );
            }
        }
        Err(e) => println!("  Error: {}", e),
    }

    println!("\nDone!");
    Ok(())
}
