//! Public market data endpoints against a mock exchange

mod common;

use cdc_rest::{ApiErrorCode, RestError};
use common::*;
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn no_query(req: &Request) -> bool {
    req.url.query().is_none()
}

#[tokio::test]
async fn get_instruments_returns_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("public/get-instruments")))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_response(
            "public/get-instruments",
            json!({
                "instruments": [{
                    "instrument_name": "BTC_USDT",
                    "quote_currency": "USDT",
                    "base_currency": "BTC",
                    "price_decimals": 2,
                    "quantity_decimals": 6,
                    "margin_trading_enabled": true
                }, {
                    "instrument_name": "CRO_BTC",
                    "quote_currency": "BTC",
                    "base_currency": "CRO",
                    "price_decimals": 8,
                    "quantity_decimals": 2,
                    "margin_trading_enabled": false
                }]
            }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let instruments = public_client(&server).get_instruments().await.unwrap();

    assert_eq!(instruments.len(), 2);
    assert_eq!(instruments[0].instrument_name, "BTC_USDT");
    assert_eq!(instruments[0].quantity_decimals, 6);
    assert!(instruments[0].margin_trading_enabled);
    assert_eq!(instruments[1].base_currency, "CRO");
}

#[tokio::test]
async fn get_tickers_without_instrument_sends_no_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("public/get-ticker")))
        .and(no_query)
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_response(
            "public/get-ticker",
            json!({
                "data": [
                    {"i": "CRO_BTC", "b": 0.00000712, "k": 0.00000714, "a": 0.00000713, "t": 1700000000000i64, "v": 1000, "h": 0.0000072, "l": 0.0000070, "c": 0.00000001},
                    {"i": "ETH_USDT", "b": 2000.5, "k": 2001, "a": 2000.75, "t": 1700000000001i64, "v": 15.2, "h": 2050, "l": 1980, "c": -21.5}
                ]
            }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let tickers = public_client(&server).get_tickers(None).await.unwrap();

    assert_eq!(tickers.len(), 2);
    assert_eq!(tickers[1].instrument, "ETH_USDT");
    assert_eq!(tickers[1].bid_price, Some(dec!(2000.5)));
    assert_eq!(tickers[1].spread(), Some(dec!(0.5)));
    assert_eq!(tickers[1].price_change_24h, dec!(-21.5));
}

#[tokio::test]
async fn get_tickers_for_one_instrument() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("public/get-ticker")))
        .and(query_param("instrument_name", "BTC_USDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_response(
            "public/get-ticker",
            json!({
                "data": {"i": "BTC_USDT", "b": 36000.1, "k": 36000.9, "a": 36000.5, "t": 1700000000000i64, "v": 812.3, "h": 37000, "l": 35000, "c": 150}
            }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let tickers = public_client(&server)
        .get_tickers(Some("BTC_USDT"))
        .await
        .unwrap();

    assert_eq!(tickers.len(), 1);
    assert_eq!(tickers[0].instrument, "BTC_USDT");
    assert_eq!(tickers[0].latest_trade_price, Some(dec!(36000.5)));
    assert_eq!(tickers[0].timestamp.timestamp_millis(), 1700000000000);
}

#[tokio::test]
async fn get_tickers_treats_empty_instrument_as_all() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("public/get-ticker")))
        .and(no_query)
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_response("public/get-ticker", json!({"data": []}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let tickers = public_client(&server).get_tickers(Some("")).await.unwrap();
    assert!(tickers.is_empty());
}

#[tokio::test]
async fn get_book_sends_instrument_and_depth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("public/get-book")))
        .and(query_param("instrument_name", "BTC_USDT"))
        .and(query_param("depth", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_response(
            "public/get-book",
            json!({
                "bids": [[9668.44, 0.006325, 1], [9659.75, 0.006776, 1]],
                "asks": [[9697.0, 0.68251, 1], [9697.6, 1.683926, 2]],
                "t": 1591704180270i64
            }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let book = public_client(&server)
        .get_book("BTC_USDT", Some(10))
        .await
        .unwrap();

    assert_eq!(book.bids.len(), 2);
    assert_eq!(book.best_bid(), Some(dec!(9668.44)));
    assert_eq!(book.best_ask(), Some(dec!(9697.0)));
    assert_eq!(book.spread(), Some(dec!(28.56)));
    assert_eq!(book.asks[1][1], dec!(1.683926));
    assert_eq!(book.timestamp.timestamp_millis(), 1591704180270);
}

#[tokio::test]
async fn get_book_requires_instrument() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = public_client(&server).get_book("", None).await.unwrap_err();
    match err {
        RestError::InvalidParameter(e) => {
            assert_eq!(e.parameter, "instrument_name");
            assert_eq!(e.reason, "cannot be empty");
        }
        other => panic!("expected invalid parameter, got {:?}", other),
    }
}

#[tokio::test]
async fn public_error_is_classified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("public/get-book")))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_response(
            "public/get-book",
            30003,
            "SYMBOL_NOT_FOUND",
        )))
        .mount(&server)
        .await;

    let err = public_client(&server)
        .get_book("NOPE_USDT", None)
        .await
        .unwrap_err();

    assert!(err.is(ApiErrorCode::SymbolNotFound));
    let response = err.response_error().unwrap();
    assert_eq!(response.code, 30003);
    assert_eq!(response.http_status, 400);
}
