//! Common test utilities and fixtures for integration tests
//!
//! Sample payloads follow the shapes served by the exchange's v2 REST API.

#![allow(dead_code)]

use cdc_auth::{HmacSignatureGenerator, SignatureGenerator, SignatureRequest};
use cdc_rest::{CdcRestClient, ClientConfig, Credentials, FixedClock, SequentialIdGenerator};
use cdc_types::Params;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const API_KEY: &str = "k";
pub const SECRET_KEY: &str = "s";
/// Id of the first request a fresh test client sends
pub const FIRST_ID: i64 = 1234;
/// Fixed nonce, 2023-11-14T22:13:20Z
pub const NONCE: i64 = 1700000000000;

/// Path a method is served on by the mock server
pub fn api_path(method: &str) -> String {
    format!("/v2/{}", method)
}

pub fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig::new()
        .with_base_url(format!("{}/v2/", server.uri()))
        .with_clock(FixedClock::at_millis(NONCE).unwrap())
        .with_id_generator(SequentialIdGenerator::new(FIRST_ID))
}

/// Client without credentials
pub fn public_client(server: &MockServer) -> CdcRestClient {
    CdcRestClient::with_config(test_config(server)).unwrap()
}

/// Client with the fixture credentials
pub fn private_client(server: &MockServer) -> CdcRestClient {
    let creds = Credentials::new(API_KEY, SECRET_KEY).unwrap();
    CdcRestClient::with_config(test_config(server).with_credentials(creds)).unwrap()
}

/// Signature the fixture client should produce for a request
pub fn expected_signature(method: &str, id: i64, params: &Params) -> String {
    HmacSignatureGenerator
        .generate_signature(&SignatureRequest {
            api_key: API_KEY,
            secret_key: SECRET_KEY,
            id,
            method,
            timestamp: NONCE,
            params,
        })
        .unwrap()
}

/// Full JSON body the fixture client should POST
pub fn expected_body(method: &str, id: i64, params: Params) -> Value {
    let sig = expected_signature(method, id, &params);
    json!({
        "id": id,
        "method": method,
        "nonce": NONCE,
        "params": params,
        "sig": sig,
        "api_key": API_KEY,
    })
}

/// Successful envelope around `result`
pub fn ok_response(method: &str, result: Value) -> Value {
    json!({
        "id": FIRST_ID,
        "method": method,
        "code": 0,
        "result": result,
    })
}

/// Successful envelope without a payload
pub fn ack_response(method: &str) -> Value {
    json!({
        "id": FIRST_ID,
        "method": method,
        "code": 0,
    })
}

/// Error envelope with a numeric code
pub fn error_response(method: &str, code: i64, message: &str) -> Value {
    json!({
        "id": FIRST_ID,
        "method": method,
        "code": code,
        "message": message,
    })
}

pub fn sample_order(order_id: &str, status: &str) -> Value {
    json!({
        "status": status,
        "side": "BUY",
        "price": 0.5,
        "quantity": 100,
        "order_id": order_id,
        "client_oid": "my_order_0002",
        "create_time": 1588760643829i64,
        "update_time": 1588760644292i64,
        "type": "LIMIT",
        "instrument_name": "CRO_USDT",
        "cumulative_quantity": 40,
        "cumulative_value": 20,
        "avg_price": 0.5,
        "fee_currency": "CRO",
        "time_in_force": "GOOD_TILL_CANCEL",
        "exec_inst": "POST_ONLY"
    })
}

pub fn sample_trade(trade_id: &str, order_id: &str) -> Value {
    json!({
        "side": "SELL",
        "instrument_name": "ETH_CRO",
        "fee": 0.007,
        "trade_id": trade_id,
        "create_time": 1588902493045i64,
        "traded_price": 7,
        "traded_quantity": 1,
        "fee_currency": "CRO",
        "order_id": order_id
    })
}
