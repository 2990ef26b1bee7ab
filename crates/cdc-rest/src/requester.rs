//! Request dispatch
//!
//! Public calls are sent as `GET <base_url><method>?<params>`. Private calls
//! are POSTed as a signed JSON envelope to `<base_url><method>`. Either way
//! the response envelope is decoded and its status and code are classified
//! before the `result` payload is looked at.

use std::sync::Arc;

use cdc_auth::{Credentials, SignatureGenerator};
use cdc_types::{check_error_response, ApiRequest, ApiResponse, Params};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::clock::Clock;
use crate::error::{RestError, RestResult};
use crate::id::IdGenerator;

/// Sends requests and turns responses into results or classified errors
#[derive(Debug, Clone)]
pub struct Requester {
    http_client: Client,
    base_url: String,
    clock: Arc<dyn Clock>,
    id_generator: Arc<dyn IdGenerator>,
    signature_generator: Arc<dyn SignatureGenerator>,
}

impl Requester {
    pub(crate) fn new(
        http_client: Client,
        base_url: String,
        clock: Arc<dyn Clock>,
        id_generator: Arc<dyn IdGenerator>,
        signature_generator: Arc<dyn SignatureGenerator>,
    ) -> Self {
        Self {
            http_client,
            base_url,
            clock,
            id_generator,
            signature_generator,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, method: &str) -> String {
        format!("{}{}", self.base_url, method)
    }

    /// Make an unauthenticated GET request
    pub async fn get<T: DeserializeOwned>(&self, method: &str, params: &Params) -> RestResult<T> {
        debug!("Making public request to {}", method);

        let response = self
            .http_client
            .get(self.url(method))
            .query(&params.query_pairs())
            .send()
            .await?;

        require_result(self.read_envelope(method, response).await?)
    }

    /// Make a signed POST request and decode its `result`
    pub async fn post<T: DeserializeOwned>(
        &self,
        credentials: &Credentials,
        method: &str,
        params: Params,
    ) -> RestResult<T> {
        let response = self.send_signed(credentials, method, params).await?;
        require_result(self.read_envelope(method, response).await?)
    }

    /// Make a signed POST request whose success carries no payload
    pub async fn post_ack(
        &self,
        credentials: &Credentials,
        method: &str,
        params: Params,
    ) -> RestResult<()> {
        let response = self.send_signed(credentials, method, params).await?;
        self.read_envelope(method, response).await.map(|_| ())
    }

    async fn send_signed(
        &self,
        credentials: &Credentials,
        method: &str,
        params: Params,
    ) -> RestResult<Response> {
        let id = self.id_generator.generate();
        let nonce = self.clock.now().timestamp_millis();

        let signature = self
            .signature_generator
            .generate_signature(&credentials.signature_request(id, method, nonce, &params))
            .map_err(RestError::Signature)?;

        let request =
            ApiRequest::new(id, method, nonce, params).signed(credentials.api_key(), signature);
        let body = serde_json::to_vec(&request).map_err(RestError::Encode)?;

        debug!(id, nonce, "Making authenticated request to {}", method);

        Ok(self
            .http_client
            .post(self.url(method))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?)
    }

    /// Decode the envelope and classify it, returning the raw `result`
    async fn read_envelope(
        &self,
        method: &str,
        response: Response,
    ) -> RestResult<Option<serde_json::Value>> {
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        let envelope: ApiResponse<serde_json::Value> =
            serde_json::from_slice(&body).map_err(RestError::Decode)?;

        if let Err(err) = check_error_response(status, &envelope.code) {
            warn!(
                status,
                code = %envelope.code,
                message = envelope.message.as_deref().unwrap_or(""),
                "{} failed: {}",
                method,
                err
            );
            return Err(err.into());
        }

        Ok(envelope.into_result())
    }
}

fn require_result<T: DeserializeOwned>(result: Option<serde_json::Value>) -> RestResult<T> {
    match result {
        Some(value) if !value.is_null() => serde_json::from_value(value).map_err(RestError::Decode),
        _ => Err(RestError::MissingResult),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Payload {
        value: u32,
    }

    #[test]
    fn test_require_result() {
        let payload: Payload = require_result(Some(serde_json::json!({"value": 3}))).unwrap();
        assert_eq!(payload.value, 3);

        assert!(matches!(
            require_result::<Payload>(None),
            Err(RestError::MissingResult)
        ));
        assert!(matches!(
            require_result::<Payload>(Some(serde_json::Value::Null)),
            Err(RestError::MissingResult)
        ));
        assert!(matches!(
            require_result::<Payload>(Some(serde_json::json!({"value": "x"}))),
            Err(RestError::Decode(_))
        ));
    }
}
