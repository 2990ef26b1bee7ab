//! Account endpoints
//!
//! These endpoints require authentication.

use crate::error::RestResult;
use crate::requester::Requester;
use crate::types::{Account, AccountSummaryResult};
use cdc_auth::Credentials;
use cdc_types::Params;
use tracing::{debug, instrument};

const METHOD_GET_ACCOUNT_SUMMARY: &str = "private/get-account-summary";

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    requester: &'a Requester,
    credentials: &'a Credentials,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(requester: &'a Requester, credentials: &'a Credentials) -> Self {
        Self {
            requester,
            credentials,
        }
    }

    /// Get balances
    ///
    /// # Arguments
    /// * `currency` - Restrict to one currency (e.g., "CRO"); `None` (or empty) returns all
    #[instrument(skip(self))]
    pub async fn get_account_summary(&self, currency: Option<&str>) -> RestResult<Vec<Account>> {
        let mut params = Params::new();
        params.insert_opt("currency", currency.filter(|c| !c.is_empty()));

        let result: AccountSummaryResult = self
            .requester
            .post(self.credentials, METHOD_GET_ACCOUNT_SUMMARY, params)
            .await?;

        debug!("Fetched {} account balances", result.accounts.len());
        Ok(result.accounts)
    }
}
