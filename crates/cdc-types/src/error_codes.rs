//! Crypto.com Exchange response-code taxonomy
//!
//! Every non-zero response code the exchange documents maps to exactly one
//! [`ApiErrorCode`]. Codes outside the table map to
//! [`ApiErrorCode::Unexpected`], so classification never fails.

use std::fmt;

/// Known exchange response codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorCode {
    // === System / request errors (1xxxx) ===
    /// SYS_ERROR (10001, 100001)
    SystemError,
    /// UNAUTHORIZED: bad API key or signature
    Unauthorized,
    /// IP_ILLEGAL: IP address not whitelisted
    IllegalIp,
    /// BAD_REQUEST: missing required fields
    BadRequest,
    /// USER_TIER_INVALID
    UserTierInvalid,
    /// TOO_MANY_REQUESTS: rate limit exceeded
    TooManyRequests,
    /// INVALID_NONCE: nonce more than 30 seconds from server time
    InvalidNonce,
    /// METHOD_NOT_FOUND
    MethodNotFound,
    /// INVALID_DATE_RANGE
    InvalidDateRange,

    // === Record / balance errors (2xxxx) ===
    /// DUPLICATE_RECORD
    DuplicateRecord,
    /// NEGATIVE_BALANCE: insufficient balance
    NegativeBalance,

    // === Order errors (3xxxx) ===
    /// SYMBOL_NOT_FOUND
    SymbolNotFound,
    /// SIDE_NOT_SUPPORTED
    SideNotSupported,
    /// ORDERTYPE_NOT_SUPPORTED
    OrderTypeNotSupported,
    /// MIN_PRICE_VIOLATED
    MinPriceViolated,
    /// MAX_PRICE_VIOLATED
    MaxPriceViolated,
    /// MIN_QUANTITY_VIOLATED
    MinQuantityViolated,
    /// MAX_QUANTITY_VIOLATED
    MaxQuantityViolated,
    /// MISSING_ARGUMENT
    MissingArgument,
    /// INVALID_PRICE_PRECISION
    InvalidPricePrecision,
    /// INVALID_QUANTITY_PRECISION
    InvalidQuantityPrecision,
    /// MIN_NOTIONAL_VIOLATED
    MinNotionalViolated,
    /// MAX_NOTIONAL_VIOLATED
    MaxNotionalViolated,
    /// MIN_AMOUNT_VIOLATED
    MinAmountViolated,
    /// MAX_AMOUNT_VIOLATED
    MaxAmountViolated,
    /// AMOUNT_PRECISION_OVERFLOW
    AmountPrecisionOverflow,

    // === Margin errors (4xxxx, 5xxxx) ===
    /// MG_INVALID_ACCOUNT_STATUS
    MarginInvalidAccountStatus,
    /// MG_TRANSFER_ACTIVE_LOAN
    MarginTransferActiveLoan,
    /// MG_INVALID_LOAN_CURRENCY
    MarginInvalidLoanCurrency,
    /// MG_INVALID_REPAY_AMOUNT
    MarginInvalidRepayAmount,
    /// MG_NO_ACTIVE_LOAN
    MarginNoActiveLoan,
    /// MG_BLOCKED_BORROW
    MarginBorrowBlocked,
    /// MG_BLOCKED_NEW_ORDER
    MarginNewOrderBlocked,
    /// MG_CREDITLINE_NOT_MAINTAINED
    MarginCreditLineNotMaintained,

    /// Any code not listed in [`KNOWN_CODES`]
    Unexpected,
}

/// Numeric code table, sorted ascending by code
pub static KNOWN_CODES: [(i64, ApiErrorCode); 35] = [
    (10001, ApiErrorCode::SystemError),
    (10002, ApiErrorCode::Unauthorized),
    (10003, ApiErrorCode::IllegalIp),
    (10004, ApiErrorCode::BadRequest),
    (10005, ApiErrorCode::UserTierInvalid),
    (10006, ApiErrorCode::TooManyRequests),
    (10007, ApiErrorCode::InvalidNonce),
    (10008, ApiErrorCode::MethodNotFound),
    (10009, ApiErrorCode::InvalidDateRange),
    (20001, ApiErrorCode::DuplicateRecord),
    (20002, ApiErrorCode::NegativeBalance),
    (30003, ApiErrorCode::SymbolNotFound),
    (30004, ApiErrorCode::SideNotSupported),
    (30005, ApiErrorCode::OrderTypeNotSupported),
    (30006, ApiErrorCode::MinPriceViolated),
    (30007, ApiErrorCode::MaxPriceViolated),
    (30008, ApiErrorCode::MinQuantityViolated),
    (30009, ApiErrorCode::MaxQuantityViolated),
    (30010, ApiErrorCode::MissingArgument),
    (30013, ApiErrorCode::InvalidPricePrecision),
    (30014, ApiErrorCode::InvalidQuantityPrecision),
    (30016, ApiErrorCode::MinNotionalViolated),
    (30017, ApiErrorCode::MaxNotionalViolated),
    (30023, ApiErrorCode::MinAmountViolated),
    (30024, ApiErrorCode::MaxAmountViolated),
    (30025, ApiErrorCode::AmountPrecisionOverflow),
    (40001, ApiErrorCode::MarginInvalidAccountStatus),
    (40002, ApiErrorCode::MarginTransferActiveLoan),
    (40003, ApiErrorCode::MarginInvalidLoanCurrency),
    (40004, ApiErrorCode::MarginInvalidRepayAmount),
    (40005, ApiErrorCode::MarginNoActiveLoan),
    (40006, ApiErrorCode::MarginBorrowBlocked),
    (40007, ApiErrorCode::MarginNewOrderBlocked),
    (50001, ApiErrorCode::MarginCreditLineNotMaintained),
    (100001, ApiErrorCode::SystemError),
];

impl ApiErrorCode {
    /// Look up a numeric response code
    ///
    /// Unlisted codes (including `0`) map to [`ApiErrorCode::Unexpected`];
    /// callers decide separately whether a code means success.
    pub fn from_code(code: i64) -> Self {
        KNOWN_CODES
            .binary_search_by_key(&code, |(c, _)| *c)
            .map(|idx| KNOWN_CODES[idx].1)
            .unwrap_or(Self::Unexpected)
    }

    /// Canonical numeric code, or `None` for [`ApiErrorCode::Unexpected`]
    ///
    /// `SystemError` is reported under 10001 even though 100001 maps to it too.
    pub fn code(&self) -> Option<i64> {
        KNOWN_CODES
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(code, _)| *code)
    }

    /// The exchange's reason name for this code
    pub fn reason(&self) -> &'static str {
        match self {
            Self::SystemError => "SYS_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::IllegalIp => "IP_ILLEGAL",
            Self::BadRequest => "BAD_REQUEST",
            Self::UserTierInvalid => "USER_TIER_INVALID",
            Self::TooManyRequests => "TOO_MANY_REQUESTS",
            Self::InvalidNonce => "INVALID_NONCE",
            Self::MethodNotFound => "METHOD_NOT_FOUND",
            Self::InvalidDateRange => "INVALID_DATE_RANGE",
            Self::DuplicateRecord => "DUPLICATE_RECORD",
            Self::NegativeBalance => "NEGATIVE_BALANCE",
            Self::SymbolNotFound => "SYMBOL_NOT_FOUND",
            Self::SideNotSupported => "SIDE_NOT_SUPPORTED",
            Self::OrderTypeNotSupported => "ORDERTYPE_NOT_SUPPORTED",
            Self::MinPriceViolated => "MIN_PRICE_VIOLATED",
            Self::MaxPriceViolated => "MAX_PRICE_VIOLATED",
            Self::MinQuantityViolated => "MIN_QUANTITY_VIOLATED",
            Self::MaxQuantityViolated => "MAX_QUANTITY_VIOLATED",
            Self::MissingArgument => "MISSING_ARGUMENT",
            Self::InvalidPricePrecision => "INVALID_PRICE_PRECISION",
            Self::InvalidQuantityPrecision => "INVALID_QUANTITY_PRECISION",
            Self::MinNotionalViolated => "MIN_NOTIONAL_VIOLATED",
            Self::MaxNotionalViolated => "MAX_NOTIONAL_VIOLATED",
            Self::MinAmountViolated => "MIN_AMOUNT_VIOLATED",
            Self::MaxAmountViolated => "MAX_AMOUNT_VIOLATED",
            Self::AmountPrecisionOverflow => "AMOUNT_PRECISION_OVERFLOW",
            Self::MarginInvalidAccountStatus => "MG_INVALID_ACCOUNT_STATUS",
            Self::MarginTransferActiveLoan => "MG_TRANSFER_ACTIVE_LOAN",
            Self::MarginInvalidLoanCurrency => "MG_INVALID_LOAN_CURRENCY",
            Self::MarginInvalidRepayAmount => "MG_INVALID_REPAY_AMOUNT",
            Self::MarginNoActiveLoan => "MG_NO_ACTIVE_LOAN",
            Self::MarginBorrowBlocked => "MG_BLOCKED_BORROW",
            Self::MarginNewOrderBlocked => "MG_BLOCKED_NEW_ORDER",
            Self::MarginCreditLineNotMaintained => "MG_CREDITLINE_NOT_MAINTAINED",
            Self::Unexpected => "UNEXPECTED_ERROR",
        }
    }

    /// Get a human-readable description of this error
    pub fn description(&self) -> &'static str {
        match self {
            Self::SystemError => "system error",
            Self::Unauthorized => "request not authenticated or key/signature is incorrect",
            Self::IllegalIp => "ip address not whitelisted",
            Self::BadRequest => "missing required fields",
            Self::UserTierInvalid => "disallowed based on user tier",
            Self::TooManyRequests => "requests have exceeded rate limits",
            Self::InvalidNonce => "nonce value differs by more than 30 seconds from server",
            Self::MethodNotFound => "invalid method specified",
            Self::InvalidDateRange => "invalid date range",
            Self::DuplicateRecord => "duplicated record",
            Self::NegativeBalance => "insufficient balance",
            Self::SymbolNotFound => "invalid instrument_name specified",
            Self::SideNotSupported => "invalid side specified",
            Self::OrderTypeNotSupported => "invalid type specified",
            Self::MinPriceViolated => "price is lower than the minimum",
            Self::MaxPriceViolated => "price is higher than the maximum",
            Self::MinQuantityViolated => "quantity is lower than the minimum",
            Self::MaxQuantityViolated => "quantity is higher than the maximum",
            Self::MissingArgument => "required argument is blank or missing",
            Self::InvalidPricePrecision => "too many decimal places for price",
            Self::InvalidQuantityPrecision => "too many decimal places for quantity",
            Self::MinNotionalViolated => "the notional amount is less than the minimum",
            Self::MaxNotionalViolated => "the notional amount exceeds the maximum",
            Self::MinAmountViolated => "amount is less than the minimum",
            Self::MaxAmountViolated => "amount exceeds the maximum",
            Self::AmountPrecisionOverflow => "amount precision exceeds the maximum",
            Self::MarginInvalidAccountStatus => {
                "operation has failed due to your account's status. please try again later"
            }
            Self::MarginTransferActiveLoan => {
                "transfer has failed due to holding an active loan. please repay your loan and try again later"
            }
            Self::MarginInvalidLoanCurrency => "currency is not same as loan currency of active loan",
            Self::MarginInvalidRepayAmount => "only supporting full repayment of all margin loans",
            Self::MarginNoActiveLoan => "no active loan",
            Self::MarginBorrowBlocked => "borrow has been suspended. please try again later",
            Self::MarginNewOrderBlocked => "placing new order has been suspended. please try again later",
            Self::MarginCreditLineNotMaintained => {
                "please ensure your credit line is maintained and try again later"
            }
            Self::Unexpected => "unexpected error",
        }
    }

    /// Check if this is an authentication-related error
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::IllegalIp | Self::InvalidNonce | Self::UserTierInvalid
        )
    }

    /// Check if this is the rate limit error
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::TooManyRequests)
    }

    /// Check if this error rejects an order's parameters
    pub fn is_order_error(&self) -> bool {
        matches!(
            self,
            Self::SymbolNotFound
                | Self::SideNotSupported
                | Self::OrderTypeNotSupported
                | Self::MinPriceViolated
                | Self::MaxPriceViolated
                | Self::MinQuantityViolated
                | Self::MaxQuantityViolated
                | Self::MissingArgument
                | Self::InvalidPricePrecision
                | Self::InvalidQuantityPrecision
                | Self::MinNotionalViolated
                | Self::MaxNotionalViolated
                | Self::MinAmountViolated
                | Self::MaxAmountViolated
                | Self::AmountPrecisionOverflow
        )
    }

    /// Check if this is a margin-account error
    pub fn is_margin_error(&self) -> bool {
        matches!(
            self,
            Self::MarginInvalidAccountStatus
                | Self::MarginTransferActiveLoan
                | Self::MarginInvalidLoanCurrency
                | Self::MarginInvalidRepayAmount
                | Self::MarginNoActiveLoan
                | Self::MarginBorrowBlocked
                | Self::MarginNewOrderBlocked
                | Self::MarginCreditLineNotMaintained
        )
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl std::error::Error for ApiErrorCode {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        assert!(KNOWN_CODES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_every_known_code_round_trips_through_lookup() {
        for (code, expected) in KNOWN_CODES.iter() {
            assert_eq!(ApiErrorCode::from_code(*code), *expected, "code {}", code);
            assert_ne!(*expected, ApiErrorCode::Unexpected);
        }
    }

    #[test]
    fn test_system_error_has_two_codes() {
        assert_eq!(ApiErrorCode::from_code(10001), ApiErrorCode::SystemError);
        assert_eq!(ApiErrorCode::from_code(100001), ApiErrorCode::SystemError);
    }

    #[test]
    fn test_canonical_code() {
        assert_eq!(ApiErrorCode::SystemError.code(), Some(10001));
        assert_eq!(ApiErrorCode::MarginCreditLineNotMaintained.code(), Some(50001));
        assert_eq!(ApiErrorCode::Unexpected.code(), None);
        for (_, kind) in KNOWN_CODES.iter() {
            let code = kind.code().unwrap();
            assert_eq!(ApiErrorCode::from_code(code), *kind);
        }
    }

    #[test]
    fn test_unlisted_codes_are_unexpected() {
        for code in [-1, 0, 1, 10000, 10010, 30011, 30012, 30015, 40008, 50002, i64::MAX] {
            assert_eq!(ApiErrorCode::from_code(code), ApiErrorCode::Unexpected);
        }
    }

    #[test]
    fn test_error_categories() {
        assert!(ApiErrorCode::Unauthorized.is_auth_error());
        assert!(ApiErrorCode::TooManyRequests.is_rate_limit());
        assert!(ApiErrorCode::MinNotionalViolated.is_order_error());
        assert!(ApiErrorCode::MarginNoActiveLoan.is_margin_error());
        assert!(!ApiErrorCode::Unexpected.is_order_error());
    }

    #[test]
    fn test_display_uses_description() {
        assert_eq!(ApiErrorCode::NegativeBalance.to_string(), "insufficient balance");
        assert_eq!(ApiErrorCode::Unexpected.to_string(), "unexpected error");
        assert_eq!(ApiErrorCode::OrderTypeNotSupported.reason(), "ORDERTYPE_NOT_SUPPORTED");
    }
}
