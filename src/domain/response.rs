use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

/// Outcome of an accepted `sendsms` call.
///
/// Values are passed through from the service unchanged; costs are in pence.
#[derive(Debug, Clone, PartialEq)]
pub struct SendSmsResponse {
    pub tx_guid: String,
    pub sms_parts: u32,
    /// Recipient count as echoed by the service.
    pub numbers: Value,
    pub encoding: String,
    pub cost_in_pence: Option<f64>,
    pub new_balance_in_pence: Option<f64>,
}

/// Network metadata for a single MSISDN returned by `operator_lookup`.
///
/// Fields hold whatever JSON the service sent; `None` means the key was absent or null.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorLookupResponse {
    pub mnc: Option<Value>,
    pub mcc: Option<Value>,
    pub operator: Option<Value>,
    pub cost_in_pence: Option<f64>,
    pub new_balance_in_pence: Option<f64>,
    /// Any further fields of the payload, kept verbatim.
    pub extra: BTreeMap<String, Value>,
}

/// Per-country prices in pence, keyed by country code (`GB`, `US`, ...).
pub type Prices = BTreeMap<String, f64>;

/// The service answered but did not report success.
///
/// `status_code` is always the HTTP status. The remaining fields are `None` unless the
/// service supplied a `failure` payload carrying them.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status_code: u16,
    pub fail_code: Option<String>,
    pub parameter: Option<String>,
    pub cost_in_pence: Option<f64>,
    pub new_balance_in_pence: Option<f64>,
}

impl ApiError {
    /// An error carrying only the HTTP status.
    pub fn from_status(status_code: u16) -> Self {
        Self {
            status_code,
            fail_code: None,
            parameter: None,
            cost_in_pence: None,
            new_balance_in_pence: None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status Code: {}", self.status_code)?;
        write!(f, " failCode: {}", self.fail_code.as_deref().unwrap_or("null"))?;
        write!(f, " parameter: {}", self.parameter.as_deref().unwrap_or("null"))
    }
}

impl std::error::Error for ApiError {}
