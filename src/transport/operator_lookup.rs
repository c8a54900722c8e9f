use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::envelope::TransportError;
use crate::domain::OperatorLookupResponse;

const NUMBER_FIELD: &str = "NUMBER";

const COST_FIELD: &str = "cost_in_pence";
const NEW_BALANCE_FIELD: &str = "new_balance_in_pence";

#[derive(Debug, Clone, Deserialize)]
struct OperatorLookupJsonResponse {
    #[serde(default)]
    mnc: Option<Value>,
    #[serde(default)]
    mcc: Option<Value>,
    #[serde(default)]
    operator: Option<Value>,
    #[serde(default)]
    cost_in_pence: Option<Value>,
    #[serde(default)]
    new_balance_in_pence: Option<Value>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

/// Query string for `operator_lookup`. The number is sent as given.
pub fn encode_operator_lookup_query(msisdn: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair(NUMBER_FIELD, msisdn)
        .finish()
}

pub fn decode_operator_lookup_success(
    success: Value,
) -> Result<OperatorLookupResponse, TransportError> {
    let mut parsed: OperatorLookupJsonResponse = serde_json::from_value(success)?;
    let cost_in_pence = pence(&mut parsed.extra, COST_FIELD, parsed.cost_in_pence);
    let new_balance_in_pence = pence(
        &mut parsed.extra,
        NEW_BALANCE_FIELD,
        parsed.new_balance_in_pence,
    );
    Ok(OperatorLookupResponse {
        mnc: parsed.mnc,
        mcc: parsed.mcc,
        operator: parsed.operator,
        cost_in_pence,
        new_balance_in_pence,
        extra: parsed.extra,
    })
}

/// Numeric charge fields are surfaced as pence; anything else stays in `extra`.
fn pence(extra: &mut BTreeMap<String, Value>, key: &str, value: Option<Value>) -> Option<f64> {
    let value = value?;
    match value.as_f64() {
        Some(amount) => Some(amount),
        None => {
            extra.insert(key.to_owned(), value);
            None
        }
    }
}
