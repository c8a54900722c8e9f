use serde::Deserialize;
use serde_json::Value;

use super::envelope::TransportError;
use crate::domain::Prices;

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonResponse {
    balance: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct PricesJsonResponse {
    prices_in_pence: Prices,
}

pub fn decode_balance_success(success: Value) -> Result<f64, TransportError> {
    let parsed: BalanceJsonResponse = serde_json::from_value(success)?;
    Ok(parsed.balance)
}

pub fn decode_prices_success(success: Value) -> Result<Prices, TransportError> {
    let parsed: PricesJsonResponse = serde_json::from_value(success)?;
    Ok(parsed.prices_in_pence)
}
