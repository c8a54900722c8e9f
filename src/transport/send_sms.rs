use serde::Deserialize;
use serde_json::Value;

use super::envelope::TransportError;
use crate::domain::{
    MessageBody, Msisdn, Originator, OriginatorType, SendSms, SendSmsResponse, SmsEncoding,
    TtlMinutes,
};

#[derive(Debug, Clone, Deserialize)]
struct SendSmsJsonResponse {
    txguid: String,
    smsparts: u32,
    numbers: Value,
    encoding: String,
    #[serde(default)]
    cost_in_pence: Option<f64>,
    #[serde(default)]
    new_balance_in_pence: Option<f64>,
}

pub fn encode_send_sms_form(request: &SendSms) -> Vec<(String, String)> {
    let numbers = request
        .numbers()
        .iter()
        .map(Msisdn::raw)
        .collect::<Vec<_>>()
        .join(Msisdn::SEPARATOR);

    let mut params = vec![
        (Msisdn::FIELD.to_owned(), numbers),
        (
            MessageBody::FIELD.to_owned(),
            request.body().as_str().to_owned(),
        ),
        (
            Originator::FIELD.to_owned(),
            request.originator().as_str().to_owned(),
        ),
    ];

    let options = request.options();
    if let Some(encoding) = options.encoding {
        params.push((SmsEncoding::FIELD.to_owned(), encoding.as_str().to_owned()));
    }
    if let Some(originator_type) = options.originator_type {
        params.push((
            OriginatorType::FIELD.to_owned(),
            originator_type.as_str().to_owned(),
        ));
    }
    if let Some(ttl) = options.ttl {
        params.push((TtlMinutes::FIELD.to_owned(), ttl.value().to_string()));
    }

    params
}

pub fn decode_send_sms_success(success: Value) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsJsonResponse = serde_json::from_value(success)?;
    Ok(SendSmsResponse {
        tx_guid: parsed.txguid,
        sms_parts: parsed.smsparts,
        numbers: parsed.numbers,
        encoding: parsed.encoding,
        cost_in_pence: parsed.cost_in_pence,
        new_balance_in_pence: parsed.new_balance_in_pence,
    })
}
