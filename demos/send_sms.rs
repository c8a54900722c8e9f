use std::io;

use zensend::{ApiKey, MessageBody, Msisdn, Originator, SendOptions, SendSms, ZenSendClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("ZENSEND_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ZENSEND_API_KEY environment variable is required",
        )
    })?;
    let number = std::env::var("ZENSEND_NUMBER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ZENSEND_NUMBER environment variable is required",
        )
    })?;
    let originator = std::env::var("ZENSEND_ORIGINATOR").unwrap_or_else(|_| "ZENSEND".to_owned());
    let body = std::env::var("ZENSEND_BODY")
        .unwrap_or_else(|_| "Hello from the zensend demo.".to_owned());

    let client = ZenSendClient::new(ApiKey::new(api_key)?);
    let request = SendSms::new(
        Originator::new(originator)?,
        MessageBody::new(body)?,
        vec![Msisdn::new(number)?],
        SendOptions::default(),
    )?;

    let response = client.send_sms(request).await?;
    println!(
        "tx_guid: {}, sms_parts: {}, encoding: {}, cost: {:?}p, balance: {:?}p",
        response.tx_guid,
        response.sms_parts,
        response.encoding,
        response.cost_in_pence,
        response.new_balance_in_pence
    );

    Ok(())
}
