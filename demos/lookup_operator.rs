use std::io;

use zensend::{ApiKey, ZenSendClient, ZenSendError};

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

    let client = ZenSendClient::new(ApiKey::new(api_key)?);
    match client.lookup_operator(&number).await {
        Ok(found) => println!(
            "operator: {:?}, mcc: {:?}, mnc: {:?}, cost: {:?}p",
            found.operator, found.mcc, found.mnc, found.cost_in_pence
        ),
        Err(ZenSendError::Api(err)) => {
            println!("lookup failed: {err} (charged: {:?}p)", err.cost_in_pence);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
