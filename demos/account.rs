use std::io;

use zensend::{ApiKey, ZenSendClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("ZENSEND_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ZENSEND_API_KEY environment variable is required",
        )
    })?;

    let client = ZenSendClient::new(ApiKey::new(api_key)?);

    let balance = client.check_balance().await?;
    println!("balance: {balance}p");

    for (country, price) in client.get_prices().await? {
        println!("{country}: {price}p");
    }

    Ok(())
}
