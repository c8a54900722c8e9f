//! Typed Rust client for the ZenSend SMS HTTP API.
//!
//! The crate is split into a domain layer of validated types, a transport layer for
//! wire-format details (form encoding, the `success`/`failure` envelope), and a small
//! client layer orchestrating requests.
//!
//! ```rust,no_run
//! use zensend::{ApiKey, MessageBody, Msisdn, Originator, SendOptions, SendSms, ZenSendClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), zensend::ZenSendError> {
//!     let client = ZenSendClient::new(ApiKey::new("...")?);
//!     let request = SendSms::new(
//!         Originator::new("ZENSEND")?,
//!         MessageBody::new("hello")?,
//!         vec![Msisdn::new("447777777777")?],
//!         SendOptions::default(),
//!     )?;
//!     let response = client.send_sms(request).await?;
//!     println!("sent {} part(s), tx {}", response.sms_parts, response.tx_guid);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ZenSendClient, ZenSendClientBuilder, ZenSendError,
};
pub use domain::{
    ApiError, ApiKey, ArgumentError, CreateKeyword, MessageBody, Msisdn, OperatorLookupResponse,
    Originator, OriginatorType, Prices, SendOptions, SendSms, SendSmsResponse, SmsEncoding,
    TtlMinutes,
};
