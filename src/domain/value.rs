use std::fmt;
use std::str::FromStr;

use crate::domain::validation::ArgumentError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// ZenSend API key sent in the `X-API-KEY` header.
///
/// Invariant: non-empty. Stored exactly as given.
pub struct ApiKey(String);

impl ApiKey {
    /// Header name used by ZenSend (`X-API-KEY`).
    pub const HEADER: &'static str = "X-API-KEY";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ArgumentError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ArgumentError::MissingApiKey);
        }
        Ok(Self(value))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender identifier shown to the recipient (`ORIGINATOR`).
///
/// Invariant: non-empty. Stored exactly as given.
pub struct Originator(String);

impl Originator {
    /// Form field name used by ZenSend (`ORIGINATOR`).
    pub const FIELD: &'static str = "ORIGINATOR";
    pub(crate) const PARAM: &'static str = "originator";

    /// Create a validated [`Originator`].
    pub fn new(value: impl Into<String>) -> Result<Self, ArgumentError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ArgumentError::MissingRequired { param: Self::PARAM });
        }
        Ok(Self(value))
    }

    /// Borrow the validated originator.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message body (`BODY`).
///
/// Invariant: non-empty. Whitespace is preserved.
pub struct MessageBody(String);

impl MessageBody {
    /// Form field name used by ZenSend (`BODY`).
    pub const FIELD: &'static str = "BODY";
    pub(crate) const PARAM: &'static str = "body";

    /// Create a validated message body.
    pub fn new(value: impl Into<String>) -> Result<Self, ArgumentError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ArgumentError::MissingRequired { param: Self::PARAM });
        }
        Ok(Self(value))
    }

    /// Borrow the body as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient number as sent to ZenSend inside `NUMBERS`.
///
/// Invariant: contains no `,`, since recipients are joined with commas on the wire.
/// No other format check is performed; the service validates the number itself.
pub struct Msisdn(String);

impl Msisdn {
    /// Form field name used by ZenSend for the joined recipient list (`NUMBERS`).
    pub const FIELD: &'static str = "NUMBERS";
    /// Separator used to join recipients on the wire.
    pub const SEPARATOR: &'static str = ",";

    /// Create a recipient number, rejecting values that would corrupt the joined list.
    pub fn new(value: impl Into<String>) -> Result<Self, ArgumentError> {
        let value = value.into();
        if value.contains(Self::SEPARATOR) {
            return Err(ArgumentError::InvalidNumberCharacter { number: value });
        }
        Ok(Self(value))
    }

    /// Raw value as sent to ZenSend.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Minutes before an undelivered message expires (`TIMETOLIVE`).
///
/// Invariant: strictly positive.
pub struct TtlMinutes(u32);

impl TtlMinutes {
    /// Form field name used by ZenSend (`TIMETOLIVE`).
    pub const FIELD: &'static str = "TIMETOLIVE";

    /// Create a validated TTL value.
    pub fn new(value: u32) -> Result<Self, ArgumentError> {
        if value == 0 {
            return Err(ArgumentError::NonPositiveTtl { actual: 0 });
        }
        Ok(Self(value))
    }

    /// Get the underlying TTL value.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How ZenSend should interpret the originator (`ORIGINATOR_TYPE`).
pub enum OriginatorType {
    /// Alphanumeric sender id.
    Alpha,
    /// Numeric sender id in international format.
    Msisdn,
}

impl OriginatorType {
    /// Form field name used by ZenSend (`ORIGINATOR_TYPE`).
    pub const FIELD: &'static str = "ORIGINATOR_TYPE";

    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Msisdn => "msisdn",
        }
    }
}

impl FromStr for OriginatorType {
    type Err = ArgumentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "alpha" => Ok(Self::Alpha),
            "msisdn" => Ok(Self::Msisdn),
            _ => Err(ArgumentError::InvalidValue {
                param: "originator_type",
                expected: "one of alpha, msisdn",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Message encoding (`ENCODING`).
pub enum SmsEncoding {
    Ucs2,
    Gsm,
    /// Let ZenSend pick the encoding from the body contents.
    Auto,
}

impl SmsEncoding {
    /// Form field name used by ZenSend (`ENCODING`).
    pub const FIELD: &'static str = "ENCODING";

    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ucs2 => "ucs2",
            Self::Gsm => "gsm",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for SmsEncoding {
    type Err = ArgumentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ucs2" => Ok(Self::Ucs2),
            "gsm" => Ok(Self::Gsm),
            "auto" => Ok(Self::Auto),
            _ => Err(ArgumentError::InvalidValue {
                param: "encoding",
                expected: "one of ucs2, gsm, auto",
            }),
        }
    }
}
