use serde_json::{Map, Value};

use crate::domain::validation::ArgumentError;
use crate::domain::value::{
    MessageBody, Msisdn, Originator, OriginatorType, SmsEncoding, TtlMinutes,
};

/// A loosely-typed parameter key, optionally also accepted under a camelCase alias.
///
/// Errors always name the snake_case key.
#[derive(Debug, Clone, Copy)]
struct Param {
    name: &'static str,
    alias: Option<&'static str>,
}

impl Param {
    const fn plain(name: &'static str) -> Self {
        Self { name, alias: None }
    }

    const fn aliased(name: &'static str, alias: &'static str) -> Self {
        Self {
            name,
            alias: Some(alias),
        }
    }

    fn accepts(self, key: &str) -> bool {
        key == self.name || self.alias == Some(key)
    }

    /// Resolve the value under either spelling. Supplying both is rejected.
    fn lookup(self, params: &Map<String, Value>) -> Result<Option<&Value>, ArgumentError> {
        let aliased = self
            .alias
            .and_then(|alias| params.get(alias).map(|value| (alias, value)));
        match (params.get(self.name), aliased) {
            (Some(_), Some((alias, _))) => Err(ArgumentError::UnexpectedParameter {
                name: alias.to_owned(),
            }),
            (Some(value), None) | (None, Some((_, value))) => Ok(Some(value)),
            (None, None) => Ok(None),
        }
    }
}

const ORIGINATOR: Param = Param::plain(Originator::PARAM);
const BODY: Param = Param::plain(MessageBody::PARAM);
const NUMBERS: Param = Param::plain("numbers");
const ORIGINATOR_TYPE: Param = Param::aliased("originator_type", "originatorType");
const TIME_TO_LIVE: Param = Param::aliased("timetolive_in_minutes", "timeToLiveMinutes");
const ENCODING: Param = Param::plain("encoding");

const SEND_SMS_PARAMS: [Param; 6] = [
    ORIGINATOR,
    BODY,
    NUMBERS,
    ORIGINATOR_TYPE,
    TIME_TO_LIVE,
    ENCODING,
];
const SEND_SMS_REQUIRED_PARAMS: [Param; 3] = [ORIGINATOR, BODY, NUMBERS];

const SHORTCODE: Param = Param::plain("shortcode");
const KEYWORD: Param = Param::plain("keyword");
const IS_STICKY: Param = Param::aliased("is_sticky", "isSticky");
const MO_URL: Param = Param::aliased("mo_url", "moUrl");

const KEYWORD_PARAMS: [Param; 4] = [SHORTCODE, KEYWORD, IS_STICKY, MO_URL];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOptions {
    pub originator_type: Option<OriginatorType>,
    pub ttl: Option<TtlMinutes>,
    pub encoding: Option<SmsEncoding>,
}

/// A validated `sendsms` request.
///
/// Invariant: at least one recipient; every recipient is free of the wire separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSms {
    originator: Originator,
    body: MessageBody,
    numbers: Vec<Msisdn>,
    options: SendOptions,
}

impl SendSms {
    pub fn new(
        originator: Originator,
        body: MessageBody,
        numbers: Vec<Msisdn>,
        options: SendOptions,
    ) -> Result<Self, ArgumentError> {
        if numbers.is_empty() {
            return Err(ArgumentError::MissingRequired { param: "numbers" });
        }
        Ok(Self {
            originator,
            body,
            numbers,
            options,
        })
    }

    pub fn originator(&self) -> &Originator {
        &self.originator
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    pub fn numbers(&self) -> &[Msisdn] {
        &self.numbers
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

impl TryFrom<&Value> for SendSms {
    type Error = ArgumentError;

    /// Build a request from a loosely-typed parameter object.
    ///
    /// Checks run in a fixed order and the first failure is reported: unknown keys,
    /// missing required keys, the shape of `numbers`, then optional values.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let params = as_params(value)?;
        reject_unexpected(params, &SEND_SMS_PARAMS)?;

        for param in SEND_SMS_REQUIRED_PARAMS {
            if param.lookup(params)?.is_none_or(is_falsy) {
                return Err(ArgumentError::MissingRequired { param: param.name });
            }
        }

        let Some(Value::Array(raw_numbers)) = NUMBERS.lookup(params)? else {
            return Err(ArgumentError::NumbersNotSequence);
        };
        let numbers = raw_numbers
            .iter()
            .map(|number| match number {
                Value::String(number) => Msisdn::new(number.as_str()),
                _ => Err(ArgumentError::InvalidValue {
                    param: NUMBERS.name,
                    expected: "an array of strings",
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let originator = Originator::new(required_str(params, ORIGINATOR)?)?;
        let body = MessageBody::new(required_str(params, BODY)?)?;

        let options = SendOptions {
            originator_type: optional_str(params, ORIGINATOR_TYPE)?
                .map(str::parse::<OriginatorType>)
                .transpose()?,
            ttl: optional_ttl(params)?,
            encoding: optional_str(params, ENCODING)?
                .map(str::parse::<SmsEncoding>)
                .transpose()?,
        };

        Self::new(originator, body, numbers, options)
    }
}

/// A `keywords` request: configures inbound SMS routing for a shortcode/keyword pair.
///
/// Every field is optional; the service decides which combinations it accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateKeyword {
    pub shortcode: Option<String>,
    pub keyword: Option<String>,
    pub is_sticky: Option<bool>,
    pub mo_url: Option<String>,
}

impl CreateKeyword {
    pub const SHORTCODE_FIELD: &'static str = "SHORTCODE";
    pub const KEYWORD_FIELD: &'static str = "KEYWORD";
    pub const IS_STICKY_FIELD: &'static str = "IS_STICKY";
    pub const MO_URL_FIELD: &'static str = "MO_URL";
}

impl TryFrom<&Value> for CreateKeyword {
    type Error = ArgumentError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let params = as_params(value)?;
        reject_unexpected(params, &KEYWORD_PARAMS)?;

        let is_sticky = match IS_STICKY.lookup(params)? {
            None | Some(Value::Null) => None,
            Some(Value::Bool(flag)) => Some(*flag),
            Some(_) => {
                return Err(ArgumentError::InvalidValue {
                    param: IS_STICKY.name,
                    expected: "a boolean",
                });
            }
        };

        Ok(Self {
            shortcode: optional_str(params, SHORTCODE)?.map(str::to_owned),
            keyword: optional_str(params, KEYWORD)?.map(str::to_owned),
            is_sticky,
            mo_url: optional_str(params, MO_URL)?.map(str::to_owned),
        })
    }
}

fn as_params(value: &Value) -> Result<&Map<String, Value>, ArgumentError> {
    value.as_object().ok_or(ArgumentError::InvalidValue {
        param: "params",
        expected: "an object",
    })
}

fn reject_unexpected(params: &Map<String, Value>, allowed: &[Param]) -> Result<(), ArgumentError> {
    match params
        .keys()
        .find(|key| !allowed.iter().any(|param| param.accepts(key)))
    {
        Some(name) => Err(ArgumentError::UnexpectedParameter { name: name.clone() }),
        None => Ok(()),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::String(text) => text.is_empty(),
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn required_str(params: &Map<String, Value>, param: Param) -> Result<&str, ArgumentError> {
    optional_str(params, param)?.ok_or(ArgumentError::MissingRequired { param: param.name })
}

fn optional_str(params: &Map<String, Value>, param: Param) -> Result<Option<&str>, ArgumentError> {
    match param.lookup(params)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.as_str())),
        Some(_) => Err(ArgumentError::InvalidValue {
            param: param.name,
            expected: "a string",
        }),
    }
}

fn optional_ttl(params: &Map<String, Value>) -> Result<Option<TtlMinutes>, ArgumentError> {
    const PARAM: &str = TIME_TO_LIVE.name;

    let minutes = match TIME_TO_LIVE.lookup(params)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(number)) => number.as_i64().ok_or(ArgumentError::InvalidValue {
            param: PARAM,
            expected: "an integer",
        })?,
        Some(_) => {
            return Err(ArgumentError::InvalidValue {
                param: PARAM,
                expected: "an integer",
            });
        }
    };

    if minutes <= 0 {
        return Err(ArgumentError::NonPositiveTtl { actual: minutes });
    }
    let minutes = u32::try_from(minutes).map_err(|_| ArgumentError::InvalidValue {
        param: PARAM,
        expected: "an integer that fits in 32 bits",
    })?;
    TtlMinutes::new(minutes).map(Some)
}
