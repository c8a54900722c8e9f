//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{CreateKeyword, SendOptions, SendSms};
pub use response::{ApiError, OperatorLookupResponse, Prices, SendSmsResponse};
pub use validation::ArgumentError;
pub use value::{
    ApiKey, MessageBody, Msisdn, Originator, OriginatorType, SmsEncoding, TtlMinutes,
};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn valid_params() -> serde_json::Value {
        json!({
            "originator": "ORIGINATOR",
            "body": "BODY",
            "numbers": ["447878787877"],
        })
    }

    fn params_with(key: &str, value: serde_json::Value) -> serde_json::Value {
        let mut params = valid_params();
        params[key] = value;
        params
    }

    fn params_without(key: &str) -> serde_json::Value {
        let mut params = valid_params();
        params.as_object_mut().unwrap().remove(key);
        params
    }

    #[test]
    fn send_sms_from_params_builds_request() {
        let request = SendSms::try_from(&json!({
            "originator": "ORIGINATOR",
            "body": "BODY",
            "numbers": ["447878787877", "447878787878"],
            "originator_type": "alpha",
            "timetolive_in_minutes": 60,
            "encoding": "gsm",
        }))
        .unwrap();

        assert_eq!(request.originator().as_str(), "ORIGINATOR");
        assert_eq!(request.body().as_str(), "BODY");
        let numbers: Vec<&str> = request.numbers().iter().map(Msisdn::raw).collect();
        assert_eq!(numbers, ["447878787877", "447878787878"]);
        assert_eq!(
            request.options(),
            &SendOptions {
                originator_type: Some(OriginatorType::Alpha),
                ttl: Some(TtlMinutes::new(60).unwrap()),
                encoding: Some(SmsEncoding::Gsm),
            }
        );
    }

    #[test]
    fn send_sms_accepts_camel_case_option_keys() {
        let request = SendSms::try_from(&json!({
            "originator": "ORIGINATOR",
            "body": "BODY",
            "numbers": ["447878787877"],
            "originatorType": "msisdn",
            "timeToLiveMinutes": 15,
        }))
        .unwrap();

        assert_eq!(
            request.options(),
            &SendOptions {
                originator_type: Some(OriginatorType::Msisdn),
                ttl: Some(TtlMinutes::new(15).unwrap()),
                encoding: None,
            }
        );
        assert_eq!(
            SendSms::try_from(&params_with("timeToLiveMinutes", json!(0))),
            Err(ArgumentError::NonPositiveTtl { actual: 0 })
        );
    }

    #[test]
    fn send_sms_rejects_both_spellings_of_one_key() {
        let mut params = params_with("originator_type", json!("alpha"));
        params["originatorType"] = json!("alpha");
        assert_eq!(
            SendSms::try_from(&params),
            Err(ArgumentError::UnexpectedParameter {
                name: "originatorType".to_owned()
            })
        );
    }

    #[test]
    fn send_sms_keeps_whitespace_in_values() {
        let request = SendSms::try_from(&json!({
            "originator": " O ",
            "body": " ",
            "numbers": [" 447 "],
        }))
        .unwrap();

        assert_eq!(request.originator().as_str(), " O ");
        assert_eq!(request.body().as_str(), " ");
        assert_eq!(request.numbers()[0].raw(), " 447 ");
    }

    #[test]
    fn send_sms_requires_each_mandatory_param() {
        for param in ["originator", "body", "numbers"] {
            assert_eq!(
                SendSms::try_from(&params_without(param)),
                Err(ArgumentError::MissingRequired { param }),
                "dropping {param}"
            );
        }
    }

    #[test]
    fn send_sms_treats_falsy_values_as_missing() {
        assert_eq!(
            SendSms::try_from(&params_with("originator", json!(""))),
            Err(ArgumentError::MissingRequired {
                param: "originator"
            })
        );
        assert_eq!(
            SendSms::try_from(&params_with("body", json!(null))),
            Err(ArgumentError::MissingRequired { param: "body" })
        );
        assert_eq!(
            SendSms::try_from(&params_with("numbers", json!(false))),
            Err(ArgumentError::MissingRequired { param: "numbers" })
        );
    }

    #[test]
    fn send_sms_requires_numbers_to_be_an_array() {
        let err = SendSms::try_from(&params_with(
            "numbers",
            json!("447676767676,448787878787"),
        ))
        .unwrap_err();
        assert_eq!(err, ArgumentError::NumbersNotSequence);
        assert_eq!(err.to_string(), "numbers must be an array");
    }

    #[test]
    fn send_sms_rejects_empty_numbers() {
        assert_eq!(
            SendSms::try_from(&params_with("numbers", json!([]))),
            Err(ArgumentError::MissingRequired { param: "numbers" })
        );
    }

    #[test]
    fn send_sms_rejects_comma_in_number() {
        let err = SendSms::try_from(&params_with(
            "numbers",
            json!(["447878787877", "4476,44"]),
        ))
        .unwrap_err();
        assert_eq!(err.to_string(), "invalid character in number: 4476,44");
    }

    #[test]
    fn send_sms_rejects_unexpected_params() {
        let err = SendSms::try_from(&params_with("invalid", json!("invalid"))).unwrap_err();
        assert_eq!(
            err,
            ArgumentError::UnexpectedParameter {
                name: "invalid".to_owned()
            }
        );
        assert_eq!(err.to_string(), "unexpected parameter: invalid");
    }

    #[test]
    fn send_sms_reports_unexpected_param_before_missing_ones() {
        let err = SendSms::try_from(&json!({ "extra": 1 })).unwrap_err();
        assert!(matches!(err, ArgumentError::UnexpectedParameter { name } if name == "extra"));
    }

    #[test]
    fn send_sms_validates_optional_values() {
        assert!(matches!(
            SendSms::try_from(&params_with("encoding", json!("utf8"))),
            Err(ArgumentError::InvalidValue {
                param: "encoding",
                ..
            })
        ));
        assert!(matches!(
            SendSms::try_from(&params_with("originator_type", json!("numeric"))),
            Err(ArgumentError::InvalidValue {
                param: "originator_type",
                ..
            })
        ));
        assert_eq!(
            SendSms::try_from(&params_with("timetolive_in_minutes", json!(-5))),
            Err(ArgumentError::NonPositiveTtl { actual: -5 })
        );
        assert!(matches!(
            SendSms::try_from(&params_with("timetolive_in_minutes", json!("60"))),
            Err(ArgumentError::InvalidValue {
                param: "timetolive_in_minutes",
                ..
            })
        ));
    }

    #[test]
    fn send_sms_ignores_null_optional_values() {
        let request = SendSms::try_from(&params_with("encoding", json!(null))).unwrap();
        assert_eq!(request.options(), &SendOptions::default());
    }

    #[test]
    fn send_sms_rejects_non_object_params() {
        assert!(matches!(
            SendSms::try_from(&json!(["originator"])),
            Err(ArgumentError::InvalidValue { param: "params", .. })
        ));
    }

    #[test]
    fn typed_send_sms_requires_recipients() {
        let err = SendSms::new(
            Originator::new("ZENSEND").unwrap(),
            MessageBody::new("hi").unwrap(),
            Vec::new(),
            SendOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, ArgumentError::MissingRequired { param: "numbers" });
    }

    #[test]
    fn create_keyword_from_params_accepts_known_keys() {
        let request = CreateKeyword::try_from(&json!({
            "shortcode": "SC",
            "keyword": "KW",
            "is_sticky": true,
            "mo_url": "http://mo",
        }))
        .unwrap();

        assert_eq!(
            request,
            CreateKeyword {
                shortcode: Some("SC".to_owned()),
                keyword: Some("KW".to_owned()),
                is_sticky: Some(true),
                mo_url: Some("http://mo".to_owned()),
            }
        );

        assert_eq!(
            CreateKeyword::try_from(&json!({})).unwrap(),
            CreateKeyword::default()
        );
    }

    #[test]
    fn create_keyword_accepts_camel_case_keys() {
        let request = CreateKeyword::try_from(&json!({
            "keyword": "KW",
            "isSticky": true,
            "moUrl": "http://mo",
        }))
        .unwrap();

        assert_eq!(request.is_sticky, Some(true));
        assert_eq!(request.mo_url.as_deref(), Some("http://mo"));
        assert!(matches!(
            CreateKeyword::try_from(&json!({ "isSticky": 1 })),
            Err(ArgumentError::InvalidValue {
                param: "is_sticky",
                ..
            })
        ));
    }

    #[test]
    fn create_keyword_rejects_unknown_keys() {
        let err = CreateKeyword::try_from(&json!({ "keyword": "KW", "url": "x" })).unwrap_err();
        assert_eq!(err.to_string(), "unexpected parameter: url");
    }

    #[test]
    fn create_keyword_requires_boolean_sticky_flag() {
        assert!(matches!(
            CreateKeyword::try_from(&json!({ "is_sticky": "yes" })),
            Err(ArgumentError::InvalidValue {
                param: "is_sticky",
                ..
            })
        ));
    }
}
