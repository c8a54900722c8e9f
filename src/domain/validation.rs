use std::fmt;

/// Local precondition failure. Raised before any request leaves the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    MissingApiKey,
    MissingRequired { param: &'static str },
    UnexpectedParameter { name: String },
    NumbersNotSequence,
    InvalidNumberCharacter { number: String },
    NonPositiveTtl { actual: i64 },
    InvalidValue { param: &'static str, expected: &'static str },
    InvalidBaseUrl { url: String },
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "API key must be present"),
            Self::MissingRequired { param } => write!(f, "missing required param: {param}"),
            Self::UnexpectedParameter { name } => write!(f, "unexpected parameter: {name}"),
            Self::NumbersNotSequence => write!(f, "numbers must be an array"),
            Self::InvalidNumberCharacter { number } => {
                write!(f, "invalid character in number: {number}")
            }
            Self::NonPositiveTtl { actual } => {
                write!(f, "time to live must be a positive number of minutes: {actual}")
            }
            Self::InvalidValue { param, expected } => {
                write!(f, "invalid value for {param}: expected {expected}")
            }
            Self::InvalidBaseUrl { url } => write!(f, "invalid base url: {url}"),
        }
    }
}

impl std::error::Error for ArgumentError {}

#[cfg(test)]
mod tests {
    use super::ArgumentError;

    #[test]
    fn display_messages_are_human_readable() {
        assert_eq!(
            ArgumentError::MissingApiKey.to_string(),
            "API key must be present"
        );

        let err = ArgumentError::MissingRequired { param: "originator" };
        assert_eq!(err.to_string(), "missing required param: originator");

        let err = ArgumentError::UnexpectedParameter {
            name: "invalid".to_owned(),
        };
        assert_eq!(err.to_string(), "unexpected parameter: invalid");

        assert_eq!(
            ArgumentError::NumbersNotSequence.to_string(),
            "numbers must be an array"
        );

        let err = ArgumentError::InvalidNumberCharacter {
            number: "447,44".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid character in number: 447,44");

        let err = ArgumentError::NonPositiveTtl { actual: 0 };
        assert_eq!(
            err.to_string(),
            "time to live must be a positive number of minutes: 0"
        );

        let err = ArgumentError::InvalidValue {
            param: "encoding",
            expected: "one of ucs2, gsm, auto",
        };
        assert_eq!(
            err.to_string(),
            "invalid value for encoding: expected one of ucs2, gsm, auto"
        );
    }
}
