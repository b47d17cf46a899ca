use std::str::FromStr;
use thiserror::Error;

use crate::api::TypedSpec;
use crate::model::{ScalarKind, ScalarValue};
use crate::prelude::Scalar;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum InvalidCapture {
    #[error("Unable to convert '{token}' to destination type")]
    InvalidConversion { token: String },
    #[error("Value '{token}' not expected.")]
    UnexpectedValue { token: String },
}

/// Convert a token into `T`, enforcing the choices of the spec.
pub(crate) fn capture<T: Scalar>(spec: &TypedSpec<T>, token: &str) -> Result<T, InvalidCapture> {
    let value = T::convert(token).ok_or_else(|| InvalidCapture::InvalidConversion {
        token: token.to_string(),
    })?;
    admit(spec, value, token)
}

/// Enforce the choices of the spec on an already typed value.
pub(crate) fn admit<T: Scalar>(
    spec: &TypedSpec<T>,
    value: T,
    token: &str,
) -> Result<T, InvalidCapture> {
    if spec.get_choices().is_empty() || spec.get_choices().contains(&value) {
        Ok(value)
    } else {
        Err(InvalidCapture::UnexpectedValue {
            token: token.to_string(),
        })
    }
}

impl Scalar for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn zero() -> Self {
        false
    }

    fn convert(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        }
    }

    fn flag() -> Option<Self> {
        Some(true)
    }

    fn into_scalar(self) -> ScalarValue {
        ScalarValue::Bool(self)
    }
}

impl Scalar for i64 {
    const KIND: ScalarKind = ScalarKind::Int64;

    fn zero() -> Self {
        0
    }

    fn convert(token: &str) -> Option<Self> {
        i64::from_str(token).ok()
    }

    fn into_scalar(self) -> ScalarValue {
        ScalarValue::Int64(self)
    }
}

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::Double;

    fn zero() -> Self {
        0.0
    }

    fn convert(token: &str) -> Option<Self> {
        // Rust accepts "inf" and "NaN" as floats; a command line literal must be finite.
        f64::from_str(token).ok().filter(|value| value.is_finite())
    }

    fn into_scalar(self) -> ScalarValue {
        ScalarValue::Double(self)
    }
}

impl Scalar for String {
    const KIND: ScalarKind = ScalarKind::String;

    fn zero() -> Self {
        String::default()
    }

    fn convert(token: &str) -> Option<Self> {
        Some(token.to_string())
    }

    fn into_scalar(self) -> ScalarValue {
        ScalarValue::String(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("true", Some(true))]
    #[case("TRUE", Some(true))]
    #[case("yes", Some(true))]
    #[case("1", Some(true))]
    #[case("off", Some(false))]
    #[case("False", Some(false))]
    #[case("0", Some(false))]
    #[case("truthy", None)]
    #[case("", None)]
    fn convert_bool(#[case] token: &str, #[case] expected: Option<bool>) {
        assert_eq!(bool::convert(token), expected);
    }

    #[rstest]
    #[case("416", Some(416))]
    #[case("-905", Some(-905))]
    #[case("+7", Some(7))]
    #[case("4.16", None)]
    #[case("test", None)]
    #[case("9223372036854775808", None)]
    fn convert_int(#[case] token: &str, #[case] expected: Option<i64>) {
        assert_eq!(i64::convert(token), expected);
    }

    #[rstest]
    #[case("90.5", Some(90.5))]
    #[case("-0.4", Some(-0.4))]
    #[case("905", Some(905.0))]
    #[case("1e3", Some(1000.0))]
    #[case("inf", None)]
    #[case("NaN", None)]
    #[case("test", None)]
    fn convert_double(#[case] token: &str, #[case] expected: Option<f64>) {
        assert_eq!(f64::convert(token), expected);
    }

    #[test]
    fn convert_string() {
        assert_eq!(String::convert(""), Some("".to_string()));
        assert_eq!(String::convert("--flag"), Some("--flag".to_string()));
    }

    #[test]
    fn flags() {
        assert_eq!(bool::flag(), Some(true));
        assert_eq!(i64::flag(), None);
        assert_eq!(f64::flag(), None);
        assert_eq!(String::flag(), None);
    }

    #[test]
    fn capture_unconstrained() {
        let spec = TypedSpec::<i64>::default();
        assert_eq!(capture(&spec, "905"), Ok(905));
        assert_eq!(
            capture(&spec, "test"),
            Err(InvalidCapture::InvalidConversion {
                token: "test".to_string()
            })
        );
    }

    #[rstest]
    #[case("4", Ok(4))]
    #[case("6", Ok(6))]
    #[case("905", Err(InvalidCapture::UnexpectedValue { token: "905".to_string() }))]
    #[case("four", Err(InvalidCapture::InvalidConversion { token: "four".to_string() }))]
    fn capture_choices(#[case] token: &str, #[case] expected: Result<i64, InvalidCapture>) {
        let spec = TypedSpec::<i64>::default().choices([4, 1, 6]);
        assert_eq!(capture(&spec, token), expected);
    }

    #[test]
    fn capture_messages() {
        assert_eq!(
            InvalidCapture::InvalidConversion {
                token: "test".to_string()
            }
            .to_string(),
            "Unable to convert 'test' to destination type"
        );
        assert_eq!(
            InvalidCapture::UnexpectedValue {
                token: "905".to_string()
            }
            .to_string(),
            "Value '905' not expected."
        );
    }
}
