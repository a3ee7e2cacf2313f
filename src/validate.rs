use thiserror::Error;

/// Why a raw form field was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field}: '{text}' is not a number")]
    Parse { field: &'static str, text: String },

    #[error("{field}: {value} must be {expected}")]
    Domain {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
}

fn parse(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn is_positive_float(text: &str) -> bool {
    parse(text).is_some_and(|v| v > 0.0)
}

pub fn is_bezier_control_point(text: &str) -> bool {
    parse(text).is_some_and(|v| (0.0..=1.0).contains(&v))
}

fn checked(
    field: &'static str,
    text: &str,
    accept: impl Fn(f64) -> bool,
    expected: &'static str,
) -> Result<f64, InputError> {
    let value = parse(text).ok_or_else(|| InputError::Parse {
        field,
        text: text.to_string(),
    })?;
    if accept(value) {
        Ok(value)
    } else {
        Err(InputError::Domain {
            field,
            value,
            expected,
        })
    }
}

pub fn positive_float(field: &'static str, text: &str) -> Result<f64, InputError> {
    checked(field, text, |v| v > 0.0, "greater than zero")
}

pub fn bezier_control_point(field: &'static str, text: &str) -> Result<f64, InputError> {
    checked(field, text, |v| (0.0..=1.0).contains(&v), "between 0 and 1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_float_checks() {
        assert!(!is_positive_float("0"));
        assert!(is_positive_float("3.2"));
        assert!(!is_positive_float("abc"));
        assert!(!is_positive_float("-1"));
        assert!(!is_positive_float(""));
        assert!(is_positive_float(" 24 "));
    }

    #[test]
    fn control_point_checks() {
        assert!(!is_bezier_control_point("1.5"));
        assert!(is_bezier_control_point("0"));
        assert!(is_bezier_control_point("1"));
        assert!(!is_bezier_control_point("-0.1"));
        assert!(!is_bezier_control_point("x"));
    }

    #[test]
    fn non_finite_text_is_rejected() {
        assert!(!is_positive_float("inf"));
        assert!(!is_positive_float("NaN"));
        assert!(!is_bezier_control_point("nan"));
    }

    #[test]
    fn typed_parsers_report_field_and_kind() {
        assert_eq!(positive_float("frame rate", "12.5"), Ok(12.5));
        assert_eq!(
            positive_float("frame rate", "twelve"),
            Err(InputError::Parse {
                field: "frame rate",
                text: "twelve".to_string(),
            })
        );
        let err = bezier_control_point("p1", "2").unwrap_err();
        assert!(matches!(err, InputError::Domain { field: "p1", .. }));
        assert_eq!(err.to_string(), "p1: 2 must be between 0 and 1");
    }

    #[test]
    fn typed_parsers_agree_with_checks() {
        for text in ["0", "1", "0.5", "-0.5", "1.5", "3.2", "abc", "", " 0.25 "] {
            assert_eq!(positive_float("f", text).is_ok(), is_positive_float(text), "{text:?}");
            assert_eq!(bezier_control_point("f", text).is_ok(), is_bezier_control_point(text), "{text:?}");
        }
        assert!(matches!(
            positive_float("f", "0"),
            Err(InputError::Domain { value, .. }) if value == 0.0
        ));
    }
}
