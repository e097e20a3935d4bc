use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single decimal digit key, `0` through `9`.
///
/// Wrapping the raw `u8` keeps out-of-range values from ever reaching the
/// transition function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Result<Self, CalcError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(CalcError::ValidationError(format!(
                "Digit must be between 0 and 9, got {value}"
            )))
        }
    }

    pub fn as_char(&self) -> char {
        char::from(b'0' + self.0)
    }
}

/// One of the four binary operators on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Applies the operator to `lhs` and `rhs`.
    ///
    /// Division by zero yields NaN. Overflow is left to IEEE 754 and comes
    /// back as an infinity.
    pub fn evaluate(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    f64::NAN
                } else {
                    lhs / rhs
                }
            }
        }
    }
}

/// A committed key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum KeyToken {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    /// The `AC` key.
    Clear,
}

impl FromStr for KeyToken {
    type Err = CalcError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let key = match label {
            "." => KeyToken::Decimal,
            "+" => KeyToken::Operator(Operator::Add),
            "-" => KeyToken::Operator(Operator::Subtract),
            "×" | "*" | "x" | "X" => KeyToken::Operator(Operator::Multiply),
            "÷" | "/" => KeyToken::Operator(Operator::Divide),
            "=" => KeyToken::Equals,
            "AC" | "ac" | "C" | "c" => KeyToken::Clear,
            _ => match label.as_bytes() {
                [d @ b'0'..=b'9'] => KeyToken::Digit(Digit::new(d - b'0')?),
                _ => {
                    return Err(CalcError::ValidationError(format!(
                        "Unknown key '{label}'"
                    )));
                }
            },
        };
        Ok(key)
    }
}

impl TryFrom<String> for KeyToken {
    type Error = CalcError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyToken::Digit(d) => write!(f, "{}", d.as_char()),
            KeyToken::Decimal => f.write_str("."),
            KeyToken::Operator(op) => f.write_str(op.symbol()),
            KeyToken::Equals => f.write_str("="),
            KeyToken::Clear => f.write_str("AC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_validation() {
        assert_eq!(Digit::new(7).unwrap().as_char(), '7');
        assert!(matches!(
            Digit::new(10),
            Err(CalcError::ValidationError(_))
        ));
    }

    #[test]
    fn test_parse_canonical_labels() {
        assert_eq!(
            "5".parse::<KeyToken>().unwrap(),
            KeyToken::Digit(Digit::new(5).unwrap())
        );
        assert_eq!(".".parse::<KeyToken>().unwrap(), KeyToken::Decimal);
        assert_eq!(
            "×".parse::<KeyToken>().unwrap(),
            KeyToken::Operator(Operator::Multiply)
        );
        assert_eq!(
            "÷".parse::<KeyToken>().unwrap(),
            KeyToken::Operator(Operator::Divide)
        );
        assert_eq!("=".parse::<KeyToken>().unwrap(), KeyToken::Equals);
        assert_eq!("AC".parse::<KeyToken>().unwrap(), KeyToken::Clear);
    }

    #[test]
    fn test_parse_ascii_aliases() {
        assert_eq!(
            "*".parse::<KeyToken>().unwrap(),
            KeyToken::Operator(Operator::Multiply)
        );
        assert_eq!(
            "/".parse::<KeyToken>().unwrap(),
            KeyToken::Operator(Operator::Divide)
        );
        assert_eq!("c".parse::<KeyToken>().unwrap(), KeyToken::Clear);
    }

    #[test]
    fn test_parse_unknown_label() {
        assert!(matches!(
            "12".parse::<KeyToken>(),
            Err(CalcError::ValidationError(_))
        ));
        assert!("%".parse::<KeyToken>().is_err());
        assert!("".parse::<KeyToken>().is_err());
    }

    #[test]
    fn test_display_uses_canonical_label() {
        let key: KeyToken = "*".parse().unwrap();
        assert_eq!(key.to_string(), "×");
        assert_eq!(KeyToken::Clear.to_string(), "AC");
    }

    #[test]
    fn test_operator_evaluate() {
        assert_eq!(Operator::Add.evaluate(2.0, 3.0), 5.0);
        assert_eq!(Operator::Subtract.evaluate(2.0, 3.0), -1.0);
        assert_eq!(Operator::Multiply.evaluate(2.0, 3.0), 6.0);
        assert_eq!(Operator::Divide.evaluate(3.0, 2.0), 1.5);
        assert!(Operator::Divide.evaluate(8.0, 0.0).is_nan());
        assert!(Operator::Multiply.evaluate(f64::MAX, 10.0).is_infinite());
    }
}
