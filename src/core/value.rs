//! Numeric values carried by the calculator, including the division-by-zero
//! sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Buffer text that stands for [`Value::Undefined`].
///
/// Transitions write this literal into the display buffer when a result is
/// undefined. The renderer never shows it directly; it substitutes the
/// configured error marker.
pub const UNDEFINED_LITERAL: &str = "undefined";

/// A calculator operand or result.
///
/// `Undefined` is absorbing: any arithmetic that touches it yields it again.
///
/// # Example
///
/// ```rust
/// use pocket_calc::core::Value;
///
/// let value = Value::from_buffer("12.5");
/// assert_eq!(value, Value::Number(12.5));
/// assert_eq!(value.to_buffer(), "12.5");
///
/// assert!(Value::from_buffer("undefined").is_undefined());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A finite number
    Number(f64),
    /// Result of dividing by zero, or any arithmetic that overflowed
    Undefined,
}

impl Value {
    /// Wrap a raw float, collapsing non-finite values to `Undefined`.
    pub fn new(n: f64) -> Self {
        if n.is_finite() {
            // -0 shows up as "-0" otherwise
            Value::Number(if n == 0.0 { 0.0 } else { n })
        } else {
            Value::Undefined
        }
    }

    /// Parse a display buffer into a value.
    ///
    /// Buffers are only ever built by the digit and decimal-point
    /// transitions or by [`Value::to_buffer`], so anything unparseable is
    /// treated as undefined rather than reported.
    pub fn from_buffer(buffer: &str) -> Self {
        if buffer == UNDEFINED_LITERAL {
            return Value::Undefined;
        }
        buffer
            .parse::<f64>()
            .map(Value::new)
            .unwrap_or(Value::Undefined)
    }

    /// Canonical buffer text: shortest round-trip decimal, never exponent
    /// notation.
    pub fn to_buffer(&self) -> String {
        match self {
            Value::Number(n) => format!("{}", n),
            Value::Undefined => UNDEFINED_LITERAL.to_string(),
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Number(0.0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_buffer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_typed_buffers() {
        assert_eq!(Value::from_buffer("0"), Value::Number(0.0));
        assert_eq!(Value::from_buffer("123"), Value::Number(123.0));
        assert_eq!(Value::from_buffer("5."), Value::Number(5.0));
        assert_eq!(Value::from_buffer("0.5"), Value::Number(0.5));
        assert_eq!(Value::from_buffer("-3"), Value::Number(-3.0));
    }

    #[test]
    fn undefined_literal_parses_to_sentinel() {
        assert_eq!(Value::from_buffer(UNDEFINED_LITERAL), Value::Undefined);
    }

    #[test]
    fn non_finite_collapses_to_undefined() {
        assert_eq!(Value::new(f64::INFINITY), Value::Undefined);
        assert_eq!(Value::new(f64::NEG_INFINITY), Value::Undefined);
        assert_eq!(Value::new(f64::NAN), Value::Undefined);
    }

    #[test]
    fn negative_zero_is_normalized() {
        assert_eq!(Value::new(-0.0).to_buffer(), "0");
    }

    #[test]
    fn to_buffer_drops_integral_fraction() {
        assert_eq!(Value::Number(8.0).to_buffer(), "8");
        assert_eq!(Value::Number(6.0).to_buffer(), "6");
        assert_eq!(Value::Number(-2.5).to_buffer(), "-2.5");
    }

    #[test]
    fn to_buffer_never_uses_exponent() {
        let big = Value::Number(1e20).to_buffer();
        assert_eq!(big, "100000000000000000000");
        assert!(!big.contains('e'));
    }

    #[test]
    fn value_serializes_correctly() {
        let value = Value::Number(4.25);
        let json = serde_json::to_string(&value).unwrap();
        let deserialized: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, deserialized);

        let json = serde_json::to_string(&Value::Undefined).unwrap();
        let deserialized: Value = serde_json::from_str(&json).unwrap();
        assert!(deserialized.is_undefined());
    }
}
