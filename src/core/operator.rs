//! The four binary operators and the arithmetic rule that applies them.

use super::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol shown on the history line.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Lexical lookup of an operator key. Accepts the display symbol and
    /// the usual ASCII spellings.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" | "−" => Some(Operator::Subtract),
            "*" | "×" | "x" | "X" => Some(Operator::Multiply),
            "/" | "÷" => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Apply this operator with `lhs` on the left.
    ///
    /// Total: division by zero, overflow and an undefined operand all yield
    /// [`Value::Undefined`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use pocket_calc::core::{Operator, Value};
    ///
    /// let sum = Operator::Add.apply(Value::Number(5.0), Value::Number(3.0));
    /// assert_eq!(sum, Value::Number(8.0));
    ///
    /// let undefined = Operator::Divide.apply(Value::Number(9.0), Value::Number(0.0));
    /// assert!(undefined.is_undefined());
    /// ```
    pub fn apply(&self, lhs: Value, rhs: Value) -> Value {
        let (Value::Number(a), Value::Number(b)) = (lhs, rhs) else {
            return Value::Undefined;
        };

        match self {
            Operator::Add => Value::new(a + b),
            Operator::Subtract => Value::new(a - b),
            Operator::Multiply => Value::new(a * b),
            Operator::Divide if b == 0.0 => Value::Undefined,
            Operator::Divide => Value::new(a / b),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Free-standing form of [`Operator::apply`].
pub fn apply(lhs: Value, rhs: Value, operator: Operator) -> Value {
    operator.apply(lhs, rhs)
}
