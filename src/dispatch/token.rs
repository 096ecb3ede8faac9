//! Classified key input.

use crate::core::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single classified user input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// Digit 0..=9
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Clear,
    Equals,
}

impl Token {
    /// Lexical classification of a raw key label.
    ///
    /// This is a membership test on the trimmed label, not expression
    /// parsing: `"12"` or `"1+2"` are not tokens. Word labels are matched
    /// case-insensitively.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pocket_calc::core::Operator;
    /// use pocket_calc::dispatch::Token;
    ///
    /// assert_eq!(Token::classify("7"), Some(Token::Digit(7)));
    /// assert_eq!(Token::classify("×"), Some(Token::Operator(Operator::Multiply)));
    /// assert_eq!(Token::classify("AC"), Some(Token::Clear));
    /// assert_eq!(Token::classify("sqrt"), None);
    /// ```
    pub fn classify(input: &str) -> Option<Self> {
        let input = input.trim();

        if let [b @ b'0'..=b'9'] = input.as_bytes() {
            return Some(Token::Digit(*b - b'0'));
        }

        if input == "." {
            return Some(Token::DecimalPoint);
        }

        if let Some(op) = Operator::from_symbol(input) {
            return Some(Token::Operator(op));
        }

        match input.to_ascii_lowercase().as_str() {
            "clear" | "c" | "ac" => Some(Token::Clear),
            "equals" | "=" | "enter" => Some(Token::Equals),
            _ => None,
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> String {
        match self {
            Token::Digit(d) => d.to_string(),
            Token::DecimalPoint => ".".to_string(),
            Token::Operator(op) => op.symbol().to_string(),
            Token::Clear => "clear".to_string(),
            Token::Equals => "=".to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_every_digit() {
        for d in 0..=9u8 {
            assert_eq!(Token::classify(&d.to_string()), Some(Token::Digit(d)));
        }
    }

    #[test]
    fn classifies_operators() {
        assert_eq!(Token::classify("+"), Some(Token::Operator(Operator::Add)));
        assert_eq!(
            Token::classify("-"),
            Some(Token::Operator(Operator::Subtract))
        );
        assert_eq!(
            Token::classify("*"),
            Some(Token::Operator(Operator::Multiply))
        );
        assert_eq!(
            Token::classify("÷"),
            Some(Token::Operator(Operator::Divide))
        );
    }

    #[test]
    fn classifies_control_words() {
        assert_eq!(Token::classify("clear"), Some(Token::Clear));
        assert_eq!(Token::classify("Clear"), Some(Token::Clear));
        assert_eq!(Token::classify("equals"), Some(Token::Equals));
        assert_eq!(Token::classify("="), Some(Token::Equals));
        assert_eq!(Token::classify(" . "), Some(Token::DecimalPoint));
    }

    #[test]
    fn rejects_everything_else() {
        for input in ["", "12", "1+2", "%", "sin", "..", "١"] {
            assert_eq!(Token::classify(input), None, "input {:?}", input);
        }
    }

    #[test]
    fn label_classifies_back() {
        let tokens = [
            Token::Digit(4),
            Token::DecimalPoint,
            Token::Operator(Operator::Divide),
            Token::Clear,
            Token::Equals,
        ];
        for token in tokens {
            assert_eq!(Token::classify(&token.label()), Some(token));
        }
    }
}
