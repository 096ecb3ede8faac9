//! Maps tokens onto state machine transitions.

use super::token::Token;
use crate::config::CalculatorConfig;
use crate::core::{machine, CalculatorState, DEFAULT_MAX_ENTRY_LENGTH};

/// Pure dispatcher: selects and invokes exactly one transition per token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dispatcher {
    max_entry_length: usize,
    decimal_separator: char,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self {
            max_entry_length: DEFAULT_MAX_ENTRY_LENGTH,
            decimal_separator: '.',
        }
    }
}

impl Dispatcher {
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            max_entry_length: config.max_entry_length,
            decimal_separator: config.display.decimal_separator,
        }
    }

    /// [`Token::classify`], also accepting the configured decimal separator.
    pub fn classify(&self, input: &str) -> Option<Token> {
        Token::classify(input).or_else(|| {
            let mut chars = input.trim().chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c == self.decimal_separator => Some(Token::DecimalPoint),
                _ => None,
            }
        })
    }

    /// Apply `token` to `state`, returning the next state.
    pub fn dispatch(&self, token: Token, state: &CalculatorState) -> CalculatorState {
        match token {
            Token::Digit(d) => machine::digit(state, d, self.max_entry_length),
            Token::DecimalPoint => machine::decimal_point(state),
            Token::Operator(op) => machine::operator(state, op),
            Token::Clear => machine::clear(state),
            Token::Equals => machine::equals(state),
        }
    }

    /// Classify raw input and dispatch it. Unrecognized input leaves the
    /// state unchanged.
    pub fn dispatch_input(&self, input: &str, state: &CalculatorState) -> CalculatorState {
        match self.classify(input) {
            Some(token) => self.dispatch(token, state),
            None => state.clone(),
        }
    }

    /// Fold a sequence of raw inputs over `state`.
    pub fn dispatch_all<'a, I>(&self, inputs: I, state: &CalculatorState) -> CalculatorState
    where
        I: IntoIterator<Item = &'a str>,
    {
        inputs
            .into_iter()
            .fold(state.clone(), |s, input| self.dispatch_input(input, &s))
    }
}

/// Dispatch with the default configuration.
///
/// # Example
///
/// ```rust
/// use pocket_calc::core::{CalculatorState, Operator};
/// use pocket_calc::dispatch::{dispatch, Token};
///
/// let tokens = [
///     Token::Digit(9),
///     Token::Operator(Operator::Divide),
///     Token::Digit(3),
///     Token::Equals,
/// ];
/// let state = tokens
///     .into_iter()
///     .fold(CalculatorState::new(), |s, t| dispatch(t, &s));
///
/// assert_eq!(state.display_buffer(), "3");
/// ```
pub fn dispatch(token: Token, state: &CalculatorState) -> CalculatorState {
    Dispatcher::default().dispatch(token, state)
}
