//! Stateful shell around the pure core.
//!
//! A [`Calculator`] owns the current state and replaces it wholesale on
//! every key press. Taking `&mut self` serializes transitions. Logging
//! happens here and only here; the core stays pure.

use crate::config::{CalculatorConfig, ConfigError};
use crate::core::{CalculatorState, Phase};
use crate::dispatch::{Dispatcher, Token};
use crate::render::{Display, Renderer};
use tracing::{debug, trace, warn};

/// A running calculator: dispatcher, renderer and the current state.
///
/// # Example
///
/// ```rust
/// use pocket_calc::config::CalculatorConfig;
/// use pocket_calc::session::Calculator;
///
/// let mut calc = Calculator::new(&CalculatorConfig::default())?;
/// for key in ["1", "2", "3", "+", "4", "="] {
///     calc.press(key);
/// }
/// assert_eq!(calc.display().main_text, "127");
/// # Ok::<(), pocket_calc::ConfigError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    dispatcher: Dispatcher,
    renderer: Renderer,
    state: CalculatorState,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::from_valid(&CalculatorConfig::default())
    }
}

impl Calculator {
    /// Build a calculator from `config`, rejecting it if it fails
    /// [`CalculatorConfig::validate`].
    pub fn new(config: &CalculatorConfig) -> Result<Self, ConfigError> {
        let config = config.clone().validated()?;
        Ok(Self::from_valid(&config))
    }

    fn from_valid(config: &CalculatorConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(config),
            renderer: Renderer::new(config),
            state: CalculatorState::new(),
        }
    }

    /// Current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Current phase (pure)
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Render the current state (pure)
    pub fn display(&self) -> Display {
        self.renderer.render(&self.state)
    }

    /// Handle a raw key label. Unrecognized labels are ignored.
    pub fn press(&mut self, input: &str) -> Display {
        match self.dispatcher.classify(input) {
            Some(token) => self.apply(token),
            None => {
                trace!(input, "Ignoring unrecognized key");
                self.display()
            }
        }
    }

    /// Apply an already classified token.
    pub fn apply(&mut self, token: Token) -> Display {
        let next = self.dispatcher.dispatch(token, &self.state);

        debug!(
            token = %token,
            from = self.state.phase().name(),
            to = next.phase().name(),
            display = next.display_buffer(),
            "Applied token"
        );

        if next.is_error() && !self.state.is_error() {
            warn!(token = %token, "Result is undefined (division by zero or overflow)");
        }

        self.state = next;
        self.display()
    }

    /// Return to the initial state.
    pub fn reset(&mut self) -> Display {
        self.apply(Token::Clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigViolation, DisplayConfig};
    use crate::core::Operator;

    #[test]
    fn press_updates_state_and_display() {
        let mut calc = Calculator::default();

        let display = calc.press("5");
        assert_eq!(display.main_text, "5");
        assert_eq!(calc.phase(), Phase::Idle);

        let display = calc.press("+");
        assert_eq!(display.history_text, "5 +");
        assert_eq!(calc.phase(), Phase::AwaitingSecondOperand);

        calc.press("3");
        assert_eq!(calc.phase(), Phase::AccumulatingSecondOperand);

        let display = calc.press("=");
        assert_eq!(display.main_text, "8");
        assert_eq!(calc.phase(), Phase::Idle);
    }

    #[test]
    fn unrecognized_press_keeps_state() {
        let mut calc = Calculator::default();
        calc.press("4");
        let before = calc.state().clone();

        let display = calc.press("sqrt");
        assert_eq!(calc.state(), &before);
        assert_eq!(display.main_text, "4");
    }

    #[test]
    fn apply_accepts_tokens_directly() {
        let mut calc = Calculator::default();
        calc.apply(Token::Digit(9));
        calc.apply(Token::Operator(Operator::Divide));
        calc.apply(Token::Digit(0));
        let display = calc.apply(Token::Equals);

        assert_eq!(display.main_text, "Error");
        assert!(calc.state().is_error());
    }

    #[test]
    fn reset_recovers_from_error() {
        let mut calc = Calculator::default();
        for key in ["9", "/", "0", "="] {
            calc.press(key);
        }

        let display = calc.reset();
        assert_eq!(display.main_text, "0");
        assert_eq!(calc.state(), &CalculatorState::new());
    }

    #[test]
    fn config_flows_into_dispatch_and_render() {
        let config = CalculatorConfig::from_toml_str(
            r#"
            max_entry_length = 5

            [display]
            grouping_separator = " "
            decimal_separator = ","
            "#,
        )
        .unwrap();
        let mut calc = Calculator::new(&config).unwrap();

        for key in ["1", "2", "3", "4", "5", "6", ",", "7"] {
            calc.press(key);
        }

        assert_eq!(calc.state().display_buffer(), "12345.");
        assert_eq!(calc.display().main_text, "12 345,");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = CalculatorConfig {
            max_entry_length: 0,
            display: DisplayConfig {
                error_marker: String::new(),
                ..DisplayConfig::default()
            },
        };

        match Calculator::new(&config) {
            Err(ConfigError::Invalid(violations)) => {
                assert_eq!(violations.len(), 2);
                assert!(violations.contains(&ConfigViolation::EmptyErrorMarker));
            }
            other => panic!("Expected invalid config, got {:?}", other.map(|c| c.phase())),
        }
    }
}
