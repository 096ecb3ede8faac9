//! Calculator state value and the phase it is in.
//!
//! The state is an immutable value. Transitions never mutate it in place;
//! they return a fresh `CalculatorState`.

use super::operator::Operator;
use super::value::{Value, UNDEFINED_LITERAL};
use serde::{Deserialize, Serialize};

/// Left-hand operand and operator captured while the right-hand operand is
/// entered.
///
/// Holding both in one `Option` keeps them present or absent together.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingOperation {
    /// The left-hand operand
    pub operand: Value,
    /// The operator waiting for its right-hand operand
    pub operator: Operator,
}

impl PendingOperation {
    /// Secondary display line for this operation, e.g. `"5 +"`.
    pub fn history_text(&self) -> String {
        format!("{} {}", self.operand.to_buffer(), self.operator.symbol())
    }
}

/// The whole calculator: display buffer, at most one pending operation and
/// the awaiting-operand flag.
///
/// # Example
///
/// ```rust
/// use pocket_calc::core::{CalculatorState, Phase};
///
/// let state = CalculatorState::new();
/// assert_eq!(state.display_buffer(), "0");
/// assert!(state.pending().is_none());
/// assert_eq!(state.phase(), Phase::Idle);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) display_buffer: String,
    pub(crate) pending: Option<PendingOperation>,
    pub(crate) awaiting_operand: bool,
    pub(crate) history_text: String,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Fresh state: display `"0"`, nothing pending.
    pub fn new() -> Self {
        Self {
            display_buffer: "0".to_string(),
            pending: None,
            awaiting_operand: false,
            history_text: String::new(),
        }
    }

    /// Idle state showing `value`. Used after equals.
    pub(crate) fn showing(value: Value) -> Self {
        Self {
            display_buffer: value.to_buffer(),
            ..Self::new()
        }
    }

    /// State waiting for the right-hand operand of `pending`, with the
    /// display left at `display_buffer`.
    pub(crate) fn awaiting(pending: PendingOperation, display_buffer: String) -> Self {
        Self {
            display_buffer,
            history_text: pending.history_text(),
            pending: Some(pending),
            awaiting_operand: true,
        }
    }

    pub fn display_buffer(&self) -> &str {
        &self.display_buffer
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    pub fn pending_operand(&self) -> Option<Value> {
        self.pending.map(|p| p.operand)
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    pub fn awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    pub fn history_text(&self) -> &str {
        &self.history_text
    }

    /// Numeric reading of the display buffer.
    pub fn current_value(&self) -> Value {
        Value::from_buffer(&self.display_buffer)
    }

    /// True when the display holds the undefined sentinel.
    pub fn is_error(&self) -> bool {
        self.display_buffer == UNDEFINED_LITERAL
    }

    /// Number of digit characters in the display buffer.
    pub fn digit_count(&self) -> usize {
        self.display_buffer
            .chars()
            .filter(|c| c.is_ascii_digit())
            .count()
    }

    pub fn phase(&self) -> Phase {
        match (&self.pending, self.awaiting_operand) {
            (None, _) => Phase::Idle,
            (Some(_), true) => Phase::AwaitingSecondOperand,
            (Some(_), false) => Phase::AccumulatingSecondOperand,
        }
    }
}

/// Shape of the pending fields.
///
/// There is no terminal phase; equals returns the machine to `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No pending operator
    Idle,
    /// Operator chosen, no digit typed yet for the right operand
    AwaitingSecondOperand,
    /// Digits being typed for the right operand
    AccumulatingSecondOperand,
}

impl Phase {
    /// Phase name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::AwaitingSecondOperand => "AwaitingSecondOperand",
            Self::AccumulatingSecondOperand => "AccumulatingSecondOperand",
        }
    }
}
