//! Pure transition functions of the evaluation state machine.
//!
//! Every function here is total: it takes the current state by reference and
//! returns the next state. None of them fail and none have side effects.

use super::operator::Operator;
use super::state::{CalculatorState, PendingOperation};

/// Default cap on the number of digits a typed entry may hold.
pub const DEFAULT_MAX_ENTRY_LENGTH: usize = 15;

/// Type digit `d` (0..=9).
///
/// Starts a fresh entry when awaiting the right-hand operand, replaces a
/// lone `"0"` or an undefined display, and otherwise appends. Digits past
/// `max_entry_length` are dropped, and so is any `d` above 9.
pub fn digit(state: &CalculatorState, d: u8, max_entry_length: usize) -> CalculatorState {
    let Some(ch) = char::from_digit(u32::from(d), 10) else {
        return state.clone();
    };

    if state.awaiting_operand {
        return CalculatorState {
            display_buffer: ch.to_string(),
            awaiting_operand: false,
            ..state.clone()
        };
    }

    if state.display_buffer == "0" || state.is_error() {
        return CalculatorState {
            display_buffer: ch.to_string(),
            ..state.clone()
        };
    }

    if state.digit_count() >= max_entry_length {
        return state.clone();
    }

    let mut display_buffer = state.display_buffer.clone();
    display_buffer.push(ch);
    CalculatorState {
        display_buffer,
        ..state.clone()
    }
}

/// Type the decimal point. A second point in the same entry is ignored.
pub fn decimal_point(state: &CalculatorState) -> CalculatorState {
    if state.awaiting_operand || state.is_error() {
        return CalculatorState {
            display_buffer: "0.".to_string(),
            awaiting_operand: false,
            ..state.clone()
        };
    }

    if state.display_buffer.contains('.') {
        return state.clone();
    }

    let mut display_buffer = state.display_buffer.clone();
    display_buffer.push('.');
    CalculatorState {
        display_buffer,
        ..state.clone()
    }
}

/// Discard everything and return to the initial state.
pub fn clear(_state: &CalculatorState) -> CalculatorState {
    CalculatorState::new()
}

/// Select `operator`.
///
/// With nothing pending the display value becomes the left-hand operand.
/// With an operation pending and a right-hand operand typed, that operation
/// is resolved first (left-to-right, no precedence) and its result becomes
/// the new left-hand operand. Selecting an operator while still awaiting the
/// right-hand operand replaces the pending operator without evaluating.
///
/// # Example
///
/// ```rust
/// use pocket_calc::core::{machine, CalculatorState, Operator};
///
/// let state = machine::digit(&CalculatorState::new(), 5, 15);
/// let state = machine::operator(&state, Operator::Add);
/// let state = machine::digit(&state, 3, 15);
/// let state = machine::operator(&state, Operator::Multiply);
///
/// assert_eq!(state.display_buffer(), "8");
/// assert_eq!(state.history_text(), "8 ×");
/// ```
pub fn operator(state: &CalculatorState, operator: Operator) -> CalculatorState {
    let x = state.current_value();

    match state.pending {
        None => CalculatorState::awaiting(
            PendingOperation {
                operand: x,
                operator,
            },
            state.display_buffer.clone(),
        ),
        Some(pending) if state.awaiting_operand => CalculatorState::awaiting(
            PendingOperation {
                operand: pending.operand,
                operator,
            },
            state.display_buffer.clone(),
        ),
        Some(pending) => {
            let result = pending.operator.apply(pending.operand, x);
            CalculatorState::awaiting(
                PendingOperation {
                    operand: result,
                    operator,
                },
                result.to_buffer(),
            )
        }
    }
}

/// Resolve the pending operation, if any, and return to idle showing the
/// result. A no-op when nothing is pending.
pub fn equals(state: &CalculatorState) -> CalculatorState {
    match state.pending {
        Some(pending) => {
            let result = pending
                .operator
                .apply(pending.operand, state.current_value());
            CalculatorState::showing(result)
        }
        None => state.clone(),
    }
}
