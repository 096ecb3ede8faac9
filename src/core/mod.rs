//! Evaluation state machine.
//!
//! This module contains the pure functional core of the calculator:
//! - Numeric values and the division-by-zero sentinel
//! - The four operators and their arithmetic
//! - The immutable calculator state and its phases
//! - Transition functions over that state
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

pub mod machine;
mod operator;
mod state;
mod value;

pub use machine::DEFAULT_MAX_ENTRY_LENGTH;
pub use operator::{apply, Operator};
pub use state::{CalculatorState, PendingOperation, Phase};
pub use value::{Value, UNDEFINED_LITERAL};
