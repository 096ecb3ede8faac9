//! Pocket Calc: a pure functional pocket calculator core
//!
//! The calculator is a small state machine built on a "pure core,
//! imperative shell" split. Key presses are classified into tokens, each
//! token drives exactly one pure transition over an immutable state value,
//! and a separate renderer turns that state into display text.
//!
//! # Core Concepts
//!
//! - **State**: [`CalculatorState`], replaced wholesale on every token
//! - **Dispatch**: [`dispatch`] maps a [`Token`] to one transition
//! - **Render**: [`render`] derives the main and history display lines
//! - **Session**: [`Calculator`] owns the current state and logs transitions
//!
//! Only one operation is ever pending. Operators chain left to right with no
//! precedence, and division by zero yields an undefined sentinel that
//! propagates through later arithmetic until cleared.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::{dispatch, render, CalculatorState, Operator, Token};
//!
//! let tokens = [
//!     Token::Digit(5),
//!     Token::Operator(Operator::Add),
//!     Token::Digit(3),
//!     Token::Operator(Operator::Multiply),
//!     Token::Digit(2),
//!     Token::Equals,
//! ];
//!
//! let state = tokens
//!     .into_iter()
//!     .fold(CalculatorState::new(), |state, token| dispatch(token, &state));
//!
//! assert_eq!(render(&state).main_text, "16");
//! ```

pub mod config;
pub mod core;
pub mod dispatch;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use config::{CalculatorConfig, ConfigError};
pub use core::{CalculatorState, Operator, Phase, Value};
pub use dispatch::{dispatch, Dispatcher, Token};
pub use render::{render, Display, Renderer};
pub use session::Calculator;
