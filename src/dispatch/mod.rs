//! Input dispatcher.
//!
//! Classifies raw key labels into [`Token`]s and routes each token to
//! exactly one transition of the evaluation state machine. Classification
//! is lexical; a run of operator keys is handled one key at a time, never
//! as an expression.

mod dispatcher;
mod token;

pub use dispatcher::{dispatch, Dispatcher};
pub use token::Token;
