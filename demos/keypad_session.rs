//! Keypad Session
//!
//! This example feeds key labels into a calculator session and prints both
//! display lines after every press.
//!
//! Key concepts:
//! - Pure dispatch and render behind a small stateful shell
//! - Left-to-right chaining with a single pending operation
//! - Division by zero rendered as an error marker
//!
//! Run with: RUST_LOG=debug cargo run --example keypad_session -- 12 + 4 x 3 =

use pocket_calc::{Calculator, CalculatorConfig};
use tracing_subscriber::EnvFilter;

const DEFAULT_KEYS: &[&str] = &[
    "1", "2", "3", "4", "+", "5", "×", "2", "=", "÷", "0", "=", "clear",
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Keypad Session ===\n");

    let mut keys: Vec<String> = std::env::args().skip(1).collect();
    if keys.is_empty() {
        keys = DEFAULT_KEYS.iter().map(|k| k.to_string()).collect();
    }

    let mut calc = match Calculator::new(&CalculatorConfig::default()) {
        Ok(calc) => calc,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };
    for key in &keys {
        let display = calc.press(key);
        println!(
            "{:>6} | {:>12} | {:<16} ({})",
            key,
            display.history_text,
            display.main_text,
            calc.phase().name()
        );
    }

    println!("\n=== Example Complete ===");
}
