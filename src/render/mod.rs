//! Display rendering.
//!
//! Derives the two display lines from a [`CalculatorState`]. All
//! presentation concerns live here: thousands grouping, the decimal
//! separator, the error marker and the overflow scaling hint. The state
//! machine never formats anything beyond its canonical buffer text.

use crate::config::{CalculatorConfig, DisplayConfig};
use crate::core::{CalculatorState, UNDEFINED_LITERAL};
use serde::{Deserialize, Serialize};

/// Text for the main and secondary display lines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Display {
    /// Current entry or result
    pub main_text: String,
    /// Pending operand and operator, e.g. `"1,234 +"`; empty when idle
    pub history_text: String,
    /// Font scale hint in `(0, 1]`; below 1 when `main_text` overflows
    pub scale: f32,
}

/// Renders states using a fixed set of display options.
#[derive(Clone, Debug, PartialEq)]
pub struct Renderer {
    options: DisplayConfig,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&CalculatorConfig::default())
    }
}

impl Renderer {
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            options: config.display.clone(),
        }
    }

    /// Render both display lines.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pocket_calc::core::CalculatorState;
    /// use pocket_calc::dispatch::Dispatcher;
    /// use pocket_calc::render::Renderer;
    ///
    /// let state = Dispatcher::default()
    ///     .dispatch_all(["1", "2", "3", "4", "+"], &CalculatorState::new());
    /// let display = Renderer::default().render(&state);
    ///
    /// assert_eq!(display.main_text, "1,234");
    /// assert_eq!(display.history_text, "1,234 +");
    /// ```
    pub fn render(&self, state: &CalculatorState) -> Display {
        let main_text = self.format_buffer(state.display_buffer());
        let history_text = self.format_history(state.history_text());
        let scale = self.scale_for(&main_text);

        Display {
            main_text,
            history_text,
            scale,
        }
    }

    /// Format a display buffer.
    ///
    /// The integer part is grouped in threes. Fractional digits are kept
    /// exactly as typed, including a trailing point or trailing zeros; a
    /// buffer without a point gets no fractional part at all.
    pub fn format_buffer(&self, buffer: &str) -> String {
        if buffer == UNDEFINED_LITERAL {
            return self.options.error_marker.clone();
        }

        let (sign, unsigned) = match buffer.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", buffer),
        };

        let mut text = String::from(sign);
        match unsigned.split_once('.') {
            Some((integer, fraction)) => {
                text.push_str(&self.group(integer));
                text.push(self.options.decimal_separator);
                text.push_str(fraction);
            }
            None => text.push_str(&self.group(unsigned)),
        }
        text
    }

    fn format_history(&self, history: &str) -> String {
        match history.rsplit_once(' ') {
            Some((operand, symbol)) => format!("{} {}", self.format_buffer(operand), symbol),
            None => history.to_string(),
        }
    }

    fn group(&self, digits: &str) -> String {
        let len = digits.chars().count();
        let mut grouped = String::with_capacity(len + len / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(self.options.grouping_separator);
            }
            grouped.push(c);
        }
        grouped
    }

    fn scale_for(&self, text: &str) -> f32 {
        let len = text.chars().count();
        let max = self.options.max_visible_chars.max(1);
        if len <= max {
            1.0
        } else {
            max as f32 / len as f32
        }
    }
}

/// Render with the default display options.
pub fn render(state: &CalculatorState) -> Display {
    Renderer::default().render(state)
}
