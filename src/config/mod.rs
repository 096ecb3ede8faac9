//! Calculator configuration.
//!
//! Configuration is plain data loaded once (usually from TOML) and checked
//! with `Validation`, which accumulates ALL violations instead of stopping
//! at the first one.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::config::CalculatorConfig;
//!
//! let config = CalculatorConfig::from_toml_str(
//!     r#"
//!     max_entry_length = 9
//!
//!     [display]
//!     grouping_separator = "."
//!     decimal_separator = ","
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.max_entry_length, 9);
//! assert_eq!(config.display.decimal_separator, ',');
//! assert_eq!(config.display.error_marker, "Error");
//! ```

pub mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::core::{Operator, DEFAULT_MAX_ENTRY_LENGTH};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Upper bound accepted for `max_entry_length`.
pub const MAX_ENTRY_LENGTH_LIMIT: usize = 32;

/// Top-level configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Maximum number of digits a typed entry may hold
    pub max_entry_length: usize,

    /// Presentation options used by the renderer
    pub display: DisplayConfig,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_entry_length: DEFAULT_MAX_ENTRY_LENGTH,
            display: DisplayConfig::default(),
        }
    }
}

/// Display formatting options
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Inserted between groups of three integer digits
    pub grouping_separator: char,

    /// Shown in place of the decimal point; also accepted as key input
    pub decimal_separator: char,

    /// Text shown instead of the undefined sentinel
    pub error_marker: String,

    /// Width of the main line before the text is scaled down
    pub max_visible_chars: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            grouping_separator: ',',
            decimal_separator: '.',
            error_marker: "Error".to_string(),
            max_visible_chars: 12,
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: CalculatorConfig = toml::from_str(text)?;
        config.validated()
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();
        let display = &self.display;

        checks.push(
            if (1..=MAX_ENTRY_LENGTH_LIMIT).contains(&self.max_entry_length) {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::EntryLengthOutOfRange {
                    value: self.max_entry_length,
                    max: MAX_ENTRY_LENGTH_LIMIT,
                })
            },
        );

        checks.push(if display.grouping_separator == display.decimal_separator {
            Validation::fail(ConfigViolation::SeparatorsCollide(
                display.decimal_separator,
            ))
        } else {
            Validation::success(())
        });

        for separator in [display.grouping_separator, display.decimal_separator] {
            checks.push(if is_reserved(separator) {
                Validation::fail(ConfigViolation::ReservedSeparator(separator))
            } else {
                Validation::success(())
            });
        }

        checks.push(if display.error_marker.is_empty() {
            Validation::fail(ConfigViolation::EmptyErrorMarker)
        } else {
            Validation::success(())
        });

        checks.push(if display.max_visible_chars == 0 {
            Validation::fail(ConfigViolation::ZeroVisibleChars)
        } else {
            Validation::success(())
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// `validate` folded into a `Result`.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(violations) => {
                Err(ConfigError::Invalid(violations.iter().cloned().collect()))
            }
        }
    }
}

fn is_reserved(c: char) -> bool {
    c.is_ascii_digit() || Operator::from_symbol(c.encode_utf8(&mut [0; 4])).is_some()
}
