//! Number formatting configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::formatting::NumberFormat;

/// Largest supported number of percentage fraction digits
const MAX_PERCENTAGE_DIGITS: usize = 6;

/// Currency and percentage rendering
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FormatConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Thousands separator; may be empty for ungrouped output
    #[serde(default = "default_group_separator")]
    pub group_separator: String,

    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,

    /// Fraction digits of percentages
    #[serde(default = "default_percentage_digits")]
    pub percentage_digits: usize,
}

impl FormatConfig {
    /// Validate format configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.percentage_digits > MAX_PERCENTAGE_DIGITS {
            return Err(ValidationError::TooManyPercentageDigits(
                self.percentage_digits,
            ));
        }
        if self.decimal_separator.is_empty() {
            return Err(ValidationError::EmptyDecimalSeparator);
        }
        if self.group_separator == self.decimal_separator {
            return Err(ValidationError::AmbiguousSeparators);
        }
        Ok(())
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            currency_symbol: self.currency_symbol.clone(),
            group_separator: self.group_separator.clone(),
            decimal_separator: self.decimal_separator.clone(),
            percentage_digits: self.percentage_digits,
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            group_separator: default_group_separator(),
            decimal_separator: default_decimal_separator(),
            percentage_digits: default_percentage_digits(),
        }
    }
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_group_separator() -> String {
    ",".to_string()
}

fn default_decimal_separator() -> String {
    ".".to_string()
}

fn default_percentage_digits() -> usize {
    1
}
