//! Formatting module - currency and percentage rendering for display.
//!
//! Rounding is half away from zero. Separators and the currency symbol come
//! from [`NumberFormat`], usually built from the `format` config section.

use serde::{Deserialize, Serialize};

/// Placeholder shown instead of metrics that cannot be computed.
pub const NOT_AVAILABLE: &str = "—";

/// Locale-style number rendering rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub currency_symbol: String,
    pub group_separator: String,
    pub decimal_separator: String,
    /// Fraction digits used by [`NumberFormat::percentage`].
    pub percentage_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            percentage_digits: 1,
        }
    }
}

impl NumberFormat {
    /// Sign, symbol, then the grouped integer amount: `-$1,235`.
    pub fn currency(&self, value: f64) -> String {
        if !value.is_finite() {
            return NOT_AVAILABLE.to_string();
        }
        let (negative, digits) = self.rounded_parts(value, 0);
        let sign = if negative { "-" } else { "" };
        format!("{}{}{}", sign, self.currency_symbol, digits)
    }

    /// Grouped number with the configured fraction digits and a `%` suffix.
    pub fn percentage(&self, value: f64) -> String {
        self.percentage_with_digits(value, self.percentage_digits)
    }

    pub fn percentage_with_digits(&self, value: f64, digits: usize) -> String {
        if !value.is_finite() {
            return NOT_AVAILABLE.to_string();
        }
        let (negative, body) = self.rounded_parts(value, digits);
        let sign = if negative { "-" } else { "" };
        format!("{}{}%", sign, body)
    }

    /// Currency for an optional metric, the sentinel when absent.
    pub fn optional_currency(&self, value: Option<f64>) -> String {
        value
            .map(|v| self.currency(v))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Percentage for an optional metric, the sentinel when absent.
    pub fn optional_percentage(&self, value: Option<f64>) -> String {
        value
            .map(|v| self.percentage(v))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Recovers the numeric portion of a string produced by this format.
    pub fn parse_numeric(&self, formatted: &str) -> Option<f64> {
        let mut body = formatted.trim().trim_end_matches('%').to_string();
        if !self.currency_symbol.is_empty() {
            body = body.replace(&self.currency_symbol, "");
        }
        if !self.group_separator.is_empty() {
            body = body.replace(&self.group_separator, "");
        }
        if self.decimal_separator != "." {
            body = body.replace(&self.decimal_separator, ".");
        }
        body.parse::<f64>().ok()
    }

    /// Rounds |value| to `digits` decimals and renders it grouped.
    ///
    /// Returns whether the rounded value is negative; `-0` is not.
    fn rounded_parts(&self, value: f64, digits: usize) -> (bool, String) {
        let scale = 10f64.powi(digits as i32);
        let scaled = (value.abs() * scale).round();
        let negative = value < 0.0 && scaled > 0.0;

        let rendered = format!("{:.0}", scaled);
        let (int_part, frac_part) = if digits == 0 {
            (rendered, String::new())
        } else {
            let padded = format!("{:0>width$}", rendered, width = digits + 1);
            let split = padded.len() - digits;
            (padded[..split].to_string(), padded[split..].to_string())
        };

        let mut body = self.group(&int_part);
        if digits > 0 {
            body.push_str(&self.decimal_separator);
            body.push_str(&frac_part);
        }
        (negative, body)
    }

    fn group(&self, int_part: &str) -> String {
        let len = int_part.len();
        let mut out = String::with_capacity(len + len / 3 * self.group_separator.len());
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push_str(&self.group_separator);
            }
            out.push(ch);
        }
        out
    }
}
