//! # Display Formatting
//!
//! Rounding and formatting applied at the presentation boundary. The pricing
//! model keeps full precision; everything in here is only for what the user sees.
//!
//! Non-finite values format as `None` so callers can substitute the localized
//! "N/A" label.

use serde::{Deserialize, Serialize};

use crate::pricing::PricingMetrics;

/// Round to a fixed number of decimals. Non-finite values pass through unchanged.
///
/// Rounds the exact binary value, so `1.115` (stored as `1.11499...`) gives `1.11`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", decimals as usize, value).parse().unwrap_or(value)
}

/// Metrics rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    pub total_cost: f64,
    pub max_profit: f64,
    pub min_profit: f64,
    pub roi: f64,
    pub break_even_months: f64,
    pub monthly_revenue: f64,
    pub profit_margin: f64,
    pub lowest_price: f64,
    pub lowest_price_to_call: f64,
}

impl From<&PricingMetrics> for DisplayMetrics {
    fn from(metrics: &PricingMetrics) -> Self {
        Self {
            total_cost: round_to(metrics.total_cost, 2),
            max_profit: round_to(metrics.max_profit, 2),
            min_profit: round_to(metrics.min_profit, 2),
            roi: round_to(metrics.roi, 2),
            // break-even is shown with a single decimal
            break_even_months: round_to(metrics.break_even_months, 1),
            monthly_revenue: round_to(metrics.monthly_revenue, 2),
            profit_margin: round_to(metrics.profit_margin, 2),
            lowest_price: round_to(metrics.lowest_price, 2),
            lowest_price_to_call: round_to(metrics.lowest_price_to_call, 2),
        }
    }
}

/// Format with thousands separators and a fixed number of decimals.
///
/// `format_number(1234567.891, 2)` gives `"1,234,567.89"`.
pub fn format_number(value: f64, decimals: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, fraction_part) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (index, digit) in integer_part.chars().enumerate() {
        if index > 0 && (integer_part.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut result = String::new();
    if is_negative {
        result.push('-');
    }
    result.push_str(&grouped);
    if let Some(fraction) = fraction_part {
        result.push('.');
        result.push_str(fraction);
    }
    Some(result)
}

/// Format as a dollar amount with two decimals, e.g. `"-$5,000.00"`
pub fn format_money(value: f64) -> Option<String> {
    let number = format_number(value, 2)?;
    Some(match number.strip_prefix('-') {
        Some(magnitude) => format!("-${}", magnitude),
        None => format!("${}", number),
    })
}

/// Format as a percentage with two decimals, e.g. `"-4.76%"`
pub fn format_percent(value: f64) -> Option<String> {
    format_number(value, 2).map(|number| format!("{}%", number))
}

/// Parse a number typed into an input field.
///
/// Thousands separators, currency and percent signs are ignored. An empty field
/// counts as zero. Returns `None` when the text is not a finite number, so
/// `nan` and `inf` are rejected like any other non-numeric text.
pub fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, ',' | '$' | '%') && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Some(0.0);
    }

    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{compute, PricingParameters};

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(-4.761904761904762, 2), -4.76);
        assert_eq!(round_to(8333.333333333334, 2), 8333.33);
        assert_eq!(round_to(12.6000001, 1), 12.6);
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn test_round_to_uses_exact_binary_value() {
        assert_eq!(round_to(1.115, 2), 1.11);
        assert_eq!(round_to(1.005, 2), 1.0);
        assert_eq!(round_to(-4.765, 2), -4.76);
    }

    #[test]
    fn test_display_metrics_default_scenario() {
        let display = DisplayMetrics::from(&compute(&PricingParameters::default()));

        assert_eq!(display.total_cost, 105_000.0);
        assert_eq!(display.max_profit, -5_000.0);
        assert_eq!(display.min_profit, 20_000.0);
        assert_eq!(display.roi, -4.76);
        assert_eq!(display.monthly_revenue, 8333.33);
        assert_eq!(display.profit_margin, -5.0);
        assert_eq!(display.break_even_months, 12.6);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1_234_567.891, 2).unwrap(), "1,234,567.89");
        assert_eq!(format_number(999.0, 2).unwrap(), "999.00");
        assert_eq!(format_number(1000.0, 0).unwrap(), "1,000");
        assert_eq!(format_number(0.0, 2).unwrap(), "0.00");
        assert_eq!(format_number(-105_000.0, 2).unwrap(), "-105,000.00");
        assert_eq!(format_number(12.0, 0).unwrap(), "12");
        assert!(format_number(f64::NAN, 2).is_none());
    }

    #[test]
    fn test_negative_rounding_to_zero_has_no_sign() {
        assert_eq!(format_number(-0.001, 2).unwrap(), "0.00");
    }

    #[test]
    fn test_format_money_and_percent() {
        assert_eq!(format_money(105_000.0).unwrap(), "$105,000.00");
        assert_eq!(format_money(-5_000.0).unwrap(), "-$5,000.00");
        assert_eq!(format_money(8333.333).unwrap(), "$8,333.33");
        assert_eq!(format_percent(-4.7619).unwrap(), "-4.76%");
        assert_eq!(format_percent(100.0).unwrap(), "100.00%");
        assert!(format_money(f64::INFINITY).is_none());
        assert!(format_percent(f64::NEG_INFINITY).is_none());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("100,000.00"), Some(100_000.0));
        assert_eq!(parse_number(" $5,000 "), Some(5_000.0));
        assert_eq!(parse_number("15%"), Some(15.0));
        assert_eq!(parse_number(""), Some(0.0));
        assert_eq!(parse_number("-3.5"), Some(-3.5));
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn test_parse_number_rejects_non_finite_literals() {
        for text in ["nan", "NaN", "inf", "-inf", "infinity", "Infinity"] {
            assert_eq!(parse_number(text), None, "{text} should not parse");
        }
    }
}
