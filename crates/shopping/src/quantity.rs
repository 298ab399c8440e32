use std::sync::LazyLock;

use mealwise_shared::Quantity;
use regex::Regex;

static MIXED_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+(\d+)/(\d+)$").expect("valid mixed number pattern"));

static SIMPLE_FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)$").expect("valid fraction pattern"));

/// Parse a recipe quantity into a number
///
/// Supports formats:
/// - Numbers: `Quantity::Number(2.0)` → 2
/// - Whole numbers and decimals: "2" → 2, "0.5" → 0.5
/// - Mixed fractions: "1 1/2" → 1.5
/// - Pure fractions: "3/4" → 0.75
///
/// Text is only read as a plain number when it is exactly how that number
/// prints, so "2 cups" or "2.50" are not silently read as 2 or 2.5.
/// Returns `None` when nothing matches.
pub fn parse_quantity(quantity: &Quantity) -> Option<f64> {
    match quantity {
        Quantity::Number(value) => Some(*value),
        Quantity::Text(text) => parse_quantity_str(text),
    }
}

pub fn parse_quantity_str(quantity_str: &str) -> Option<f64> {
    let trimmed = quantity_str.trim();

    if let Ok(value) = trimmed.parse::<f64>() {
        if value.is_finite() && value.to_string() == trimmed {
            return Some(value);
        }
    }

    if let Some(caps) = MIXED_NUMBER.captures(trimmed) {
        let whole = digits(&caps[1])?;
        let numerator = digits(&caps[2])?;
        let denominator = digits(&caps[3])?;
        if denominator == 0.0 {
            return None;
        }
        return Some(whole + numerator / denominator);
    }

    if let Some(caps) = SIMPLE_FRACTION.captures(trimmed) {
        let numerator = digits(&caps[1])?;
        let denominator = digits(&caps[2])?;
        if denominator == 0.0 {
            return None;
        }
        return Some(numerator / denominator);
    }

    None
}

fn digits(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}
