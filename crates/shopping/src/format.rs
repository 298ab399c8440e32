const EXACT_TOLERANCE: f64 = 1e-5;

/// Format a quantity for a shopping list line
///
/// Formats:
/// - Whole numbers: 3.0 → "3"
/// - Quarters and halves: 0.25 → "0.25", 0.5 → "0.5", 0.75 → "0.75"
/// - Thirds: 0.3333 → "0.33", 0.6666 → "0.67"
/// - Anything else: rounded to 2 decimals without trailing zeros, 2.3333 → "2.33"
pub fn format_number_for_display(value: f64) -> String {
    if value == value.floor() {
        return value.to_string();
    }

    for (common, display) in [(0.25, "0.25"), (0.5, "0.5"), (0.75, "0.75")] {
        if (value - common).abs() < EXACT_TOLERANCE {
            return display.to_string();
        }
    }

    if (value - 0.33).abs() < 1e-2 || (value - 0.333).abs() < 1e-3 {
        return "0.33".to_string();
    }
    if (value - 0.66).abs() < 1e-2 || (value - 0.666).abs() < 1e-3 {
        return "0.67".to_string();
    }

    // Halves round away from zero: 1.125 → "1.13"
    ((value * 100.0).round() / 100.0).to_string()
}

/// Plural form of a unit for the given quantity
pub fn pluralize_unit(unit: &str, quantity: f64) -> String {
    if unit.is_empty() || (quantity - 1.0).abs() < EXACT_TOLERANCE {
        return unit.to_string();
    }
    if unit == "pinch" {
        return "pinches".to_string();
    }
    if unit.ends_with('s') {
        unit.to_string()
    } else {
        format!("{unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_numbers() {
        assert_eq!(format_number_for_display(3.0), "3");
        assert_eq!(format_number_for_display(0.0), "0");
        assert_eq!(format_number_for_display(16.0), "16");
    }

    #[test]
    fn test_format_common_fractions() {
        assert_eq!(format_number_for_display(0.25), "0.25");
        assert_eq!(format_number_for_display(0.500001), "0.5");
        assert_eq!(format_number_for_display(0.75), "0.75");
    }

    #[test]
    fn test_format_thirds() {
        assert_eq!(format_number_for_display(1.0 / 3.0), "0.33");
        assert_eq!(format_number_for_display(2.0 / 3.0), "0.67");
    }

    #[test]
    fn test_format_rounds_and_strips_trailing_zeros() {
        assert_eq!(format_number_for_display(7.0 / 3.0), "2.33");
        assert_eq!(format_number_for_display(1.5), "1.5");
        assert_eq!(format_number_for_display(4.25), "4.25");
        assert_eq!(format_number_for_display(1.001), "1");
        assert_eq!(format_number_for_display(2.104), "2.1");
    }

    #[test]
    fn test_format_rounds_halves_up() {
        assert_eq!(format_number_for_display(1.125), "1.13");
        assert_eq!(format_number_for_display(0.125), "0.13");
        assert_eq!(format_number_for_display(0.875), "0.88");
        assert_eq!(format_number_for_display(2.625), "2.63");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize_unit("cup", 2.0), "cups");
        assert_eq!(pluralize_unit("cup", 1.0), "cup");
        assert_eq!(pluralize_unit("cup", 1.000001), "cup");
        assert_eq!(pluralize_unit("cup", 0.5), "cups");
        assert_eq!(pluralize_unit("pinch", 3.0), "pinches");
        assert_eq!(pluralize_unit("pinch", 1.0), "pinch");
        assert_eq!(pluralize_unit("lbs", 2.0), "lbs");
        assert_eq!(pluralize_unit("", 2.0), "");
    }
}
