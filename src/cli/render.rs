use mealwise_shopping::ShoppingReport;

use crate::error::{AppError, Result};

const EMPTY_LIST: &str = "Shopping list is empty";

/// Plain text list grouped by aisle
pub fn render_text(report: &ShoppingReport) -> String {
    let mut out = String::new();

    match (report.start_date, report.end_date) {
        (Some(start), Some(end)) if start != end => {
            out.push_str(&format!("Shopping list {start} to {end}\n"));
        }
        (Some(start), _) => {
            out.push_str(&format!("Shopping list {start}\n"));
        }
        _ => out.push_str("Shopping list\n"),
    }

    if report.is_empty() {
        out.push_str(&format!("\n{EMPTY_LIST}\n"));
        return out;
    }

    for (category, items) in report.iter() {
        out.push_str(&format!("\n{category}\n"));
        for item in items {
            out.push_str(&format!("  - {}: {}\n", item.name, item.quantity));
        }
    }

    out
}

pub fn render_json(report: &ShoppingReport) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(report).map_err(|e| AppError::Serialization(e.to_string()))?;
    json.push('\n');
    Ok(json)
}
