use mealwise_shared::ShoppingList;

use crate::aggregation::CategorizedEntry;
use crate::categorization::{Catalog, normalize_name};

/// Names containing "water" that are still worth buying
const WATER_EXCEPTIONS: &[&str] = &["watermelon", "watercress", "water chestnut"];

/// Whether an ingredient is left off the shopping list
///
/// Tap water ("water", "warm water", "ice water") is dropped while
/// ingredients such as "watermelon" or "watercress" are kept.
pub fn is_ignored_ingredient(name: &str) -> bool {
    let lowered = normalize_name(name);
    lowered == "water"
        || (lowered.contains("water")
            && !WATER_EXCEPTIONS
                .iter()
                .any(|exception| lowered.contains(exception)))
}

/// Flatten every day's lines into categorized entries
pub fn collect_entries(
    lists: &[ShoppingList],
    catalog: &Catalog,
    ignore_water: bool,
) -> Vec<CategorizedEntry> {
    let mut entries = Vec::new();

    for list in lists {
        for item in &list.items {
            if item.name.trim().is_empty() {
                tracing::debug!(date = %list.date, "Skipping entry without a name");
                continue;
            }
            if ignore_water && is_ignored_ingredient(&item.name) {
                tracing::debug!(ingredient = %item.name, date = %list.date, "Ignoring ingredient");
                continue;
            }

            entries.push(CategorizedEntry {
                name: item.name.clone(),
                quantity: item.quantity.clone(),
                unit: item.unit.clone(),
                category: catalog.determine_category(&item.name).to_string(),
            });
        }
    }

    entries
}
