use mealwise_shared::mealplan::cell_text;
use mealwise_shared::{MealPlan, RawShoppingEntry, ShoppingList};
use serde_json::Value;

const HEADER_NAME: &str = "ingredient name";
const UNKNOWN_ITEM: &str = "Unknown Item";
const NOT_AVAILABLE: &str = "N/A";

/// Turn a generated meal plan into one shopping list per day
///
/// Days without a date are skipped, as are rows with fewer than three cells
/// and repeated header rows. An empty name cell becomes "Unknown Item" and an
/// empty quantity cell becomes "N/A", which later renders as
/// "(No valid quantity)". Days without any ingredient are left out.
pub fn shopping_lists_from_meal_plan(plan: &MealPlan) -> Vec<ShoppingList> {
    let mut lists = Vec::new();

    for day in &plan.days {
        let Some(date) = day.date.as_deref().filter(|date| !date.is_empty()) else {
            tracing::debug!(recipes = day.recipes.len(), "Skipping meal plan day without date");
            continue;
        };

        let mut items = Vec::new();

        for recipe in &day.recipes {
            for row in recipe.ingredient_rows() {
                let [name, quantity, unit, ..] = row else {
                    tracing::debug!(cells = row.len(), "Skipping short ingredient row");
                    continue;
                };

                let name = cell_or(name, UNKNOWN_ITEM);
                if name.is_empty() || name.eq_ignore_ascii_case(HEADER_NAME) {
                    continue;
                }

                let quantity = cell_or(quantity, NOT_AVAILABLE);
                let unit = cell_or(unit, "");

                items.push(RawShoppingEntry::new(name, quantity, Some(unit.as_str())));
            }
        }

        if items.is_empty() {
            continue;
        }

        lists.push(ShoppingList::new(date, items));
    }

    tracing::debug!(
        days = plan.days.len(),
        shopping_days = lists.len(),
        "Meal plan converted to shopping lists"
    );

    lists
}

/// Cell text, or `fallback` when the cell is empty, null, false or zero
///
/// A cell of only whitespace is not empty and trims to "".
fn cell_or(cell: &Value, fallback: &str) -> String {
    let empty = match cell {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    };

    if empty {
        fallback.to_string()
    } else {
        cell_text(cell)
    }
}
