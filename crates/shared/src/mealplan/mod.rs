use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lenient::lenient_list;

/// Meal plan document as produced by the plan generator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    #[serde(default, deserialize_with = "lenient_list")]
    pub days: Vec<MealPlanDay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlanDay {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub recipes: Vec<PlannedRecipe>,
}

/// A recipe scheduled on a day.
///
/// `ingredients_with_quantities` is a table whose first row is a header
/// (`["Ingredient Name", "Quantity", "Unit"]`) followed by one row per ingredient.
/// Cells are usually strings but numbers show up in older plans. A table that
/// is not a list reads as empty and rows that are not lists are skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannedRecipe {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub ingredients_with_quantities: Vec<Value>,
}

impl PlannedRecipe {
    /// Ingredient rows without the header row
    pub fn ingredient_rows(&self) -> impl Iterator<Item = &[Value]> {
        self.ingredients_with_quantities
            .iter()
            .skip(1)
            .filter_map(|row| row.as_array().map(Vec::as_slice))
    }
}

/// Render a table cell as text
pub fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(text) => text.trim().to_owned(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
