use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::lenient::{lenient_list, null_as_default};

/// Quantity as it arrives from recipe data: either a JSON number or free text
/// such as "1 1/2", "to taste" or "2 cups".
///
/// Any other JSON value is kept as text so it shows up verbatim; `null` is
/// an empty quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    Text(String),
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::Text(String::new())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(number) => match number.as_f64() {
                Some(value) => Quantity::Number(value),
                None => Quantity::Text(number.to_string()),
            },
            Value::String(text) => Quantity::Text(text),
            Value::Null => Quantity::default(),
            other => Quantity::Text(other.to_string()),
        })
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Number(value) => write!(f, "{value}"),
            Quantity::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Quantity::Text(value.to_owned())
    }
}

impl From<String> for Quantity {
    fn from(value: String) -> Self {
        Quantity::Text(value)
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::Number(value)
    }
}

/// One ingredient line from one day's recipes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawShoppingEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub quantity: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl RawShoppingEntry {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<Quantity>,
        unit: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit: unit.map(str::to_owned),
        }
    }
}

/// Ingredients needed for a single day of the meal plan
///
/// The day's lines are accepted under `items` or under the `shopping-list`
/// key used by the meal plan service. A day without either key, or with
/// something other than a list under it, is an empty day. Lines that are not
/// ingredient records are skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, alias = "shopping-list", deserialize_with = "lenient_list")]
    pub items: Vec<RawShoppingEntry>,
}

impl ShoppingList {
    pub fn new(date: impl Into<String>, items: Vec<RawShoppingEntry>) -> Self {
        Self {
            date: date.into(),
            items,
        }
    }
}

/// Aggregated, display-ready shopping list line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedShoppingItem {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub unit: String,
}
