use std::cmp::Ordering;
use std::collections::HashMap;

use mealwise_shared::ProcessedShoppingItem;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use time::Date;

use crate::categorization::Category;

/// Categorized shopping list ready for display
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingReport {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    /// Aisles in display order: declared aisles first, then any others alphabetically
    pub ordered_categories: Vec<String>,
    pub categories: HashMap<String, Vec<ProcessedShoppingItem>>,
}

impl ShoppingReport {
    /// Group items by category, sort each group by name and order the categories
    pub fn from_items(items: Vec<ProcessedShoppingItem>) -> Self {
        let mut categories: HashMap<String, Vec<ProcessedShoppingItem>> = HashMap::new();
        for item in items {
            categories.entry(item.category.clone()).or_default().push(item);
        }

        for items in categories.values_mut() {
            items.sort_by(|a, b| collate(&a.name, &b.name));
        }

        let ordered_categories = order_categories(categories.keys().map(String::as_str));

        Self {
            start_date: None,
            end_date: None,
            ordered_categories,
            categories,
        }
    }

    pub fn with_date_range(mut self, start_date: Option<Date>, end_date: Option<Date>) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn items_in(&self, category: &str) -> &[ProcessedShoppingItem] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Categories with their items, in display order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ProcessedShoppingItem])> {
        self.ordered_categories
            .iter()
            .map(|category| (category.as_str(), self.items_in(category)))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn total_items(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

/// Declared aisles in their fixed order, then unknown ones alphabetically
pub fn order_categories<'a>(present: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut declared: Vec<(usize, &str)> = Vec::new();
    let mut remaining: Vec<&str> = Vec::new();

    for category in present {
        match Category::display_rank(category) {
            Some(rank) => declared.push((rank, category)),
            None => remaining.push(category),
        }
    }

    declared.sort_unstable();
    declared.dedup();
    remaining.sort_unstable();
    remaining.dedup();

    declared
        .into_iter()
        .map(|(_, category)| category)
        .chain(remaining)
        .map(str::to_string)
        .collect()
}

/// Dictionary-style name order
///
/// Whitespace sorts before punctuation and symbols, which sort before digits,
/// which sort before letters. Letters compare case-insensitively first.
fn collate(a: &str, b: &str) -> Ordering {
    fn key(c: char) -> (u8, char) {
        let class = if c.is_whitespace() {
            0
        } else if c.is_alphabetic() {
            3
        } else if c.is_numeric() {
            2
        } else {
            1
        };
        (class, c.to_lowercase().next().unwrap_or(c))
    }

    a.chars()
        .map(key)
        .cmp(b.chars().map(key))
        .then_with(|| a.cmp(b))
}

struct CategoryView<'a> {
    name: &'a str,
    items: &'a [ProcessedShoppingItem],
}

impl Serialize for CategoryView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Category", 2)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("items", self.items)?;
        state.end()
    }
}

impl Serialize for ShoppingReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let categories: Vec<CategoryView<'_>> = self
            .iter()
            .map(|(name, items)| CategoryView { name, items })
            .collect();

        let mut state = serializer.serialize_struct("ShoppingReport", 3)?;
        state.serialize_field("start_date", &self.start_date)?;
        state.serialize_field("end_date", &self.end_date)?;
        state.serialize_field("categories", &categories)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn item(name: &str, category: &str) -> ProcessedShoppingItem {
        ProcessedShoppingItem {
            name: name.to_string(),
            category: category.to_string(),
            quantity: "1".to_string(),
            unit: String::new(),
        }
    }

    #[test]
    fn test_order_declared_then_unknown() {
        let ordered = order_categories(["Exotic", "Dairy", "Other", "Produce", "Bulk"]);

        assert_eq!(ordered, ["Produce", "Dairy", "Other", "Bulk", "Exotic"]);
    }

    #[test]
    fn test_report_groups_and_sorts() {
        let report = ShoppingReport::from_items(vec![
            item("milk", "Dairy"),
            item("durian", "Exotic"),
            item("butter", "Dairy"),
        ]);

        assert_eq!(report.ordered_categories, ["Dairy", "Exotic"]);
        let dairy: Vec<_> = report.items_in("Dairy").iter().map(|i| i.name.as_str()).collect();
        assert_eq!(dairy, ["butter", "milk"]);
        assert_eq!(report.total_items(), 3);
        assert!(report.items_in("Produce").is_empty());
    }

    #[test]
    fn test_items_sorted_like_a_dictionary() {
        let report = ShoppingReport::from_items(vec![
            item("red bell pepper", "Produce"),
            item("apple2", "Produce"),
            item("red bell pepper - medium", "Produce"),
            item("apple_pie", "Produce"),
            item("apple pie", "Produce"),
            item("Apple", "Produce"),
        ]);

        let names: Vec<_> = report.items_in("Produce").iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Apple",
                "apple pie",
                "apple_pie",
                "apple2",
                "red bell pepper",
                "red bell pepper - medium",
            ]
        );
    }

    #[test]
    fn test_empty_report() {
        let report = ShoppingReport::from_items(Vec::new());

        assert!(report.is_empty());
        assert!(report.ordered_categories.is_empty());
        assert_eq!(report.iter().count(), 0);
    }

    #[test]
    fn test_serialize_in_display_order() {
        let report = ShoppingReport::from_items(vec![item("durian", "Exotic"), item("milk", "Dairy")])
            .with_date_range(Some(date!(2025 - 05 - 01)), Some(date!(2025 - 05 - 03)));

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["start_date"], "2025-05-01");
        assert_eq!(json["end_date"], "2025-05-03");
        assert_eq!(json["categories"][0]["name"], "Dairy");
        assert_eq!(json["categories"][0]["items"][0]["name"], "milk");
        assert_eq!(json["categories"][1]["name"], "Exotic");
    }
}
