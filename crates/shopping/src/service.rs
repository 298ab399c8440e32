use mealwise_shared::{MealPlan, ShoppingList};
use time::Date;
use time::macros::format_description;

use crate::aggregation::IngredientAggregationService;
use crate::categorization::Catalog;
use crate::intake::collect_entries;
use crate::meal_plan::shopping_lists_from_meal_plan;
use crate::presenter::ShoppingReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShoppingListOptions {
    /// Leave tap water off the list
    pub ignore_water: bool,
}

impl Default for ShoppingListOptions {
    fn default() -> Self {
        Self { ignore_water: true }
    }
}

/// Builds categorized shopping lists for a meal plan horizon
///
/// Holds only read-only tables, so one service can serve any number of
/// plans, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct ShoppingListService {
    catalog: Catalog,
    options: ShoppingListOptions,
}

impl ShoppingListService {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            options: ShoppingListOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ShoppingListOptions) -> Self {
        self.options = options;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Aggregate every day's ingredients into one categorized list
    #[tracing::instrument(skip_all, fields(days = lists.len()))]
    pub fn generate(&self, lists: &[ShoppingList]) -> ShoppingReport {
        let entries = collect_entries(lists, &self.catalog, self.options.ignore_water);
        let items = IngredientAggregationService::new(&self.catalog).aggregate(&entries);
        let (start_date, end_date) = date_range(lists);

        let report = ShoppingReport::from_items(items).with_date_range(start_date, end_date);

        tracing::info!(
            entries = entries.len(),
            items = report.total_items(),
            categories = report.ordered_categories.len(),
            "Shopping list generated"
        );

        report
    }

    pub fn generate_from_meal_plan(&self, plan: &MealPlan) -> ShoppingReport {
        self.generate(&shopping_lists_from_meal_plan(plan))
    }
}

/// Earliest and latest ISO dates among the lists
fn date_range(lists: &[ShoppingList]) -> (Option<Date>, Option<Date>) {
    let format = format_description!("[year]-[month]-[day]");

    let dates = lists.iter().filter_map(|list| {
        let raw = list.date.trim();
        if raw.is_empty() {
            return None;
        }
        match Date::parse(raw, &format) {
            Ok(date) => Some(date),
            Err(err) => {
                tracing::warn!(date = raw, error = %err, "Ignoring shopping list date");
                None
            }
        }
    });

    dates.fold((None, None), |(start, end): (Option<Date>, Option<Date>), date| {
        (
            Some(start.map_or(date, |start| start.min(date))),
            Some(end.map_or(date, |end| end.max(date))),
        )
    })
}
