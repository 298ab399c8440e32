pub mod aggregation;
pub mod categorization;
pub mod format;
pub mod intake;
pub mod meal_plan;
pub mod presenter;
pub mod quantity;
pub mod service;
pub mod units;

// Re-export commonly used types
pub use aggregation::{CategorizedEntry, IngredientAggregationService};
pub use categorization::{Catalog, Category};
pub use format::{format_number_for_display, pluralize_unit};
pub use intake::is_ignored_ingredient;
pub use meal_plan::shopping_lists_from_meal_plan;
pub use presenter::ShoppingReport;
pub use quantity::parse_quantity;
pub use service::{ShoppingListOptions, ShoppingListService};
pub use units::{NormalizedUnit, normalize_unit};
