mod lenient;
pub mod mealplan;
pub mod shopping;

pub use mealplan::{MealPlan, MealPlanDay, PlannedRecipe};
pub use shopping::{ProcessedShoppingItem, Quantity, RawShoppingEntry, ShoppingList};
