use std::path::Path;

use mealwise_shared::{MealPlan, ShoppingList};
use mealwise_shopping::{ShoppingListService, ShoppingReport};

use super::read_input;
use super::render::{render_json, render_text};
use crate::config::{Config, OutputFormat};
use crate::error::Result;

/// Aggregate a JSON array of per-day shopping lists
#[tracing::instrument(skip(config))]
pub fn list_command(
    config: &Config,
    input: &Path,
    format: Option<OutputFormat>,
    keep_water: bool,
) -> Result<String> {
    let lists: Vec<ShoppingList> = serde_json::from_str(&read_input(input)?)?;
    tracing::debug!(days = lists.len(), "Shopping lists loaded");

    let report = service(config, keep_water).generate(&lists);
    render(&report, format.unwrap_or(config.output.format))
}

/// Aggregate the ingredients of a generated meal plan
#[tracing::instrument(skip(config))]
pub fn plan_command(
    config: &Config,
    input: &Path,
    format: Option<OutputFormat>,
    keep_water: bool,
) -> Result<String> {
    let plan: MealPlan = serde_json::from_str(&read_input(input)?)?;
    tracing::debug!(days = plan.days.len(), "Meal plan loaded");

    let report = service(config, keep_water).generate_from_meal_plan(&plan);
    render(&report, format.unwrap_or(config.output.format))
}

fn service(config: &Config, keep_water: bool) -> ShoppingListService {
    let mut options = config.shopping_options();
    if keep_water {
        options.ignore_water = false;
    }
    ShoppingListService::new(config.catalog()).with_options(options)
}

fn render(report: &ShoppingReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}
