use std::collections::HashMap;
use std::env;

use clap::ValueEnum;
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealwise_shopping::{Catalog, Category, ShoppingListOptions};
use serde::Deserialize;
use strum::VariantArray;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub shopping: ShoppingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON log lines instead of the console format
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShoppingConfig {
    #[serde(default = "default_ignore_water")]
    pub ignore_water: bool,
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            ignore_water: default_ignore_water(),
        }
    }
}

fn default_ignore_water() -> bool {
    true
}

/// Additions merged onto the built-in keyword and density tables
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// Category name to extra ingredient names
    #[serde(default)]
    pub extra_keywords: HashMap<String, Vec<String>>,
    /// Ingredient name to ounces per cup
    #[serde(default)]
    pub densities: HashMap<String, f64>,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALWISE__OUTPUT__FORMAT, etc.)
    /// 2. Config file specified by path, MEALWISE_CONFIG or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.json", false)?
            .set_default("output.format", "text")?
            .set_default("shopping.ignore_water", default_ignore_water())?;

        let config_file_path = config_path
            .or_else(|| env::var("MEALWISE_CONFIG").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALWISE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let level = self.observability.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "Unknown log level '{}', expected one of {}",
                self.observability.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        for (name, ounces_per_cup) in &self.catalog.densities {
            if !ounces_per_cup.is_finite() || *ounces_per_cup <= 0.0 {
                return Err(format!(
                    "Density for '{name}' must be a positive number of ounces per cup"
                ));
            }
        }

        for (category, keywords) in &self.catalog.extra_keywords {
            if category.trim().is_empty() {
                return Err("Catalog category names must not be empty".to_string());
            }
            if keywords.iter().any(|keyword| keyword.trim().is_empty()) {
                return Err(format!("Category '{category}' has an empty keyword"));
            }
        }

        Ok(())
    }

    /// Built-in catalog extended with the configured keywords and densities
    pub fn catalog(&self) -> Catalog {
        let mut extra: Vec<_> = self.catalog.extra_keywords.iter().collect();
        // Custom categories are checked in a stable order
        extra.sort_by(|a, b| a.0.cmp(b.0));

        let mut catalog = Catalog::builtin();
        for (category, keywords) in extra {
            catalog = catalog.with_keywords(&category_label(category), keywords);
        }
        for (name, ounces_per_cup) in &self.catalog.densities {
            catalog = catalog.with_density(name, *ounces_per_cup);
        }
        catalog
    }

    pub fn shopping_options(&self) -> ShoppingListOptions {
        ShoppingListOptions {
            ignore_water: self.shopping.ignore_water,
        }
    }
}

/// Declared category label for a configured name, matched case-insensitively
fn category_label(name: &str) -> String {
    let name = name.trim();
    Category::VARIANTS
        .iter()
        .find(|category| category.as_str().eq_ignore_ascii_case(name))
        .map(|category| category.as_str().to_string())
        .unwrap_or_else(|| name.to_string())
}
