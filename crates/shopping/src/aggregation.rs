use std::collections::HashMap;

use mealwise_shared::{ProcessedShoppingItem, Quantity};

use crate::categorization::{Catalog, normalize_name};
use crate::format::{format_number_for_display, pluralize_unit};
use crate::quantity::parse_quantity;
use crate::units::{NormalizedUnit, normalize_unit};

const APPROXIMATE_PREFIX: &str = "~ ";
const NO_VALID_QUANTITY: &str = "(No valid quantity)";
const NOT_APPLICABLE: &str = "n/a";
const ZERO_TOLERANCE: f64 = 1e-5;

/// Ingredient line with its aisle already resolved
#[derive(Debug, Clone, PartialEq)]
pub struct CategorizedEntry {
    pub name: String,
    pub quantity: Quantity,
    pub unit: Option<String>,
    pub category: String,
}

/// Running total in a base unit plus the largest unit seen so far
#[derive(Debug, Default)]
struct SummableChannel {
    total: f64,
    largest: Option<(NormalizedUnit, u8)>,
    entry_count: usize,
}

impl SummableChannel {
    fn add(&mut self, amount: f64) {
        self.total += amount;
        self.entry_count += 1;
    }

    fn promote(&mut self, unit: NormalizedUnit, rank: u8) {
        if self
            .largest
            .as_ref()
            .is_none_or(|(_, current)| rank > *current)
        {
            self.largest = Some((unit, rank));
        }
    }

    /// Total expressed in the largest unit seen
    fn resolve(&self, base_per_unit: fn(&NormalizedUnit) -> Option<f64>) -> Option<(f64, &NormalizedUnit)> {
        if self.entry_count == 0 {
            return None;
        }
        let (unit, _) = self.largest.as_ref()?;
        let factor = base_per_unit(unit)?;
        Some((self.total / factor, unit))
    }
}

#[derive(Debug, Default)]
struct CountableChannel {
    total: f64,
    entry_count: usize,
}

/// Everything merged so far for one (category, name) pair
#[derive(Debug)]
struct AggregationBucket {
    name: String,
    category: String,
    // teaspoons
    volume: SummableChannel,
    // ounces
    weight: SummableChannel,
    countable: CountableChannel,
    non_summable: Vec<(Quantity, Option<String>)>,
    total_entries: usize,
    is_flour_or_sugar: bool,
    density: Option<f64>,
    count_unit: Option<NormalizedUnit>,
}

impl AggregationBucket {
    fn new(name: &str, category: &str, catalog: &Catalog) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            volume: SummableChannel::default(),
            weight: SummableChannel::default(),
            countable: CountableChannel::default(),
            non_summable: Vec::new(),
            total_entries: 0,
            is_flour_or_sugar: catalog.is_flour_or_sugar(name),
            density: catalog.density_for(name),
            count_unit: None,
        }
    }

    fn add(&mut self, entry: &CategorizedEntry) {
        self.total_entries += 1;

        let unit = normalize_unit(entry.unit.as_deref());
        if self.count_unit.is_none() {
            self.count_unit = unit.clone().filter(NormalizedUnit::is_displayed_count_unit);
        }

        let Some(amount) = parse_quantity(&entry.quantity) else {
            self.keep_verbatim(entry);
            return;
        };

        match unit {
            Some(unit) if unit.is_volume() && self.is_flour_or_sugar && self.density.is_some() => {
                self.add_weighed_volume(amount, &unit);
            }
            Some(unit) if unit.is_volume() && !self.is_flour_or_sugar => {
                let teaspoons = unit.teaspoons().unwrap_or_default();
                let rank = unit.volume_rank().unwrap_or_default();
                self.volume.add(amount * teaspoons);
                self.volume.promote(unit, rank);
            }
            Some(unit) if unit.is_weight() => {
                let ounces = unit.ounces().unwrap_or_default();
                let rank = unit.weight_rank().unwrap_or_default();
                self.weight.add(amount * ounces);
                self.weight.promote(unit, rank);
            }
            None => self.add_count(amount),
            Some(unit) if unit.is_countable() => self.add_count(amount),
            Some(_) => self.keep_verbatim(entry),
        }
    }

    /// Convert a flour/sugar volume to ounces through its density
    fn add_weighed_volume(&mut self, amount: f64, unit: &NormalizedUnit) {
        let density = self.density.unwrap_or_default();
        let teaspoons = amount * unit.teaspoons().unwrap_or_default();
        let cups = teaspoons / NormalizedUnit::Cup.teaspoons().unwrap_or(48.0);
        self.weight.add(cups * density);

        let pound = NormalizedUnit::Pound;
        if self.weight.total >= pound.ounces().unwrap_or(16.0) {
            self.weight.promote(NormalizedUnit::Pound, pound.weight_rank().unwrap_or(2));
        } else {
            self.weight.promote(NormalizedUnit::Ounce, NormalizedUnit::Ounce.weight_rank().unwrap_or(1));
        }
    }

    fn add_count(&mut self, amount: f64) {
        self.countable.total += amount;
        self.countable.entry_count += 1;
    }

    fn keep_verbatim(&mut self, entry: &CategorizedEntry) {
        tracing::debug!(
            ingredient = %self.name,
            quantity = %entry.quantity,
            unit = entry.unit.as_deref().unwrap_or_default(),
            "Keeping non-summable quantity verbatim"
        );
        self.non_summable
            .push((entry.quantity.clone(), entry.unit.clone()));
    }

    fn approximate(&self, part: String) -> String {
        if self.total_entries > 1 {
            format!("{APPROXIMATE_PREFIX}{part}")
        } else {
            part
        }
    }

    /// Resolve the bucket into one display line
    ///
    /// Priority: flour/sugar by weight, count, weight, volume, verbatim text.
    fn into_item(self) -> ProcessedShoppingItem {
        let mut parts: Vec<String> = Vec::new();
        let mut display_unit = String::new();
        let mut effective_quantity = 0.0;

        let weighed = if self.is_flour_or_sugar {
            self.weight.resolve(NormalizedUnit::ounces)
        } else {
            None
        };

        if let Some((quantity, unit)) = weighed {
            effective_quantity = quantity;
            display_unit = pluralize_unit(unit.as_str(), quantity);
            let part = format!("{} {}", format_number_for_display(quantity), display_unit);
            parts.push(self.approximate(part));
        } else if self.countable.entry_count > 0 {
            effective_quantity = self.countable.total;
            let mut part = format_number_for_display(effective_quantity);
            if let Some(unit) = &self.count_unit {
                display_unit = pluralize_unit(unit.as_str(), effective_quantity);
                part = format!("{part} {display_unit}");
            }
            parts.push(self.approximate(part));
        } else if let Some((quantity, unit)) = self
            .weight
            .resolve(NormalizedUnit::ounces)
            .or_else(|| self.volume.resolve(NormalizedUnit::teaspoons))
        {
            effective_quantity = quantity;
            display_unit = pluralize_unit(unit.as_str(), quantity);
            let part = format!("{} {}", format_number_for_display(quantity), display_unit);
            parts.push(self.approximate(part));
        } else {
            for (index, (quantity, raw_unit)) in self.non_summable.iter().enumerate() {
                // Blank and "N/A" stand for a missing amount, whatever the unit
                let text = quantity.to_string();
                let text = text.trim();
                if text.is_empty() || text.eq_ignore_ascii_case(NOT_APPLICABLE) {
                    continue;
                }

                let parsed = parse_quantity(quantity);
                if index == 0 {
                    if let Some(value) = parsed {
                        effective_quantity = value;
                    }
                }

                let shown_unit = normalize_unit(raw_unit.as_deref())
                    .map(|unit| pluralize_unit(unit.as_str(), parsed.unwrap_or_default()))
                    .unwrap_or_default();

                let part = format!("{quantity} {shown_unit}").trim().to_string();
                if part.is_empty() {
                    continue;
                }
                parts.push(if parts.is_empty() { self.approximate(part) } else { part });

                if display_unit.is_empty() && !shown_unit.is_empty() {
                    display_unit = shown_unit;
                }
            }
        }

        let quantity = if parts.is_empty() {
            self.approximate(NO_VALID_QUANTITY.to_string())
        } else if effective_quantity < ZERO_TOLERANCE && parts.len() == 1 && parts[0].starts_with('0') {
            "0".to_string()
        } else {
            parts.join(", ")
        };

        ProcessedShoppingItem {
            name: self.name,
            category: self.category,
            quantity,
            unit: display_unit,
        }
    }
}

/// Ingredient Aggregation Service
///
/// Merges every occurrence of the same ingredient in the same aisle into a
/// single shopping list line. Quantities are summed per channel:
/// - volume in teaspoons, shown in the largest unit seen ("2 tbsp" + "1 tsp" = "2.33 tablespoons")
/// - weight in ounces, shown in ounces or pounds
/// - flour and sugar measured by volume are weighed through their density
/// - counts ("3 cloves", "2 each", or no unit)
///
/// Quantities that cannot be summed are shown as written. Lines merged from
/// more than one entry are prefixed with "~ ".
pub struct IngredientAggregationService<'a> {
    catalog: &'a Catalog,
}

impl<'a> IngredientAggregationService<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Aggregate categorized entries, one item per (category, name) in first-seen order
    pub fn aggregate(&self, entries: &[CategorizedEntry]) -> Vec<ProcessedShoppingItem> {
        let mut index: HashMap<(String, String), usize> = HashMap::new();
        let mut buckets: Vec<AggregationBucket> = Vec::new();

        for entry in entries {
            let key = (entry.category.clone(), normalize_name(&entry.name));
            let slot = *index.entry(key).or_insert_with_key(|(category, name)| {
                buckets.push(AggregationBucket::new(name, category, self.catalog));
                buckets.len() - 1
            });
            buckets[slot].add(entry);
        }

        buckets
            .into_iter()
            .map(AggregationBucket::into_item)
            .collect()
    }
}
