use std::fmt;
use std::str::FromStr;

use strum::EnumString;

/// Canonical unit after alias resolution
///
/// Parsing never fails: strings outside the known vocabulary are kept as
/// [`NormalizedUnit::Other`] so unknown units such as "dash" still display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
pub enum NormalizedUnit {
    #[strum(serialize = "teaspoon", serialize = "teaspoons", serialize = "tsp", serialize = "t")]
    Teaspoon,
    #[strum(
        serialize = "tablespoon",
        serialize = "tablespoons",
        serialize = "tbsp",
        serialize = "tbls"
    )]
    Tablespoon,
    #[strum(serialize = "cup", serialize = "cups", serialize = "c")]
    Cup,
    #[strum(serialize = "pinch", serialize = "pinches")]
    Pinch,
    #[strum(serialize = "ounce", serialize = "ounces", serialize = "oz")]
    Ounce,
    #[strum(serialize = "pound", serialize = "pounds", serialize = "lb", serialize = "lbs")]
    Pound,
    #[strum(serialize = "each")]
    Each,
    #[strum(serialize = "piece", serialize = "pieces")]
    Piece,
    #[strum(serialize = "unit", serialize = "units")]
    Unit,
    #[strum(serialize = "clove", serialize = "cloves")]
    Clove,
    #[strum(default)]
    Other(String),
}

impl NormalizedUnit {
    pub fn as_str(&self) -> &str {
        match self {
            NormalizedUnit::Teaspoon => "teaspoon",
            NormalizedUnit::Tablespoon => "tablespoon",
            NormalizedUnit::Cup => "cup",
            NormalizedUnit::Pinch => "pinch",
            NormalizedUnit::Ounce => "ounce",
            NormalizedUnit::Pound => "pound",
            NormalizedUnit::Each => "each",
            NormalizedUnit::Piece => "piece",
            NormalizedUnit::Unit => "unit",
            NormalizedUnit::Clove => "clove",
            NormalizedUnit::Other(unit) => unit,
        }
    }

    /// Teaspoons in one of this unit, for volume units
    pub fn teaspoons(&self) -> Option<f64> {
        match self {
            NormalizedUnit::Teaspoon => Some(1.0),
            NormalizedUnit::Tablespoon => Some(3.0),
            NormalizedUnit::Cup => Some(48.0),
            NormalizedUnit::Pinch => Some(1.0 / 16.0),
            _ => None,
        }
    }

    /// Rank used to pick the display unit of a summed volume
    pub fn volume_rank(&self) -> Option<u8> {
        match self {
            NormalizedUnit::Cup => Some(4),
            NormalizedUnit::Tablespoon => Some(3),
            NormalizedUnit::Teaspoon => Some(2),
            NormalizedUnit::Pinch => Some(1),
            _ => None,
        }
    }

    /// Ounces in one of this unit, for weight units
    pub fn ounces(&self) -> Option<f64> {
        match self {
            NormalizedUnit::Ounce => Some(1.0),
            NormalizedUnit::Pound => Some(16.0),
            _ => None,
        }
    }

    pub fn weight_rank(&self) -> Option<u8> {
        match self {
            NormalizedUnit::Pound => Some(2),
            NormalizedUnit::Ounce => Some(1),
            _ => None,
        }
    }

    pub fn is_volume(&self) -> bool {
        self.teaspoons().is_some()
    }

    pub fn is_weight(&self) -> bool {
        self.ounces().is_some()
    }

    pub fn is_countable(&self) -> bool {
        matches!(
            self,
            NormalizedUnit::Each | NormalizedUnit::Piece | NormalizedUnit::Unit | NormalizedUnit::Clove
        )
    }

    /// Count units worth naming next to the number ("3 cloves", "2 pieces")
    pub fn is_displayed_count_unit(&self) -> bool {
        matches!(self, NormalizedUnit::Piece | NormalizedUnit::Clove)
    }
}

impl fmt::Display for NormalizedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a raw unit string to its canonical form
///
/// Returns `None` for an absent or blank unit.
pub fn normalize_unit(raw: Option<&str>) -> Option<NormalizedUnit> {
    let lowered = raw?.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }

    Some(match NormalizedUnit::from_str(&lowered) {
        Ok(unit) => unit,
        Err(_) => NormalizedUnit::Other(lowered),
    })
}
