//! Compound data: the values the cards display.

use serde::{Deserialize, Serialize};

/// A chemical compound, a human-readable name paired with its formula.
///
/// Cards reference compounds without owning them; the formula card and the
/// name card of one pair share a single value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Compound {
    pub name: String,
    pub formula: String,
}

impl Compound {
    pub fn new(name: impl Into<String>, formula: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formula: formula.into(),
        }
    }
}

/// Bundled compound table, large enough for the biggest board.
pub fn builtin_catalog() -> Vec<Compound> {
    [
        ("Water", "H2O"),
        ("Carbon dioxide", "CO2"),
        ("Sodium chloride", "NaCl"),
        ("Ammonia", "NH3"),
        ("Methane", "CH4"),
        ("Glucose", "C6H12O6"),
        ("Sulfuric acid", "H2SO4"),
        ("Calcium carbonate", "CaCO3"),
        ("Hydrochloric acid", "HCl"),
        ("Ethanol", "C2H5OH"),
        ("Potassium nitrate", "KNO3"),
        ("Magnesium oxide", "MgO"),
    ]
    .into_iter()
    .map(|(name, formula)| Compound::new(name, formula))
    .collect()
}
