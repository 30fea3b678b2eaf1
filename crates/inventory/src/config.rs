//! Inventory configuration.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, ValueObject};

use crate::bounds::QualityBounds;
use crate::resolver::{CONJURED, CategoryResolver};

/// How item names are recognised as conjured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConjuredMatch {
    /// The name must be exactly `"Conjured"`; `"Conjured Mana Cake"` stays ordinary.
    #[default]
    Exact,
    /// Any name starting with `"Conjured"`.
    Prefix,
}

impl ValueObject for ConjuredMatch {}

impl ConjuredMatch {
    pub fn matches(self, name: &str) -> bool {
        match self {
            ConjuredMatch::Exact => name == CONJURED,
            ConjuredMatch::Prefix => name.starts_with(CONJURED),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConjuredMatch::Exact => "exact",
            ConjuredMatch::Prefix => "prefix",
        }
    }
}

impl core::fmt::Display for ConjuredMatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConjuredMatch {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(ConjuredMatch::Exact),
            "prefix" => Ok(ConjuredMatch::Prefix),
            other => Err(DomainError::validation(format!(
                "unknown conjured match mode: {other:?} (expected \"exact\" or \"prefix\")"
            ))),
        }
    }
}

/// Settings for an [`InventoryUpdater`](crate::InventoryUpdater).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    pub conjured_match: ConjuredMatch,
    pub bounds: QualityBounds,
}

impl ValueObject for InventoryConfig {}

impl InventoryConfig {
    pub fn with_conjured_match(mut self, conjured_match: ConjuredMatch) -> Self {
        self.conjured_match = conjured_match;
        self
    }

    pub fn resolver(&self) -> CategoryResolver {
        CategoryResolver::new(self.conjured_match)
    }
}
