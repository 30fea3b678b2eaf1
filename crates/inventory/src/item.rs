use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::bounds::QualityBounds;
use crate::resolver::CategoryResolver;

/// A single inventory record.
///
/// Items carry no identity beyond the value itself: several items may share a
/// name, and the category is never stored here (it is re-derived from `name`
/// on every tick).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Days left to sell the item; negative once expired.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    /// Build an item without checking it against the quality bounds.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Build an item, rejecting a blank name or a quality outside the bounds
    /// of its category (default configuration).
    pub fn try_new(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let item = Self::new(name, sell_in, quality);

        if item.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let category = CategoryResolver::default().resolve(&item);
        let bounds = QualityBounds::default();
        if !bounds.contains(category, item.quality) {
            return Err(DomainError::invariant(format!(
                "quality {} of {:?} is outside {}..={}",
                item.quality,
                item.name,
                bounds.floor(),
                bounds.ceiling(category)
            )));
        }

        Ok(item)
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
