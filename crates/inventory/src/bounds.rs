//! Quality bounds policy.

use serde::{Deserialize, Serialize};

use gildedrose_core::ValueObject;

use crate::category::Category;

pub const MIN_QUALITY: i32 = 0;
pub const MAX_QUALITY: i32 = 50;
pub const LEGENDARY_QUALITY: i32 = 80;

/// Allowed quality range per category.
///
/// Legendary items have no floor, only their own ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityBounds {
    pub floor: i32,
    pub ceiling: i32,
    pub legendary_ceiling: i32,
}

impl ValueObject for QualityBounds {}

impl Default for QualityBounds {
    fn default() -> Self {
        Self {
            floor: MIN_QUALITY,
            ceiling: MAX_QUALITY,
            legendary_ceiling: LEGENDARY_QUALITY,
        }
    }
}

impl QualityBounds {
    pub fn floor(&self) -> i32 {
        self.floor
    }

    pub fn ceiling(&self, category: Category) -> i32 {
        if category.is_legendary() {
            self.legendary_ceiling
        } else {
            self.ceiling
        }
    }

    pub fn contains(&self, category: Category, quality: i32) -> bool {
        (self.floor..=self.ceiling(category)).contains(&quality)
    }

    /// Bring `quality` back inside the bounds of `category`.
    pub fn clamp(&self, category: Category, quality: i32) -> i32 {
        if quality < self.floor && !category.is_legendary() {
            self.floor
        } else if quality > self.ceiling(category) {
            self.ceiling(category)
        } else {
            quality
        }
    }
}
