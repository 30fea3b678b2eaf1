//! Name → category resolution.

use crate::category::Category;
use crate::config::ConjuredMatch;
use crate::item::Item;

pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const CONJURED: &str = "Conjured";

/// Stateless mapping from an item name to its [`Category`].
///
/// Matching is exact and case-sensitive. Unknown names fall back to
/// [`Category::ORDINARY`]; resolution never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryResolver {
    conjured_match: ConjuredMatch,
}

impl CategoryResolver {
    pub fn new(conjured_match: ConjuredMatch) -> Self {
        Self { conjured_match }
    }

    pub fn conjured_match(&self) -> ConjuredMatch {
        self.conjured_match
    }

    pub fn resolve(&self, item: &Item) -> Category {
        self.resolve_name(&item.name)
    }

    pub fn resolve_name(&self, name: &str) -> Category {
        match name {
            AGED_BRIE => Category::Aged,
            BACKSTAGE_PASSES => Category::Backstage,
            SULFURAS => Category::Legendary,
            name if self.conjured_match.matches(name) => Category::CONJURED,
            _ => Category::ORDINARY,
        }
    }
}
