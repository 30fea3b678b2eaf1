//! Per-category day-tick rules.
//!
//! Rules only move `sell_in` and `quality`; keeping quality inside its bounds is
//! the updater's job, so a rule may leave quality negative or above the ceiling.

use gildedrose_core::ValueObject;

use crate::item::Item;

/// Quality lost per day by an ordinary item that is still before its sell-by date.
pub const STANDARD_DECAY_RATE: i32 = 1;

/// Conjured items degrade twice as fast as ordinary ones.
pub const CONJURED_DECAY_RATE: i32 = 2;

/// Behavioural category of an item, resolved from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Loses `decay_rate` quality per day, twice that once expired.
    Ordinary { decay_rate: i32 },
    /// Gains one quality per day, expired or not.
    Aged,
    /// Gains quality faster as the event approaches, worthless afterwards.
    Backstage,
    /// Never changes.
    Legendary,
}

impl ValueObject for Category {}

impl Category {
    pub const ORDINARY: Category = Category::Ordinary {
        decay_rate: STANDARD_DECAY_RATE,
    };

    pub const CONJURED: Category = Category::Ordinary {
        decay_rate: CONJURED_DECAY_RATE,
    };

    pub fn is_legendary(self) -> bool {
        matches!(self, Category::Legendary)
    }

    /// Short name used in logs.
    pub fn label(self) -> &'static str {
        match self {
            Category::Ordinary { decay_rate } if decay_rate == STANDARD_DECAY_RATE => "ordinary",
            Category::Ordinary { .. } => "conjured",
            Category::Aged => "aged",
            Category::Backstage => "backstage",
            Category::Legendary => "legendary",
        }
    }

    /// Advance `item` by one simulated day.
    ///
    /// Every branch that looks at `sell_in` sees the already-decremented value.
    pub fn update_state(self, item: &mut Item) {
        match self {
            Category::Ordinary { decay_rate } => {
                decrement_sell_in(item);
                let decay = if item.sell_in > 0 {
                    decay_rate
                } else {
                    decay_rate.saturating_mul(2)
                };
                item.quality = item.quality.saturating_sub(decay);
            }
            Category::Aged => {
                decrement_sell_in(item);
                item.quality = item.quality.saturating_add(1);
            }
            Category::Backstage => {
                decrement_sell_in(item);
                match item.sell_in {
                    days if days > 10 => item.quality = item.quality.saturating_add(1),
                    days if days > 5 => item.quality = item.quality.saturating_add(2),
                    days if days > 0 => item.quality = item.quality.saturating_add(3),
                    _ => item.quality = 0,
                }
            }
            Category::Legendary => {}
        }
    }
}

fn decrement_sell_in(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
}
