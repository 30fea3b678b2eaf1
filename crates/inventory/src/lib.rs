//! Inventory domain module.
//!
//! Items age one simulated day per call to [`InventoryUpdater::update_quality`].
//! Each item's category is derived from its name on every tick, the category
//! rule mutates `sell_in`/`quality`, then quality is clamped to the category's
//! bounds. Deterministic domain logic only (no IO, no storage).

pub mod bounds;
pub mod category;
pub mod config;
pub mod item;
pub mod resolver;
pub mod updater;

pub use bounds::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY, QualityBounds};
pub use category::{CONJURED_DECAY_RATE, Category, STANDARD_DECAY_RATE};
pub use config::{ConjuredMatch, InventoryConfig};
pub use item::Item;
pub use resolver::{AGED_BRIE, BACKSTAGE_PASSES, CONJURED, CategoryResolver, SULFURAS};
pub use updater::{InventoryUpdater, update_quality};
