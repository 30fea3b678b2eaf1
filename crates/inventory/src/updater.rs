//! Inventory updater: one simulated day per call.

use crate::bounds::QualityBounds;
use crate::config::InventoryConfig;
use crate::item::Item;
use crate::resolver::CategoryResolver;

/// Owns an inventory and advances it one day at a time.
#[derive(Debug, Clone, Default)]
pub struct InventoryUpdater {
    items: Vec<Item>,
    config: InventoryConfig,
}

impl InventoryUpdater {
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_config(items, InventoryConfig::default())
    }

    pub fn with_config(items: Vec<Item>, config: InventoryConfig) -> Self {
        Self { items, config }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// Advance every item by one day, in order.
    pub fn update_quality(&mut self) {
        tick_all(&self.config.resolver(), &self.config.bounds, &mut self.items);
    }
}

/// Advance a borrowed inventory by one day using the default configuration.
pub fn update_quality(items: &mut [Item]) {
    let config = InventoryConfig::default();
    tick_all(&config.resolver(), &config.bounds, items);
}

fn tick_all(resolver: &CategoryResolver, bounds: &QualityBounds, items: &mut [Item]) {
    let span = tracing::debug_span!("update_quality", items = items.len());
    let _enter = span.enter();

    for item in items.iter_mut() {
        tick_item(resolver, bounds, item);
    }
}

fn tick_item(resolver: &CategoryResolver, bounds: &QualityBounds, item: &mut Item) {
    let category = resolver.resolve(item);
    let (sell_in_before, quality_before) = (item.sell_in, item.quality);

    category.update_state(item);

    let clamped = bounds.clamp(category, item.quality);
    if clamped != item.quality {
        tracing::debug!(
            name = %item.name,
            category = category.label(),
            quality = item.quality,
            clamped,
            "quality clamped to {}",
            if clamped < item.quality { "ceiling" } else { "floor" }
        );
        item.quality = clamped;
    }

    tracing::trace!(
        name = %item.name,
        category = category.label(),
        sell_in_before,
        sell_in = item.sell_in,
        quality_before,
        quality = item.quality,
        "item updated"
    );
}
