use tracing::instrument;

use crate::item::Item;

/// Age every item by one day, in place.
///
/// Order is preserved and each item is updated independently. Never fails:
/// out-of-range values are clamped on output.
#[instrument(level = "debug", skip_all, fields(items = items.len()))]
pub fn update_quality(items: &mut [Item]) {
    for item in items.iter_mut() {
        let before = (item.sell_in, item.quality);
        item.age_one_day();
        tracing::debug!(
            name = %item.name,
            category = %item.category,
            sell_in_before = before.0,
            quality_before = before.1,
            sell_in = item.sell_in,
            quality = item.quality,
            "item aged"
        );
    }
}
