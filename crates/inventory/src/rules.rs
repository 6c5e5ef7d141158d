//! Per-category aging rules.
//!
//! Each `handle_*` function applies one category's daily transformation to a
//! single item, whatever that item's own category is. Thresholds that depend on
//! proximity to the sell-by date use the sell-in *before* the day's decrement;
//! the "expired" check uses the value *after* it.

use crate::category::{Category, LEGENDARY_QUALITY, LEGENDARY_SELL_IN, MAX_QUALITY, MIN_QUALITY};
use crate::item::Item;

/// Dispatch on the item's category.
pub(crate) fn apply(item: &mut Item) {
    match item.category {
        Category::Legendary => handle_legendary_item(item),
        Category::AgedCheese => handle_aged_cheese(item),
        Category::BackstagePass => handle_backstage_pass(item),
        Category::Conjured => handle_conjured_item(item),
        Category::Standard => handle_non_unique_item(item),
    }
}

/// Standard goods: lose 1 per day, 2 once expired.
pub fn handle_non_unique_item(item: &mut Item) {
    decay(item, 1);
}

/// Conjured goods: lose 2 per day, 4 once expired.
pub fn handle_conjured_item(item: &mut Item) {
    decay(item, 2);
}

/// Aged cheese: gains 1 per day, 2 once expired.
pub fn handle_aged_cheese(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
    let gain = if item.is_expired() { 2 } else { 1 };
    item.quality = item.quality.saturating_add(gain);
    clamp_quality(item);
}

/// Backstage passes: gain 1, 2 within ten days, 3 within five; worthless once
/// the event has passed.
pub fn handle_backstage_pass(item: &mut Item) {
    let days_left = item.sell_in;
    let gain = match days_left {
        d if d <= 5 => 3,
        d if d <= 10 => 2,
        _ => 1,
    };

    item.sell_in = days_left.saturating_sub(1);
    item.quality = if item.is_expired() {
        MIN_QUALITY
    } else {
        item.quality.saturating_add(gain)
    };
    clamp_quality(item);
}

/// Legendary goods never age. Pins the item to its fixed values.
pub fn handle_legendary_item(item: &mut Item) {
    item.sell_in = LEGENDARY_SELL_IN;
    item.quality = LEGENDARY_QUALITY;
}

fn decay(item: &mut Item, rate: i32) {
    item.sell_in = item.sell_in.saturating_sub(1);
    let loss = if item.is_expired() { rate * 2 } else { rate };
    item.quality = item.quality.saturating_sub(loss);
    clamp_quality(item);
}

/// Bring quality back into `[MIN_QUALITY, MAX_QUALITY]`.
pub fn clamp_quality(item: &mut Item) {
    let clamped = item.quality.clamp(MIN_QUALITY, MAX_QUALITY);
    if clamped != item.quality {
        tracing::trace!(
            name = %item.name,
            raw = item.quality,
            clamped,
            "quality clamped"
        );
        item.quality = clamped;
    }
}
