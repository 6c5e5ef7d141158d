use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::reset::ResetBaselines;
use crate::update::update_quality;

/// An ordered stock of items plus the number of days it has been aged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    #[serde(default)]
    days_elapsed: u32,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            days_elapsed: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn days_elapsed(&self) -> u32 {
        self.days_elapsed
    }

    /// Age the whole stock by one day.
    pub fn update_quality(&mut self) {
        update_quality(&mut self.items);
        self.days_elapsed = self.days_elapsed.saturating_add(1);
    }

    pub fn advance(&mut self, days: u32) {
        for _ in 0..days {
            self.update_quality();
        }
    }

    /// Restore every item to its baseline and restart the day count.
    pub fn reset(&mut self, baselines: &ResetBaselines) {
        baselines.reset_all(&mut self.items);
        self.days_elapsed = 0;
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock() -> Inventory {
        Inventory::new(vec![
            Item::new("Aged Brie", 2, 0),
            Item::new("Elixir of the Mongoose", 5, 7),
        ])
    }

    #[test]
    fn update_counts_days() {
        let mut inventory = stock();
        inventory.update_quality();
        assert_eq!(inventory.days_elapsed(), 1);
        assert_eq!(inventory.items()[0].quality(), 1);
        assert_eq!(inventory.items()[1].quality(), 6);
    }

    #[test]
    fn advance_repeats_the_daily_update() {
        let mut advanced = stock();
        advanced.advance(3);

        let mut stepped = stock();
        for _ in 0..3 {
            stepped.update_quality();
        }
        assert_eq!(advanced, stepped);
        assert_eq!(advanced.days_elapsed(), 3);
    }

    #[test]
    fn reset_restores_baselines_and_day_count() {
        let mut inventory = stock();
        inventory.advance(10);
        inventory.reset(&ResetBaselines::classic_inventory());

        assert_eq!(inventory.days_elapsed(), 0);
        assert_eq!(inventory.into_items(), stock().into_items());
    }

    #[test]
    fn converts_from_a_plain_item_list() {
        let inventory: Inventory = stock().into_items().into();
        assert_eq!(inventory, stock());
        assert_eq!(inventory.days_elapsed(), 0);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut inventory = stock();
        inventory.advance(2);
        let json = serde_json::to_string(&inventory).unwrap();
        let restored: Inventory = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, inventory);
    }
}
