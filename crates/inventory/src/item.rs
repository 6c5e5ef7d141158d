use serde::{Deserialize, Serialize};

use gildedrose_core::ValueObject;

use crate::category::Category;

/// A stocked good: name, days left to sell, and quality.
///
/// The category is derived from the name at construction and stays fixed for
/// the item's lifetime. Caller-supplied values are taken as-is; only the daily
/// update clamps quality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    pub(crate) name: String,
    pub(crate) sell_in: i32,
    pub(crate) quality: i32,
    pub(crate) category: Category,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = Category::classify(&name);
        Self {
            name,
            sell_in,
            quality,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// True once the sell-by date has passed.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }

    /// Apply one day of aging using this item's category rule.
    pub fn age_one_day(&mut self) {
        crate::rules::apply(self);
    }
}

impl ValueObject for Item {}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Wire shape of an item. The category is never trusted from input.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemRecord {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_classifies_from_name() {
        let item = Item::new("Conjured Mana Cake", 3, 6);
        assert_eq!(item.category(), Category::Conjured);
        assert_eq!(item.name(), "Conjured Mana Cake");
        assert_eq!(item.sell_in(), 3);
        assert_eq!(item.quality(), 6);
    }

    #[test]
    fn construction_does_not_clamp() {
        let over = Item::new("Haunted Shoe", 5, 70);
        assert_eq!(over.quality(), 70);

        let under = Item::new("Haunted Shoe", -3, -4);
        assert_eq!(under.quality(), -4);
        assert!(under.is_expired());

        let sulfuras = Item::new("Sulfuras, Hand of Ragnaros", 12, 90);
        assert_eq!(sulfuras.sell_in(), 12);
        assert_eq!(sulfuras.quality(), 90);
    }

    #[test]
    fn deserialization_reclassifies_from_name() {
        let json = r#"{"name":"Aged Brie","sell_in":2,"quality":0,"category":"legendary"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.category(), Category::AgedCheese);
        assert_eq!(item, Item::new("Aged Brie", 2, 0));
    }

    #[test]
    fn serializes_without_category() {
        let item = Item::new("Elixir of the Mongoose", 5, 7);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Elixir of the Mongoose", "sell_in": 5, "quality": 7})
        );
    }

    #[test]
    fn display_matches_fixture_format() {
        let item = Item::new("+5 Dexterity Vest", 10, 20);
        assert_eq!(item.to_string(), "+5 Dexterity Vest, 10, 20");
    }
}
