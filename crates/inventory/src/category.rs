use serde::{Deserialize, Serialize};

/// Upper bound for the quality of any non-legendary item.
pub const MAX_QUALITY: i32 = 50;

/// Lower bound for the quality of any non-legendary item.
pub const MIN_QUALITY: i32 = 0;

/// Fixed quality of a legendary item.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Fixed sell-in of a legendary item (never sold).
pub const LEGENDARY_SELL_IN: i32 = 0;

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const BACKSTAGE_PASS_PREFIX: &str = "Backstage passes";
pub const CONJURED_PREFIX: &str = "Conjured";

/// Closed set of aging behaviours.
///
/// Assigned once when an [`Item`](crate::Item) is constructed; the daily update
/// dispatches on this tag and never looks at the name again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Standard,
    AgedCheese,
    BackstagePass,
    Legendary,
    Conjured,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Standard,
        Category::AgedCheese,
        Category::BackstagePass,
        Category::Legendary,
        Category::Conjured,
    ];

    /// Classify an item by name.
    ///
    /// Exact matches for "Aged Brie" and "Sulfuras, Hand of Ragnaros", prefix
    /// matches for backstage passes and conjured goods. Every other name is
    /// `Standard`: the category set is closed and unknown goods decay normally.
    pub fn classify(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::AgedCheese,
            SULFURAS => Category::Legendary,
            n if n.starts_with(BACKSTAGE_PASS_PREFIX) => Category::BackstagePass,
            n if n.starts_with(CONJURED_PREFIX) => Category::Conjured,
            _ => Category::Standard,
        }
    }

    pub fn is_legendary(self) -> bool {
        self == Category::Legendary
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Standard => "standard",
            Category::AgedCheese => "aged_cheese",
            Category::BackstagePass => "backstage_pass",
            Category::Legendary => "legendary",
            Category::Conjured => "conjured",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
