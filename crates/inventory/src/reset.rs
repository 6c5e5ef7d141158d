//! Reset of items to category baselines.
//!
//! A reset overwrites sell-in and quality with a fixed pair chosen by category
//! (or by an exact-name override). No aging logic runs, so resetting twice is
//! the same as resetting once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, ValueObject};

use crate::category::{Category, LEGENDARY_QUALITY, LEGENDARY_SELL_IN, MAX_QUALITY, MIN_QUALITY};
use crate::item::Item;

/// A sell-in/quality pair an item is restored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Baseline {
    pub sell_in: i32,
    pub quality: i32,
}

impl Baseline {
    pub const fn new(sell_in: i32, quality: i32) -> Self {
        Self { sell_in, quality }
    }

    /// Check that an item of `category` could legally hold this baseline.
    pub fn validate_for(&self, category: Category) -> DomainResult<()> {
        if category.is_legendary() {
            if self.sell_in != LEGENDARY_SELL_IN || self.quality != LEGENDARY_QUALITY {
                return Err(DomainError::invariant(format!(
                    "legendary baseline must be ({LEGENDARY_SELL_IN}, {LEGENDARY_QUALITY}), got ({}, {})",
                    self.sell_in, self.quality
                )));
            }
            return Ok(());
        }
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&self.quality) {
            return Err(DomainError::invariant(format!(
                "{category} baseline quality {} outside [{MIN_QUALITY}, {MAX_QUALITY}]",
                self.quality
            )));
        }
        Ok(())
    }
}

impl ValueObject for Baseline {}

/// Baselines for every category plus optional exact-name overrides.
///
/// Deserialization validates the table, so a loaded config can never pin a
/// legendary item off (0, 80) or push quality out of range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BaselinesRecord", into = "BaselinesRecord")]
pub struct ResetBaselines {
    standard: Baseline,
    aged_cheese: Baseline,
    backstage_pass: Baseline,
    legendary: Baseline,
    conjured: Baseline,
    overrides: BTreeMap<String, Baseline>,
}

impl Default for ResetBaselines {
    fn default() -> Self {
        Self {
            standard: Baseline::new(10, 20),
            aged_cheese: Baseline::new(2, 0),
            backstage_pass: Baseline::new(15, 20),
            legendary: Baseline::new(LEGENDARY_SELL_IN, LEGENDARY_QUALITY),
            conjured: Baseline::new(3, 6),
            overrides: BTreeMap::new(),
        }
    }
}

/// Wire shape of a baseline table. Omitted categories keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct BaselinesRecord {
    standard: Baseline,
    aged_cheese: Baseline,
    backstage_pass: Baseline,
    legendary: Baseline,
    conjured: Baseline,
    overrides: BTreeMap<String, Baseline>,
}

impl Default for BaselinesRecord {
    fn default() -> Self {
        ResetBaselines::default().into()
    }
}

impl TryFrom<BaselinesRecord> for ResetBaselines {
    type Error = DomainError;

    fn try_from(record: BaselinesRecord) -> Result<Self, Self::Error> {
        let baselines = Self {
            standard: record.standard,
            aged_cheese: record.aged_cheese,
            backstage_pass: record.backstage_pass,
            legendary: record.legendary,
            conjured: record.conjured,
            overrides: record.overrides,
        };
        baselines.validate()?;
        Ok(baselines)
    }
}

impl From<ResetBaselines> for BaselinesRecord {
    fn from(baselines: ResetBaselines) -> Self {
        Self {
            standard: baselines.standard,
            aged_cheese: baselines.aged_cheese,
            backstage_pass: baselines.backstage_pass,
            legendary: baselines.legendary,
            conjured: baselines.conjured,
            overrides: baselines.overrides,
        }
    }
}

impl ResetBaselines {
    /// Default table plus the starting values of the classic shop fixture,
    /// where the elixir restocks at a shorter shelf life than other goods.
    pub fn classic_inventory() -> Self {
        let mut baselines = Self::default();
        baselines
            .overrides
            .insert("Elixir of the Mongoose".to_string(), Baseline::new(5, 7));
        baselines
    }

    /// Parse a JSON config document. Omitted categories keep their defaults.
    pub fn from_json_str(json: &str) -> DomainResult<Self> {
        let record: BaselinesRecord = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("reset baselines: {e}")))?;
        Self::try_from(record)
    }

    pub fn with_category(mut self, category: Category, baseline: Baseline) -> DomainResult<Self> {
        baseline.validate_for(category)?;
        *self.slot_mut(category) = baseline;
        Ok(self)
    }

    /// Pin a baseline to an exact item name; it wins over the category entry.
    pub fn with_override(
        mut self,
        name: impl Into<String>,
        baseline: Baseline,
    ) -> DomainResult<Self> {
        let name = name.into();
        baseline.validate_for(Category::classify(&name))?;
        self.overrides.insert(name, baseline);
        Ok(self)
    }

    pub fn validate(&self) -> DomainResult<()> {
        for category in Category::ALL {
            self.for_category(category).validate_for(category)?;
        }
        for (name, baseline) in &self.overrides {
            baseline.validate_for(Category::classify(name))?;
        }
        Ok(())
    }

    pub fn for_category(&self, category: Category) -> Baseline {
        match category {
            Category::Standard => self.standard,
            Category::AgedCheese => self.aged_cheese,
            Category::BackstagePass => self.backstage_pass,
            Category::Legendary => self.legendary,
            Category::Conjured => self.conjured,
        }
    }

    /// Baseline an item would be reset to.
    pub fn baseline_for(&self, item: &Item) -> Baseline {
        self.overrides
            .get(item.name())
            .copied()
            .unwrap_or_else(|| self.for_category(item.category()))
    }

    pub fn reset(&self, item: &mut Item) {
        let baseline = self.baseline_for(item);
        tracing::debug!(
            name = %item.name,
            category = %item.category,
            overridden = self.overrides.contains_key(item.name()),
            sell_in = baseline.sell_in,
            quality = baseline.quality,
            "item reset"
        );
        item.sell_in = baseline.sell_in;
        item.quality = baseline.quality;
    }

    pub fn reset_all(&self, items: &mut [Item]) {
        for item in items.iter_mut() {
            self.reset(item);
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Baseline {
        match category {
            Category::Standard => &mut self.standard,
            Category::AgedCheese => &mut self.aged_cheese,
            Category::BackstagePass => &mut self.backstage_pass,
            Category::Legendary => &mut self.legendary,
            Category::Conjured => &mut self.conjured,
        }
    }
}

/// Reset one item to the default baseline of its category.
pub fn reset_quality_and_sell_in(item: &mut Item) {
    ResetBaselines::default().reset(item);
}
