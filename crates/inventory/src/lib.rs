//! Inventory aging engine.
//!
//! This crate contains the daily quality rules for the shop's stock,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod inventory;
pub mod item;
pub mod reset;
pub mod rules;
pub mod update;

pub use category::Category;
pub use inventory::Inventory;
pub use item::Item;
pub use reset::{Baseline, ResetBaselines, reset_quality_and_sell_in};
pub use rules::{
    handle_aged_cheese, handle_backstage_pass, handle_conjured_item, handle_legendary_item,
    handle_non_unique_item,
};
pub use update::update_quality;
