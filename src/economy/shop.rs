//! Level-scaled shop stock drawn from the static catalog.

use crate::core::constants::*;
use crate::dice::Dice;
use crate::items::{default_catalog, initial_upgrade_cost, Item, ItemCategory, ItemTemplate};
use serde::{Deserialize, Serialize};

/// Flat bonus added per player level for a category.
pub fn bonus_per_level(category: ItemCategory) -> f64 {
    match category {
        ItemCategory::Weapon => SHOP_WEAPON_BONUS_PER_LEVEL,
        ItemCategory::Armor | ItemCategory::Helmet | ItemCategory::Shield | ItemCategory::Leggings => {
            SHOP_ARMOR_BONUS_PER_LEVEL
        }
        ItemCategory::Mount => SHOP_MOUNT_BONUS_PER_LEVEL,
        ItemCategory::Artifact => SHOP_ARTIFACT_BONUS_PER_LEVEL,
        ItemCategory::Potion | ItemCategory::Rune => 0.0,
    }
}

pub fn scaled_price(price: u64, level: u32) -> u64 {
    (price as f64 * (1.0 + SHOP_PRICE_PER_LEVEL * level as f64)).floor() as u64
}

/// Number of five-level tiers shown as the "+N" name suffix.
pub fn shop_tier(level: u32) -> u32 {
    level / SHOP_TIER_LEVELS
}

/// Instantiates a template for a player of `level`.
pub fn scale_shop_item(template: &ItemTemplate, level: u32) -> Item {
    let mut item = template.instantiate();
    item.bonus += (bonus_per_level(item.category) * level as f64).floor() as u32;
    item.price = scaled_price(item.price, level);
    item.upgrade_cost = initial_upgrade_cost(item.price);
    let tier = shop_tier(level);
    if tier > 0 {
        item.name = format!("{} +{}", item.name, tier);
    }
    item
}

/// Draws `count` offers from templates the player meets the level gate
/// for. The same template may be drawn twice; each offer has its own id.
pub fn refresh_shop(
    catalog: &[ItemTemplate],
    level: u32,
    count: usize,
    dice: &mut impl Dice,
) -> Vec<Item> {
    let eligible: Vec<&ItemTemplate> = catalog.iter().filter(|t| t.min_level <= level).collect();
    if eligible.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|_| scale_shop_item(eligible[dice.pick(eligible.len())], level))
        .collect()
}

/// Current offers. Bought items leave the stock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub level: u32,
    pub stock: Vec<Item>,
}

impl Shop {
    pub fn new(level: u32, count: usize, dice: &mut impl Dice) -> Self {
        let mut shop = Self::default();
        shop.refresh(level, count, dice);
        shop
    }

    pub fn refresh(&mut self, level: u32, count: usize, dice: &mut impl Dice) {
        self.level = level;
        self.stock = refresh_shop(default_catalog(), level, count, dice);
    }

    pub fn get(&self, item_id: &str) -> Option<&Item> {
        self.stock.iter().find(|item| item.id == item_id)
    }

    pub fn take(&mut self, item_id: &str) -> Option<Item> {
        let index = self.stock.iter().position(|item| item.id == item_id)?;
        Some(self.stock.remove(index))
    }
}
