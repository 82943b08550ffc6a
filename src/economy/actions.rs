//! Player actions that spend currency or move items.
//!
//! Every action checks its preconditions before touching the player, so a
//! refusal leaves the record exactly as it was. Items move between the
//! inventory and equipment by value, which keeps the two id sets disjoint.

use super::enhancement::{attempt_enhancement, check_enhanceable, EnhancementOutcome};
use super::shop::Shop;
use crate::character::attributes::StatType;
use crate::character::player::Player;
use crate::core::constants::*;
use crate::core::errors::ActionRefused;
use crate::dice::Dice;
use crate::items::{EquipmentSlot, Item, ItemCategory};

fn require_silver(player: &Player, needed: u64) -> Result<(), ActionRefused> {
    if player.silver < needed {
        return Err(ActionRefused::InsufficientSilver {
            needed,
            available: player.silver,
        });
    }
    Ok(())
}

fn require_space(player: &Player) -> Result<(), ActionRefused> {
    if player.inventory.is_full() {
        return Err(ActionRefused::InventoryFull {
            capacity: player.inventory.slots(),
        });
    }
    Ok(())
}

/// Buys an offer out of the shop stock into the inventory.
pub fn buy_item(player: &mut Player, shop: &mut Shop, item_id: &str) -> Result<(), ActionRefused> {
    let offer = shop
        .get(item_id)
        .ok_or_else(|| ActionRefused::NotInStock(item_id.to_string()))?;

    if player.level < offer.min_level {
        return Err(ActionRefused::LevelTooLow {
            required: offer.min_level,
            actual: player.level,
        });
    }
    require_silver(player, offer.price)?;
    if player.gold < offer.premium_price {
        return Err(ActionRefused::InsufficientGold {
            needed: offer.premium_price,
            available: player.gold,
        });
    }
    require_space(player)?;

    let item = shop
        .take(item_id)
        .ok_or_else(|| ActionRefused::NotInStock(item_id.to_string()))?;
    let (price, premium_price) = (item.price, item.premium_price);
    let name = item.name.clone();
    if let Err(item) = player.inventory.push(item) {
        shop.stock.push(item);
        return Err(ActionRefused::InventoryFull {
            capacity: player.inventory.slots(),
        });
    }
    player.silver -= price;
    player.gold -= premium_price;
    tracing::debug!(item = %name, price, "bought item");
    Ok(())
}

pub fn sell_price(item: &Item) -> u64 {
    item.price / SELL_PRICE_DIVISOR
}

/// Sells an inventory item for half its price. Equipped items must be
/// unequipped first.
pub fn sell_item(player: &mut Player, item_id: &str) -> Result<u64, ActionRefused> {
    let item = player
        .inventory
        .remove(item_id)
        .ok_or_else(|| ActionRefused::ItemNotInInventory(item_id.to_string()))?;
    let credit = sell_price(&item);
    player.silver = player.silver.saturating_add(credit);
    tracing::debug!(item = %item.name, credit, "sold item");
    Ok(credit)
}

/// Slot an item of `category` goes into. Artifacts take the first free
/// artifact slot, or replace slot one when both are occupied.
pub fn target_slot(player: &Player, category: ItemCategory) -> Option<EquipmentSlot> {
    if category == ItemCategory::Artifact {
        if player.equipment.get(EquipmentSlot::ArtifactOne).is_none() {
            return Some(EquipmentSlot::ArtifactOne);
        }
        if player.equipment.get(EquipmentSlot::ArtifactTwo).is_none() {
            return Some(EquipmentSlot::ArtifactTwo);
        }
        return Some(EquipmentSlot::ArtifactOne);
    }
    EquipmentSlot::for_category(category)
}

/// Equips an inventory item. Whatever occupied the slot takes the equipped
/// item's place in the inventory, so a full inventory never loses it.
pub fn equip_item(player: &mut Player, item_id: &str) -> Result<EquipmentSlot, ActionRefused> {
    let item = player
        .inventory
        .get(item_id)
        .ok_or_else(|| ActionRefused::ItemNotInInventory(item_id.to_string()))?;
    let slot = target_slot(player, item.category)
        .ok_or_else(|| ActionRefused::NotEquippable(item.name.clone()))?;

    let item = match player.equipment.take(slot) {
        Some(displaced) => match player.inventory.swap(item_id, displaced) {
            Ok(item) => item,
            Err(displaced) => {
                player.equipment.set(slot, Some(displaced));
                return Err(ActionRefused::ItemNotInInventory(item_id.to_string()));
            }
        },
        None => player
            .inventory
            .remove(item_id)
            .ok_or_else(|| ActionRefused::ItemNotInInventory(item_id.to_string()))?,
    };
    player.equipment.set(slot, Some(item));
    player.refresh_max_hp();
    Ok(slot)
}

pub fn unequip_item(player: &mut Player, slot: EquipmentSlot) -> Result<(), ActionRefused> {
    if player.equipment.get(slot).is_none() {
        return Err(ActionRefused::SlotEmpty);
    }
    require_space(player)?;

    if let Some(item) = player.equipment.take(slot) {
        if let Err(item) = player.inventory.push(item) {
            player.equipment.set(slot, Some(item));
        }
    }
    player.refresh_max_hp();
    Ok(())
}

/// Drinks a potion, healing up to max HP. Returns the HP restored.
pub fn drink_potion(player: &mut Player, item_id: &str) -> Result<u32, ActionRefused> {
    let potion = player
        .inventory
        .get(item_id)
        .ok_or_else(|| ActionRefused::ItemNotInInventory(item_id.to_string()))?;
    if potion.category != ItemCategory::Potion {
        return Err(ActionRefused::NotAPotion(potion.name.clone()));
    }

    let potion = player
        .inventory
        .remove(item_id)
        .ok_or_else(|| ActionRefused::ItemNotInInventory(item_id.to_string()))?;
    let before = player.hp;
    player.hp = player.hp.saturating_add(potion.bonus).min(player.max_hp);
    Ok(player.hp - before)
}

pub fn stat_upgrade_cost(player: &Player, stat: StatType) -> u64 {
    STAT_UPGRADE_BASE_COST * (player.base_stat(stat) as u64 + 1)
}

/// Buys one point of a base stat. Returns the silver spent.
pub fn upgrade_stat(player: &mut Player, stat: StatType) -> Result<u64, ActionRefused> {
    let cost = stat_upgrade_cost(player, stat);
    require_silver(player, cost)?;
    player.silver -= cost;
    player.stats.increment(stat);
    player.refresh_max_hp();
    Ok(cost)
}

pub fn inventory_expansion_cost(player: &Player) -> u64 {
    INVENTORY_SLOT_COST * player.inventory.slots() as u64
}

/// Buys one inventory slot. Returns the silver spent.
pub fn expand_inventory(player: &mut Player) -> Result<u64, ActionRefused> {
    if player.inventory.slots() >= MAX_INVENTORY_SLOTS {
        return Err(ActionRefused::InventoryAtMaximum {
            max: MAX_INVENTORY_SLOTS,
        });
    }
    let cost = inventory_expansion_cost(player);
    require_silver(player, cost)?;
    if !player.inventory.add_slot() {
        return Err(ActionRefused::InventoryAtMaximum {
            max: MAX_INVENTORY_SLOTS,
        });
    }
    player.silver -= cost;
    Ok(cost)
}

/// Pays the item's upgrade cost and rolls an enhancement. A success
/// replaces the item where it sits; destruction removes it from wherever
/// it was.
pub fn enhance_item(
    player: &mut Player,
    item_id: &str,
    dice: &mut impl Dice,
) -> Result<EnhancementOutcome, ActionRefused> {
    let slot = player.equipment.find_slot(item_id);
    let item = match slot {
        Some(slot) => player.equipment.get(slot),
        None => player.inventory.get(item_id),
    }
    .ok_or_else(|| ActionRefused::ItemNotOwned(item_id.to_string()))?;

    check_enhanceable(item)?;
    require_silver(player, item.upgrade_cost)?;
    let cost = item.upgrade_cost;
    let outcome = attempt_enhancement(item, dice)?;
    player.silver -= cost;

    match (&outcome, slot) {
        (EnhancementOutcome::Success { item }, Some(slot)) => {
            player.equipment.set(slot, Some(item.clone()));
        }
        (EnhancementOutcome::Success { item }, None) => {
            if let Some(stored) = player.inventory.get_mut(item_id) {
                *stored = item.clone();
            }
        }
        (EnhancementOutcome::Destroyed { .. }, Some(slot)) => {
            player.equipment.take(slot);
        }
        (EnhancementOutcome::Destroyed { .. }, None) => {
            player.inventory.remove(item_id);
        }
    }

    if !outcome.is_success() {
        tracing::info!(player = %player.name, item_id, "item destroyed by failed enhancement");
    }
    player.refresh_max_hp();
    Ok(outcome)
}
