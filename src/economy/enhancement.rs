use crate::core::constants::{
    ENHANCEMENT_BONUS_MULTIPLIERS, ENHANCEMENT_COST_GROWTH, ENHANCEMENT_SUCCESS_RATES,
    MAX_ENHANCEMENT_LEVEL,
};
use crate::core::errors::ActionRefused;
use crate::dice::Dice;
use crate::items::Item;
use serde::{Deserialize, Serialize};

/// Result of an enhancement roll that was allowed to happen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EnhancementOutcome {
    /// Same identity, higher bonus and level.
    Success { item: Item },
    /// The item is gone.
    Destroyed { item_id: String },
}

impl EnhancementOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, EnhancementOutcome::Success { .. })
    }
}

/// Success chance in percent for reaching `target_level`.
pub fn success_rate(target_level: u8) -> f64 {
    if target_level == 0 || target_level > MAX_ENHANCEMENT_LEVEL {
        return 0.0;
    }
    ENHANCEMENT_SUCCESS_RATES[(target_level - 1) as usize]
}

pub fn bonus_multiplier(target_level: u8) -> f64 {
    if target_level == 0 || target_level > MAX_ENHANCEMENT_LEVEL {
        return 0.0;
    }
    ENHANCEMENT_BONUS_MULTIPLIERS[(target_level - 1) as usize]
}

/// Bonus after a successful enhancement to `target_level`.
pub fn enhanced_bonus(bonus: u32, target_level: u8) -> u32 {
    (bonus as f64 * (1.0 + bonus_multiplier(target_level))).floor() as u32
}

pub fn next_upgrade_cost(cost: u64) -> u64 {
    ((cost as f64 * ENHANCEMENT_COST_GROWTH).floor() as u64).max(1)
}

/// Rejects potions, runes and items already at +9.
pub fn check_enhanceable(item: &Item) -> Result<(), ActionRefused> {
    if !item.category.is_equippable() {
        return Err(ActionRefused::NotEnhanceable(item.name.clone()));
    }
    if item.upgrade_level >= MAX_ENHANCEMENT_LEVEL {
        return Err(ActionRefused::MaxEnhancement(item.name.clone()));
    }
    Ok(())
}

/// Rolls one enhancement attempt. Payment is the caller's concern.
///
/// A roll at or under the success rate for the next level succeeds.
/// Anything else destroys the item; there is no safe tier.
pub fn attempt_enhancement(
    item: &Item,
    dice: &mut impl Dice,
) -> Result<EnhancementOutcome, ActionRefused> {
    check_enhanceable(item)?;

    let target_level = item.upgrade_level + 1;
    let rate = success_rate(target_level);
    let roll = dice.roll_percent();

    tracing::debug!(
        item = %item.name,
        target_level,
        rate,
        roll,
        "enhancement roll"
    );

    if roll <= rate {
        let mut enhanced = item.clone();
        enhanced.bonus = enhanced_bonus(item.bonus, target_level);
        enhanced.upgrade_level = target_level;
        enhanced.upgrade_cost = next_upgrade_cost(item.upgrade_cost);
        Ok(EnhancementOutcome::Success { item: enhanced })
    } else {
        Ok(EnhancementOutcome::Destroyed {
            item_id: item.id.clone(),
        })
    }
}
