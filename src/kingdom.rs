//! Kingdom raids: a single weighted roll between two power ratings.

use crate::character::derived_stats::{aggregate_player_damage, aggregate_player_defense};
use crate::character::player::Player;
use crate::core::constants::{RAID_MAX_CHANCE, RAID_MIN_CHANCE};
use crate::dice::Dice;
use serde::{Deserialize, Serialize};

/// Damage plus defense, the same numbers combat uses.
pub fn power_rating(player: &Player) -> u32 {
    aggregate_player_damage(player).saturating_add(aggregate_player_defense(player))
}

/// Percent chance for the attacker, 50 at parity, clamped to [5, 95].
pub fn raid_success_chance(attacker_power: u32, defender_power: u32) -> f64 {
    let a = attacker_power as f64;
    let d = defender_power as f64;
    if a + d <= 0.0 {
        return 50.0;
    }
    (50.0 + 50.0 * (a - d) / (a + d)).clamp(RAID_MIN_CHANCE, RAID_MAX_CHANCE)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaidOutcome {
    pub success: bool,
    pub chance: f64,
    pub roll: f64,
}

pub fn resolve_raid(attacker_power: u32, defender_power: u32, dice: &mut impl Dice) -> RaidOutcome {
    let chance = raid_success_chance(attacker_power, defender_power);
    let roll = dice.roll_percent();
    let outcome = RaidOutcome {
        success: roll <= chance,
        chance,
        roll,
    };
    tracing::debug!(attacker_power, defender_power, chance, roll, success = outcome.success, "raid resolved");
    outcome
}

/// Raid between two player records.
pub fn raid(attacker: &Player, defender: &Player, dice: &mut impl Dice) -> RaidOutcome {
    resolve_raid(power_rating(attacker), power_rating(defender), dice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::attributes::{Race, StatType};
    use crate::dice::ScriptedDice;
    use crate::items::{EquipmentSlot, Item, ItemCategory, Rarity};

    #[test]
    fn test_parity_is_even() {
        assert_eq!(raid_success_chance(40, 40), 50.0);
        assert_eq!(raid_success_chance(0, 0), 50.0);
    }

    #[test]
    fn test_chance_is_clamped() {
        assert_eq!(raid_success_chance(1000, 1), RAID_MAX_CHANCE);
        assert_eq!(raid_success_chance(1, 1000), RAID_MIN_CHANCE);
        assert_eq!(raid_success_chance(30, 10), 75.0);
    }

    #[test]
    fn test_power_rating_uses_aggregates() {
        let mut player = Player::new("Aria".to_string(), Race::Human);
        let base = power_rating(&player);
        player.equipment.set(
            EquipmentSlot::Armor,
            Some(Item::new("Mail", ItemCategory::Armor, 8, 100, Rarity::Common)),
        );
        assert_eq!(power_rating(&player), base + 8);
    }

    #[test]
    fn test_power_rating_saturates() {
        let mut player = Player::new("Titan".to_string(), Race::Orc);
        player.stats.set(StatType::Strength, u32::MAX);
        player.stats.set(StatType::DefenseArt, u32::MAX);
        assert_eq!(power_rating(&player), u32::MAX);
        assert_eq!(raid_success_chance(power_rating(&player), 0), 95.0);
    }

    #[test]
    fn test_single_roll_decides() {
        let mut dice = ScriptedDice::new([75.0, 75.1]);
        assert!(resolve_raid(30, 10, &mut dice).success);
        assert!(!resolve_raid(30, 10, &mut dice).success);
        assert_eq!(dice.consumed(), 2);
    }
}
