use super::attributes::{StatType, Stats};
use super::player::Player;
use crate::core::constants::*;
use crate::items::{Equipment, EquipmentSlot};

/// Combat numbers resolved from base stats, equipment and socketed runes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedStats {
    /// Base stats plus matching rune bonuses.
    pub effective: Stats,
    pub damage: u32,
    pub defense: u32,
    pub max_hp: u32,
    /// Player hit chance before the enemy's dodge. Not clamped.
    pub hit_chance: f64,
    pub crit_chance: f64,
    pub mitigation_chance: f64,
}

impl DerivedStats {
    pub fn calculate(player: &Player) -> Self {
        Self::from_parts(&player.stats, &player.equipment)
    }

    pub fn from_parts(base: &Stats, equipment: &Equipment) -> Self {
        let effective = effective_stats(base, equipment);
        let strength = effective.get(StatType::Strength) as f64;
        let skill = effective.get(StatType::Skill) as f64;
        let luck = effective.get(StatType::Luck) as f64;
        let weapon_art = effective.get(StatType::WeaponArt) as f64;
        let defense_art = effective.get(StatType::DefenseArt) as f64;
        let constitution = effective.get(StatType::Constitution);

        // Empty weapon slot fights with fists
        let weapon = equipment
            .get(EquipmentSlot::Weapon)
            .map_or(UNARMED_DAMAGE, |w| w.bonus) as f64;
        let mount = equipment.bonus(EquipmentSlot::Mount) as f64;
        let damage = (weapon + mount + strength + WEAPON_ART_DAMAGE_FACTOR * weapon_art).floor();

        let armor: u32 = EquipmentSlot::defense_slots()
            .into_iter()
            .map(|slot| equipment.bonus(slot))
            .sum();
        let defense = armor.saturating_add(effective.get(StatType::DefenseArt));

        Self {
            effective,
            damage: (damage as u32).max(1),
            defense,
            max_hp: BASE_HP.saturating_add(constitution.saturating_mul(HP_PER_CONSTITUTION)),
            hit_chance: BASE_HIT_CHANCE + HIT_CHANCE_PER_SKILL * skill + weapon_art,
            crit_chance: (CRIT_CHANCE_PER_LUCK * luck).min(CRIT_CHANCE_CAP),
            mitigation_chance: (defense_art + MITIGATION_PER_SKILL * skill).min(MITIGATION_CAP),
        }
    }
}

/// Sum of `stat` bonuses from runes socketed into any of the eight slots.
pub fn rune_stat_bonus(equipment: &Equipment, stat: StatType) -> u32 {
    equipment
        .iter_equipped()
        .map(|item| item.rune_stat_bonus(stat))
        .sum()
}

pub fn effective_stats(base: &Stats, equipment: &Equipment) -> Stats {
    let mut effective = *base;
    for stat in StatType::all() {
        effective.set(
            stat,
            base.get(stat).saturating_add(rune_stat_bonus(equipment, stat)),
        );
    }
    effective
}

/// Effective attack damage, never below 1.
pub fn aggregate_player_damage(player: &Player) -> u32 {
    DerivedStats::calculate(player).damage
}

/// Armor family bonuses plus effective defense art.
pub fn aggregate_player_defense(player: &Player) -> u32 {
    DerivedStats::calculate(player).defense
}
