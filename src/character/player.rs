use super::attributes::{Race, StatType, Stats};
use super::derived_stats::DerivedStats;
use crate::core::constants::{BASE_ENERGY, KARMA_MAX, KARMA_MIN};
use crate::items::{Equipment, Inventory};
use crate::progression::required_xp_for_level;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A snapshot of everything the simulation core reads about a character.
///
/// The core never mutates a `Player` it was handed for computation; actions
/// in `economy` and `progression` take `&mut Player` explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub race: Race,
    pub level: u32,
    pub xp: u64,
    pub max_xp: u64,
    pub hp: u32,
    pub max_hp: u32,
    #[serde(default)]
    pub energy: u32,
    #[serde(default)]
    pub max_energy: u32,
    #[serde(default)]
    pub silver: u64,
    #[serde(default)]
    pub gold: u64,
    pub stats: Stats,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub inventory: Inventory,
    #[serde(default)]
    pub rank_index: u32,
    #[serde(default)]
    pub karma: i32,
    #[serde(default)]
    pub last_save_time: i64,
}

impl Player {
    /// Creates a level 1 character with racial modifiers applied.
    pub fn new(name: String, race: Race) -> Self {
        let mut stats = Stats::new();
        for (stat, delta) in race.stat_modifiers() {
            stats.apply_modifier(*stat, *delta);
        }

        let mut player = Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            race,
            level: 1,
            xp: 0,
            max_xp: required_xp_for_level(1),
            hp: 0,
            max_hp: 0,
            energy: BASE_ENERGY,
            max_energy: BASE_ENERGY,
            silver: 0,
            gold: 0,
            stats,
            equipment: Equipment::new(),
            inventory: Inventory::new(),
            rank_index: 0,
            karma: 0,
            last_save_time: Utc::now().timestamp(),
        };
        player.refresh_max_hp();
        player.hp = player.max_hp;
        player
    }

    pub fn derived(&self) -> DerivedStats {
        DerivedStats::calculate(self)
    }

    /// Recomputes max HP from constitution (runes included) and clamps HP.
    pub fn refresh_max_hp(&mut self) {
        self.max_hp = self.derived().max_hp;
        self.hp = self.hp.min(self.max_hp);
    }

    pub fn restore(&mut self) {
        self.hp = self.max_hp;
        self.energy = self.max_energy;
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn base_stat(&self, stat: StatType) -> u32 {
        self.stats.get(stat)
    }

    /// Shifts karma, keeping it within [-100, 100].
    pub fn adjust_karma(&mut self, delta: i32) {
        self.karma = self.karma.saturating_add(delta).clamp(KARMA_MIN, KARMA_MAX);
    }

    /// True when `item_id` is equipped or in the inventory.
    pub fn owns(&self, item_id: &str) -> bool {
        self.equipment.contains(item_id) || self.inventory.contains(item_id)
    }
}
